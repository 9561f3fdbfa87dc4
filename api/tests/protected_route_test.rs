//! Access token checks on protected routes, plus the public endpoints

mod common;

use actix_web::{http::header, test};
use serde_json::Value;

use ak_api::create_app;
use common::test_state;

#[actix_web::test]
async fn test_hello_requires_a_token() {
    let app = test::init_service(create_app(test_state())).await;

    let req = test::TestRequest::get().uri("/api/hello").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 401);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "UNAUTHORIZED");
}

#[actix_web::test]
async fn test_hello_rejects_garbage_and_foreign_tokens() {
    let app = test::init_service(create_app(test_state())).await;

    // signed with a different secret
    let foreign = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.\
                   eyJzdWIiOiJhbGljZSIsImV4cCI6NDEwMjQ0NDgwMH0.\
                   c2lnbmF0dXJlLW5vdC1mcm9tLXRoaXMtc2VydmVy";

    for token in ["garbage", foreign] {
        let req = test::TestRequest::get()
            .uri("/api/hello")
            .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401, "accepted {}", token);
    }
}

#[actix_web::test]
async fn test_health_check() {
    let app = test::init_service(create_app(test_state())).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "authkeep-api");
}

#[actix_web::test]
async fn test_unknown_route_is_not_found() {
    let app = test::init_service(create_app(test_state())).await;

    let req = test::TestRequest::get().uri("/nowhere").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 404);
}
