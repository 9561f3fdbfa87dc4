//! Failure responses of the auth endpoints

mod common;

use actix_web::cookie::Cookie;
use actix_web::{http::header, test};
use serde_json::Value;

use ak_api::create_app;
use common::test_state;

#[actix_web::test]
async fn test_duplicate_registration_is_conflict() {
    let app = test::init_service(create_app(test_state())).await;

    for (username, expected) in [("alice", 200), ("ALICE", 409)] {
        let req = test::TestRequest::post()
            .uri("/auth/register")
            .set_json(serde_json::json!({"username": username, "password": "pw123"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), expected, "registering {}", username);
    }
}

#[actix_web::test]
async fn test_invalid_registration_lists_fields() {
    let app = test::init_service(create_app(test_state())).await;

    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(serde_json::json!({"username": "al", "password": "pw"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert!(body["details"]["username"].is_array());
    assert!(body["details"]["password"].is_array());
}

#[actix_web::test]
async fn test_username_with_forbidden_characters_is_rejected() {
    let app = test::init_service(create_app(test_state())).await;

    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(serde_json::json!({"username": "al ice!", "password": "pw123"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_malformed_body_is_bad_request() {
    let app = test::init_service(create_app(test_state())).await;

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "BAD_REQUEST");
}

#[actix_web::test]
async fn test_bad_credentials_are_unauthorized() {
    let app = test::init_service(create_app(test_state())).await;
    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(serde_json::json!({"username": "alice", "password": "pw123"}))
        .to_request();
    test::call_service(&app, req).await;

    for (username, password) in [("alice", "wrong"), ("nobody", "pw123")] {
        let req = test::TestRequest::post()
            .uri("/auth/login")
            .set_json(serde_json::json!({"username": username, "password": password}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
        assert!(resp
            .response()
            .cookies()
            .all(|c| c.name() != "refreshToken"));
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "INVALID_CREDENTIALS");
        assert_eq!(body["message"], "Invalid username or password");
    }
}

#[actix_web::test]
async fn test_refresh_without_cookie() {
    let app = test::init_service(create_app(test_state())).await;

    let req = test::TestRequest::post().uri("/auth/refreshtoken").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 401);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "REFRESH_TOKEN_MISSING");
}

#[actix_web::test]
async fn test_refresh_with_unknown_token() {
    let app = test::init_service(create_app(test_state())).await;

    let req = test::TestRequest::post()
        .uri("/auth/refreshtoken")
        .cookie(Cookie::new("refreshToken", "never-issued"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 401);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "TOKEN_INVALID");
}

#[actix_web::test]
async fn test_logout_without_session_succeeds() {
    let app = test::init_service(create_app(test_state())).await;

    for req in [
        test::TestRequest::post().uri("/auth/logout").to_request(),
        test::TestRequest::post()
            .uri("/auth/logout")
            .cookie(Cookie::new("refreshToken", "never-issued"))
            .to_request(),
    ] {
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
    }
}
