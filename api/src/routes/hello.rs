use actix_web::HttpResponse;

use crate::middleware::auth::AuthContext;

/// Handler for GET /api/hello
///
/// Requires a valid access token; greets the token's subject.
pub async fn hello(auth: AuthContext) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(format!(
            "Hello, {}! This is a protected resource.",
            auth.username
        ))
}
