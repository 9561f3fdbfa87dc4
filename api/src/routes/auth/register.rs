use actix_web::{web, HttpResponse};
use validator::Validate;

use ak_core::repositories::{LoginAuditRepository, RefreshTokenRepository, UserRepository};
use ak_core::services::user::PasswordHasher;
use ak_shared::ApiResponse;

use crate::dto::auth::RegisterRequest;
use crate::handlers::error::{handle_domain_error, handle_validation_errors};

use super::AppState;

/// Handler for POST /auth/register
///
/// # Request Body
///
/// ```json
/// { "username": "alice", "password": "pw123" }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Username or password rejected
/// - 409 Conflict: Username already taken, ignoring case
pub async fn register<U, T, H, A>(
    state: web::Data<AppState<U, T, H, A>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: RefreshTokenRepository + 'static,
    H: PasswordHasher + 'static,
    A: LoginAuditRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(&errors);
    }

    match state
        .session
        .register(&request.username, &request.password)
        .await
    {
        Ok(_) => HttpResponse::Ok().json(ApiResponse::<()>::message("User registered successfully!")),
        Err(error) => handle_domain_error(&error),
    }
}
