use actix_web::{web, HttpRequest, HttpResponse};

use ak_core::repositories::{LoginAuditRepository, RefreshTokenRepository, UserRepository};
use ak_core::services::user::PasswordHasher;
use ak_shared::ApiResponse;

use crate::handlers::error::handle_domain_error;

use super::cookie::{cleared_cookie, read_refresh_cookie};
use super::AppState;

/// Handler for POST /auth/logout
///
/// Deletes the refresh token named by the cookie, if any, and clears the
/// cookie. Logging out without a session still succeeds.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "success": true, "message": "Successfully logged out" }
/// ```
pub async fn logout<U, T, H, A>(
    req: HttpRequest,
    state: web::Data<AppState<U, T, H, A>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: RefreshTokenRepository + 'static,
    H: PasswordHasher + 'static,
    A: LoginAuditRepository + 'static,
{
    let presented = read_refresh_cookie(&req, &state.cookies);

    match state.session.logout(presented.as_deref()).await {
        Ok(()) => HttpResponse::Ok()
            .cookie(cleared_cookie(&state.cookies))
            .json(ApiResponse::<()>::message("Successfully logged out")),
        Err(error) => handle_domain_error(&error),
    }
}
