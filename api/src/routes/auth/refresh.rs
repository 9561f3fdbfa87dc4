use actix_web::{http::StatusCode, web, HttpRequest, HttpResponse};
use tracing::debug;

use ak_core::repositories::{LoginAuditRepository, RefreshTokenRepository, UserRepository};
use ak_core::services::user::PasswordHasher;
use ak_shared::{error_codes, ApiResponse, ErrorResponse};

use crate::dto::auth::TokenResponse;
use crate::handlers::error::{handle_domain_error, ErrorResponseExt};

use super::cookie::{read_refresh_cookie, refresh_cookie};
use super::AppState;

/// Handler for POST /auth/refreshtoken
///
/// Exchanges the refresh token cookie for a new pair. The presented token
/// is consumed; presenting it again fails.
///
/// ## Errors
/// - 401 Unauthorized: Cookie missing, or token unknown, used or expired
/// - 500 Internal Server Error: Token store unavailable
pub async fn refresh_token<U, T, H, A>(
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

    match state.session.refresh(presented.as_deref()).await {
        Ok(pair) => {
            let cookie = refresh_cookie(&state.cookies, &pair.refresh_token, pair.refresh_expires_in);
            HttpResponse::Ok()
                .cookie(cookie)
                .json(ApiResponse::success(TokenResponse::from(pair)))
        }
        Err(_) if presented.is_none() => {
            debug!("Refresh token not found in cookies");
            ErrorResponse::new(
                error_codes::REFRESH_TOKEN_MISSING,
                "Refresh token not found in cookie",
            )
            .to_response(StatusCode::UNAUTHORIZED)
        }
        Err(error) => handle_domain_error(&error),
    }
}
