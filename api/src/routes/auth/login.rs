use actix_web::{http::header, web, HttpRequest, HttpResponse};
use validator::Validate;

use ak_core::domain::entities::LoginContext;
use ak_core::repositories::{LoginAuditRepository, RefreshTokenRepository, UserRepository};
use ak_core::services::user::PasswordHasher;
use ak_shared::ApiResponse;

use crate::dto::auth::{LoginRequest, TokenResponse};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};

use super::cookie::refresh_cookie;
use super::AppState;

/// Handler for POST /auth/login
///
/// On success the refresh token is returned in the body and also set as
/// an HTTP-only cookie. Any previous session of the user ends.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "success": true,
///     "data": {
///         "accessToken": "eyJ...",
///         "refreshToken": "opaque",
///         "expiresIn": 900
///     }
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: Unknown user or wrong password
pub async fn login<U, T, H, A>(
    req: HttpRequest,
    state: web::Data<AppState<U, T, H, A>>,
    request: web::Json<LoginRequest>,
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

    let context = login_context(&req);
    match state
        .session
        .login(&request.username, &request.password, &context)
        .await
    {
        Ok(pair) => {
            let cookie = refresh_cookie(&state.cookies, &pair.refresh_token, pair.refresh_expires_in);
            HttpResponse::Ok()
                .cookie(cookie)
                .json(ApiResponse::success(TokenResponse::from(pair)))
        }
        Err(error) => handle_domain_error(&error),
    }
}

/// Client metadata for the login audit trail
///
/// `X-Browser` wins over `User-Agent`; `X-OS` and `X-Device` are taken as is.
fn login_context(req: &HttpRequest) -> LoginContext {
    let header_value = |name: &str| {
        req.headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(String::from)
    };

    LoginContext {
        ip: req.peer_addr().map(|addr| addr.ip().to_string()),
        browser: header_value("x-browser").or_else(|| header_value(header::USER_AGENT.as_str())),
        os: header_value("x-os"),
        device: header_value("x-device"),
    }
}
