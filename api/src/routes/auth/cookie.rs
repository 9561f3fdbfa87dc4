//! Refresh token cookie helpers

use actix_web::cookie::{time::Duration, Cookie};
use actix_web::HttpRequest;

use ak_shared::SessionConfig;

/// Cookie carrying a freshly issued refresh token
pub fn refresh_cookie(config: &SessionConfig, token: &str, max_age_seconds: i64) -> Cookie<'static> {
    Cookie::build(config.cookie_name.clone(), token.to_string())
        .path(config.path.clone())
        .http_only(config.http_only)
        .secure(config.secure)
        .max_age(Duration::seconds(max_age_seconds))
        .finish()
}

/// Cookie that makes the client drop the refresh token
pub fn cleared_cookie(config: &SessionConfig) -> Cookie<'static> {
    Cookie::build(config.cookie_name.clone(), String::new())
        .path(config.path.clone())
        .http_only(config.http_only)
        .secure(config.secure)
        .max_age(Duration::ZERO)
        .finish()
}

/// Refresh token sent by the client, if any
pub fn read_refresh_cookie(req: &HttpRequest, config: &SessionConfig) -> Option<String> {
    req.cookie(&config.cookie_name)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
}
