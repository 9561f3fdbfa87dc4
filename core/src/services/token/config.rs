//! Configuration for the token signer and the refresh token lifecycle

use ak_shared::config::auth::MAX_TOKEN_LIFETIME_SECONDS;
use ak_shared::config::JwtConfig;
use chrono::Duration;

use crate::domain::entities::token::{JWT_AUDIENCE, JWT_ISSUER};

/// Configuration for the access token signer
#[derive(Debug, Clone)]
pub struct TokenSignerConfig {
    /// HS256 signing secret
    pub jwt_secret: String,
    /// Access token lifetime
    pub access_token_lifetime: Duration,
    /// Value written to and required in `iss`
    pub issuer: String,
    /// Value written to and required in `aud`
    pub audience: String,
}

impl TokenSignerConfig {
    pub fn new(jwt_secret: impl Into<String>, access_token_lifetime: Duration) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            access_token_lifetime,
            issuer: JWT_ISSUER.to_string(),
            audience: JWT_AUDIENCE.to_string(),
        }
    }
}

impl From<&JwtConfig> for TokenSignerConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            jwt_secret: config.secret.clone(),
            access_token_lifetime: lifetime_from_seconds(config.access_token_expiry),
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
        }
    }
}

/// Configuration for the refresh token lifecycle
#[derive(Debug, Clone)]
pub struct RefreshTokenConfig {
    /// Refresh token lifetime
    pub lifetime: Duration,
}

impl RefreshTokenConfig {
    pub fn new(lifetime: Duration) -> Self {
        Self { lifetime }
    }
}

impl From<&JwtConfig> for RefreshTokenConfig {
    fn from(config: &JwtConfig) -> Self {
        Self::new(lifetime_from_seconds(config.refresh_token_expiry))
    }
}

/// Longest lifetime the signer and the refresh lifecycle accept
pub fn max_token_lifetime() -> Duration {
    Duration::seconds(MAX_TOKEN_LIFETIME_SECONDS)
}

/// Seconds to `Duration` without panicking on out-of-range input
///
/// Values chrono cannot represent become `Duration::max_value()`, which the
/// services then reject as too long.
fn lifetime_from_seconds(seconds: i64) -> Duration {
    Duration::try_seconds(seconds).unwrap_or_else(Duration::max_value)
}
