//! Authentication configuration: token signing, session cookie and hashing

use serde::{Deserialize, Serialize};

use super::{optional, required, ConfigError, Environment};

/// Minimum HS256 signing key length in bytes
pub const MIN_SECRET_BYTES: usize = 32;

/// Longest accepted token lifetime in seconds (ten years)
pub const MAX_TOKEN_LIFETIME_SECONDS: i64 = 10 * 365 * 24 * 60 * 60;

/// Name of the cookie carrying the refresh token
pub const REFRESH_COOKIE_NAME: &str = "refreshToken";

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// Access token expiry time in seconds
    pub access_token_expiry: i64,

    /// Refresh token expiry time in seconds
    pub refresh_token_expiry: i64,

    /// JWT issuer claim
    #[serde(default = "default_issuer")]
    pub issuer: String,

    /// JWT audience claim
    #[serde(default = "default_audience")]
    pub audience: String,
}

impl JwtConfig {
    /// Create a new JWT configuration; every value is explicit
    pub fn new(secret: impl Into<String>, access_token_expiry: i64, refresh_token_expiry: i64) -> Self {
        Self {
            secret: secret.into(),
            access_token_expiry,
            refresh_token_expiry,
            issuer: default_issuer(),
            audience: default_audience(),
        }
    }

    /// Check key strength and lifetimes
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.secret.as_bytes().len() < MIN_SECRET_BYTES {
            return Err(ConfigError::invalid(
                "JWT_SECRET",
                format!("secret must be at least {} bytes", MIN_SECRET_BYTES),
            ));
        }
        check_lifetime("JWT_ACCESS_TOKEN_EXPIRY", self.access_token_expiry)?;
        check_lifetime("JWT_REFRESH_TOKEN_EXPIRY", self.refresh_token_expiry)
    }
}

fn check_lifetime(key: &str, seconds: i64) -> Result<(), ConfigError> {
    if seconds <= 0 {
        return Err(ConfigError::invalid(key, "lifetime must be positive"));
    }
    if seconds > MAX_TOKEN_LIFETIME_SECONDS {
        return Err(ConfigError::invalid(
            key,
            format!("lifetime must not exceed {} seconds", MAX_TOKEN_LIFETIME_SECONDS),
        ));
    }
    Ok(())
}

/// Refresh token cookie configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Cookie name
    pub cookie_name: String,

    /// Cookie path
    pub path: String,

    /// Secure flag (HTTPS only)
    pub secure: bool,

    /// HttpOnly flag
    #[serde(default = "default_http_only")]
    pub http_only: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: String::from(REFRESH_COOKIE_NAME),
            path: String::from("/"),
            secure: false,
            http_only: default_http_only(),
        }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// Session cookie configuration
    #[serde(default)]
    pub session: SessionConfig,

    /// bcrypt work factor
    #[serde(default = "default_hash_cost")]
    pub password_hash_cost: u32,
}

impl AuthConfig {
    /// Create an auth configuration around an explicit JWT configuration
    pub fn new(jwt: JwtConfig) -> Self {
        Self {
            jwt,
            session: SessionConfig::default(),
            password_hash_cost: default_hash_cost(),
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&|key: &str| std::env::var(key).ok(), Environment::from_env())
    }

    pub(crate) fn from_lookup<F>(lookup: &F, environment: Environment) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt = JwtConfig {
            secret: required::<String, _>(lookup, "JWT_SECRET")?,
            access_token_expiry: required(lookup, "JWT_ACCESS_TOKEN_EXPIRY")?,
            refresh_token_expiry: required(lookup, "JWT_REFRESH_TOKEN_EXPIRY")?,
            issuer: optional(lookup, "JWT_ISSUER", default_issuer())?,
            audience: optional(lookup, "JWT_AUDIENCE", default_audience())?,
        };
        jwt.validate()?;

        let session = SessionConfig {
            secure: optional(lookup, "COOKIE_SECURE", environment.is_production())?,
            ..SessionConfig::default()
        };

        let password_hash_cost = optional(lookup, "BCRYPT_COST", default_hash_cost())?;
        if !(4..=31).contains(&password_hash_cost) {
            return Err(ConfigError::invalid("BCRYPT_COST", "cost must be between 4 and 31"));
        }

        Ok(Self {
            jwt,
            session,
            password_hash_cost,
        })
    }

    /// Refresh token lifetime in seconds, also used as the cookie Max-Age
    pub fn refresh_token_expiry_seconds(&self) -> i64 {
        self.jwt.refresh_token_expiry
    }
}

fn default_issuer() -> String {
    String::from("authkeep")
}

fn default_audience() -> String {
    String::from("authkeep-api")
}

fn default_http_only() -> bool {
    true
}

fn default_hash_cost() -> u32 {
    12
}
