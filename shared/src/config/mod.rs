//! Configuration module with business-specific sub-modules
//!
//! - `auth` - token signing, session cookie and password hashing settings
//! - `environment` - environment detection and logging configuration
//! - `server` - HTTP server binding
//! - `storage` - JSON file locations and expired token cleanup
//!
//! Everything is loaded from environment variables. The token signing secret
//! and both token lifetimes are mandatory and are never defaulted.

pub mod auth;
pub mod environment;
pub mod server;
pub mod storage;

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

pub use auth::{AuthConfig, JwtConfig, SessionConfig};
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use server::ServerConfig;
pub use storage::StorageConfig;

/// Errors raised while assembling configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Missing required configuration value: {0}")]
    Missing(String),

    #[error("Invalid value for {key}: {message}")]
    Invalid { key: String, message: String },
}

impl ConfigError {
    pub fn invalid(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invalid {
            key: key.into(),
            message: message.into(),
        }
    }
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// File storage configuration
    pub storage: StorageConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    ///
    /// `from_env` delegates here; tests pass a map-backed closure.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = match lookup("ENVIRONMENT") {
            Some(value) => value
                .parse()
                .map_err(|e: String| ConfigError::invalid("ENVIRONMENT", e))?,
            None => Environment::default(),
        };

        let mut logging = LoggingConfig::for_environment(environment);
        if let Some(level) = lookup("LOG_LEVEL") {
            logging.level = level;
        }
        if let Some(format) = lookup("LOG_FORMAT") {
            logging.format = format
                .parse()
                .map_err(|e: String| ConfigError::invalid("LOG_FORMAT", e))?;
        }

        Ok(Self {
            environment,
            server: ServerConfig::from_lookup(&lookup)?,
            auth: AuthConfig::from_lookup(&lookup, environment)?,
            storage: StorageConfig::from_lookup(&lookup)?,
            logging,
        })
    }
}

/// Read a required key and parse it
pub(crate) fn required<T, F>(lookup: &F, key: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| ConfigError::Missing(key.to_string()))?;
    raw.trim()
        .parse()
        .map_err(|e: T::Err| ConfigError::invalid(key, e.to_string()))
}

/// Read an optional key, falling back to `default` when absent
pub(crate) fn optional<T, F>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::invalid(key, e.to_string())),
        _ => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    fn base_pairs() -> Vec<(&'static str, &'static str)> {
        vec![
            ("JWT_SECRET", SECRET),
            ("JWT_ACCESS_TOKEN_EXPIRY", "900"),
            ("JWT_REFRESH_TOKEN_EXPIRY", "604800"),
        ]
    }

    #[test]
    fn test_from_lookup_with_required_values() {
        let config = AppConfig::from_lookup(lookup_from(&base_pairs())).unwrap();

        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.auth.jwt.secret, SECRET);
        assert_eq!(config.auth.jwt.access_token_expiry, 900);
        assert_eq!(config.auth.jwt.refresh_token_expiry, 604800);
        assert_eq!(config.server.port, 8080);
        assert_eq!(
            config.storage.refresh_tokens_file.to_str(),
            Some("data/refresh_tokens.json")
        );
    }

    #[test]
    fn test_missing_secret_is_rejected() {
        let pairs = vec![
            ("JWT_ACCESS_TOKEN_EXPIRY", "900"),
            ("JWT_REFRESH_TOKEN_EXPIRY", "604800"),
        ];
        let err = AppConfig::from_lookup(lookup_from(&pairs)).unwrap_err();
        assert_eq!(err, ConfigError::Missing("JWT_SECRET".to_string()));
    }

    #[test]
    fn test_missing_lifetimes_are_rejected() {
        let pairs = vec![("JWT_SECRET", SECRET), ("JWT_REFRESH_TOKEN_EXPIRY", "604800")];
        let err = AppConfig::from_lookup(lookup_from(&pairs)).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Missing("JWT_ACCESS_TOKEN_EXPIRY".to_string())
        );

        let pairs = vec![("JWT_SECRET", SECRET), ("JWT_ACCESS_TOKEN_EXPIRY", "900")];
        let err = AppConfig::from_lookup(lookup_from(&pairs)).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Missing("JWT_REFRESH_TOKEN_EXPIRY".to_string())
        );
    }

    #[test]
    fn test_short_secret_is_rejected() {
        let mut pairs = base_pairs();
        pairs[0] = ("JWT_SECRET", "too-short");
        let err = AppConfig::from_lookup(lookup_from(&pairs)).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref key, .. } if key == "JWT_SECRET"));
    }

    #[test]
    fn test_non_numeric_lifetime_is_rejected() {
        let mut pairs = base_pairs();
        pairs[1] = ("JWT_ACCESS_TOKEN_EXPIRY", "fifteen");
        let err = AppConfig::from_lookup(lookup_from(&pairs)).unwrap_err();
        assert!(
            matches!(err, ConfigError::Invalid { ref key, .. } if key == "JWT_ACCESS_TOKEN_EXPIRY")
        );
    }

    #[test]
    fn test_optional_overrides() {
        let mut pairs = base_pairs();
        pairs.extend([
            ("ENVIRONMENT", "production"),
            ("SERVER_PORT", "9000"),
            ("USERS_FILE_PATH", "/tmp/users.json"),
            ("LOG_FORMAT", "compact"),
            ("BCRYPT_COST", "10"),
        ]);
        let config = AppConfig::from_lookup(lookup_from(&pairs)).unwrap();

        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.storage.users_file.to_str(), Some("/tmp/users.json"));
        assert_eq!(config.logging.format, LogFormat::Compact);
        assert_eq!(config.auth.password_hash_cost, 10);
        // production turns the Secure cookie flag on unless told otherwise
        assert!(config.auth.session.secure);
    }
}
