//! File storage configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::{optional, ConfigError};

/// Locations of the JSON record files and the expired token sweep schedule
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// User credential records
    pub users_file: PathBuf,

    /// Refresh token records
    pub refresh_tokens_file: PathBuf,

    /// Login audit trail
    pub login_audit_file: PathBuf,

    /// Seconds between expired refresh token sweeps
    #[serde(default = "default_cleanup_interval")]
    pub cleanup_interval_seconds: u64,

    /// Whether the sweep runs at all
    #[serde(default = "default_cleanup_enabled")]
    pub cleanup_enabled: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            users_file: PathBuf::from("data/users.json"),
            refresh_tokens_file: PathBuf::from("data/refresh_tokens.json"),
            login_audit_file: PathBuf::from("data/login_audit.json"),
            cleanup_interval_seconds: default_cleanup_interval(),
            cleanup_enabled: default_cleanup_enabled(),
        }
    }
}

impl StorageConfig {
    /// Place all three files under one directory
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            users_file: dir.join("users.json"),
            refresh_tokens_file: dir.join("refresh_tokens.json"),
            login_audit_file: dir.join("login_audit.json"),
            ..Default::default()
        }
    }

    pub(crate) fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let cleanup_interval_seconds = optional(
            lookup,
            "TOKEN_CLEANUP_INTERVAL_SECONDS",
            defaults.cleanup_interval_seconds,
        )?;
        if cleanup_interval_seconds == 0 {
            return Err(ConfigError::invalid(
                "TOKEN_CLEANUP_INTERVAL_SECONDS",
                "interval must be positive",
            ));
        }

        Ok(Self {
            users_file: optional(lookup, "USERS_FILE_PATH", defaults.users_file)?,
            refresh_tokens_file: optional(
                lookup,
                "REFRESH_TOKENS_FILE_PATH",
                defaults.refresh_tokens_file,
            )?,
            login_audit_file: optional(lookup, "LOGIN_AUDIT_FILE_PATH", defaults.login_audit_file)?,
            cleanup_interval_seconds,
            cleanup_enabled: optional(lookup, "TOKEN_CLEANUP_ENABLED", defaults.cleanup_enabled)?,
        })
    }
}

fn default_cleanup_interval() -> u64 {
    3600
}

fn default_cleanup_enabled() -> bool {
    true
}
