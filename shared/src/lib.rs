//! Shared utilities and common types for the Authkeep server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types and environment loading
//! - Error response structures and error codes
//! - Credential validation helpers
//! - API response envelopes

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, ConfigError, Environment, JwtConfig, LoggingConfig, ServerConfig,
    SessionConfig, StorageConfig,
};
pub use errors::{error_codes, ApiResult, ErrorResponse};
pub use types::{ApiResponse, HealthResponse};
pub use utils::validation;
