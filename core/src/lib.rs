//! # Authkeep Core
//!
//! Domain layer of the Authkeep token service.
//! This crate holds the entities, repository interfaces, error types and the
//! services that sign access tokens, rotate refresh tokens and manage sessions.
//! Storage backends live in `ak_infra`, the HTTP surface in `ak_api`.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{
    Claims, LoginAuditEntry, LoginContext, RefreshToken, TokenPair, User, JWT_AUDIENCE,
    JWT_ISSUER,
};
pub use errors::{AuthError, DomainError, DomainResult, ErrorCategory, TokenError};
pub use repositories::{LoginAuditRepository, RefreshTokenRepository, UserRepository};
pub use services::{
    generate_refresh_token, CleanupResult, LoginAuditService, LoginAuditServiceConfig,
    PasswordHasher, RefreshTokenConfig, RefreshTokenService, SessionService, TokenCleanupConfig,
    TokenCleanupService, TokenSigner, TokenSignerConfig, UserService,
};
