//! Error types for authentication and token management
//!
//! Messages are deliberately terse. The HTTP layer never echoes them to
//! clients; it maps each error to a stable generic message instead.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown username or wrong password. The two cases are not
    /// distinguished so callers cannot probe for registered usernames.
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Username is already taken")]
    UserAlreadyExists,
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Refresh token expired")]
    RefreshTokenExpired,

    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    #[error("Token generation failed")]
    TokenGenerationFailed,

    #[error("Signing key must be at least {min_bytes} bytes")]
    WeakSigningKey { min_bytes: usize },
}
