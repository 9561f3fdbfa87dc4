//! Domain-specific error types and error handling.

mod types;


pub use types::{AuthError, TokenError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Unauthorized access")]
    Unauthorized,

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

pub type DomainResult<T> = Result<T, DomainError>;

/// Externally visible failure classes
///
/// Expired and invalid tokens share `Unauthorized`; the variant inside
/// `DomainError` keeps the distinction for logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Unauthorized,
    NotFound,
    Validation,
    Conflict,
    Storage,
    Internal,
}

impl DomainError {
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Classify the error for the boundary layer
    pub fn category(&self) -> ErrorCategory {
        match self {
            DomainError::Validation { .. } => ErrorCategory::Validation,
            DomainError::NotFound { .. } => ErrorCategory::NotFound,
            DomainError::Unauthorized => ErrorCategory::Unauthorized,
            DomainError::Storage { .. } => ErrorCategory::Storage,
            DomainError::Internal { .. } => ErrorCategory::Internal,
            DomainError::Auth(err) => match err {
                AuthError::InvalidCredentials => ErrorCategory::Unauthorized,
                AuthError::UserAlreadyExists => ErrorCategory::Conflict,
            },
            DomainError::Token(err) => match err {
                TokenError::TokenGenerationFailed | TokenError::WeakSigningKey { .. } => {
                    ErrorCategory::Internal
                }
                _ => ErrorCategory::Unauthorized,
            },
        }
    }

    /// Whether a failed refresh should be reported as a plain rejection
    ///
    /// Storage and internal failures are real faults and keep their class.
    pub fn is_token_rejection(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Unauthorized | ErrorCategory::NotFound
        )
    }
}
