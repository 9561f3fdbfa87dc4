//! Infrastructure-specific error types

use ak_core::errors::DomainError;

/// Failures of the storage and bootstrap layer
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Record file could not be read, written or renamed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Record file holds something other than a JSON array of records
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        DomainError::storage(err.to_string())
    }
}
