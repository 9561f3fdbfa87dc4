//! Refresh token repository trait defining the interface for refresh token persistence.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::token::RefreshToken;
use crate::errors::DomainError;

/// Repository trait for RefreshToken record persistence
///
/// Every method is one atomic step against the whole collection: an
/// implementation must hold a single exclusive lock for the complete
/// read-modify-write cycle of a call, reads included. Nothing is held
/// between calls, so a record returned by `find_by_token` may already be
/// gone by the time the caller acts on it.
///
/// # Single session per user
/// `save` evicts every existing record owned by the same username (ASCII
/// case-insensitive) before inserting. A second login therefore ends the
/// first session.
///
/// # Failures
/// Read, write and decode failures surface as `DomainError::Storage` and
/// are never retried here.
#[async_trait]
pub trait RefreshTokenRepository: Send + Sync {
    /// Find a refresh token by its exact value
    ///
    /// # Arguments
    /// * `token` - The opaque token value, matched case-sensitively
    ///
    /// # Returns
    /// * `Ok(Some(RefreshToken))` - Token found
    /// * `Ok(None)` - No record holds this value
    /// * `Err(DomainError)` - Storage error occurred
    async fn find_by_token(&self, token: &str) -> Result<Option<RefreshToken>, DomainError>;

    /// Persist a refresh token, replacing any token the same user held
    ///
    /// # Example
    /// ```no_run
    /// # use chrono::Duration;
    /// # use ak_core::repositories::RefreshTokenRepository;
    /// # use ak_core::domain::entities::token::RefreshToken;
    /// # async fn example(repo: &impl RefreshTokenRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// let first = repo.save(RefreshToken::new("t1", "alice", Duration::days(7))).await?;
    /// repo.save(RefreshToken::new("t2", "ALICE", Duration::days(7))).await?;
    ///
    /// assert!(repo.find_by_token(&first.token).await?.is_none());
    /// # Ok(())
    /// # }
    /// ```
    async fn save(&self, token: RefreshToken) -> Result<RefreshToken, DomainError>;

    /// Remove the record holding `token`
    ///
    /// # Returns
    /// * `Ok(true)` - A record was removed by this call
    /// * `Ok(false)` - No record held this value; nothing was written
    /// * `Err(DomainError)` - Storage error occurred
    async fn delete_by_token(&self, token: &str) -> Result<bool, DomainError>;

    /// Remove every record that expired before `now`
    ///
    /// # Returns
    /// Number of records removed
    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<usize, DomainError>;

    /// Number of stored records, expired ones included
    async fn count(&self) -> Result<usize, DomainError>;
}
