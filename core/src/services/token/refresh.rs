//! Refresh token lifecycle: creation, lookup, expiry check, rotation, deletion

use std::sync::Arc;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use chrono::{Duration, Utc};
use rand::RngCore;
use tracing::{debug, info};

use crate::domain::entities::token::RefreshToken;
use crate::errors::{DomainError, DomainResult, TokenError};
use crate::repositories::{RefreshTokenRepository, UserRepository};

use super::config::{max_token_lifetime, RefreshTokenConfig};
use super::signer::TokenSigner;

/// Random bytes behind each refresh token value
const REFRESH_TOKEN_BYTES: usize = 32;

/// Generate an opaque refresh token value
///
/// 256 bits from the thread-local CSPRNG, URL-safe base64 without padding,
/// so the value is cookie-safe as is.
pub fn generate_refresh_token() -> String {
    let mut bytes = [0u8; REFRESH_TOKEN_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Orchestrates refresh tokens on top of the refresh token store
///
/// A token moves from issued to exactly one of rotated, expired or revoked
/// and never comes back. Rotation always mints a new token value.
pub struct RefreshTokenService<T, U>
where
    T: RefreshTokenRepository,
    U: UserRepository,
{
    tokens: Arc<T>,
    users: Arc<U>,
    signer: Arc<TokenSigner>,
    config: RefreshTokenConfig,
}

impl<T, U> RefreshTokenService<T, U>
where
    T: RefreshTokenRepository,
    U: UserRepository,
{
    /// Creates a new refresh token service
    ///
    /// # Arguments
    ///
    /// * `tokens` - Refresh token store
    /// * `users` - Credential store, only queried for existence
    /// * `signer` - Issues the access token half of a rotation
    /// * `config` - Refresh token lifetime
    pub fn new(
        tokens: Arc<T>,
        users: Arc<U>,
        signer: Arc<TokenSigner>,
        config: RefreshTokenConfig,
    ) -> Result<Self, DomainError> {
        if config.lifetime <= Duration::zero() {
            return Err(DomainError::Validation {
                message: "refresh token lifetime must be positive".to_string(),
            });
        }
        if config.lifetime > max_token_lifetime() {
            return Err(DomainError::Validation {
                message: "refresh token lifetime is too long".to_string(),
            });
        }

        Ok(Self {
            tokens,
            users,
            signer,
            config,
        })
    }

    /// Issue and store a fresh refresh token for `username`
    ///
    /// Any token the user held before is evicted by the store.
    ///
    /// # Returns
    ///
    /// * `Ok(RefreshToken)` - The stored record, owned by the canonical username
    /// * `Err(DomainError::NotFound)` - No such user
    /// * `Err(DomainError::Storage)` - The store failed
    pub async fn create(&self, username: &str) -> DomainResult<RefreshToken> {
        let user = self
            .users
            .find_by_username(username)
            .await?
            .ok_or_else(|| DomainError::not_found("user"))?;

        let record = RefreshToken::new(generate_refresh_token(), user.username, self.config.lifetime);
        let saved = self.tokens.save(record).await?;

        debug!(username = %saved.username, expires_at = %saved.expires_at, "Refresh token issued");
        Ok(saved)
    }

    /// Look a token up without side effects
    pub async fn lookup(&self, token: &str) -> DomainResult<Option<RefreshToken>> {
        self.tokens.find_by_token(token).await
    }

    /// Reject and purge an expired record, pass a live one through unchanged
    pub async fn verify_not_expired(&self, record: RefreshToken) -> DomainResult<RefreshToken> {
        if record.is_expired_at(Utc::now()) {
            self.tokens.delete_by_token(&record.token).await?;
            info!(username = %record.username, "Expired refresh token purged");
            return Err(TokenError::RefreshTokenExpired.into());
        }
        Ok(record)
    }

    /// Exchange a refresh token for a new access token and refresh token
    ///
    /// The old record is deleted before anything new is issued. The delete
    /// is conditional: when two callers rotate the same token concurrently,
    /// only the one whose delete removed the record proceeds and the other
    /// gets `InvalidRefreshToken`.
    ///
    /// # Returns
    ///
    /// * `Ok((String, RefreshToken))` - New access token and new refresh record
    /// * `Err(TokenError::InvalidRefreshToken)` - Unknown or already used token
    /// * `Err(TokenError::RefreshTokenExpired)` - Token expired; it is purged
    /// * `Err(DomainError::NotFound)` - Owner no longer exists
    pub async fn rotate(&self, old_token: &str) -> DomainResult<(String, RefreshToken)> {
        let record = self
            .lookup(old_token)
            .await?
            .ok_or(TokenError::InvalidRefreshToken)?;
        let record = self.verify_not_expired(record).await?;

        if !self.tokens.delete_by_token(&record.token).await? {
            debug!(username = %record.username, "Refresh token consumed by a concurrent rotation");
            return Err(TokenError::InvalidRefreshToken.into());
        }

        let access_token = self.signer.issue(&record.username)?;
        let new_record = self.create(&record.username).await?;

        info!(username = %new_record.username, "Refresh token rotated");
        Ok((access_token, new_record))
    }

    /// Delete a token; an unknown token is a no-op
    pub async fn delete(&self, token: &str) -> DomainResult<()> {
        if self.tokens.delete_by_token(token).await? {
            debug!("Refresh token revoked");
        }
        Ok(())
    }

    /// Remove every expired record from the store
    pub async fn purge_expired(&self) -> DomainResult<usize> {
        self.tokens.delete_expired(Utc::now()).await
    }

    /// Lifetime applied to new refresh tokens
    pub fn lifetime(&self) -> Duration {
        self.config.lifetime
    }
}
