//! Mock implementation of RefreshTokenRepository for testing

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::entities::token::RefreshToken;
use crate::errors::DomainError;

use super::r#trait::RefreshTokenRepository;

/// Mock refresh token repository for testing
///
/// Follows the same contract as the file store and can be switched into a
/// failing mode to exercise storage error paths.
pub struct MockRefreshTokenRepository {
    tokens: Arc<Mutex<Vec<RefreshToken>>>,
    fail_storage: AtomicBool,
}

impl MockRefreshTokenRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            tokens: Arc::new(Mutex::new(Vec::new())),
            fail_storage: AtomicBool::new(false),
        }
    }

    /// Seed a record directly, bypassing eviction
    pub async fn insert_raw(&self, token: RefreshToken) {
        self.tokens.lock().await.push(token);
    }

    /// Make every following call fail with a storage error
    pub fn set_fail_storage(&self, fail: bool) {
        self.fail_storage.store(fail, Ordering::SeqCst);
    }

    /// Snapshot of the stored records
    pub async fn all(&self) -> Vec<RefreshToken> {
        self.tokens.lock().await.clone()
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.fail_storage.load(Ordering::SeqCst) {
            Err(DomainError::storage("mock storage failure"))
        } else {
            Ok(())
        }
    }
}

impl Default for MockRefreshTokenRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RefreshTokenRepository for MockRefreshTokenRepository {
    async fn find_by_token(&self, token: &str) -> Result<Option<RefreshToken>, DomainError> {
        self.check()?;
        let tokens = self.tokens.lock().await;
        Ok(tokens.iter().find(|t| t.token == token).cloned())
    }

    async fn save(&self, token: RefreshToken) -> Result<RefreshToken, DomainError> {
        self.check()?;
        let mut tokens = self.tokens.lock().await;
        tokens.retain(|t| !t.is_owned_by(&token.username));
        tokens.push(token.clone());
        Ok(token)
    }

    async fn delete_by_token(&self, token: &str) -> Result<bool, DomainError> {
        self.check()?;
        let mut tokens = self.tokens.lock().await;
        let before = tokens.len();
        tokens.retain(|t| t.token != token);
        Ok(tokens.len() != before)
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<usize, DomainError> {
        self.check()?;
        let mut tokens = self.tokens.lock().await;
        let before = tokens.len();
        tokens.retain(|t| !t.is_expired_at(now));
        Ok(before - tokens.len())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        self.check()?;
        Ok(self.tokens.lock().await.len())
    }
}
