//! Refresh token repository over a record store.
//!
//! Every trait method is a single store call, so lookups, the eviction in
//! `save` and the conditional delete each run under the store lock.

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::debug;

use ak_core::domain::entities::token::RefreshToken;
use ak_core::errors::DomainError;
use ak_core::repositories::RefreshTokenRepository;

use crate::error::InfrastructureError;
use crate::storage::{Change, JsonFileStore, MemoryStore, RecordStore};

/// RefreshTokenRepository backed by any [`RecordStore`]
pub struct RefreshTokenRepositoryImpl<S> {
    store: S,
}

impl<S> RefreshTokenRepositoryImpl<S>
where
    S: RecordStore<RefreshToken>,
{
    /// Wrap an already opened store
    pub fn with_store(store: S) -> Self {
        Self { store }
    }
}

impl RefreshTokenRepositoryImpl<JsonFileStore<RefreshToken>> {
    /// Open (or create) the refresh token file at `path`
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, InfrastructureError> {
        Ok(Self::with_store(JsonFileStore::open(path).await?))
    }
}

impl RefreshTokenRepositoryImpl<MemoryStore<RefreshToken>> {
    pub fn new() -> Self {
        Self::with_store(MemoryStore::new())
    }
}

impl Default for RefreshTokenRepositoryImpl<MemoryStore<RefreshToken>> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<S> RefreshTokenRepository for RefreshTokenRepositoryImpl<S>
where
    S: RecordStore<RefreshToken>,
{
    async fn find_by_token(&self, token: &str) -> Result<Option<RefreshToken>, DomainError> {
        let found = self
            .store
            .read(|tokens| tokens.iter().find(|t| t.token == token).cloned())
            .await?;
        Ok(found)
    }

    async fn save(&self, token: RefreshToken) -> Result<RefreshToken, DomainError> {
        let saved = token.clone();
        let evicted = self
            .store
            .update(move |tokens| {
                let before = tokens.len();
                tokens.retain(|t| !t.is_owned_by(&token.username));
                let evicted = before - tokens.len();
                tokens.push(token);
                Change::Modified(evicted)
            })
            .await?;

        if evicted > 0 {
            debug!(username = %saved.username, evicted, "Evicted previous refresh token");
        }
        Ok(saved)
    }

    async fn delete_by_token(&self, token: &str) -> Result<bool, DomainError> {
        let removed = self
            .store
            .update(|tokens| {
                let before = tokens.len();
                tokens.retain(|t| t.token != token);
                Change::from_flag(tokens.len() != before, tokens.len() != before)
            })
            .await?;
        Ok(removed)
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<usize, DomainError> {
        let removed = self
            .store
            .update(|tokens| {
                let before = tokens.len();
                tokens.retain(|t| !t.is_expired_at(now));
                let removed = before - tokens.len();
                Change::from_flag(removed > 0, removed)
            })
            .await?;
        Ok(removed)
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.store.read(|tokens| tokens.len()).await?)
    }
}
