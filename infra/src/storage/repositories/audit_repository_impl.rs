//! Login audit repository over a record store.

use std::path::PathBuf;

use async_trait::async_trait;

use ak_core::domain::entities::audit::LoginAuditEntry;
use ak_core::errors::DomainError;
use ak_core::repositories::LoginAuditRepository;

use crate::error::InfrastructureError;
use crate::storage::{Change, JsonFileStore, MemoryStore, RecordStore};

/// LoginAuditRepository backed by any [`RecordStore`]
pub struct LoginAuditRepositoryImpl<S> {
    store: S,
}

impl<S> LoginAuditRepositoryImpl<S>
where
    S: RecordStore<LoginAuditEntry>,
{
    pub fn with_store(store: S) -> Self {
        Self { store }
    }
}

impl LoginAuditRepositoryImpl<JsonFileStore<LoginAuditEntry>> {
    /// Open (or create) the audit file at `path`
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, InfrastructureError> {
        Ok(Self::with_store(JsonFileStore::open(path).await?))
    }
}

impl LoginAuditRepositoryImpl<MemoryStore<LoginAuditEntry>> {
    pub fn new() -> Self {
        Self::with_store(MemoryStore::new())
    }
}

impl Default for LoginAuditRepositoryImpl<MemoryStore<LoginAuditEntry>> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<S> LoginAuditRepository for LoginAuditRepositoryImpl<S>
where
    S: RecordStore<LoginAuditEntry>,
{
    async fn append(&self, entry: &LoginAuditEntry) -> Result<(), DomainError> {
        let entry = entry.clone();
        self.store
            .update(move |entries| {
                entries.push(entry);
                Change::Modified(())
            })
            .await?;
        Ok(())
    }

    async fn find_by_username(&self, username: &str) -> Result<Vec<LoginAuditEntry>, DomainError> {
        let entries = self
            .store
            .read(|entries| {
                entries
                    .iter()
                    .filter(|e| e.username.eq_ignore_ascii_case(username))
                    .cloned()
                    .collect()
            })
            .await?;
        Ok(entries)
    }
}
