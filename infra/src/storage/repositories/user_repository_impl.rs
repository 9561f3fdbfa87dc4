//! User repository over a record store.

use std::path::PathBuf;

use async_trait::async_trait;

use ak_core::domain::entities::user::User;
use ak_core::errors::{AuthError, DomainError};
use ak_core::repositories::UserRepository;

use crate::error::InfrastructureError;
use crate::storage::{Change, JsonFileStore, MemoryStore, RecordStore};

/// UserRepository backed by any [`RecordStore`]
pub struct UserRepositoryImpl<S> {
    store: S,
}

impl<S> UserRepositoryImpl<S>
where
    S: RecordStore<User>,
{
    pub fn with_store(store: S) -> Self {
        Self { store }
    }
}

impl UserRepositoryImpl<JsonFileStore<User>> {
    /// Open (or create) the user file at `path`
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, InfrastructureError> {
        Ok(Self::with_store(JsonFileStore::open(path).await?))
    }
}

impl UserRepositoryImpl<MemoryStore<User>> {
    pub fn new() -> Self {
        Self::with_store(MemoryStore::new())
    }
}

impl Default for UserRepositoryImpl<MemoryStore<User>> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<S> UserRepository for UserRepositoryImpl<S>
where
    S: RecordStore<User>,
{
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let found = self
            .store
            .read(|users| users.iter().find(|u| u.has_username(username)).cloned())
            .await?;
        Ok(found)
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let created = self
            .store
            .update(move |users| {
                if users.iter().any(|u| u.has_username(&user.username)) {
                    return Change::Unchanged(Err(AuthError::UserAlreadyExists));
                }
                users.push(user.clone());
                Change::Modified(Ok(user))
            })
            .await?;
        Ok(created?)
    }
}
