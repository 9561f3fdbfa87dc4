//! User repository trait defining the interface for credential record persistence.

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User credential records
///
/// Usernames are unique ignoring ASCII case. The token subsystem only ever
/// reads from this store.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by username, ignoring ASCII case
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with this name
    /// * `Err(DomainError)` - Storage error occurred
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Insert a new user
    ///
    /// The uniqueness check and the insert happen under one lock.
    ///
    /// # Returns
    /// * `Ok(User)` - The stored user
    /// * `Err(DomainError::Auth(AuthError::UserAlreadyExists))` - Name taken
    /// * `Err(DomainError)` - Storage error occurred
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Check whether a username is registered, ignoring ASCII case
    async fn exists(&self, username: &str) -> Result<bool, DomainError> {
        Ok(self.find_by_username(username).await?.is_some())
    }
}
