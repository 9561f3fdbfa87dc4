//! User service implementation

use std::sync::Arc;

use ak_shared::validation::validate_credentials;
use tracing::{debug, info};

use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::UserRepository;

use super::hasher::PasswordHasher;

/// Registers users and checks their credentials
pub struct UserService<U, H>
where
    U: UserRepository,
    H: PasswordHasher,
{
    users: Arc<U>,
    hasher: Arc<H>,
}

impl<U, H> UserService<U, H>
where
    U: UserRepository,
    H: PasswordHasher,
{
    pub fn new(users: Arc<U>, hasher: H) -> Self {
        Self {
            users,
            hasher: Arc::new(hasher),
        }
    }

    /// Register a new user
    ///
    /// The username is trimmed before validation and storage.
    ///
    /// # Returns
    ///
    /// * `Ok(User)` - The stored user
    /// * `Err(DomainError::Validation)` - Username or password rejected
    /// * `Err(AuthError::UserAlreadyExists)` - Name taken, ignoring case
    pub async fn register(&self, username: &str, password: &str) -> DomainResult<User> {
        let username = username.trim();

        let errors = validate_credentials(username, password);
        if !errors.is_empty() {
            let message = errors
                .errors()
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(DomainError::Validation { message });
        }

        if self.users.exists(username).await? {
            return Err(AuthError::UserAlreadyExists.into());
        }

        let password_hash = self.hash_password(password).await?;
        let user = self.users.create(User::new(username, password_hash)).await?;

        info!(username = %user.username, "User registered");
        Ok(user)
    }

    /// Check a username/password pair
    ///
    /// Unknown users and wrong passwords both yield `InvalidCredentials`.
    pub async fn authenticate(&self, username: &str, password: &str) -> DomainResult<User> {
        let user = match self.users.find_by_username(username.trim()).await? {
            Some(user) => user,
            None => {
                debug!(username = %username, reason = "unknown user", "Authentication failed");
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        if !self.verify_password(password, &user.password_hash).await? {
            debug!(username = %user.username, reason = "wrong password", "Authentication failed");
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }

    /// Whether `username` is registered, ignoring case
    pub async fn exists(&self, username: &str) -> DomainResult<bool> {
        self.users.exists(username.trim()).await
    }

    async fn hash_password(&self, password: &str) -> DomainResult<String> {
        let hasher = Arc::clone(&self.hasher);
        let password = password.to_owned();
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| DomainError::internal(format!("password hashing task failed: {}", e)))?
    }

    async fn verify_password(&self, password: &str, hash: &str) -> DomainResult<bool> {
        let hasher = Arc::clone(&self.hasher);
        let password = password.to_owned();
        let hash = hash.to_owned();
        tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|e| DomainError::internal(format!("password check task failed: {}", e)))?
    }
}
