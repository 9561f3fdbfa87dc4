//! Mock implementation of UserRepository for testing

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError};

use super::r#trait::UserRepository;

/// Mock user repository for testing
pub struct MockUserRepository {
    users: Arc<Mutex<Vec<User>>>,
    fail_storage: AtomicBool,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(Mutex::new(Vec::new())),
            fail_storage: AtomicBool::new(false),
        }
    }

    /// Create a repository that already holds `user`
    pub fn with_existing_user(user: User) -> Self {
        Self {
            users: Arc::new(Mutex::new(vec![user])),
            fail_storage: AtomicBool::new(false),
        }
    }

    /// Remove a user; only tests do this, the services never delete users
    pub async fn remove(&self, username: &str) {
        self.users.lock().await.retain(|u| !u.has_username(username));
    }

    pub fn set_fail_storage(&self, fail: bool) {
        self.fail_storage.store(fail, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.fail_storage.load(Ordering::SeqCst) {
            Err(DomainError::storage("mock storage failure"))
        } else {
            Ok(())
        }
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        self.check()?;
        let users = self.users.lock().await;
        Ok(users.iter().find(|u| u.has_username(username)).cloned())
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        self.check()?;
        let mut users = self.users.lock().await;
        if users.iter().any(|u| u.has_username(&user.username)) {
            return Err(AuthError::UserAlreadyExists.into());
        }
        users.push(user.clone());
        Ok(user)
    }
}
