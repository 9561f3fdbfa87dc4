//! Mock implementation of LoginAuditRepository for testing

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

use super::LoginAuditRepository;
use crate::domain::entities::audit::LoginAuditEntry;
use crate::errors::DomainError;

/// Mock audit repository keeping entries in memory
#[derive(Default)]
pub struct MockLoginAuditRepository {
    entries: Arc<Mutex<Vec<LoginAuditEntry>>>,
    should_fail: AtomicBool,
}

impl MockLoginAuditRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository whose writes always fail
    pub fn failing() -> Self {
        let repo = Self::default();
        repo.should_fail.store(true, Ordering::SeqCst);
        repo
    }

    pub async fn entries(&self) -> Vec<LoginAuditEntry> {
        self.entries.lock().await.clone()
    }
}

#[async_trait]
impl LoginAuditRepository for MockLoginAuditRepository {
    async fn append(&self, entry: &LoginAuditEntry) -> Result<(), DomainError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::storage("mock audit failure"));
        }
        self.entries.lock().await.push(entry.clone());
        Ok(())
    }

    async fn find_by_username(&self, username: &str) -> Result<Vec<LoginAuditEntry>, DomainError> {
        let entries = self.entries.lock().await;
        Ok(entries
            .iter()
            .filter(|e| e.username.eq_ignore_ascii_case(username))
            .cloned()
            .collect())
    }
}
