//! Login audit service.
//!
//! Records every login attempt with the client metadata captured at the
//! boundary. Audit failures are logged and swallowed: an unwritable trail
//! never blocks authentication.

use std::sync::Arc;

use tokio::task;
use tracing::warn;

use crate::domain::entities::audit::{LoginAuditEntry, LoginContext};
use crate::repositories::LoginAuditRepository;

/// Configuration for the login audit service
#[derive(Debug, Clone)]
pub struct LoginAuditServiceConfig {
    /// Whether entries are recorded at all
    pub enabled: bool,
    /// Whether to run audit writes asynchronously
    pub async_writes: bool,
}

impl Default for LoginAuditServiceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            async_writes: false,
        }
    }
}

/// Service appending login attempts to the audit trail
pub struct LoginAuditService<R>
where
    R: LoginAuditRepository,
{
    repository: Arc<R>,
    config: LoginAuditServiceConfig,
}

impl<R> LoginAuditService<R>
where
    R: LoginAuditRepository + 'static,
{
    /// Create a new login audit service
    pub fn new(repository: Arc<R>, config: LoginAuditServiceConfig) -> Self {
        Self { repository, config }
    }

    /// Record a login attempt
    ///
    /// # Arguments
    /// * `username` - Name the client tried to log in as
    /// * `context` - Client metadata from the request
    /// * `success` - Whether the credentials were accepted
    pub async fn record_login(&self, username: &str, context: &LoginContext, success: bool) {
        if !self.config.enabled {
            return;
        }
        self.write_entry(LoginAuditEntry::new(username, context, success))
            .await;
    }

    /// Write an entry to the repository
    ///
    /// If async_writes is enabled, the write happens in a background task
    /// to avoid blocking the main flow.
    async fn write_entry(&self, entry: LoginAuditEntry) {
        if self.config.async_writes {
            let repository = Arc::clone(&self.repository);
            task::spawn(async move {
                if let Err(e) = repository.append(&entry).await {
                    warn!(username = %entry.username, error = %e, "Failed to write login audit entry");
                }
            });
        } else if let Err(e) = self.repository.append(&entry).await {
            warn!(username = %entry.username, error = %e, "Failed to write login audit entry");
        }
    }
}
