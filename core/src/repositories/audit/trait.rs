//! Login audit repository trait.

use async_trait::async_trait;

use crate::domain::entities::audit::LoginAuditEntry;
use crate::errors::DomainError;

/// Append-only store for login audit entries
#[async_trait]
pub trait LoginAuditRepository: Send + Sync {
    /// Append one entry to the trail
    async fn append(&self, entry: &LoginAuditEntry) -> Result<(), DomainError>;

    /// Entries recorded for `username` (ASCII case-insensitive), oldest first
    async fn find_by_username(&self, username: &str) -> Result<Vec<LoginAuditEntry>, DomainError>;
}
