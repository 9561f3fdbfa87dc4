//! Tests for the login audit repositories

use tempfile::tempdir;

use ak_core::domain::entities::audit::{LoginAuditEntry, LoginContext};
use ak_core::repositories::LoginAuditRepository;

use crate::storage::{InMemoryLoginAuditRepository, JsonFileLoginAuditRepository};

#[tokio::test]
async fn test_entries_are_kept_in_order_per_user() {
    let repo = InMemoryLoginAuditRepository::new();
    let context = LoginContext::default();

    repo.append(&LoginAuditEntry::new("alice", &context, false))
        .await
        .unwrap();
    repo.append(&LoginAuditEntry::new("bob", &context, true))
        .await
        .unwrap();
    repo.append(&LoginAuditEntry::new("Alice", &context, true))
        .await
        .unwrap();

    let entries = repo.find_by_username("ALICE").await.unwrap();
    assert_eq!(entries.len(), 2);
    assert!(!entries[0].success);
    assert!(entries[1].success);
}

#[tokio::test]
async fn test_audit_file_keeps_client_metadata() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("login_audit.json");
    let context = LoginContext {
        ip: Some("10.0.0.7".to_string()),
        browser: Some("curl/8.0".to_string()),
        os: Some("Linux".to_string()),
        device: None,
    };
    let entry = LoginAuditEntry::new("alice", &context, true);

    JsonFileLoginAuditRepository::open(&path)
        .await
        .unwrap()
        .append(&entry)
        .await
        .unwrap();

    let reopened = JsonFileLoginAuditRepository::open(&path).await.unwrap();
    assert_eq!(reopened.find_by_username("alice").await.unwrap(), vec![entry]);
}
