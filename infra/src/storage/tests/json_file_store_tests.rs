//! Tests for the JSON file store

use tempfile::tempdir;

use crate::error::InfrastructureError;
use crate::storage::{Change, JsonFileStore, RecordStore};

#[tokio::test]
async fn test_open_creates_directories_and_empty_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("records.json");

    let store = JsonFileStore::<String>::open(&path).await.unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    assert_eq!(store.read(|records| records.len()).await.unwrap(), 0);
}

#[tokio::test]
async fn test_open_accepts_blank_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("records.json");
    std::fs::write(&path, "  \n").unwrap();

    let store = JsonFileStore::<String>::open(&path).await.unwrap();

    assert_eq!(store.read(|records| records.len()).await.unwrap(), 0);
}

#[tokio::test]
async fn test_open_rejects_corrupt_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("records.json");
    std::fs::write(&path, "{ not an array").unwrap();

    let result = JsonFileStore::<String>::open(&path).await;

    assert!(matches!(result, Err(InfrastructureError::Serialization(_))));
}

#[tokio::test]
async fn test_modified_update_is_persisted() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("records.json");
    let store = JsonFileStore::<String>::open(&path).await.unwrap();

    store
        .update(|records| {
            records.push("first".to_string());
            Change::Modified(())
        })
        .await
        .unwrap();

    let reopened = JsonFileStore::<String>::open(&path).await.unwrap();
    let records = reopened.read(|records| records.to_vec()).await.unwrap();
    assert_eq!(records, vec!["first".to_string()]);
    assert!(!dir.path().join("records.json.tmp").exists());
}

#[tokio::test]
async fn test_unchanged_update_is_not_persisted() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("records.json");
    let store = JsonFileStore::<String>::open(&path).await.unwrap();

    store
        .update(|records| {
            records.push("discarded".to_string());
            Change::Unchanged(())
        })
        .await
        .unwrap();

    assert_eq!(store.read(|records| records.len()).await.unwrap(), 0);
}

#[tokio::test]
async fn test_corruption_after_open_surfaces_on_next_call() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("records.json");
    let store = JsonFileStore::<String>::open(&path).await.unwrap();
    std::fs::write(&path, "garbage").unwrap();

    assert!(store.read(|records| records.len()).await.is_err());
}
