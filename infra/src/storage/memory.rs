//! In-memory record store for tests and throwaway runs

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::record_store::{Change, RecordStore};
use crate::error::InfrastructureError;

/// Volatile store with the same locking contract as the file store
pub struct MemoryStore<T> {
    records: Mutex<Vec<T>>,
}

impl<T> MemoryStore<T> {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T> RecordStore<T> for MemoryStore<T>
where
    T: Send + Sync + 'static,
{
    async fn read<R, F>(&self, f: F) -> Result<R, InfrastructureError>
    where
        F: FnOnce(&[T]) -> R + Send,
        R: Send,
    {
        let records = self.records.lock().await;
        Ok(f(&records[..]))
    }

    async fn update<R, F>(&self, f: F) -> Result<R, InfrastructureError>
    where
        F: FnOnce(&mut Vec<T>) -> Change<R> + Send,
        R: Send,
    {
        let mut records = self.records.lock().await;
        let (value, _) = f(&mut *records).into_parts();
        Ok(value)
    }
}
