//! Record store abstraction shared by the storage backends

use async_trait::async_trait;

use crate::error::InfrastructureError;

/// Outcome of a mutation closure
///
/// `Modified` makes the store persist the collection before the call
/// returns. `Unchanged` skips the write.
#[derive(Debug)]
pub enum Change<R> {
    Modified(R),
    Unchanged(R),
}

impl<R> Change<R> {
    /// Pick the variant from a flag
    pub fn from_flag(modified: bool, value: R) -> Self {
        if modified {
            Change::Modified(value)
        } else {
            Change::Unchanged(value)
        }
    }

    pub(crate) fn into_parts(self) -> (R, bool) {
        match self {
            Change::Modified(value) => (value, true),
            Change::Unchanged(value) => (value, false),
        }
    }
}

/// A single collection of records behind one exclusive lock
///
/// The lock is held for exactly one call, from the load through the
/// optional write. Callers must not expect anything to stay locked between
/// two calls.
#[async_trait]
pub trait RecordStore<T>: Send + Sync
where
    T: Send + Sync + 'static,
{
    /// Run `f` against the current records
    async fn read<R, F>(&self, f: F) -> Result<R, InfrastructureError>
    where
        F: FnOnce(&[T]) -> R + Send,
        R: Send;

    /// Run `f` against the current records and persist them if it reports
    /// a modification
    async fn update<R, F>(&self, f: F) -> Result<R, InfrastructureError>
    where
        F: FnOnce(&mut Vec<T>) -> Change<R> + Send,
        R: Send;
}
