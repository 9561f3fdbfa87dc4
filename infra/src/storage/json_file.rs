//! JSON file record store
//!
//! The file holds one JSON array with every record. A mutation rewrites the
//! whole file: serialize to a sibling `.tmp` file, fsync, then rename over
//! the original, so a crash mid-write leaves the previous version intact.

use std::ffi::OsString;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{debug, error};

use super::record_store::{Change, RecordStore};
use crate::error::InfrastructureError;

/// File-backed store for one collection of records
pub struct JsonFileStore<T> {
    path: PathBuf,
    lock: Mutex<()>,
    _records: PhantomData<fn() -> T>,
}

impl<T> JsonFileStore<T>
where
    T: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    /// Open the store at `path`
    ///
    /// Missing parent directories are created and a missing file is
    /// initialised to an empty array. An existing file must parse.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, InfrastructureError> {
        let path = path.into();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        if !fs::try_exists(&path).await? {
            write_atomically(&path, b"[]").await?;
            debug!(path = %path.display(), "Initialised empty record file");
        }

        let store = Self {
            path,
            lock: Mutex::new(()),
            _records: PhantomData,
        };
        let records = store.load().await?;
        debug!(path = %store.path.display(), records = records.len(), "Opened record file");

        Ok(store)
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Vec<T>, InfrastructureError> {
        let bytes = fs::read(&self.path).await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }
        serde_json::from_slice(&bytes).map_err(|e| {
            error!(path = %self.path.display(), error = %e, "Record file is corrupt");
            InfrastructureError::from(e)
        })
    }

    async fn persist(&self, records: &[T]) -> Result<(), InfrastructureError> {
        let data = serde_json::to_vec_pretty(records)?;
        write_atomically(&self.path, &data).await
    }
}

async fn write_atomically(path: &Path, data: &[u8]) -> Result<(), InfrastructureError> {
    let mut tmp = OsString::from(path.as_os_str());
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    let mut file = fs::File::create(&tmp).await?;
    file.write_all(data).await?;
    file.sync_all().await?;
    drop(file);

    fs::rename(&tmp, path).await?;
    Ok(())
}

#[async_trait]
impl<T> RecordStore<T> for JsonFileStore<T>
where
    T: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    async fn read<R, F>(&self, f: F) -> Result<R, InfrastructureError>
    where
        F: FnOnce(&[T]) -> R + Send,
        R: Send,
    {
        let _guard = self.lock.lock().await;
        let records = self.load().await?;
        Ok(f(&records[..]))
    }

    async fn update<R, F>(&self, f: F) -> Result<R, InfrastructureError>
    where
        F: FnOnce(&mut Vec<T>) -> Change<R> + Send,
        R: Send,
    {
        let _guard = self.lock.lock().await;
        let mut records = self.load().await?;
        let (value, modified) = f(&mut records).into_parts();
        if modified {
            self.persist(&records).await?;
        }
        Ok(value)
    }
}
