//! Storage module - whole-collection record stores
//!
//! Every store keeps one collection of records and exposes it through
//! [`RecordStore`]: each call takes the store's lock, loads the complete
//! collection, runs one closure against it and, when the closure changed
//! something, persists the complete collection before releasing the lock.
//! The repository implementations are written once against that trait and
//! instantiated for the JSON file and in-memory backends.

mod json_file;
mod memory;
mod record_store;
pub mod repositories;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use record_store::{Change, RecordStore};
pub use repositories::{
    InMemoryLoginAuditRepository, InMemoryRefreshTokenRepository, InMemoryUserRepository,
    JsonFileLoginAuditRepository, JsonFileRefreshTokenRepository, JsonFileUserRepository,
    LoginAuditRepositoryImpl, RefreshTokenRepositoryImpl, UserRepositoryImpl,
};
