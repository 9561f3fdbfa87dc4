//! # Infrastructure Layer
//!
//! Concrete storage and hashing behind the Authkeep core traits.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Storage**: whole-collection record stores (JSON file, in-memory) and
//!   the repository implementations built on them
//! - **Hashing**: bcrypt password hasher
//! - **Bootstrap**: wiring of the session and cleanup services from config

// Re-export core types for convenience
pub use ak_core::errors::*;

/// Record stores and repository implementations
pub mod storage;

/// Password hashing
pub mod hashing;

/// Service assembly from configuration
pub mod bootstrap;

mod error;

pub use bootstrap::{FileInfrastructure, Infrastructure, InMemoryInfrastructure};
pub use error::InfrastructureError;
pub use hashing::BcryptPasswordHasher;
pub use storage::{
    InMemoryLoginAuditRepository, InMemoryRefreshTokenRepository, InMemoryUserRepository,
    JsonFileLoginAuditRepository, JsonFileRefreshTokenRepository, JsonFileStore,
    JsonFileUserRepository, MemoryStore, RecordStore,
};
