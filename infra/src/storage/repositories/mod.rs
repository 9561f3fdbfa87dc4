//! Repository implementations over the record stores

mod audit_repository_impl;
mod token_repository_impl;
mod user_repository_impl;

use ak_core::domain::entities::{LoginAuditEntry, RefreshToken, User};

use super::{JsonFileStore, MemoryStore};

pub use audit_repository_impl::LoginAuditRepositoryImpl;
pub use token_repository_impl::RefreshTokenRepositoryImpl;
pub use user_repository_impl::UserRepositoryImpl;

/// Refresh tokens in a JSON file
pub type JsonFileRefreshTokenRepository = RefreshTokenRepositoryImpl<JsonFileStore<RefreshToken>>;
/// Users in a JSON file
pub type JsonFileUserRepository = UserRepositoryImpl<JsonFileStore<User>>;
/// Login audit trail in a JSON file
pub type JsonFileLoginAuditRepository = LoginAuditRepositoryImpl<JsonFileStore<LoginAuditEntry>>;

pub type InMemoryRefreshTokenRepository = RefreshTokenRepositoryImpl<MemoryStore<RefreshToken>>;
pub type InMemoryUserRepository = UserRepositoryImpl<MemoryStore<User>>;
pub type InMemoryLoginAuditRepository = LoginAuditRepositoryImpl<MemoryStore<LoginAuditEntry>>;
