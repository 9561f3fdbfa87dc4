//! Service assembly
//!
//! Builds the session facade and the expired token sweep from configuration.
//! Both share one refresh token store and one signer.

use std::sync::Arc;

use tracing::info;

use ak_core::repositories::{LoginAuditRepository, RefreshTokenRepository, UserRepository};
use ak_core::services::audit::{LoginAuditService, LoginAuditServiceConfig};
use ak_core::services::session::SessionService;
use ak_core::services::token::{
    RefreshTokenConfig, RefreshTokenService, TokenCleanupConfig, TokenCleanupService,
    TokenSigner, TokenSignerConfig,
};
use ak_core::services::user::UserService;
use ak_shared::config::{AppConfig, AuthConfig, StorageConfig};

use crate::error::InfrastructureError;
use crate::hashing::BcryptPasswordHasher;
use crate::storage::{
    InMemoryLoginAuditRepository, InMemoryRefreshTokenRepository, InMemoryUserRepository,
    JsonFileLoginAuditRepository, JsonFileRefreshTokenRepository, JsonFileUserRepository,
};

/// Wired services over one set of repositories
pub struct Infrastructure<U, T, A>
where
    U: UserRepository + 'static,
    T: RefreshTokenRepository + 'static,
    A: LoginAuditRepository + 'static,
{
    pub session: Arc<SessionService<U, T, BcryptPasswordHasher, A>>,
    pub cleanup: Arc<TokenCleanupService<T>>,
}

/// Services over the JSON record files
pub type FileInfrastructure =
    Infrastructure<JsonFileUserRepository, JsonFileRefreshTokenRepository, JsonFileLoginAuditRepository>;

/// Services over volatile stores
pub type InMemoryInfrastructure =
    Infrastructure<InMemoryUserRepository, InMemoryRefreshTokenRepository, InMemoryLoginAuditRepository>;

impl FileInfrastructure {
    /// Open the record files named in `config` and wire the services
    pub async fn from_config(config: &AppConfig) -> Result<Self, InfrastructureError> {
        let storage = &config.storage;
        let users = Arc::new(JsonFileUserRepository::open(&storage.users_file).await?);
        let tokens = Arc::new(JsonFileRefreshTokenRepository::open(&storage.refresh_tokens_file).await?);
        let audit = Arc::new(JsonFileLoginAuditRepository::open(&storage.login_audit_file).await?);

        info!(
            users_file = %storage.users_file.display(),
            refresh_tokens_file = %storage.refresh_tokens_file.display(),
            "Opened record files"
        );

        Self::assemble(users, tokens, audit, &config.auth, storage)
    }
}

impl InMemoryInfrastructure {
    /// Wire the services over empty in-memory stores
    pub fn in_memory(auth: &AuthConfig) -> Result<Self, InfrastructureError> {
        Self::assemble(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryRefreshTokenRepository::new()),
            Arc::new(InMemoryLoginAuditRepository::new()),
            auth,
            &StorageConfig::default(),
        )
    }
}

impl<U, T, A> Infrastructure<U, T, A>
where
    U: UserRepository + 'static,
    T: RefreshTokenRepository + 'static,
    A: LoginAuditRepository + 'static,
{
    /// Wire the services over the given repositories
    pub fn assemble(
        users: Arc<U>,
        tokens: Arc<T>,
        audit: Arc<A>,
        auth: &AuthConfig,
        storage: &StorageConfig,
    ) -> Result<Self, InfrastructureError> {
        let signer = Arc::new(
            TokenSigner::new(TokenSignerConfig::from(&auth.jwt))
                .map_err(|e| InfrastructureError::Config(e.to_string()))?,
        );
        let refresh_tokens = RefreshTokenService::new(
            tokens.clone(),
            users.clone(),
            signer.clone(),
            RefreshTokenConfig::from(&auth.jwt),
        )
        .map_err(|e| InfrastructureError::Config(e.to_string()))?;

        let hasher = BcryptPasswordHasher::new(auth.password_hash_cost)?;
        let session = SessionService::new(
            UserService::new(users, hasher),
            refresh_tokens,
            signer,
            LoginAuditService::new(audit, LoginAuditServiceConfig::default()),
        );

        let cleanup = TokenCleanupService::new(
            tokens,
            TokenCleanupConfig {
                interval_seconds: storage.cleanup_interval_seconds,
                enabled: storage.cleanup_enabled,
            },
        );

        Ok(Self {
            session: Arc::new(session),
            cleanup: Arc::new(cleanup),
        })
    }
}
