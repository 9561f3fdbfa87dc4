//! Business services containing the token and session logic.

pub mod audit;
pub mod session;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use audit::{LoginAuditService, LoginAuditServiceConfig};
pub use session::SessionService;
pub use token::{
    generate_refresh_token, CleanupResult, RefreshTokenConfig, RefreshTokenService,
    TokenCleanupConfig, TokenCleanupService, TokenSigner, TokenSignerConfig,
};
pub use user::{PasswordHasher, UserService};
