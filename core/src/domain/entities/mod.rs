//! Domain entities representing core business objects.

pub mod audit;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use audit::{LoginAuditEntry, LoginContext};
pub use token::{Claims, RefreshToken, TokenPair, JWT_AUDIENCE, JWT_ISSUER};
pub use user::User;
