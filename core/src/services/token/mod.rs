//! Token service module
//!
//! This module handles all token-related operations including:
//! - HS256 access token issuance and verification
//! - Refresh token creation, rotation and revocation
//! - Background cleanup of expired refresh tokens

mod cleanup;
mod config;
mod refresh;
mod signer;

#[cfg(test)]
mod tests;

pub use cleanup::{CleanupResult, TokenCleanupConfig, TokenCleanupService};
pub use config::{RefreshTokenConfig, TokenSignerConfig};
pub use refresh::{generate_refresh_token, RefreshTokenService};
pub use signer::TokenSigner;
