//! Tests for token services

mod signer_tests;

use std::sync::Arc;

use chrono::Duration;

use super::{TokenSigner, TokenSignerConfig};

pub(crate) const TEST_SECRET: &str = "test-secret-that-is-at-least-32-bytes-long";

pub(crate) fn create_test_signer() -> Arc<TokenSigner> {
    let config = TokenSignerConfig::new(TEST_SECRET, Duration::minutes(15));
    Arc::new(TokenSigner::new(config).expect("Failed to create token signer"))
}
