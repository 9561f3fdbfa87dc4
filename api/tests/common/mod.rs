//! Shared setup for the API integration tests

use actix_web::web;

use ak_api::AppState;
use ak_infra::hashing::BcryptPasswordHasher;
use ak_infra::{
    InMemoryInfrastructure, InMemoryLoginAuditRepository, InMemoryRefreshTokenRepository,
    InMemoryUserRepository,
};
use ak_shared::AppConfig;

pub const SECRET: &str = "integration-test-secret-with-32-bytes-plus";
pub const REFRESH_SECONDS: i64 = 604_800;

pub type TestState = AppState<
    InMemoryUserRepository,
    InMemoryRefreshTokenRepository,
    BcryptPasswordHasher,
    InMemoryLoginAuditRepository,
>;

pub fn test_config() -> AppConfig {
    AppConfig::from_lookup(|key: &str| match key {
        "JWT_SECRET" => Some(SECRET.to_string()),
        "JWT_ACCESS_TOKEN_EXPIRY" => Some("900".to_string()),
        "JWT_REFRESH_TOKEN_EXPIRY" => Some(REFRESH_SECONDS.to_string()),
        "BCRYPT_COST" => Some("4".to_string()),
        _ => None,
    })
    .expect("test configuration should load")
}

/// Fresh application state over empty in-memory stores
pub fn test_state() -> web::Data<TestState> {
    let config = test_config();
    let infrastructure =
        InMemoryInfrastructure::in_memory(&config.auth).expect("infrastructure should assemble");
    web::Data::new(AppState::new(infrastructure.session, &config))
}
