//! CORS middleware configuration for cross-origin requests.
//!
//! The refresh token travels in a cookie, so every configuration supports
//! credentials. Development accepts any origin; other environments only
//! the configured ones.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use tracing::info;

use ak_shared::config::Environment;

/// Preflight cache lifetime in seconds
const MAX_AGE: usize = 3600;

/// Creates a CORS middleware instance for the given environment.
pub fn create_cors(environment: Environment, allowed_origins: &[String]) -> Cors {
    if environment.is_development() {
        create_development_cors()
    } else {
        create_restricted_cors(allowed_origins)
    }
}

fn base_cors() -> Cors {
    Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::HeaderName::from_static("x-browser"),
            header::HeaderName::from_static("x-os"),
            header::HeaderName::from_static("x-device"),
        ])
        .supports_credentials()
        .max_age(MAX_AGE)
}

fn create_development_cors() -> Cors {
    info!("Configuring permissive CORS for development");
    base_cors().allow_any_origin()
}

fn create_restricted_cors(allowed_origins: &[String]) -> Cors {
    let mut cors = base_cors();
    for origin in allowed_origins {
        info!(origin = %origin, "Adding allowed origin");
        cors = cors.allowed_origin(origin);
    }
    cors
}
