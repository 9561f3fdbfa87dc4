//! # Authkeep API
//!
//! HTTP boundary over the session service: registration, login, refresh
//! token rotation, logout and a protected sample resource.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod telemetry;

pub use app::{create_app, AppState};
