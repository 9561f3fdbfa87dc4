//! Authentication route handlers
//!
//! This module contains the session endpoints:
//! - Registration
//! - Login, which sets the refresh token cookie
//! - Refresh token rotation
//! - Logout, which clears the cookie

pub mod cookie;
pub mod login;
pub mod logout;
pub mod refresh;
pub mod register;

pub use crate::app::AppState;
pub use login::login;
pub use logout::logout;
pub use refresh::refresh_token;
pub use register::register;
