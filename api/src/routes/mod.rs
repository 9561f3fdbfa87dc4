//! Route handlers

pub mod auth;
pub mod health;
pub mod hello;
