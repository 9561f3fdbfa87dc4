//! Utility helpers

pub mod validation;
