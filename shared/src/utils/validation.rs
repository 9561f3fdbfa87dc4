//! Credential validation rules shared by the domain and the HTTP layer

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;

pub const USERNAME_MIN_LENGTH: usize = 3;
pub const USERNAME_MAX_LENGTH: usize = 50;
pub const PASSWORD_MIN_LENGTH: usize = 4;
pub const PASSWORD_MAX_LENGTH: usize = 128;

static USERNAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.\-]+$").expect("static username pattern"));

/// Validation error with field-level details
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
    pub code: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code: code.into(),
        }
    }
}

/// Collection of validation errors
#[derive(Debug, Default)]
pub struct FieldErrors {
    errors: Vec<FieldError>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>, code: impl Into<String>) {
        self.errors.push(FieldError::new(field, message, code));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn to_field_errors(&self) -> HashMap<String, Vec<String>> {
        let mut field_errors: HashMap<String, Vec<String>> = HashMap::new();
        for error in &self.errors {
            field_errors
                .entry(error.field.clone())
                .or_default()
                .push(error.message.clone());
        }
        field_errors
    }
}

/// Common validation functions
pub mod validators {
    use super::*;

    /// Check if a string is not empty
    pub fn not_empty(value: &str) -> bool {
        !value.trim().is_empty()
    }

    /// Check if a string's character count is within bounds
    pub fn length_between(value: &str, min: usize, max: usize) -> bool {
        let len = value.chars().count();
        len >= min && len <= max
    }

    /// Usernames are 3 to 50 characters of letters, digits, `_`, `.` or `-`
    pub fn is_valid_username(username: &str) -> bool {
        length_between(username, USERNAME_MIN_LENGTH, USERNAME_MAX_LENGTH)
            && USERNAME_PATTERN.is_match(username)
    }

    pub fn is_valid_password(password: &str) -> bool {
        length_between(password, PASSWORD_MIN_LENGTH, PASSWORD_MAX_LENGTH)
    }
}

/// Check a username/password pair, collecting every problem found
pub fn validate_credentials(username: &str, password: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if !validators::not_empty(username) {
        errors.add_error("username", "Username is required", "required");
    } else if !validators::is_valid_username(username) {
        errors.add_error(
            "username",
            format!(
                "Username must be {}-{} characters of letters, digits, '_', '.' or '-'",
                USERNAME_MIN_LENGTH, USERNAME_MAX_LENGTH
            ),
            "invalid_format",
        );
    }

    if password.is_empty() {
        errors.add_error("password", "Password is required", "required");
    } else if !validators::is_valid_password(password) {
        errors.add_error(
            "password",
            format!(
                "Password must be {}-{} characters",
                PASSWORD_MIN_LENGTH, PASSWORD_MAX_LENGTH
            ),
            "invalid_length",
        );
    }

    errors
}
