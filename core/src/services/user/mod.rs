//! User registration and credential verification.

mod hasher;
mod service;

#[cfg(test)]
mod tests;

pub use hasher::PasswordHasher;
pub use service::UserService;

#[cfg(test)]
pub use hasher::MockPasswordHasher;
