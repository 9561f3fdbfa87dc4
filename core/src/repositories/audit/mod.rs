//! Login audit repository module.

mod r#trait;
pub use r#trait::LoginAuditRepository;

#[cfg(test)]
mod mock;
#[cfg(test)]
pub use mock::MockLoginAuditRepository;
