//! Password hashing seam

use crate::errors::DomainError;

/// Hashes and checks passwords
///
/// The hashing policy lives entirely behind this trait; the domain only
/// stores and compares the opaque hash strings it produces. Both methods
/// may be slow on purpose; `UserService` calls them on the blocking pool.
pub trait PasswordHasher: Send + Sync + 'static {
    /// Produce a salted hash of `password`
    fn hash(&self, password: &str) -> Result<String, DomainError>;

    /// Check `password` against a hash produced by `hash`
    ///
    /// A malformed hash is an error, a wrong password is `Ok(false)`.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, DomainError>;
}

/// Reversible stand-in hasher for tests
#[cfg(test)]
#[derive(Debug, Default, Clone, Copy)]
pub struct MockPasswordHasher;

#[cfg(test)]
impl PasswordHasher for MockPasswordHasher {
    fn hash(&self, password: &str) -> Result<String, DomainError> {
        Ok(format!("hashed:{}", password))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, DomainError> {
        match hash.strip_prefix("hashed:") {
            Some(plain) => Ok(plain == password),
            None => Err(DomainError::internal("malformed hash")),
        }
    }
}
