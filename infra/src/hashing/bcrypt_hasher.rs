//! bcrypt implementation of the core `PasswordHasher` seam

use ak_core::errors::DomainError;
use ak_core::services::user::PasswordHasher;

use crate::error::InfrastructureError;

/// Salted bcrypt hashing with a configurable work factor
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    /// Create a hasher with the given cost
    ///
    /// bcrypt only accepts costs from 4 to 31.
    pub fn new(cost: u32) -> Result<Self, InfrastructureError> {
        if !(4..=31).contains(&cost) {
            return Err(InfrastructureError::Config(format!(
                "bcrypt cost must be between 4 and 31, got {}",
                cost
            )));
        }
        Ok(Self { cost })
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, password: &str) -> Result<String, DomainError> {
        bcrypt::hash(password, self.cost)
            .map_err(|e| DomainError::internal(format!("Password hashing failed: {}", e)))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, DomainError> {
        bcrypt::verify(password, hash)
            .map_err(|e| DomainError::internal(format!("Stored password hash is unusable: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = BcryptPasswordHasher::new(4).unwrap();

        let hash = hasher.hash("pw123").unwrap();

        assert_ne!(hash, "pw123");
        assert!(hasher.verify("pw123", &hash).unwrap());
        assert!(!hasher.verify("pw124", &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let hasher = BcryptPasswordHasher::new(4).unwrap();

        assert_ne!(hasher.hash("pw123").unwrap(), hasher.hash("pw123").unwrap());
    }

    #[test]
    fn test_malformed_hash_is_an_error() {
        let hasher = BcryptPasswordHasher::new(4).unwrap();

        assert!(hasher.verify("pw123", "not-a-bcrypt-hash").is_err());
    }

    #[test]
    fn test_cost_out_of_range() {
        assert!(BcryptPasswordHasher::new(3).is_err());
        assert!(BcryptPasswordHasher::new(32).is_err());
        assert_eq!(BcryptPasswordHasher::default().cost(), bcrypt::DEFAULT_COST);
    }
}
