//! bcrypt implementation of the PasswordHasher port.

use crate::ports::{HashError, PasswordHasher};

/// Cost used when none is configured.
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// bcrypt password hasher with a fixed cost factor.
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    /// Creates a hasher using `cost` rounds (bcrypt accepts 4..=31).
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_BCRYPT_COST)
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, plaintext: &str) -> Result<String, HashError> {
        bcrypt::hash(plaintext, self.cost).map_err(|e| HashError::Hashing(e.to_string()))
    }

    fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, HashError> {
        bcrypt::verify(plaintext, hash).map_err(|e| HashError::MalformedHash(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // Minimum bcrypt cost keeps the suite fast.
    fn hasher() -> BcryptPasswordHasher {
        BcryptPasswordHasher::new(4)
    }

    #[test]
    fn default_cost_is_ten() {
        assert_eq!(BcryptPasswordHasher::default().cost(), 10);
    }

    #[test]
    fn hash_verifies_same_password() {
        let hash = hasher().hash("pw1").unwrap();
        assert!(hasher().verify("pw1", &hash).unwrap());
    }

    #[test]
    fn hash_rejects_other_password() {
        let hash = hasher().hash("pw1").unwrap();
        assert!(!hasher().verify("wrong", &hash).unwrap());
    }

    #[test]
    fn hashes_are_salted() {
        let a = hasher().hash("pw1").unwrap();
        let b = hasher().hash("pw1").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn malformed_hash_is_an_error() {
        let result = hasher().verify("pw1", "not-a-bcrypt-hash");
        assert!(matches!(result, Err(HashError::MalformedHash(_))));
    }

    #[test]
    fn invalid_cost_fails_to_hash() {
        let result = BcryptPasswordHasher::new(2).hash("pw1");
        assert!(matches!(result, Err(HashError::Hashing(_))));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn hash_never_equals_plaintext_and_verifies(p in "[ -~]{1,40}") {
            let hash = hasher().hash(&p).unwrap();
            prop_assert_ne!(&hash, &p);
            prop_assert!(hasher().verify(&p, &hash).unwrap());
        }

        #[test]
        fn different_password_does_not_verify(p in "[a-z]{1,20}", q in "[a-z]{1,20}") {
            prop_assume!(p != q);
            let hash = hasher().hash(&p).unwrap();
            prop_assert!(!hasher().verify(&q, &hash).unwrap());
        }
    }
}
