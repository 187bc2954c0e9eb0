//! Password hashing port.
//!
//! One-way, salted, deliberately slow hashing of login passwords.
//! Implementations are synchronous; callers run them off the async executor.

use thiserror::Error;

/// Errors from hashing or verification.
///
/// A wrong password is not an error; `verify` returns `Ok(false)` for it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashError {
    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("Stored password hash is malformed: {0}")]
    MalformedHash(String),
}

/// Hashes and verifies passwords.
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password with a fresh salt.
    fn hash(&self, plaintext: &str) -> Result<String, HashError>;

    /// Check a candidate against a stored hash.
    ///
    /// # Errors
    ///
    /// - `MalformedHash` if `hash` was not produced by this scheme
    fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, HashError>;
}
