//! User repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::{NewUser, User};

/// Repository port for registered users.
///
/// Implementations must enforce username uniqueness and report a collision
/// as `ErrorCode::UniqueViolation`, separate from other failures.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user and return the new id.
    ///
    /// # Errors
    ///
    /// - `UniqueViolation` if the username is already registered
    /// - `DatabaseError` on any other persistence failure
    async fn insert(&self, user: &NewUser) -> Result<UserId, DomainError>;

    /// Look up a user by exact username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_repository_is_object_safe() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn UserRepository>();
    }
}
