//! In-memory user repository for tests.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::user::{NewUser, User};
use crate::ports::UserRepository;

#[derive(Debug, Default)]
struct UserTable {
    rows: Vec<User>,
    last_id: i32,
}

impl UserTable {
    fn find(&self, username: &str) -> Option<&User> {
        self.rows.iter().find(|user| user.username == username)
    }
}

/// In-memory implementation of UserRepository.
///
/// Enforces username uniqueness the same way the `users_username_key`
/// constraint does, reporting `ErrorCode::UniqueViolation`.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    table: RwLock<UserTable>,
    fail_with: Option<String>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository whose every operation fails with a database error.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            fail_with: Some(message.into()),
            ..Self::default()
        }
    }

    /// Count of stored rows with `username`.
    pub async fn count_username(&self, username: &str) -> usize {
        self.table
            .read()
            .await
            .rows
            .iter()
            .filter(|user| user.username == username)
            .count()
    }

    fn check(&self) -> Result<(), DomainError> {
        match &self.fail_with {
            Some(message) => Err(DomainError::database(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: &NewUser) -> Result<UserId, DomainError> {
        self.check()?;
        let mut table = self.table.write().await;
        if table.find(&user.username).is_some() {
            return Err(DomainError::new(
                ErrorCode::UniqueViolation,
                format!("duplicate key value for username '{}'", user.username),
            )
            .with_detail("constraint", "users_username_key"));
        }
        table.last_id += 1;
        let id = UserId::new(table.last_id);
        table.rows.push(User {
            id,
            username: user.username.clone(),
            password_hash: user.password_hash.clone(),
        });
        Ok(id)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        self.check()?;
        Ok(self.table.read().await.find(username).cloned())
    }
}
