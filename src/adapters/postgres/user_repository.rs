//! PostgreSQL implementation of UserRepository.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::{NewUser, User};
use crate::ports::UserRepository;

use super::map_sqlx_error;

/// PostgreSQL implementation of UserRepository.
///
/// Uniqueness of `username` comes from the `users_username_key` constraint.
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Creates a new PostgresUserRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn insert(&self, user: &NewUser) -> Result<UserId, DomainError> {
        let (id,): (i32,) =
            sqlx::query_as("INSERT INTO users (username, password) VALUES ($1, $2) RETURNING id")
                .bind(&user.username)
                .bind(&user.password_hash)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| map_sqlx_error("Failed to insert user", e))?;

        Ok(UserId::new(id))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let row: Option<(i32, String, String)> =
            sqlx::query_as("SELECT id, username, password FROM users WHERE username = $1")
                .bind(username)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| map_sqlx_error("Failed to fetch user", e))?;

        Ok(row.map(|(id, username, password_hash)| User {
            id: UserId::new(id),
            username,
            password_hash,
        }))
    }
}
