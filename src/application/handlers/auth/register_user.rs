//! RegisterUserHandler - Command handler for creating accounts.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::user::{AuthError, Credentials, NewUser};
use crate::ports::{PasswordHasher, UserRepository};

/// Command to register a new account.
#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    pub username: String,
    pub password: String,
}

/// Handler for registration.
///
/// Validates the submitted credentials, hashes the password on the blocking
/// pool, then inserts the user. The store's unique constraint decides
/// whether a username is taken.
pub struct RegisterUserHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl RegisterUserHandler {
    pub fn new(users: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { users, hasher }
    }

    pub async fn handle(&self, cmd: RegisterUserCommand) -> Result<UserId, AuthError> {
        let credentials = Credentials::new(cmd.username, cmd.password)?;

        let hasher = Arc::clone(&self.hasher);
        let password = credentials.password().to_string();
        let password_hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AuthError::infrastructure(format!("hash task failed: {}", e)))?
            .map_err(|e| AuthError::infrastructure(e.to_string()))?;

        let user_id = self
            .users
            .insert(&NewUser {
                username: credentials.username().to_string(),
                password_hash,
            })
            .await?;

        tracing::info!(user_id = %user_id, "user registered");
        Ok(user_id)
    }
}
