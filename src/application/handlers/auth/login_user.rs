//! LoginUserHandler - Command handler for checking credentials.

use std::sync::Arc;

use crate::domain::user::{AuthError, User};
use crate::ports::{PasswordHasher, UserRepository};

/// Command to authenticate a username/password pair.
#[derive(Debug, Clone)]
pub struct LoginUserCommand {
    pub username: String,
    pub password: String,
}

/// Handler for login.
///
/// Returns the matching user; writing the session is left to the caller.
pub struct LoginUserHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl LoginUserHandler {
    pub fn new(users: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { users, hasher }
    }

    /// # Errors
    ///
    /// - `UserNotFound` if no user has that username
    /// - `InvalidPassword` if the hash does not match
    /// - `Infrastructure` on store or hasher failure
    pub async fn handle(&self, cmd: LoginUserCommand) -> Result<User, AuthError> {
        let user = self
            .users
            .find_by_username(&cmd.username)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let hasher = Arc::clone(&self.hasher);
        let password = cmd.password;
        let hash = user.password_hash.clone();
        let matches = tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|e| AuthError::infrastructure(format!("verify task failed: {}", e)))?
            .map_err(|e| AuthError::infrastructure(e.to_string()))?;

        if !matches {
            return Err(AuthError::InvalidPassword);
        }

        Ok(user)
    }
}
