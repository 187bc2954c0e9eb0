//! Authentication error types.

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Errors raised by registration and login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Username or password was not supplied.
    MissingCredentials(ValidationError),
    /// Registration hit the unique constraint on `username`.
    UsernameTaken,
    /// No user with the submitted username.
    UserNotFound,
    /// The password did not match the stored hash.
    InvalidPassword,
    /// Store, hasher or session backend failure.
    Infrastructure(String),
}

impl AuthError {
    pub fn infrastructure(message: impl Into<String>) -> Self {
        AuthError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AuthError::MissingCredentials(_) => ErrorCode::ValidationFailed,
            AuthError::UsernameTaken => ErrorCode::UniqueViolation,
            AuthError::UserNotFound => ErrorCode::UserNotFound,
            AuthError::InvalidPassword => ErrorCode::ValidationFailed,
            AuthError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            AuthError::MissingCredentials(err) => err.to_string(),
            AuthError::UsernameTaken => "Username already taken".to_string(),
            AuthError::UserNotFound => "User not found".to_string(),
            AuthError::InvalidPassword => "Password mismatch".to_string(),
            AuthError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AuthError {}

impl From<ValidationError> for AuthError {
    fn from(err: ValidationError) -> Self {
        AuthError::MissingCredentials(err)
    }
}

impl From<DomainError> for AuthError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::UniqueViolation => AuthError::UsernameTaken,
            ErrorCode::UserNotFound => AuthError::UserNotFound,
            _ => AuthError::Infrastructure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_violation_becomes_username_taken() {
        let err: AuthError = DomainError::new(ErrorCode::UniqueViolation, "dup").into();
        assert_eq!(err, AuthError::UsernameTaken);
    }

    #[test]
    fn database_error_becomes_infrastructure() {
        let err: AuthError = DomainError::database("timeout").into();
        assert!(matches!(err, AuthError::Infrastructure(_)));
        assert_eq!(err.code(), ErrorCode::InternalError);
    }

    #[test]
    fn missing_credentials_keep_field_name() {
        let err: AuthError = ValidationError::empty_field("password").into();
        assert!(err.message().contains("password"));
    }
}
