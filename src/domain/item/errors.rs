//! Item-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Errors raised by the item command and query handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemError {
    /// Submitted form data did not pass validation.
    Invalid(ValidationError),
    /// The store failed to execute the statement.
    Infrastructure(String),
}

impl ItemError {
    pub fn infrastructure(message: impl Into<String>) -> Self {
        ItemError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ItemError::Invalid(_) => ErrorCode::ValidationFailed,
            ItemError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ItemError::Invalid(err) => err.to_string(),
            ItemError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for ItemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ItemError {}

impl From<ValidationError> for ItemError {
    fn from(err: ValidationError) -> Self {
        ItemError::Invalid(err)
    }
}

impl From<DomainError> for ItemError {
    fn from(err: DomainError) -> Self {
        ItemError::Infrastructure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_validation_code() {
        let err: ItemError = ValidationError::empty_field("title").into();
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
    }

    #[test]
    fn domain_error_maps_to_infrastructure() {
        let err: ItemError = DomainError::database("connection refused").into();
        assert_eq!(err.code(), ErrorCode::DatabaseError);
        assert!(err.message().contains("connection refused"));
    }
}
