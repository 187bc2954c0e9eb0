//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid connection timeout")]
    InvalidTimeout,

    #[error("Invalid listen address: {0}")]
    InvalidSocketAddr(String),

    #[error("Invalid database URL format")]
    InvalidDatabaseUrl,

    #[error("Invalid Redis URL format")]
    InvalidRedisUrl,

    #[error("Pool min_connections exceeds max_connections")]
    InvalidPoolSize,

    #[error("Pool size exceeds maximum allowed (100)")]
    PoolSizeTooLarge,

    #[error("Session secret must be at least {min} bytes")]
    SessionSecretTooShort { min: usize },

    #[error("Session cookie name must not be empty")]
    EmptyCookieName,

    #[error("Session TTL must be between 1 and {max} hours")]
    InvalidSessionTtl { max: u64 },

    #[error("bcrypt cost {0} is outside 4..=31")]
    InvalidBcryptCost(u32),
}
