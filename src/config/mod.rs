//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `PERMALIST` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use permalist::config::AppConfig;
//!
//! let config = AppConfig::load()?;
//! config.validate()?;
//!
//! println!("Server running on {}", config.server.socket_addr()?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod database;
mod error;
mod features;
mod redis;
mod server;
mod session;

pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use redis::RedisConfig;
pub use server::{Environment, ServerConfig};
pub use session::{SessionBackend, SessionConfig, MIN_SECRET_BYTES};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration (PostgreSQL connection)
    pub database: DatabaseConfig,

    /// Session cookie, store and password hashing
    pub session: SessionConfig,

    /// Redis configuration (session backend)
    #[serde(default)]
    pub redis: RedisConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PERMALIST` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `PERMALIST__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `PERMALIST__DATABASE__URL=...` -> `database.url = ...`
    /// - `PERMALIST__SESSION__SECRET=...` -> `session.secret = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Required environment variables are missing
    /// - Values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PERMALIST")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid, or
    /// if the Redis session backend is selected without a Redis URL.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.session.validate()?;
        self.redis.validate()?;
        if self.session.backend == SessionBackend::Redis && self.redis.url.is_none() {
            return Err(ValidationError::MissingRequired("REDIS_URL"));
        }
        Ok(())
    }
}
