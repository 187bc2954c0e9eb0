//! Session and credential configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::error::ValidationError;

/// Minimum secret length accepted by the signed cookie jar.
pub const MIN_SECRET_BYTES: usize = 64;

const MAX_TTL_HOURS: u64 = 24 * 365;

/// Where session records are kept
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SessionBackend {
    /// Process memory; sessions are lost on restart
    #[default]
    Memory,
    /// Shared Redis instance (needs `redis.url`)
    Redis,
}

/// Session configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Cookie signing secret
    pub secret: Secret<String>,

    /// Name of the session cookie
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,

    /// Session lifetime in hours
    #[serde(default = "default_ttl_hours")]
    pub ttl_hours: u64,

    /// Mark the cookie `Secure` (HTTPS only)
    #[serde(default)]
    pub secure_cookie: bool,

    /// Session store backend
    #[serde(default)]
    pub backend: SessionBackend,

    /// bcrypt cost factor for password hashes
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

impl SessionConfig {
    /// Session lifetime as a chrono Duration
    pub fn ttl(&self) -> chrono::Duration {
        chrono::Duration::hours(self.ttl_hours as i64)
    }

    /// Validate session configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let secret = self.secret.expose_secret();
        if secret.is_empty() {
            return Err(ValidationError::MissingRequired("SESSION_SECRET"));
        }
        if secret.len() < MIN_SECRET_BYTES {
            return Err(ValidationError::SessionSecretTooShort {
                min: MIN_SECRET_BYTES,
            });
        }
        if self.cookie_name.trim().is_empty() {
            return Err(ValidationError::EmptyCookieName);
        }
        if self.ttl_hours == 0 || self.ttl_hours > MAX_TTL_HOURS {
            return Err(ValidationError::InvalidSessionTtl { max: MAX_TTL_HOURS });
        }
        if !(4..=31).contains(&self.bcrypt_cost) {
            return Err(ValidationError::InvalidBcryptCost(self.bcrypt_cost));
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            secret: Secret::new(String::new()),
            cookie_name: default_cookie_name(),
            ttl_hours: default_ttl_hours(),
            secure_cookie: false,
            backend: SessionBackend::default(),
            bcrypt_cost: default_bcrypt_cost(),
        }
    }
}

fn default_cookie_name() -> String {
    "permalist.sid".to_string()
}

fn default_ttl_hours() -> u64 {
    24
}

fn default_bcrypt_cost() -> u32 {
    10
}
