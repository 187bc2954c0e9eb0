//! Session store port.
//!
//! Maps opaque session tokens to `SessionRecord`s. Backends may be
//! in-process (tests, single server) or external (Redis).
//!
//! # Contract
//!
//! - `load` never returns an expired record
//! - `save` overwrites any existing record for the token
//! - `destroy` returns only once the backend has dropped the record; a
//!   missing token is not an error

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::SessionToken;
use crate::domain::session::SessionRecord;

/// Errors from the session backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionStoreError {
    #[error("Session store unavailable: {0}")]
    Unavailable(String),

    #[error("Session record could not be decoded: {0}")]
    Corrupt(String),
}

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Fetch the live record for `token`, if any.
    async fn load(&self, token: &SessionToken) -> Result<Option<SessionRecord>, SessionStoreError>;

    /// Write `record` under `token`.
    async fn save(&self, token: &SessionToken, record: &SessionRecord)
        -> Result<(), SessionStoreError>;

    /// Remove the record for `token`.
    async fn destroy(&self, token: &SessionToken) -> Result<(), SessionStoreError>;
}
