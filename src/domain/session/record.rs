//! Server-side session state.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::UserId;

/// State bag stored against a session token.
///
/// # Invariants
///
/// - `user_id == None` means the session is anonymous
/// - A record past `expires_at` is treated as absent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub user_id: Option<UserId>,
    pub expires_at: DateTime<Utc>,
}

impl SessionRecord {
    /// A fresh anonymous session expiring `ttl` from `now`.
    pub fn anonymous(ttl: Duration, now: DateTime<Utc>) -> Self {
        Self {
            user_id: None,
            expires_at: now + ttl,
        }
    }

    /// Returns this record bound to `user_id`, with its expiry pushed out
    /// to `ttl` from `now`.
    pub fn authenticated(mut self, user_id: UserId, ttl: Duration, now: DateTime<Utc>) -> Self {
        self.user_id = Some(user_id);
        self.expires_at = now + ttl;
        self
    }

    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Seconds until expiry, never negative.
    pub fn remaining_secs(&self, now: DateTime<Utc>) -> u64 {
        (self.expires_at - now).num_seconds().max(0) as u64
    }
}
