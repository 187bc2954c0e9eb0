//! Redis-backed session store for production deployments.
//!
//! Each session is a JSON string under `{prefix}{token}` with a Redis TTL
//! matching the record's expiry, so Redis evicts stale sessions itself.

use async_trait::async_trait;
use chrono::Utc;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;

use crate::domain::foundation::SessionToken;
use crate::domain::session::SessionRecord;
use crate::ports::{SessionStore, SessionStoreError};

const DEFAULT_KEY_PREFIX: &str = "permalist:session:";

/// Redis-backed session store.
#[derive(Clone)]
pub struct RedisSessionStore {
    conn: MultiplexedConnection,
    key_prefix: String,
}

impl RedisSessionStore {
    /// Create a new Redis session store.
    pub fn new(conn: MultiplexedConnection) -> Self {
        Self {
            conn,
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
        }
    }

    /// Override the key prefix.
    pub fn with_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = prefix.into();
        self
    }

    fn key(&self, token: &SessionToken) -> String {
        session_key(&self.key_prefix, token)
    }
}

fn session_key(prefix: &str, token: &SessionToken) -> String {
    format!("{}{}", prefix, token)
}

fn unavailable(e: redis::RedisError) -> SessionStoreError {
    SessionStoreError::Unavailable(e.to_string())
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn load(&self, token: &SessionToken) -> Result<Option<SessionRecord>, SessionStoreError> {
        let mut conn = self.conn.clone();

        let raw: Option<String> = conn.get(self.key(token)).await.map_err(unavailable)?;

        let Some(raw) = raw else {
            return Ok(None);
        };

        let record: SessionRecord = serde_json::from_str(&raw)
            .map_err(|e| SessionStoreError::Corrupt(e.to_string()))?;

        if record.is_expired(Utc::now()) {
            return Ok(None);
        }
        Ok(Some(record))
    }

    async fn save(
        &self,
        token: &SessionToken,
        record: &SessionRecord,
    ) -> Result<(), SessionStoreError> {
        let key = self.key(token);
        let mut conn = self.conn.clone();

        let ttl_secs = record.remaining_secs(Utc::now());
        if ttl_secs == 0 {
            conn.del::<_, ()>(&key).await.map_err(unavailable)?;
            return Ok(());
        }

        let payload = serde_json::to_string(record)
            .map_err(|e| SessionStoreError::Corrupt(e.to_string()))?;

        redis::cmd("SET")
            .arg(&key)
            .arg(payload)
            .arg("EX")
            .arg(ttl_secs)
            .query_async::<_, ()>(&mut conn)
            .await
            .map_err(unavailable)?;

        Ok(())
    }

    async fn destroy(&self, token: &SessionToken) -> Result<(), SessionStoreError> {
        let mut conn = self.conn.clone();

        conn.del::<_, ()>(self.key(token))
            .await
            .map_err(unavailable)?;

        Ok(())
    }
}

impl std::fmt::Debug for RedisSessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisSessionStore")
            .field("key_prefix", &self.key_prefix)
            .finish_non_exhaustive()
    }
}
