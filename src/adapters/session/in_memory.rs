//! In-memory session store for testing and single-server deployments.
//!
//! Records live in a HashMap keyed by token. Expired records are dropped
//! when they are next loaded, and swept from the whole map on `save` once
//! it grows past a threshold.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

use crate::domain::foundation::SessionToken;
use crate::domain::session::SessionRecord;
use crate::ports::{SessionStore, SessionStoreError};

/// Map size that triggers the first sweep of expired records.
pub const DEFAULT_SWEEP_THRESHOLD: usize = 1024;

#[derive(Debug)]
struct SessionTable {
    records: HashMap<SessionToken, SessionRecord>,
    /// Size at which the next `save` sweeps. Doubles past the live count
    /// after each sweep so a map full of live sessions is not rescanned
    /// on every write.
    sweep_at: usize,
}

/// In-memory session store.
#[derive(Debug)]
pub struct InMemorySessionStore {
    table: RwLock<SessionTable>,
    sweep_threshold: usize,
    /// When set, `save` fails without touching the map.
    fail_save: AtomicBool,
    /// When set, `destroy` fails without touching the record.
    fail_destroy: AtomicBool,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::with_sweep_threshold(DEFAULT_SWEEP_THRESHOLD)
    }

    /// Creates a store that sweeps expired records once it holds `threshold`.
    pub fn with_sweep_threshold(threshold: usize) -> Self {
        let threshold = threshold.max(1);
        Self {
            table: RwLock::new(SessionTable {
                records: HashMap::new(),
                sweep_at: threshold,
            }),
            sweep_threshold: threshold,
            fail_save: AtomicBool::new(false),
            fail_destroy: AtomicBool::new(false),
        }
    }

    /// Makes subsequent `save` calls fail (or succeed again).
    pub fn set_fail_save(&self, fail: bool) {
        self.fail_save.store(fail, Ordering::SeqCst);
    }

    /// Makes subsequent `destroy` calls fail (or succeed again).
    pub fn set_fail_destroy(&self, fail: bool) {
        self.fail_destroy.store(fail, Ordering::SeqCst);
    }

    /// Number of stored records, including expired ones not yet evicted.
    pub async fn len(&self) -> usize {
        self.table.read().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Drops every expired record and returns how many were removed.
    pub async fn purge_expired(&self) -> usize {
        let mut table = self.table.write().await;
        let removed = sweep(&mut table.records);
        table.sweep_at = next_sweep_at(table.records.len(), self.sweep_threshold);
        removed
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

fn sweep(records: &mut HashMap<SessionToken, SessionRecord>) -> usize {
    let before = records.len();
    let now = Utc::now();
    records.retain(|_, record| !record.is_expired(now));
    before - records.len()
}

fn next_sweep_at(live: usize, threshold: usize) -> usize {
    threshold.max(live.saturating_mul(2))
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self, token: &SessionToken) -> Result<Option<SessionRecord>, SessionStoreError> {
        let record = self.table.read().await.records.get(token).cloned();
        match record {
            Some(record) if record.is_expired(Utc::now()) => {
                self.table.write().await.records.remove(token);
                Ok(None)
            }
            other => Ok(other),
        }
    }

    async fn save(
        &self,
        token: &SessionToken,
        record: &SessionRecord,
    ) -> Result<(), SessionStoreError> {
        if self.fail_save.load(Ordering::SeqCst) {
            return Err(SessionStoreError::Unavailable(
                "session save rejected".to_string(),
            ));
        }
        let mut table = self.table.write().await;
        if table.records.len() >= table.sweep_at {
            let removed = sweep(&mut table.records);
            table.sweep_at = next_sweep_at(table.records.len(), self.sweep_threshold);
            tracing::debug!(removed, live = table.records.len(), "swept expired sessions");
        }
        table.records.insert(*token, record.clone());
        Ok(())
    }

    async fn destroy(&self, token: &SessionToken) -> Result<(), SessionStoreError> {
        if self.fail_destroy.load(Ordering::SeqCst) {
            return Err(SessionStoreError::Unavailable(
                "session destroy rejected".to_string(),
            ));
        }
        self.table.write().await.records.remove(token);
        Ok(())
    }
}
