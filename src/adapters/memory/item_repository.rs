//! In-memory item repository for tests.
//!
//! Ids are assigned from a counter starting at 1, mirroring a `SERIAL`
//! column: they only ever increase, even after deletes.

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ItemId, UserId};
use crate::domain::item::{Item, ItemTitle};
use crate::ports::ItemRepository;

#[derive(Debug, Default)]
struct ItemTable {
    rows: BTreeMap<ItemId, Item>,
    last_id: i32,
}

/// In-memory implementation of ItemRepository.
#[derive(Debug, Default)]
pub struct InMemoryItemRepository {
    table: RwLock<ItemTable>,
    /// When set, every call fails with this message.
    fail_with: Option<String>,
}

impl InMemoryItemRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository whose every operation fails with a database error.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            fail_with: Some(message.into()),
            ..Self::default()
        }
    }

    /// Number of stored items.
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    fn check(&self) -> Result<(), DomainError> {
        match &self.fail_with {
            Some(message) => Err(DomainError::database(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn list_all(&self) -> Result<Vec<Item>, DomainError> {
        self.check()?;
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Item>, DomainError> {
        self.check()?;
        Ok(self
            .table
            .read()
            .await
            .rows
            .values()
            .filter(|item| item.is_owned_by(owner))
            .cloned()
            .collect())
    }

    async fn insert(
        &self,
        title: &ItemTitle,
        owner: Option<UserId>,
    ) -> Result<ItemId, DomainError> {
        self.check()?;
        let mut table = self.table.write().await;
        table.last_id += 1;
        let id = ItemId::new(table.last_id);
        table
            .rows
            .insert(id, Item::new(id, title.as_str(), owner));
        Ok(id)
    }

    async fn update_title(&self, id: ItemId, title: &ItemTitle) -> Result<u64, DomainError> {
        self.check()?;
        let mut table = self.table.write().await;
        match table.rows.get_mut(&id) {
            Some(item) => {
                item.title = title.as_str().to_string();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: ItemId) -> Result<u64, DomainError> {
        self.check()?;
        let removed = self.table.write().await.rows.remove(&id);
        Ok(u64::from(removed.is_some()))
    }
}
