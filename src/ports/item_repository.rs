//! Item repository port.
//!
//! Defines the contract for persisting and querying list items.
//!
//! # Design
//!
//! - **One statement per call**: no operation spans a transaction
//! - **Missing rows are not errors**: updates and deletes that match
//!   nothing report zero affected rows

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ItemId, UserId};
use crate::domain::item::{Item, ItemTitle};

/// Repository port for list items.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// All items ordered by ascending id.
    async fn list_all(&self) -> Result<Vec<Item>, DomainError>;

    /// Items owned by `owner`, ordered by ascending id.
    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Item>, DomainError>;

    /// Insert a new item and return its store-assigned id.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, title: &ItemTitle, owner: Option<UserId>)
        -> Result<ItemId, DomainError>;

    /// Replace the title of an item. Returns the number of rows changed.
    async fn update_title(&self, id: ItemId, title: &ItemTitle) -> Result<u64, DomainError>;

    /// Delete an item. Returns the number of rows removed.
    async fn delete(&self, id: ItemId) -> Result<u64, DomainError>;
}
