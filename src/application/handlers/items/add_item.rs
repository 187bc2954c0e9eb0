//! AddItemHandler - Command handler for adding a list item.

use std::sync::Arc;

use crate::domain::foundation::{ItemId, UserId};
use crate::domain::item::{ItemError, ItemTitle};
use crate::ports::ItemRepository;

/// Command to add an item.
#[derive(Debug, Clone)]
pub struct AddItemCommand {
    /// Raw `newItem` form value.
    pub title: String,
    pub owner: Option<UserId>,
}

/// Handler for adding items.
pub struct AddItemHandler {
    repository: Arc<dyn ItemRepository>,
}

impl AddItemHandler {
    pub fn new(repository: Arc<dyn ItemRepository>) -> Self {
        Self { repository }
    }

    /// # Errors
    ///
    /// - `Invalid` if the title is blank; nothing is written
    /// - `Infrastructure` if the insert fails
    pub async fn handle(&self, cmd: AddItemCommand) -> Result<ItemId, ItemError> {
        let title = ItemTitle::new(&cmd.title)?;
        let id = self.repository.insert(&title, cmd.owner).await?;
        Ok(id)
    }
}
