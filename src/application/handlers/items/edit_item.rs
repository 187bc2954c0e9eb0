//! EditItemHandler - Command handler for renaming a list item.

use std::sync::Arc;

use crate::domain::foundation::ItemId;
use crate::domain::item::{ItemError, ItemTitle};
use crate::ports::ItemRepository;

/// Command to change an item's title.
#[derive(Debug, Clone)]
pub struct EditItemCommand {
    /// Raw `updatedItemId` form value.
    pub item_id: String,
    /// Raw `updatedItemTitle` form value.
    pub title: String,
}

/// Result of an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditItemResult {
    pub item_id: ItemId,
    /// False when no item had that id.
    pub updated: bool,
}

/// Handler for editing items.
pub struct EditItemHandler {
    repository: Arc<dyn ItemRepository>,
}

impl EditItemHandler {
    pub fn new(repository: Arc<dyn ItemRepository>) -> Self {
        Self { repository }
    }

    /// # Errors
    ///
    /// - `Invalid` if the id is missing or malformed, or the title is blank
    /// - `Infrastructure` if the update fails
    pub async fn handle(&self, cmd: EditItemCommand) -> Result<EditItemResult, ItemError> {
        let item_id = ItemId::parse_field(&cmd.item_id, "updatedItemId")?;
        let title = ItemTitle::new(&cmd.title)?;

        let affected = self.repository.update_title(item_id, &title).await?;

        Ok(EditItemResult {
            item_id,
            updated: affected > 0,
        })
    }
}
