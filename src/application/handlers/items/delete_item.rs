//! DeleteItemHandler - Command handler for removing a list item.

use std::sync::Arc;

use crate::domain::foundation::ItemId;
use crate::domain::item::ItemError;
use crate::ports::ItemRepository;

/// Command to delete an item.
#[derive(Debug, Clone)]
pub struct DeleteItemCommand {
    /// Raw `deleteItemId` form value.
    pub item_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteItemResult {
    pub item_id: ItemId,
    /// False when the item was already gone.
    pub deleted: bool,
}

/// Handler for deleting items.
pub struct DeleteItemHandler {
    repository: Arc<dyn ItemRepository>,
}

impl DeleteItemHandler {
    pub fn new(repository: Arc<dyn ItemRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteItemCommand) -> Result<DeleteItemResult, ItemError> {
        let item_id = ItemId::parse_field(&cmd.item_id, "deleteItemId")?;
        let affected = self.repository.delete(item_id).await?;
        Ok(DeleteItemResult {
            item_id,
            deleted: affected > 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryItemRepository;
    use crate::domain::item::ItemTitle;

    #[tokio::test]
    async fn delete_twice_is_silent() {
        let repo = Arc::new(InMemoryItemRepository::new());
        let id = repo
            .insert(&ItemTitle::new("gone soon").unwrap(), None)
            .await
            .unwrap();
        let handler = DeleteItemHandler::new(repo.clone());
        let cmd = DeleteItemCommand {
            item_id: id.to_string(),
        };

        let first = handler.handle(cmd.clone()).await.unwrap();
        let second = handler.handle(cmd).await.unwrap();

        assert!(first.deleted);
        assert!(!second.deleted);
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn missing_id_is_invalid() {
        let handler = DeleteItemHandler::new(Arc::new(InMemoryItemRepository::new()));
        let err = handler
            .handle(DeleteItemCommand {
                item_id: String::new(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ItemError::Invalid(_)));
    }

    #[tokio::test]
    async fn store_failure_surfaces() {
        let handler = DeleteItemHandler::new(Arc::new(InMemoryItemRepository::failing("down")));
        let err = handler
            .handle(DeleteItemCommand {
                item_id: "1".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ItemError::Infrastructure(_)));
    }
}
