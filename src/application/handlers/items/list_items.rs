//! ListItemsHandler - Query handler for the list page.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::item::{Item, ItemError};
use crate::ports::ItemRepository;

/// Query for the items visible to a viewer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListItemsQuery {
    /// Logged-in user, or `None` for an anonymous session.
    pub viewer: Option<UserId>,
}

/// Handler for listing items.
///
/// An authenticated viewer sees only the items they own; an anonymous
/// viewer sees every item.
pub struct ListItemsHandler {
    repository: Arc<dyn ItemRepository>,
}

impl ListItemsHandler {
    pub fn new(repository: Arc<dyn ItemRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListItemsQuery) -> Result<Vec<Item>, ItemError> {
        let items = match query.viewer {
            Some(user_id) => self.repository.list_by_owner(user_id).await?,
            None => self.repository.list_all().await?,
        };
        Ok(items)
    }
}
