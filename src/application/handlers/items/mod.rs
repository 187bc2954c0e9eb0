//! Item command and query handlers.

mod add_item;
mod delete_item;
mod edit_item;
mod list_items;

pub use add_item::{AddItemCommand, AddItemHandler};
pub use delete_item::{DeleteItemCommand, DeleteItemHandler, DeleteItemResult};
pub use edit_item::{EditItemCommand, EditItemHandler, EditItemResult};
pub use list_items::{ListItemsHandler, ListItemsQuery};
