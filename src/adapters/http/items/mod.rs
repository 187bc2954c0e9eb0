//! HTTP adapter for the list routes.

mod dto;
mod handlers;

pub use dto::{AddItemForm, DeleteItemForm, EditItemForm};
pub use handlers::{add_item, delete_item, edit_item, list_items};
