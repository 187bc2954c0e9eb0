//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod auth;
pub mod items;

pub use auth::{LoginUserCommand, LoginUserHandler, RegisterUserCommand, RegisterUserHandler};
pub use items::{
    AddItemCommand, AddItemHandler, DeleteItemCommand, DeleteItemHandler, DeleteItemResult,
    EditItemCommand, EditItemHandler, EditItemResult, ListItemsHandler, ListItemsQuery,
};
