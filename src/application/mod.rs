//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers (write) and query handlers (read) are kept separate.

pub mod handlers;

pub use handlers::{
    // Item handlers
    AddItemCommand, AddItemHandler, DeleteItemCommand, DeleteItemHandler, DeleteItemResult,
    EditItemCommand, EditItemHandler, EditItemResult, ListItemsHandler, ListItemsQuery,
    // Auth handlers
    LoginUserCommand, LoginUserHandler, RegisterUserCommand, RegisterUserHandler,
};
