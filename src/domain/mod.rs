//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, errors)
//! - `item` - To-do list items and title validation
//! - `user` - Registered accounts and credentials
//! - `session` - Login session state

pub mod foundation;
pub mod item;
pub mod session;
pub mod user;
