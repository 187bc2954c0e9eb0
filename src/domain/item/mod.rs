//! Item domain module.
//!
//! A list item is a titled to-do entry, optionally owned by a user.

mod aggregate;
mod errors;

pub use aggregate::{Item, ItemTitle};
pub use errors::ItemError;
