//! In-memory repository adapters.
//!
//! Drop-in replacements for the PostgreSQL repositories, used by tests.
//! State lives in the process and is lost on drop.

mod item_repository;
mod user_repository;

pub use item_repository::InMemoryItemRepository;
pub use user_repository::InMemoryUserRepository;
