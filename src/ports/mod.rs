//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `ItemRepository` - List item storage
//! - `UserRepository` - Registered accounts, unique by username
//!
//! ## Auth Ports
//!
//! - `PasswordHasher` - One-way password hashing
//! - `SessionStore` - Token to session state mapping

mod item_repository;
mod password_hasher;
mod session_store;
mod user_repository;

pub use item_repository::ItemRepository;
pub use password_hasher::{HashError, PasswordHasher};
pub use session_store::{SessionStore, SessionStoreError};
pub use user_repository::UserRepository;
