//! Session store adapters.
//!
//! Implementations of the SessionStore port for different backends.
//!
//! ## Available Adapters
//!
//! - `InMemorySessionStore` - In-memory for testing and single-server
//! - `RedisSessionStore` - Redis-backed for production multi-server
//!
//! ## Usage
//!
//! ```ignore
//! use permalist::adapters::session::{InMemorySessionStore, RedisSessionStore};
//!
//! // For testing
//! let store = InMemorySessionStore::new();
//!
//! // For production
//! let client = redis::Client::open("redis://127.0.0.1/")?;
//! let store = RedisSessionStore::new(client.get_multiplexed_tokio_connection().await?);
//! ```

mod in_memory;
mod redis;

pub use in_memory::InMemorySessionStore;
pub use self::redis::RedisSessionStore;
