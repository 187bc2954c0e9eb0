//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `postgres` - Item and user repositories over sqlx
//! - `memory` - In-process repositories for tests
//! - `session` - Session stores (in-memory, Redis)
//! - `password` - bcrypt password hashing
//! - `http` - axum routes, middleware and page rendering

pub mod http;
pub mod memory;
pub mod password;
pub mod postgres;
pub mod session;
