//! HTTP middleware for axum.
//!
//! This module contains middleware layers for cross-cutting concerns:
//!
//! - `session` - Session cookie handling and the `CurrentSession` extractor
//! - `auth` - Auth gate redirecting anonymous sessions to the login page

pub mod auth;
pub mod session;

pub use auth::require_auth;
pub use session::{session_middleware, CurrentSession, MissingSession};
