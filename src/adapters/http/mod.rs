//! HTTP adapter - server-rendered pages over axum.
//!
//! - `router` - route table and layer stack
//! - `middleware` - session loading and the auth gate
//! - `items`, `auth` - page handlers and their form bodies
//! - `response`, `views` - the `PageResponse` type and HTML rendering

pub mod auth;
pub mod items;
pub mod middleware;
mod response;
mod router;
mod state;
mod views;

pub use middleware::CurrentSession;
pub use response::{Page, PageResponse};
pub use router::app_router;
pub use state::{AppState, SessionSettings};
