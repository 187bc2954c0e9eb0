//! Auth gate for routes that need a logged-in session.
//!
//! Must run inside `session_middleware`; use as a route layer:
//!
//! ```ignore
//! get(list_items).route_layer(middleware::from_fn(require_auth))
//! ```

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

use super::session::CurrentSession;
use crate::adapters::http::response::PageResponse;

/// Continues when the session has a user, otherwise redirects to `/login`.
pub async fn require_auth(request: Request, next: Next) -> Response {
    let authenticated = request
        .extensions()
        .get::<CurrentSession>()
        .is_some_and(|session| session.record.is_authenticated());

    if authenticated {
        next.run(request).await
    } else {
        PageResponse::Redirect("/login").into_response()
    }
}
