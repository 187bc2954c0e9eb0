//! Route table for the application.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_cookies::CookieManagerLayer;
use tower_http::trace::TraceLayer;

use super::auth::{check_session, login, login_page, logout, register, register_page};
use super::items::{add_item, delete_item, edit_item, list_items};
use super::middleware::{require_auth, session_middleware};
use super::state::AppState;

/// Builds the application router.
///
/// Every page route runs inside the session middleware. `/health` sits
/// outside it so probes do not create sessions.
pub fn app_router(state: AppState) -> Router {
    let mut list_route = get(list_items);
    if state.features.require_login_for_list {
        list_route = list_route.route_layer(middleware::from_fn(require_auth));
    }

    Router::new()
        .route("/", list_route)
        .route("/add", post(add_item))
        .route("/edit", post(edit_item))
        .route("/delete", post(delete_item))
        .route("/register", get(register_page).post(register))
        .route("/login", get(login_page).post(login))
        .route("/check-session", get(check_session))
        .route("/logout", post(logout))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            session_middleware,
        ))
        .layer(CookieManagerLayer::new())
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health
async fn health() -> &'static str {
    "OK"
}
