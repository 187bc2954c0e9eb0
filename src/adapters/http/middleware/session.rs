//! Session middleware and the `CurrentSession` extractor.
//!
//! ```text
//! Request → CookieManagerLayer → session_middleware → injects CurrentSession
//!                                       ↓
//!                               Handler → CurrentSession extractor reads from extensions
//! ```
//!
//! A request without a valid signed cookie (or whose record is missing or
//! expired) gets a fresh anonymous session, saved before the handler runs,
//! and a new cookie on the response.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use tower_cookies::Cookies;

use crate::adapters::http::response::PageResponse;
use crate::adapters::http::state::AppState;
use crate::domain::foundation::{SessionToken, UserId};
use crate::domain::session::SessionRecord;

/// The session attached to the current request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentSession {
    pub token: SessionToken,
    pub record: SessionRecord,
}

impl CurrentSession {
    pub fn user_id(&self) -> Option<UserId> {
        self.record.user_id
    }
}

/// Loads or creates the session and stores it in request extensions.
///
/// Responds 500 if the session store cannot be read or written.
pub async fn session_middleware(
    State(state): State<AppState>,
    cookies: Cookies,
    mut request: Request,
    next: Next,
) -> Response {
    let settings = &state.session_settings;
    let signed = cookies.signed(settings.key());

    let presented: Option<SessionToken> = signed
        .get(&settings.cookie_name)
        .and_then(|cookie| cookie.value().parse().ok());

    let existing = match presented {
        Some(token) => match state.sessions.load(&token).await {
            Ok(record) => record.map(|record| CurrentSession { token, record }),
            Err(e) => {
                tracing::error!(error = %e, "failed to load session");
                return PageResponse::internal_error().into_response();
            }
        },
        None => None,
    };

    let session = match existing {
        Some(session) => session,
        None => {
            let token = SessionToken::generate();
            let record = SessionRecord::anonymous(settings.ttl, Utc::now());
            if let Err(e) = state.sessions.save(&token, &record).await {
                tracing::error!(error = %e, "failed to create session");
                return PageResponse::internal_error().into_response();
            }
            signed.add(settings.session_cookie(&token));
            tracing::debug!("issued new session");
            CurrentSession { token, record }
        }
    };

    request.extensions_mut().insert(session);
    next.run(request).await
}

/// Rejection when a handler runs outside `session_middleware`.
#[derive(Debug, Clone, Copy)]
pub struct MissingSession;

impl IntoResponse for MissingSession {
    fn into_response(self) -> Response {
        tracing::error!("handler reached without session middleware");
        PageResponse::internal_error().into_response()
    }
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
{
    type Rejection = MissingSession;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentSession>()
            .cloned()
            .ok_or(MissingSession)
    }
}
