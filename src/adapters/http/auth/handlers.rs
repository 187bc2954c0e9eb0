//! HTTP handlers for registration, login and logout.

use axum::{extract::State, Form};
use chrono::Utc;
use tower_cookies::Cookies;

use crate::adapters::http::middleware::CurrentSession;
use crate::adapters::http::response::{Page, PageResponse};
use crate::adapters::http::state::AppState;
use crate::application::handlers::{LoginUserCommand, RegisterUserCommand};
use crate::domain::foundation::SessionToken;
use crate::domain::user::AuthError;

use super::dto::CredentialsForm;

const MISSING_CREDENTIALS: &str = "Username and password are required.";
const USERNAME_TAKEN: &str = "Username already exists. Please choose another.";
const REGISTER_FAILED: &str = "Error creating user.";
const USER_NOT_FOUND: &str = "User not found. Please register first.";
const INVALID_CREDENTIALS: &str = "Invalid username or password.";
const LOGIN_FAILED: &str = "Error logging in.";
const LOGOUT_FAILED: &str = "Error logging out.";

/// GET /register
pub async fn register_page() -> PageResponse {
    PageResponse::Rendered(Page::Register)
}

/// GET /login
pub async fn login_page() -> PageResponse {
    PageResponse::Rendered(Page::Login)
}

/// POST /register - Create an account, then send the user to log in
pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<CredentialsForm>,
) -> PageResponse {
    let cmd = RegisterUserCommand {
        username: form.username.unwrap_or_default(),
        password: form.password.unwrap_or_default(),
    };

    match state.register_user.handle(cmd).await {
        Ok(_) => PageResponse::Redirect("/login"),
        Err(AuthError::MissingCredentials(_)) => PageResponse::text(MISSING_CREDENTIALS),
        Err(AuthError::UsernameTaken) => {
            tracing::info!("registration rejected: username taken");
            PageResponse::text(USERNAME_TAKEN)
        }
        Err(e) => {
            tracing::error!(error = %e, "registration failed");
            PageResponse::text(REGISTER_FAILED)
        }
    }
}

/// POST /login - Check credentials and attach the user to the session
pub async fn login(
    State(state): State<AppState>,
    session: CurrentSession,
    cookies: Cookies,
    Form(form): Form<CredentialsForm>,
) -> PageResponse {
    let cmd = LoginUserCommand {
        username: form.username.unwrap_or_default(),
        password: form.password.unwrap_or_default(),
    };

    let user = match state.login_user.handle(cmd).await {
        Ok(user) => user,
        Err(AuthError::UserNotFound) => {
            tracing::warn!("login failed: unknown user");
            return PageResponse::text(USER_NOT_FOUND);
        }
        Err(AuthError::InvalidPassword) => {
            tracing::warn!("login failed: password mismatch");
            return PageResponse::text(INVALID_CREDENTIALS);
        }
        Err(e) => {
            tracing::error!(error = %e, "login failed");
            return PageResponse::text(LOGIN_FAILED);
        }
    };

    // Login moves the session to a fresh token; the pre-login token is dropped.
    let settings = &state.session_settings;
    let token = SessionToken::generate();
    let record = session
        .record
        .authenticated(user.id, settings.ttl, Utc::now());

    if let Err(e) = state.sessions.save(&token, &record).await {
        tracing::error!(error = %e, user_id = %user.id, "failed to store login in session");
        return PageResponse::text(LOGIN_FAILED);
    }

    if let Err(e) = state.sessions.destroy(&session.token).await {
        tracing::warn!(error = %e, "failed to discard pre-login session");
    }

    cookies
        .signed(settings.key())
        .add(settings.session_cookie(&token));

    tracing::info!(user_id = %user.id, "user logged in");
    PageResponse::Redirect("/")
}

/// GET /check-session - Report the session's user id
pub async fn check_session(session: CurrentSession) -> PageResponse {
    match session.user_id() {
        Some(user_id) => PageResponse::text(format!("Session User ID: {}", user_id)),
        None => PageResponse::text("Session User ID: No User Logged In"),
    }
}

/// POST /logout - Destroy the session, then clear the cookie
///
/// The cookie is only cleared once the store confirms the destroy.
pub async fn logout(
    State(state): State<AppState>,
    session: CurrentSession,
    cookies: Cookies,
) -> PageResponse {
    if let Err(e) = state.sessions.destroy(&session.token).await {
        tracing::error!(error = %e, "failed to destroy session");
        return PageResponse::text(LOGOUT_FAILED);
    }

    let settings = &state.session_settings;
    cookies.signed(settings.key()).remove(settings.removal_cookie());

    tracing::info!(user_id = ?session.user_id(), "session logged out");
    PageResponse::Redirect("/login")
}
