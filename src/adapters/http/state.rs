//! Shared state for the HTTP adapter.

use std::sync::Arc;

use secrecy::ExposeSecret;
use tower_cookies::cookie::{time, SameSite};
use tower_cookies::{Cookie, Key};

use crate::application::handlers::{
    AddItemHandler, DeleteItemHandler, EditItemHandler, ListItemsHandler, LoginUserHandler,
    RegisterUserHandler,
};
use crate::config::{FeatureFlags, SessionConfig, ValidationError, MIN_SECRET_BYTES};
use crate::domain::foundation::SessionToken;
use crate::ports::{ItemRepository, PasswordHasher, SessionStore, UserRepository};

/// Cookie parameters and the signing key for the session cookie.
#[derive(Clone)]
pub struct SessionSettings {
    pub cookie_name: String,
    pub ttl: chrono::Duration,
    pub secure: bool,
    key: Key,
}

impl SessionSettings {
    /// # Errors
    ///
    /// `SessionSecretTooShort` if `secret` is under 64 bytes.
    pub fn new(
        cookie_name: impl Into<String>,
        ttl: chrono::Duration,
        secure: bool,
        secret: &[u8],
    ) -> Result<Self, ValidationError> {
        if secret.len() < MIN_SECRET_BYTES {
            return Err(ValidationError::SessionSecretTooShort {
                min: MIN_SECRET_BYTES,
            });
        }
        Ok(Self {
            cookie_name: cookie_name.into(),
            ttl,
            secure,
            key: Key::from(secret),
        })
    }

    pub fn from_config(config: &SessionConfig) -> Result<Self, ValidationError> {
        Self::new(
            config.cookie_name.clone(),
            config.ttl(),
            config.secure_cookie,
            config.secret.expose_secret().as_bytes(),
        )
    }

    pub fn key(&self) -> &Key {
        &self.key
    }

    /// Cookie carrying `token`, valid for the session TTL.
    pub fn session_cookie(&self, token: &SessionToken) -> Cookie<'static> {
        Cookie::build((self.cookie_name.clone(), token.to_string()))
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Lax)
            .path("/")
            .max_age(time::Duration::seconds(self.ttl.num_seconds()))
            .build()
    }

    /// Cookie matching the session cookie's name and path, for removal.
    pub fn removal_cookie(&self) -> Cookie<'static> {
        Cookie::build((self.cookie_name.clone(), "")).path("/").build()
    }
}

impl std::fmt::Debug for SessionSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionSettings")
            .field("cookie_name", &self.cookie_name)
            .field("ttl", &self.ttl)
            .field("secure", &self.secure)
            .finish_non_exhaustive()
    }
}

/// State handed to every route and to the session middleware.
#[derive(Clone)]
pub struct AppState {
    pub(crate) list_items: Arc<ListItemsHandler>,
    pub(crate) add_item: Arc<AddItemHandler>,
    pub(crate) edit_item: Arc<EditItemHandler>,
    pub(crate) delete_item: Arc<DeleteItemHandler>,
    pub(crate) register_user: Arc<RegisterUserHandler>,
    pub(crate) login_user: Arc<LoginUserHandler>,
    pub(crate) sessions: Arc<dyn SessionStore>,
    pub(crate) session_settings: SessionSettings,
    pub(crate) features: FeatureFlags,
}

impl AppState {
    pub fn new(
        items: Arc<dyn ItemRepository>,
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        sessions: Arc<dyn SessionStore>,
        session_settings: SessionSettings,
        features: FeatureFlags,
    ) -> Self {
        Self {
            list_items: Arc::new(ListItemsHandler::new(items.clone())),
            add_item: Arc::new(AddItemHandler::new(items.clone())),
            edit_item: Arc::new(EditItemHandler::new(items.clone())),
            delete_item: Arc::new(DeleteItemHandler::new(items)),
            register_user: Arc::new(RegisterUserHandler::new(users.clone(), hasher.clone())),
            login_user: Arc::new(LoginUserHandler::new(users, hasher)),
            sessions,
            session_settings,
            features,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";

    #[test]
    fn short_secret_is_rejected() {
        let result = SessionSettings::new("sid", chrono::Duration::hours(1), false, b"short");
        assert!(matches!(
            result,
            Err(ValidationError::SessionSecretTooShort { min: 64 })
        ));
    }

    #[test]
    fn session_cookie_attributes() {
        let settings =
            SessionSettings::new("permalist.sid", chrono::Duration::hours(24), true, SECRET)
                .unwrap();
        let token = SessionToken::generate();

        let cookie = settings.session_cookie(&token);

        assert_eq!(cookie.name(), "permalist.sid");
        assert_eq!(cookie.value(), token.to_string());
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(time::Duration::hours(24)));
    }

    #[test]
    fn debug_omits_key() {
        let settings =
            SessionSettings::new("sid", chrono::Duration::hours(1), false, SECRET).unwrap();
        assert!(!format!("{:?}", settings).contains("0123456789abcdef"));
    }
}
