//! Form bodies for registration and login.

use serde::Deserialize;

/// `POST /register` and `POST /login`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CredentialsForm {
    pub username: Option<String>,
    pub password: Option<String>,
}
