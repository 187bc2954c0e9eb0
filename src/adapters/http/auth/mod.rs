//! HTTP adapter for registration, login and session routes.

mod dto;
mod handlers;

pub use dto::CredentialsForm;
pub use handlers::{check_session, login, login_page, logout, register, register_page};
