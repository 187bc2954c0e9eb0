//! User domain module.
//!
//! Registered accounts, submitted credentials and authentication errors.

mod account;
mod errors;

pub use account::{Credentials, NewUser, User};
pub use errors::AuthError;
