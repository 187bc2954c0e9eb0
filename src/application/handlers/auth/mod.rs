//! Registration and login handlers.

mod login_user;
mod register_user;

pub use login_user::{LoginUserCommand, LoginUserHandler};
pub use register_user::{RegisterUserCommand, RegisterUserHandler};
