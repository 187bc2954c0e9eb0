//! permalist - a per-user to-do list served as HTML pages.
//!
//! Accounts register with a username and bcrypt-hashed password, log in to
//! a cookie-backed session, and add, rename and delete list items stored
//! in PostgreSQL.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
