//! Session domain module.
//!
//! Login sessions identified by an opaque cookie token. A session starts
//! anonymous and becomes authenticated when a user logs in.

mod record;

pub use record::SessionRecord;
