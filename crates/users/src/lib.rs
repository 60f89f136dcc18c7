//! `eproc-users` — the user directory.

pub mod user;

pub use user::{User, UserRole, name_of};
