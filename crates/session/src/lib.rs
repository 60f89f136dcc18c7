//! `eproc-session` — authentication flags, roles, and route-guard state.
//!
//! The portal keeps its signed-in state as string flags under well-known
//! keys, in either a short-lived or a durable scope depending on the
//! "remember me" choice. This crate models that as an explicit store plus a
//! [`SessionState`] object with defined init/teardown, instead of ad-hoc
//! reads scattered through view code.

pub mod auth;
pub mod state;
pub mod store;
pub mod token;

pub use auth::{LoginOutcome, SessionError, login, logout};
pub use state::SessionState;
pub use store::{KEY_DARK_MODE, KEY_IS_LOGGED_IN, KEY_USERNAME, KEY_USER_ROLE, ScopedStore, StorageScope};
pub use token::{AuthToken, Identity, TokenStore};
