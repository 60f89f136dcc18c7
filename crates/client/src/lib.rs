//! `eproc-client` — the API facade.
//!
//! The single seam between consumer code and the data source. Each accessor
//! either returns the static mock collection directly or performs one
//! authenticated read against the configured base URL; there is no retry or
//! backoff, and errors propagate to the caller for display.

pub mod config;
pub mod error;
pub mod facade;

pub use config::ClientConfig;
pub use error::FetchError;
pub use facade::{ApiClient, LoginResponse, LoginUser, MOCK_TOKEN};
