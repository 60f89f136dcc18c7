//! Facade configuration, read once at startup.

/// Where the facade points and whether it talks to the network at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the REST API, no trailing slash.
    pub base_url: String,
    /// When true, accessors return static fixtures and never touch the network.
    pub use_mock: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api".to_string(),
            use_mock: true,
        }
    }
}

impl ClientConfig {
    /// Read `EPROC_API_URL` / `EPROC_USE_MOCK` from the environment.
    ///
    /// Unset or unrecognized values fall back to the defaults (mock mode on),
    /// matching the behavior of a dev build with no env file.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let base_url = std::env::var("EPROC_API_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or(defaults.base_url);
        let use_mock = match std::env::var("EPROC_USE_MOCK").ok().as_deref() {
            Some("false") | Some("0") => false,
            Some("true") | Some("1") => true,
            _ => defaults.use_mock,
        };
        Self { base_url, use_mock }
    }
}
