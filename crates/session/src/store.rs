//! Scoped key/value storage for session flags.
//!
//! Two scopes mirror the browser's storage split: `Session` is short-lived
//! (gone when the process ends), `Durable` survives restarts when the host
//! persists it. Values are string flags.

use std::collections::HashMap;

/// Storage key: `"true"` while a user is signed in.
pub const KEY_IS_LOGGED_IN: &str = "isLoggedIn";
/// Storage key: the signed-in username.
pub const KEY_USERNAME: &str = "username";
/// Storage key: the signed-in user's role.
pub const KEY_USER_ROLE: &str = "userRole";
/// Storage key: `"true"` when the dark theme is on.
pub const KEY_DARK_MODE: &str = "darkMode";

/// Which scope a write lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageScope {
    /// Short-lived; cleared when the session ends.
    Session,
    /// Survives the session ("remember me").
    Durable,
}

/// In-memory stand-in for the two browser storage scopes.
#[derive(Debug, Default)]
pub struct ScopedStore {
    session: HashMap<String, String>,
    durable: HashMap<String, String>,
}

impl ScopedStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, scope: StorageScope, key: &str, value: impl Into<String>) {
        let map = match scope {
            StorageScope::Session => &mut self.session,
            StorageScope::Durable => &mut self.durable,
        };
        map.insert(key.to_string(), value.into());
    }

    /// Read a key, preferring the session scope over the durable one.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.session
            .get(key)
            .or_else(|| self.durable.get(key))
            .map(String::as_str)
    }

    pub fn get_in(&self, scope: StorageScope, key: &str) -> Option<&str> {
        let map = match scope {
            StorageScope::Session => &self.session,
            StorageScope::Durable => &self.durable,
        };
        map.get(key).map(String::as_str)
    }

    /// Whether a key holds the string flag `"true"` in either scope.
    pub fn flag(&self, key: &str) -> bool {
        self.get(key) == Some("true")
    }

    /// Remove a key from BOTH scopes.
    pub fn remove_everywhere(&mut self, key: &str) {
        self.session.remove(key);
        self.durable.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_scope_shadows_durable() {
        let mut store = ScopedStore::new();
        store.set(StorageScope::Durable, KEY_USERNAME, "remembered");
        store.set(StorageScope::Session, KEY_USERNAME, "current");
        assert_eq!(store.get(KEY_USERNAME), Some("current"));
        assert_eq!(
            store.get_in(StorageScope::Durable, KEY_USERNAME),
            Some("remembered")
        );
    }

    #[test]
    fn flag_reads_the_true_string() {
        let mut store = ScopedStore::new();
        assert!(!store.flag(KEY_IS_LOGGED_IN));
        store.set(StorageScope::Session, KEY_IS_LOGGED_IN, "true");
        assert!(store.flag(KEY_IS_LOGGED_IN));
        store.set(StorageScope::Session, KEY_IS_LOGGED_IN, "false");
        assert!(!store.flag(KEY_IS_LOGGED_IN));
    }

    #[test]
    fn remove_everywhere_clears_both_scopes() {
        let mut store = ScopedStore::new();
        store.set(StorageScope::Session, KEY_USER_ROLE, "admin");
        store.set(StorageScope::Durable, KEY_USER_ROLE, "admin");
        store.remove_everywhere(KEY_USER_ROLE);
        assert_eq!(store.get(KEY_USER_ROLE), None);
    }
}
