//! Explicit application session state with defined init/teardown.

use eproc_users::UserRole;

use crate::store::{
    KEY_DARK_MODE, KEY_IS_LOGGED_IN, KEY_USERNAME, KEY_USER_ROLE, ScopedStore, StorageScope,
};

/// Snapshot of the signed-in state, built once at startup and injected into
/// whatever renders it; views never poke at storage keys directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub authenticated: bool,
    pub username: Option<String>,
    pub role: Option<UserRole>,
    pub dark_mode: bool,
}

impl SessionState {
    /// Initialize from the store (either scope counts as signed in).
    pub fn init(store: &ScopedStore) -> Self {
        let authenticated = store.flag(KEY_IS_LOGGED_IN);
        let username = if authenticated {
            store.get(KEY_USERNAME).map(str::to_string)
        } else {
            None
        };
        let role = if authenticated {
            store.get(KEY_USER_ROLE).and_then(|raw| raw.parse().ok())
        } else {
            None
        };
        Self {
            authenticated,
            username,
            role,
            dark_mode: store.flag(KEY_DARK_MODE),
        }
    }

    /// Route guard: may this state enter protected views?
    pub fn can_enter_protected(&self) -> bool {
        self.authenticated
    }

    /// Flip the theme and persist the choice durably.
    pub fn toggle_dark_mode(&mut self, store: &mut ScopedStore) {
        self.dark_mode = !self.dark_mode;
        store.set(StorageScope::Durable, KEY_DARK_MODE, self.dark_mode.to_string());
    }

    /// Persist whatever must outlive the process; the theme choice is the
    /// only durable piece of non-auth state.
    pub fn teardown(&self, store: &mut ScopedStore) {
        store.set(StorageScope::Durable, KEY_DARK_MODE, self.dark_mode.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_on_empty_store_is_signed_out() {
        let store = ScopedStore::new();
        let state = SessionState::init(&store);
        assert!(!state.authenticated);
        assert!(!state.can_enter_protected());
        assert_eq!(state.username, None);
        assert_eq!(state.role, None);
    }

    #[test]
    fn init_picks_up_flags_from_either_scope() {
        let mut store = ScopedStore::new();
        store.set(StorageScope::Durable, KEY_IS_LOGGED_IN, "true");
        store.set(StorageScope::Durable, KEY_USERNAME, "asha");
        store.set(StorageScope::Durable, KEY_USER_ROLE, "admin");

        let state = SessionState::init(&store);
        assert!(state.authenticated);
        assert_eq!(state.username.as_deref(), Some("asha"));
        assert_eq!(state.role, Some(UserRole::Admin));
    }

    #[test]
    fn unknown_role_string_degrades_to_none() {
        let mut store = ScopedStore::new();
        store.set(StorageScope::Session, KEY_IS_LOGGED_IN, "true");
        store.set(StorageScope::Session, KEY_USER_ROLE, "superuser");
        let state = SessionState::init(&store);
        assert!(state.authenticated);
        assert_eq!(state.role, None);
    }

    #[test]
    fn dark_mode_toggle_persists_durably() {
        let mut store = ScopedStore::new();
        let mut state = SessionState::init(&store);
        assert!(!state.dark_mode);

        state.toggle_dark_mode(&mut store);
        assert!(state.dark_mode);
        assert_eq!(store.get_in(StorageScope::Durable, KEY_DARK_MODE), Some("true"));

        // A fresh init sees the persisted choice.
        let rebuilt = SessionState::init(&store);
        assert!(rebuilt.dark_mode);
    }

    #[test]
    fn teardown_persists_the_theme_for_the_next_process() {
        let mut store = ScopedStore::new();
        let state = SessionState {
            authenticated: false,
            username: None,
            role: None,
            dark_mode: true,
        };
        state.teardown(&mut store);
        assert_eq!(store.get_in(StorageScope::Durable, KEY_DARK_MODE), Some("true"));
    }
}
