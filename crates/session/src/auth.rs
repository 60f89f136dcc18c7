//! Sign-in / sign-out transitions.
//!
//! Credential checking is an explicit demo stub: any non-empty
//! username/password pair is accepted. What matters is the transition
//! semantics: which scope the flags land in, and that sign-out clears both.

use thiserror::Error;
use tracing::info;

use eproc_users::UserRole;

use crate::store::{
    KEY_IS_LOGGED_IN, KEY_USERNAME, KEY_USER_ROLE, ScopedStore, StorageScope,
};
use crate::token::{AuthToken, TokenStore};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("username and password are required")]
    MissingCredentials,
}

/// What a successful login hands back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub username: String,
    pub role: UserRole,
    pub token: AuthToken,
}

/// Sign in.
///
/// `remember` selects the durable scope; otherwise flags are short-lived.
/// The issued bearer token is registered so the API middleware can
/// recognize it until sign-out.
pub fn login(
    store: &mut ScopedStore,
    tokens: &TokenStore,
    username: &str,
    password: &str,
    role: UserRole,
    remember: bool,
) -> Result<LoginOutcome, SessionError> {
    if username.trim().is_empty() || password.trim().is_empty() {
        return Err(SessionError::MissingCredentials);
    }

    let scope = if remember {
        StorageScope::Durable
    } else {
        StorageScope::Session
    };
    store.set(scope, KEY_IS_LOGGED_IN, "true");
    store.set(scope, KEY_USERNAME, username);
    store.set(scope, KEY_USER_ROLE, role.as_str());

    let token = tokens.issue(username, role);
    info!(username, role = role.as_str(), remember, "user signed in");

    Ok(LoginOutcome {
        username: username.to_string(),
        role,
        token,
    })
}

/// Sign out: clear the auth flags from BOTH scopes and revoke the token.
pub fn logout(store: &mut ScopedStore, tokens: &TokenStore, token: Option<&AuthToken>) {
    for key in [KEY_IS_LOGGED_IN, KEY_USERNAME, KEY_USER_ROLE] {
        store.remove_everywhere(key);
    }
    if let Some(token) = token {
        tokens.revoke(token);
    }
    info!("user signed out");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SessionState;

    #[test]
    fn blank_credentials_are_rejected() {
        let mut store = ScopedStore::new();
        let tokens = TokenStore::new();
        let err = login(&mut store, &tokens, "", "secret", UserRole::Admin, false).unwrap_err();
        assert_eq!(err, SessionError::MissingCredentials);
        let err = login(&mut store, &tokens, "asha", "   ", UserRole::Admin, false).unwrap_err();
        assert_eq!(err, SessionError::MissingCredentials);
        assert!(!store.flag(KEY_IS_LOGGED_IN));
    }

    #[test]
    fn any_non_empty_pair_signs_in() {
        let mut store = ScopedStore::new();
        let tokens = TokenStore::new();
        let outcome = login(&mut store, &tokens, "asha", "whatever", UserRole::Admin, false).unwrap();
        assert_eq!(outcome.username, "asha");
        assert!(SessionState::init(&store).authenticated);
        assert!(tokens.identity_for(&outcome.token).is_some());
    }

    #[test]
    fn remember_me_selects_the_durable_scope() {
        let mut store = ScopedStore::new();
        let tokens = TokenStore::new();
        login(&mut store, &tokens, "asha", "pw", UserRole::Manager, true).unwrap();
        assert_eq!(store.get_in(StorageScope::Durable, KEY_IS_LOGGED_IN), Some("true"));
        assert_eq!(store.get_in(StorageScope::Session, KEY_IS_LOGGED_IN), None);
        assert_eq!(store.get_in(StorageScope::Durable, KEY_USER_ROLE), Some("manager"));
    }

    #[test]
    fn logout_clears_both_scopes_and_revokes() {
        let mut store = ScopedStore::new();
        let tokens = TokenStore::new();
        // Sign in twice so flags exist in both scopes.
        let first = login(&mut store, &tokens, "asha", "pw", UserRole::Admin, true).unwrap();
        login(&mut store, &tokens, "asha", "pw", UserRole::Admin, false).unwrap();

        logout(&mut store, &tokens, Some(&first.token));

        assert!(!SessionState::init(&store).authenticated);
        assert_eq!(store.get_in(StorageScope::Session, KEY_USERNAME), None);
        assert_eq!(store.get_in(StorageScope::Durable, KEY_USERNAME), None);
        assert!(tokens.identity_for(&first.token).is_none());
    }
}
