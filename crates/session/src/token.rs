//! Opaque bearer tokens for the simulated session.
//!
//! Tokens carry no claims and never expire; they are valid exactly while the
//! token store remembers them (issue → revoke). Signed tokens would overstate
//! what this demo authentication provides.

use std::collections::HashMap;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use eproc_users::UserRole;

/// An opaque bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn generate() -> Self {
        Self(Uuid::now_v7().simple().to_string())
    }

    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for AuthToken {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Who a token belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub username: String,
    pub role: UserRole,
}

/// In-memory registry of live tokens.
#[derive(Debug, Default)]
pub struct TokenStore {
    inner: Mutex<HashMap<AuthToken, Identity>>,
}

impl TokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a fresh token for an identity.
    pub fn issue(&self, username: &str, role: UserRole) -> AuthToken {
        let token = AuthToken::generate();
        let identity = Identity {
            username: username.to_string(),
            role,
        };
        self.inner
            .lock()
            .expect("token store lock poisoned")
            .insert(token.clone(), identity);
        token
    }

    /// Resolve a presented token, if it is live.
    pub fn identity_for(&self, token: &AuthToken) -> Option<Identity> {
        self.inner
            .lock()
            .expect("token store lock poisoned")
            .get(token)
            .cloned()
    }

    /// Forget a token (sign-out).
    pub fn revoke(&self, token: &AuthToken) {
        self.inner
            .lock()
            .expect("token store lock poisoned")
            .remove(token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_tokens_resolve_until_revoked() {
        let store = TokenStore::new();
        let token = store.issue("asha", UserRole::Admin);

        let identity = store.identity_for(&token).unwrap();
        assert_eq!(identity.username, "asha");
        assert_eq!(identity.role, UserRole::Admin);

        store.revoke(&token);
        assert!(store.identity_for(&token).is_none());
    }

    #[test]
    fn unknown_tokens_do_not_resolve() {
        let store = TokenStore::new();
        assert!(store.identity_for(&AuthToken::from_raw("made-up")).is_none());
    }

    #[test]
    fn tokens_are_unique_per_issue() {
        let store = TokenStore::new();
        let a = store.issue("asha", UserRole::Admin);
        let b = store.issue("asha", UserRole::Admin);
        assert_ne!(a, b);
    }
}
