//! # Session: the client's only persisted state
//!
//! The remote service issues an opaque token and a role label at login. The
//! client keeps exactly those two strings in a key-value store for the
//! lifetime of the browser session and replays the token on every
//! authenticated request.
//!
//! ## [`KeyValueStore`] trait
//!
//! A synchronous string-to-string interface (`get`, `set`, `remove`). The
//! browser implementation wraps `window.localStorage`
//! ([`crate::LocalStorageStore`]); tests and native builds use
//! [`crate::MemoryStore`].
//!
//! ## [`Session`]
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`credentials`](Session::credentials) | Reads both keys; `None` unless a non-empty token is stored. |
//! | [`sign_in`](Session::sign_in) | Writes token and role. |
//! | [`sign_out`](Session::sign_out) | Removes both keys. |
//!
//! The role is stored exactly as the service sent it. Unknown labels are kept
//! as [`Role::Other`] so that a future role never grants access to a route
//! that checks for `user` or `admin`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Storage key holding the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key holding the role label.
pub const ROLE_KEY: &str = "role";

/// Role label attached to a session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    #[default]
    User,
    Admin,
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
            Role::Other(s) => s,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl From<&str> for Role {
    fn from(s: &str) -> Self {
        match s.trim() {
            "user" => Role::User,
            "admin" => Role::Admin,
            other => Role::Other(other.to_string()),
        }
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        Role::from(s.as_str())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Token and role as read from storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub token: String,
    /// `None` when a token is stored without a role.
    pub role: Option<Role>,
}

/// Synchronous string key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// The persisted session backed by a [`KeyValueStore`].
pub struct Session<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The stored token, ignoring empty values.
    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY).filter(|t| !t.trim().is_empty())
    }

    pub fn role(&self) -> Option<Role> {
        self.store
            .get(ROLE_KEY)
            .filter(|r| !r.trim().is_empty())
            .map(Role::from)
    }

    pub fn credentials(&self) -> Option<Credentials> {
        let token = self.token()?;
        Some(Credentials {
            token,
            role: self.role(),
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Persist the credentials returned by a successful login.
    pub fn sign_in(&self, token: &str, role: &Role) {
        tracing::info!(role = %role, "session started");
        self.store.set(TOKEN_KEY, token);
        self.store.set(ROLE_KEY, role.as_str());
    }

    /// Forget the stored credentials.
    pub fn sign_out(&self) {
        tracing::info!("session cleared");
        self.store.remove(TOKEN_KEY);
        self.store.remove(ROLE_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parsing() {
        assert_eq!(Role::from("admin"), Role::Admin);
        assert_eq!(Role::from("user"), Role::User);
        assert_eq!(Role::from(" admin "), Role::Admin);
        assert_eq!(Role::from("Admin"), Role::Other("Admin".to_string()));
        assert_eq!(Role::from("editor").as_str(), "editor");
    }

    #[test]
    fn test_role_serde_as_plain_string() {
        #[derive(Deserialize, Serialize)]
        struct Wrapper {
            role: Role,
        }

        let w: Wrapper = toml::from_str("role = \"admin\"").unwrap();
        assert_eq!(w.role, Role::Admin);

        let out = toml::to_string(&Wrapper { role: Role::User }).unwrap();
        assert_eq!(out.trim(), "role = \"user\"");
    }

    #[test]
    fn test_only_admin_is_admin() {
        assert!(Role::Admin.is_admin());
        assert!(!Role::User.is_admin());
        assert!(!Role::Other("superuser".into()).is_admin());
    }

    #[test]
    fn test_default_role_is_user() {
        assert_eq!(Role::default(), Role::User);
        assert_eq!(Role::default().as_str(), "user");
    }
}
