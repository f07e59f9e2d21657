use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::session::KeyValueStore;

/// In-memory KeyValueStore for testing and native builds.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{Credentials, Role, Session, ROLE_KEY, TOKEN_KEY};

    #[test]
    fn test_sign_in_and_read_back() {
        let store = MemoryStore::new();
        let session = Session::new(store.clone());

        // Initially empty
        assert!(!session.is_authenticated());
        assert!(session.credentials().is_none());

        session.sign_in("abc123", &Role::Admin);

        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("abc123"));
        assert_eq!(store.get(ROLE_KEY).as_deref(), Some("admin"));
        assert_eq!(
            session.credentials(),
            Some(Credentials {
                token: "abc123".to_string(),
                role: Some(Role::Admin),
            })
        );
    }

    #[test]
    fn test_sign_out_clears_both_keys() {
        let store = MemoryStore::new();
        let session = Session::new(store.clone());

        session.sign_in("abc123", &Role::User);
        store.set("theme", "dark");
        session.sign_out();

        assert!(store.get(TOKEN_KEY).is_none());
        assert!(store.get(ROLE_KEY).is_none());
        assert!(!session.is_authenticated());
        // Unrelated keys survive
        assert_eq!(store.get("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_empty_token_is_not_a_session() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "  ");
        store.set(ROLE_KEY, "admin");

        let session = Session::new(store);
        assert!(session.credentials().is_none());
    }

    #[test]
    fn test_token_without_role() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "tok");

        let creds = Session::new(store).credentials().unwrap();
        assert_eq!(creds.token, "tok");
        assert!(creds.role.is_none());
    }

    #[test]
    fn test_clones_share_entries() {
        let a = MemoryStore::new();
        let b = a.clone();
        a.set("k", "v");
        assert_eq!(b.get("k").as_deref(), Some("v"));
        assert_eq!(b.len(), 1);
    }
}
