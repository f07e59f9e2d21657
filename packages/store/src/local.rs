//! # `localStorage` key-value store: browser-side session persistence
//!
//! [`LocalStorageStore`] is the [`KeyValueStore`] used on the **web platform**.
//! It reads and writes `window.localStorage` through `web-sys`.
//!
//! ## Error handling
//!
//! Storage can be unavailable (private browsing, disabled cookies, quota).
//! All methods swallow those errors: reads return `None`, writes do nothing
//! beyond a warning in the log. A broken storage degrades to "signed out"
//! instead of crashing the UI.

use crate::session::KeyValueStore;

/// `window.localStorage`-backed KeyValueStore.
///
/// Zero-size and `Copy`: the storage handle is looked up on every call
/// because `web_sys::Storage` is not `Send` and the browser caches it anyway.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = self.storage() else {
            tracing::warn!(key, "localStorage unavailable, value not saved");
            return;
        };
        if storage.set_item(key, value).is_err() {
            tracing::warn!(key, "localStorage write failed");
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(key);
        }
    }
}
