//! Shared session constructor for all platforms.
//!
//! Returns a [`store::Session`] backed by the appropriate [`store::KeyValueStore`]:
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStorageStore`]
//! - **Native** (tests, tooling): one process-wide [`store::MemoryStore`]

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
use std::sync::OnceLock;

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
static NATIVE_STORE: OnceLock<store::MemoryStore> = OnceLock::new();

/// Create a platform-appropriate session handle.
///
/// Handles are cheap and all point at the same underlying storage, so callers
/// create one per operation instead of holding it across renders.
pub fn make_session() -> store::Session<impl store::KeyValueStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::Session::new(store::LocalStorageStore::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        store::Session::new(NATIVE_STORE.get_or_init(store::MemoryStore::new).clone())
    }
}
