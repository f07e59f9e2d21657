pub mod config;
pub mod session;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorageStore;

pub use config::{AiBackendKind, AuthScheme, VoidNotesConfig};
pub use session::{Credentials, KeyValueStore, Role, Session};
