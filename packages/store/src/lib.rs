//! # Store crate: the persisted session
//!
//! A tiny key-value abstraction ([`KvStore`]) with one backend per platform and a
//! [`SessionRepository`] that keeps the login record and the remembered email.

pub mod models;
pub mod repo;

mod memory;
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorageStore;

pub use models::{Role, Session};
pub use repo::{KvStore, SessionRepository};
