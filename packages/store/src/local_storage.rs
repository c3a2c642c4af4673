//! # localStorage key/value store: browser-side persistence
//!
//! [`LocalStorageStore`] is the [`KvStore`] implementation used on the **web platform**.
//! Every key is prefixed (default `"charkak."`) so the session does not collide with
//! other applications served from the same origin.
//!
//! ## Error handling
//!
//! All trait methods silently swallow errors (returning `None` for reads, doing
//! nothing for writes). Private browsing modes may refuse `localStorage`; the app then
//! behaves as if nobody is logged in instead of crashing.

use crate::repo::KvStore;
use web_sys::Storage;

const DEFAULT_PREFIX: &str = "charkak";

/// `window.localStorage`-backed KvStore for the web platform.
#[derive(Clone, Debug)]
pub struct LocalStorageStore {
    prefix: String,
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalStorageStore {
    pub fn new() -> Self {
        Self::with_prefix(DEFAULT_PREFIX)
    }

    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
        }
    }

    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    fn full_key(&self, key: &str) -> String {
        format!("{}.{key}", self.prefix)
    }
}

impl KvStore for LocalStorageStore {
    async fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(&self.full_key(key)).ok().flatten()
    }

    async fn set(&self, key: &str, value: String) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(&self.full_key(key), &value);
        }
    }

    async fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(&self.full_key(key));
        }
    }
}
