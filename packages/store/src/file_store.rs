//! # Filesystem-backed key/value store
//!
//! [`FileStore`] is a [`KvStore`] implementation that keeps one file per key under
//! a base directory. It is used by the desktop launcher so the session survives
//! app restarts the way `localStorage` does in the browser.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── user-storage.toml    # session record
//! └── remember-me.toml     # remembered login email
//! ```
//!
//! ## Platform data directories
//!
//! Use [`dirs::data_dir()`] to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/charkak/` |
//! | Linux | `~/.local/share/charkak/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\charkak\` |

use std::path::PathBuf;

use crate::repo::KvStore;

/// Filesystem-backed KvStore for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        // Keys are fixed identifiers, but never let one escape the base directory.
        let safe: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.base.join(format!("{safe}.toml"))
    }
}

impl KvStore for FileStore {
    async fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.entry_path(key)).ok()
    }

    async fn set(&self, key: &str, value: String) {
        let path = self.entry_path(key);
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let _ = std::fs::write(path, value);
    }

    async fn remove(&self, key: &str) {
        let _ = std::fs::remove_file(self.entry_path(key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Role, Session};
    use crate::repo::{KvStore, SessionRepository};

    #[tokio::test]
    async fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();

        let repo = SessionRepository::new(FileStore::new(dir.path().join("charkak")));
        let session = Session {
            access_token: Some("bearer-token".to_string()),
            role: Some(Role::Admin),
            nickname: Some("자연광러버".to_string()),
            profile_image_url: None,
        };
        repo.save(&session).await;

        // Re-open from same directory
        let repo2 = SessionRepository::new(FileStore::new(dir.path().join("charkak")));
        assert_eq!(repo2.load().await, session);

        repo2.clear().await;
        assert!(!repo.load().await.is_authenticated());
    }

    #[tokio::test]
    async fn test_keys_stay_inside_base() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());

        store.set("../escape", "x".to_string()).await;
        assert!(dir.path().join("___escape.toml").exists());
        assert_eq!(store.get("../escape").await.as_deref(), Some("x"));
    }
}
