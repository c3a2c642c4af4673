use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::repo::KvStore;

/// In-memory KvStore for testing and as a fallback when no durable storage exists.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    async fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    async fn set(&self, key: &str, value: String) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value);
        }
    }

    async fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Role, Session};
    use crate::repo::{KvStore, SessionRepository, SESSION_KEY};

    #[tokio::test]
    async fn test_load_without_record_is_anonymous() {
        let repo = SessionRepository::new(MemoryStore::new());
        let session = repo.load().await;
        assert_eq!(session, Session::default());
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let store = MemoryStore::new();
        let repo = SessionRepository::new(store.clone());

        let session = Session {
            access_token: Some("token-1".to_string()),
            role: Some(Role::User),
            nickname: Some("셀카여신".to_string()),
            profile_image_url: Some("https://cdn.example/p.jpg".to_string()),
        };
        repo.save(&session).await;

        // A second repository over the same store sees the record
        let reopened = SessionRepository::new(store);
        assert_eq!(reopened.load().await, session);
    }

    #[tokio::test]
    async fn test_setters_keep_other_fields() {
        let repo = SessionRepository::new(MemoryStore::new());

        repo.set_access_token(Some("tok".to_string())).await;
        repo.set_role(Some(Role::Admin)).await;
        repo.set_nickname(Some("admin".to_string())).await;
        let session = repo
            .set_profile_image_url(Some("/img.png".to_string()))
            .await;

        assert_eq!(session.access_token.as_deref(), Some("tok"));
        assert_eq!(session.role, Some(Role::Admin));
        assert_eq!(session.nickname.as_deref(), Some("admin"));
        assert_eq!(session.profile_image_url.as_deref(), Some("/img.png"));
        assert_eq!(repo.load().await, session);
    }

    #[tokio::test]
    async fn test_clear_logs_out() {
        let repo = SessionRepository::new(MemoryStore::new());
        repo.save(&Session::with_token("tok")).await;
        assert!(repo.load().await.is_authenticated());

        repo.clear().await;
        assert!(!repo.load().await.is_authenticated());
    }

    #[tokio::test]
    async fn test_corrupt_record_falls_back_to_default() {
        let store = MemoryStore::new();
        store.set(SESSION_KEY, "not = [valid".to_string()).await;
        let repo = SessionRepository::new(store);
        assert_eq!(repo.load().await, Session::default());
    }

    #[tokio::test]
    async fn test_remember_email() {
        let repo = SessionRepository::new(MemoryStore::new());
        assert!(repo.remembered_email().await.is_none());

        repo.remember_email(Some(" me@example.com ")).await;
        assert_eq!(
            repo.remembered_email().await.as_deref(),
            Some("me@example.com")
        );

        // Logging out keeps the remembered email
        repo.clear().await;
        assert!(repo.remembered_email().await.is_some());

        repo.remember_email(None).await;
        assert!(repo.remembered_email().await.is_none());
    }
}
