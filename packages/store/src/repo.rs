//! # SessionRepository: typed session operations on an abstract key/value store
//!
//! [`SessionRepository`] owns the persistence rules for the client session. All
//! reads and writes go through the [`KvStore`] trait, so the same logic runs against
//! an in-memory store (tests), the filesystem (desktop) or `localStorage` (browser).
//!
//! ## Keys
//!
//! | Key | Content |
//! |-----|---------|
//! | [`SESSION_KEY`] | The [`Session`] record serialised as TOML. |
//! | [`REMEMBERED_EMAIL_KEY`] | Plain email string saved by the login form's "remember me". |
//!
//! ## Read path
//!
//! [`load`](SessionRepository::load) never fails: a missing key or a record that no
//! longer parses yields [`Session::default`], i.e. an anonymous session.
//!
//! ## Write path
//!
//! Field setters load the current record, replace one field and save it back, so
//! a profile edit never drops the token and a token refresh never drops the profile.

use crate::models::{Role, Session};

pub const SESSION_KEY: &str = "user-storage";
pub const REMEMBERED_EMAIL_KEY: &str = "remember-me";

/// Async trait for a string key/value persistence back-end.
pub trait KvStore {
    fn get(&self, key: &str) -> impl std::future::Future<Output = Option<String>>;
    fn set(&self, key: &str, value: String) -> impl std::future::Future<Output = ()>;
    fn remove(&self, key: &str) -> impl std::future::Future<Output = ()>;
}

/// Session persistence on top of a [`KvStore`].
#[derive(Clone, Debug)]
pub struct SessionRepository<S: KvStore> {
    store: S,
}

impl<S: KvStore> SessionRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the persisted session, or an anonymous one.
    pub async fn load(&self) -> Session {
        let Some(raw) = self.store.get(SESSION_KEY).await else {
            return Session::default();
        };
        Session::from_toml(&raw).unwrap_or_default()
    }

    pub async fn save(&self, session: &Session) {
        // Session only holds strings and an enum, serialisation cannot fail in practice.
        if let Ok(raw) = session.to_toml() {
            self.store.set(SESSION_KEY, raw).await;
        }
    }

    /// Remove the session record (logout).
    pub async fn clear(&self) {
        self.store.remove(SESSION_KEY).await;
    }

    pub async fn set_access_token(&self, token: Option<String>) -> Session {
        self.update(|s| s.access_token = token).await
    }

    pub async fn set_role(&self, role: Option<Role>) -> Session {
        self.update(|s| s.role = role).await
    }

    pub async fn set_nickname(&self, nickname: Option<String>) -> Session {
        self.update(|s| s.nickname = nickname).await
    }

    pub async fn set_profile_image_url(&self, url: Option<String>) -> Session {
        self.update(|s| s.profile_image_url = url).await
    }

    /// Email pre-filled on the login form, if the user asked to be remembered.
    pub async fn remembered_email(&self) -> Option<String> {
        self.store
            .get(REMEMBERED_EMAIL_KEY)
            .await
            .filter(|e| !e.trim().is_empty())
    }

    pub async fn remember_email(&self, email: Option<&str>) {
        match email {
            Some(e) if !e.trim().is_empty() => {
                self.store
                    .set(REMEMBERED_EMAIL_KEY, e.trim().to_string())
                    .await
            }
            _ => self.store.remove(REMEMBERED_EMAIL_KEY).await,
        }
    }

    async fn update(&self, f: impl FnOnce(&mut Session)) -> Session {
        let mut session = self.load().await;
        f(&mut session);
        self.save(&session).await;
        session
    }
}
