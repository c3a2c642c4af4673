//! Session context and hooks for the UI.
//!
//! [`SessionProvider`] loads the persisted [`Session`] once on mount and shares it
//! as a `Signal<SessionState>`. Views read it through [`use_session`] and talk to
//! the backend through [`use_api`], which always carries the current token.
//!
//! The persisted record lives in:
//! - **Web** (WASM + `web` feature): `localStorage` via [`store::LocalStorageStore`]
//! - **Desktop** (native): `<data_dir>/charkak/` via [`store::FileStore`]

use api::{ApiClient, ApiError};
use dioxus::prelude::*;
use store::{KvStore, Session, SessionRepository};

use crate::components::{use_toast, Toasts};
use crate::Route;

/// Session as seen by the views.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub session: Session,
    /// `true` until the persisted record has been read.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            session: Session::default(),
            loading: true,
        }
    }
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn is_admin(&self) -> bool {
        self.session.is_admin()
    }
}

/// Create the platform-appropriate session repository.
pub fn make_session_repo() -> SessionRepository<impl KvStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        SessionRepository::new(store::LocalStorageStore::default())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("charkak");
        SessionRepository::new(store::FileStore::new(base))
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        SessionRepository::new(store::MemoryStore::new())
    }
}

pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Backend client authorised with the current session token.
pub fn use_api() -> ApiClient {
    let base = use_context::<ApiClient>();
    let state = use_session();
    let token = state.read().session.access_token.clone();
    base.with_token(token)
}

/// Wrap the app with this component to enable sessions.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let mut state = use_signal(SessionState::default);
    use_context_provider(ApiClient::from_env);

    let _ = use_resource(move || async move {
        let session = make_session_repo().load().await;
        tracing::debug!(
            authenticated = session.is_authenticated(),
            "session restored"
        );
        state.set(SessionState {
            session,
            loading: false,
        });
    });

    use_context_provider(|| state);

    rsx! {
        {children}
    }
}

/// Persist a freshly issued session and publish it.
pub async fn sign_in(mut state: Signal<SessionState>, session: Session) {
    make_session_repo().save(&session).await;
    tracing::info!(role = ?session.role, "signed in");
    state.set(SessionState {
        session,
        loading: false,
    });
}

/// Drop the session everywhere.
pub async fn sign_out(mut state: Signal<SessionState>) {
    make_session_repo().clear().await;
    tracing::info!("signed out");
    state.set(SessionState {
        session: Session::default(),
        loading: false,
    });
}

/// Patch the session (profile edit) and persist the result.
pub async fn update_session(mut state: Signal<SessionState>, f: impl FnOnce(&mut Session)) {
    let mut session = state.read().session.clone();
    f(&mut session);
    make_session_repo().save(&session).await;
    state.write().session = session;
}

/// Returns whether the current user may see a login-only view. Once the session
/// has loaded, anonymous users are sent to the login page with `message`.
pub fn use_login_guard(message: &'static str) -> bool {
    let state = use_session();
    let nav = use_navigator();
    let toast = use_toast();

    use_effect(move || {
        let current = state.read();
        if !current.loading && !current.is_authenticated() {
            toast.info(message);
            nav.replace(Route::Login {});
        }
    });

    let authenticated = state.read().is_authenticated();
    authenticated
}

/// Like [`use_login_guard`], but also sends signed-in non-admins home.
pub fn use_admin_guard() -> bool {
    let state = use_session();
    let nav = use_navigator();
    let toast = use_toast();

    use_effect(move || {
        let current = state.read();
        if current.loading {
            return;
        }
        if !current.is_authenticated() {
            toast.info("Please log in to continue.");
            nav.replace(Route::Login {});
        } else if !current.is_admin() {
            toast.error("Only administrators can open this page.");
            nav.replace(Route::Home {});
        }
    });

    let admin = state.read().is_admin();
    admin
}

/// Renders `children` only for signed-in users.
#[component]
pub fn RequireLogin(message: &'static str, children: Element) -> Element {
    if use_login_guard(message) {
        rsx! { {children} }
    } else {
        rsx! {}
    }
}

/// Renders `children` only for administrators.
#[component]
pub fn RequireAdmin(children: Element) -> Element {
    if use_admin_guard() {
        rsx! { {children} }
    } else {
        rsx! {}
    }
}

/// Uniform handling of a failed backend call: log it, and either show a notice or,
/// for an expired session, sign out and go to the login page.
#[derive(Clone, Copy)]
pub struct ErrorReporter {
    state: Signal<SessionState>,
    toast: Toasts,
    nav: Navigator,
}

impl ErrorReporter {
    pub fn report(&self, context: &str, err: &ApiError) {
        tracing::error!("{context}: {err}");
        #[cfg(target_arch = "wasm32")]
        web_sys::console::warn_1(&format!("{context}: {err}").into());
        if err.is_unauthorized() {
            let state = self.state;
            let nav = self.nav;
            self.toast.info("Your session has expired. Please log in again.");
            spawn(async move {
                sign_out(state).await;
                nav.push(Route::Login {});
            });
        } else {
            self.toast.error(err.user_message());
        }
    }
}

pub fn use_error_reporter() -> ErrorReporter {
    ErrorReporter {
        state: use_session(),
        toast: use_toast(),
        nav: use_navigator(),
    }
}
