//! This crate contains all shared UI for the workspace: the route table, session
//! context, components, views and the small pure helpers the views lean on.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod route;
pub use route::{Route, Section};

mod session;
pub use session::{
    make_session_repo, sign_in, sign_out, update_session, use_api, use_error_reporter,
    use_session, ErrorReporter, RequireAdmin, RequireLogin, SessionProvider, SessionState,
};

mod navbar;
pub use navbar::Navbar;

pub mod agreement;
pub mod carousel;
pub mod feedback;
pub mod files;
pub mod format;
pub mod pagination;
pub mod polaroid;
mod timer;
pub mod tournament;

pub mod views;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
