//! # API crate: REST client for the Char 칵 backend
//!
//! Every view in the `ui` crate talks to the backend through [`ApiClient`]. The crate
//! holds no UI code and compiles for both the browser (`wasm32`) and native targets.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Backend base URL (`BASEURL`) |
//! | [`error`] | [`ApiError`], the failure type of every call |
//! | [`models`] | Request/response models and the `{isSuccess, code, message, result}` envelope |
//! | [`upload`] | [`Upload`], a picked file ready for a multipart body |
//! | [`validation`] | Form structs that check input before a request is built |
//!
//! ## Endpoints
//!
//! Endpoint wrappers are inherent methods on [`ApiClient`], grouped by resource:
//!
//! - **User**: `sign_up`, `login`, `check_email_duplicate`, `check_nickname_duplicate`,
//!   `get_user_role`, `get_user_info`, `update_nickname`, `update_profile_image`,
//!   `set_default_profile_image`, `get_profile_image_url`, `update_password`
//! - **Community**: `create_post`, `get_post`, `get_top_posts`, `get_posts`,
//!   `search_posts_by_title`, `delete_post`, comments, likes and hashtags
//! - **Photo evaluation**: `create_image_evaluations`, `get_image_evaluation` and the
//!   today / recent / all / paged listings
//! - **Learning materials**: create, delete, restore, get, list
//! - **Weekly photo**: `create_photo_rank`, `update_photo_rank_counts`, `get_photo_ranks`

mod client;
pub mod config;
pub mod error;
pub mod models;
mod services;
pub mod upload;
pub mod validation;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::ApiError;
pub use models::*;
pub use upload::Upload;

pub use store::{Role, Session};
