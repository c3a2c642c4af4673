//! Endpoint wrappers, one `impl ApiClient` block per backend resource.

mod comment;
mod hashtag;
mod image_evaluation;
mod learning_material;
mod like;
mod photo_rank;
mod post;
mod user;
