//! # API crate: typed REST client for the dashboard backend
//!
//! Everything the frontend needs to talk to the user-management backend lives
//! here: the wire models, the request payload types, the error taxonomy, and
//! the [`ApiClient`] itself.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: list/create/update/delete against `{base}/users` |
//! | [`error`] | [`ApiError`]: the two failure kinds (transport vs. backend rejection) |
//! | [`models`] | [`User`], the editable [`UserDraft`], and the `CreateUser`/`UpdateUser` payloads |
//!
//! The client is constructed with an explicit base URL; nothing in this crate
//! reads configuration ambiently.

pub mod client;
pub mod error;
pub mod models;

pub use client::ApiClient;
pub use error::ApiError;
pub use models::{CreateUser, UpdateUser, User, UserDraft};
