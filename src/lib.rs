//! Personal asset inventory over a local key-value store.
//!
//! [`AssetStore`] holds the users, the single active session and each user's
//! asset list. [`app::build_app`] puts a small axum front-end in front of it
//! that returns JSON or HTML fragments.

pub mod app;
pub mod asset_store;
pub mod assets;
pub mod auth;
pub mod config;
pub mod error;
pub mod state;
pub mod storage;

pub use asset_store::{AssetStore, Clock, SystemClock};
pub use error::{AppError, AppResult};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
