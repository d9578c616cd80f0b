pub mod dto;
pub mod handlers;
pub mod render;
pub mod repo;
pub mod repo_types;
pub mod sanitize;
pub mod services;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(handlers::api_routes())
        .merge(handlers::ui_routes())
}
