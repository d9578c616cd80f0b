use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::Html,
    routing::get,
    Json, Router,
};
use tracing::instrument;

use crate::{
    assets::{
        dto::{AssetDetails, AssetFilter, DashboardSummary, DeleteOutcome, DeleteParams, NewAssetForm},
        render::{self, NoticeKind},
        repo_types::Asset,
    },
    error::AppError,
    state::AppState,
};

// --- public routers ---

pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/assets", get(list_assets).post(create_asset))
        .route("/assets/:id", get(get_asset).delete(delete_asset))
        .route("/dashboard", get(get_dashboard))
}

pub fn ui_routes() -> Router<AppState> {
    Router::new()
        .route("/ui/assets", get(asset_grid))
        .route("/ui/assets/:id", get(asset_details))
        .route(
            "/ui/assets/:id/delete",
            get(delete_prompt).post(confirm_delete),
        )
        .route("/ui/dashboard", get(dashboard_panel))
}

// --- JSON handlers ---

#[instrument(skip(state))]
pub async fn list_assets(
    State(state): State<AppState>,
    Query(filter): Query<AssetFilter>,
) -> Result<Json<Vec<Asset>>, AppError> {
    let assets = state.inventory()?.filter(&filter)?;
    Ok(Json(assets))
}

#[instrument(skip(state, form))]
pub async fn create_asset(
    State(state): State<AppState>,
    form: Result<Json<NewAssetForm>, JsonRejection>,
) -> Result<(StatusCode, HeaderMap, Json<Asset>), AppError> {
    let Json(form) = form?;
    let asset = state.inventory()?.add_asset(form)?;

    let mut headers = HeaderMap::new();
    let location = HeaderValue::from_str(&format!("/api/v1/assets/{}", asset.id))
        .map_err(|e| AppError::Internal(e.to_string()))?;
    headers.insert(header::LOCATION, location);

    Ok((StatusCode::CREATED, headers, Json(asset)))
}

#[instrument(skip(state))]
pub async fn get_asset(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<AssetDetails>, AppError> {
    let details = state.inventory()?.view_asset(id)?;
    Ok(Json(details))
}

#[instrument(skip(state))]
pub async fn delete_asset(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<DeleteParams>,
) -> Result<StatusCode, AppError> {
    let outcome = state.inventory()?.delete_asset(id, params.confirm)?;
    match outcome {
        DeleteOutcome::Deleted => Ok(StatusCode::NO_CONTENT),
        DeleteOutcome::NotFound => Err(AppError::AssetNotFound(id)),
        DeleteOutcome::Cancelled => Err(AppError::ConfirmationRequired),
    }
}

#[instrument(skip(state))]
pub async fn get_dashboard(State(state): State<AppState>) -> Result<Json<DashboardSummary>, AppError> {
    let summary = state.inventory()?.dashboard()?;
    Ok(Json(summary))
}

// --- HTML fragments ---

#[instrument(skip(state))]
pub async fn asset_grid(
    State(state): State<AppState>,
    Query(filter): Query<AssetFilter>,
) -> Result<Html<String>, AppError> {
    let assets = state.inventory()?.filter(&filter)?;
    let html = if filter.is_active() {
        render::filtered_grid(&assets)
    } else {
        render::asset_grid(&assets)
    };
    Ok(Html(html))
}

#[instrument(skip(state))]
pub async fn asset_details(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, AppError> {
    let details = state.inventory()?.view_asset(id)?;
    Ok(Html(render::asset_details(&details)))
}

#[instrument(skip(state))]
pub async fn delete_prompt(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, AppError> {
    let asset = state.inventory()?.asset(id)?;
    Ok(Html(render::delete_prompt(&asset)))
}

/// Deletes, then answers with a notice followed by the refreshed grid.
#[instrument(skip(state))]
pub async fn confirm_delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<DeleteParams>,
) -> Result<Html<String>, AppError> {
    let (outcome, remaining) = {
        let mut inventory = state.inventory()?;
        let outcome = inventory.delete_asset(id, params.confirm)?;
        (outcome, inventory.list_assets()?)
    };

    let notice = match outcome {
        DeleteOutcome::Deleted => render::notification("Asset deleted successfully!", NoticeKind::Success),
        DeleteOutcome::NotFound => render::notification(&AppError::AssetNotFound(id).to_string(), NoticeKind::Error),
        DeleteOutcome::Cancelled => render::notification("Deletion cancelled.", NoticeKind::Error),
    };
    Ok(Html(format!("{notice}{}", render::asset_grid(&remaining))))
}

#[instrument(skip(state))]
pub async fn dashboard_panel(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let summary = state.inventory()?.dashboard()?;
    Ok(Html(render::dashboard(&summary)))
}
