use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{instrument, Span};

use crate::{
    auth::dto::{LoginRequest, PublicUser, RegisterRequest, UserInfo},
    error::AppError,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
}

pub fn me_routes() -> Router<AppState> {
    Router::new().route("/me", get(get_me))
}

#[instrument(skip(state, payload), fields(username = tracing::field::Empty))]
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<PublicUser>), AppError> {
    let Json(payload) = payload?;
    Span::current().record("username", payload.username.as_str());
    let user = state
        .inventory()?
        .register(&payload.username, &payload.email, &payload.password)?;
    Ok((StatusCode::CREATED, Json(PublicUser::from(&user))))
}

#[instrument(skip(state, payload), fields(username = tracing::field::Empty))]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<PublicUser>, AppError> {
    let Json(payload) = payload?;
    Span::current().record("username", payload.username.as_str());
    let user = state
        .inventory()?
        .login(&payload.username, &payload.password)?;
    Ok(Json(PublicUser::from(&user)))
}

#[instrument(skip(state))]
pub async fn logout(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.inventory()?.logout()?;
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(state))]
pub async fn get_me(State(state): State<AppState>) -> Result<Json<UserInfo>, AppError> {
    let info = state.inventory()?.user_info()?;
    Ok(Json(info))
}

#[cfg(test)]
mod me_tests {
    use super::*;
    use time::OffsetDateTime;

    #[test]
    fn user_info_serializes_camel_case() {
        let response = UserInfo {
            id: 1,
            username: "ada".into(),
            email: "ada@example.com".into(),
            created_at: OffsetDateTime::UNIX_EPOCH,
            last_login: OffsetDateTime::UNIX_EPOCH,
            asset_count: 3,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("ada@example.com"));
        assert!(json.contains("\"lastLogin\":\"1970-01-01T00:00:00Z\""));
        assert!(json.contains("\"assetCount\":3"));
    }

    #[test]
    fn public_user_hides_password() {
        let json = serde_json::to_string(&PublicUser {
            id: 1,
            username: "ada".into(),
            email: "ada@example.com".into(),
        })
        .unwrap();
        assert!(!json.contains("password"));
    }
}
