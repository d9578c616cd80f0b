use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::storage::StorageError;

/// Every failure an `AssetStore` operation can report. Each one aborts the
/// current operation; the message is what the user gets to see.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Username already exists!")]
    DuplicateUsername,

    #[error("Email already registered!")]
    DuplicateEmail,

    #[error("Please enter a valid email address!")]
    InvalidEmail,

    #[error("Invalid username or password!")]
    InvalidCredentials,

    #[error("Please login first!")]
    NotAuthenticated,

    #[error("{0}")]
    Validation(String),

    #[error("Asset not found: {0}")]
    AssetNotFound(i64),

    #[error("Are you sure you want to delete this asset?")]
    ConfirmationRequired,

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::DuplicateUsername | AppError::DuplicateEmail => StatusCode::CONFLICT,
            AppError::InvalidEmail | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials | AppError::NotAuthenticated => StatusCode::UNAUTHORIZED,
            AppError::AssetNotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConfirmationRequired => StatusCode::PRECONDITION_REQUIRED,
            AppError::Storage(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Unreadable request bodies get the same `{"error": …}` shape as every other failure.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::Storage(_) => "Storage error".to_string(),
            AppError::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        };
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = serde_json::json!({
            "error": message,
        });

        (status, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;
