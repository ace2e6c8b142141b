use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Key-value store unavailable: {0}")]
    Store(#[from] redis::RedisError),

    #[error("Key-value store timed out after {0:?}")]
    StoreTimeout(Duration),

    #[error("Stored record '{key}' is not a valid resume: {source}")]
    BadRecord {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Authentication required".to_string(),
            ),
            AppError::Store(e) => {
                tracing::error!("Key-value store error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "STORE_UNAVAILABLE",
                    "The resume store is unavailable".to_string(),
                )
            }
            AppError::StoreTimeout(limit) => {
                tracing::error!("Key-value store timed out after {limit:?}");
                (
                    StatusCode::GATEWAY_TIMEOUT,
                    "STORE_TIMEOUT",
                    "The resume store did not respond in time".to_string(),
                )
            }
            AppError::BadRecord { key, source } => {
                tracing::error!("Stored record '{key}' failed to deserialize: {source}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "BAD_RECORD",
                    format!("Stored record '{key}' is not a valid resume"),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
