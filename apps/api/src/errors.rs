use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Only input problems and genuine internal faults end up here; upstream
/// failures are absorbed by the pipelines and reported as `SourceStatus`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Session expired")]
    SessionExpired,

    #[error("Upload error: {0}")]
    Upload(#[from] MultipartError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::SessionExpired => (
                StatusCode::BAD_REQUEST,
                "SESSION_EXPIRED",
                "Session expired. Please upload resume again.".to_string(),
            ),
            AppError::Upload(e) => {
                tracing::warn!("Multipart upload rejected: {e}");
                (StatusCode::BAD_REQUEST, "UPLOAD_ERROR", e.body_text())
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

/// Failure talking to one of the third-party APIs (search, video, generation).
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("upstream returned empty content")]
    EmptyContent,
}

/// Outcome of a single upstream lookup, kept alongside the data it produced so
/// callers can tell "nothing found" apart from "source unavailable".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum SourceStatus {
    Ok,
    NoResults,
    Unavailable(String),
}

impl SourceStatus {
    /// Classifies a finished lookup by whether it errored or came back empty.
    pub fn of<T>(result: &Result<Vec<T>, UpstreamError>) -> Self {
        match result {
            Ok(items) if items.is_empty() => SourceStatus::NoResults,
            Ok(_) => SourceStatus::Ok,
            Err(e) => SourceStatus::Unavailable(e.to_string()),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, SourceStatus::Ok)
    }
}
