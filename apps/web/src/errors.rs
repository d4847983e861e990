use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::evaluation::encoder::EncodeError;
use crate::screens::input::{self, InputView, FILE_TYPE_ALERT, INCOMPLETE_ALERT};
use crate::screens::layout;
use crate::session::controller::TransitionError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// A rejected upload. The Input screen is rendered again with an alert;
    /// the session step does not change.
    #[error("Upload rejected: {reason}")]
    UploadRejected {
        reason: UploadRejection,
        action: String,
        name: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadRejection {
    UnsupportedType,
    Incomplete,
}

impl std::fmt::Display for UploadRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UploadRejection::UnsupportedType => f.write_str("unsupported file type"),
            UploadRejection::Incomplete => f.write_str("name or file missing"),
        }
    }
}

impl UploadRejection {
    pub fn from_encode_error(e: &EncodeError) -> Self {
        match e {
            EncodeError::UnsupportedMediaType(_) => UploadRejection::UnsupportedType,
            EncodeError::Empty => UploadRejection::Incomplete,
        }
    }
}

impl From<TransitionError> for AppError {
    fn from(e: TransitionError) -> Self {
        AppError::Conflict(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::UploadRejected {
                reason,
                action,
                name,
            } => {
                tracing::warn!("Upload rejected: {reason}");
                let (status, alert) = match reason {
                    UploadRejection::UnsupportedType => {
                        (StatusCode::UNSUPPORTED_MEDIA_TYPE, FILE_TYPE_ALERT)
                    }
                    UploadRejection::Incomplete => {
                        (StatusCode::UNPROCESSABLE_ENTITY, INCOMPLETE_ALERT)
                    }
                };
                let body = input::render(&InputView {
                    action: &action,
                    name: &name,
                    alert: Some(alert),
                });
                return (status, Html(layout::page(&body, None, None))).into_response();
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg),
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
