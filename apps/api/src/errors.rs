use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::extraction::ExtractionError;

/// One structured entry of a 422 `detail` array.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    #[serde(rename = "type")]
    pub kind: String,
    pub loc: Vec<String>,
    pub msg: String,
}

impl FieldError {
    /// A required form field that never appeared in the body.
    pub fn missing(field: &str) -> Self {
        Self {
            kind: "missing".to_string(),
            loc: vec!["body".to_string(), field.to_string()],
            msg: "Field required".to_string(),
        }
    }

    pub fn not_a_string(field: &str) -> Self {
        Self {
            kind: "string_type".to_string(),
            loc: vec!["body".to_string(), field.to_string()],
            msg: "Input should be a valid string".to_string(),
        }
    }

    /// The body itself could not be read as a multipart form.
    pub fn malformed_body(reason: impl Into<String>) -> Self {
        Self {
            kind: "multipart".to_string(),
            loc: vec!["body".to_string()],
            msg: reason.into(),
        }
    }
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// LLM and model-output failures never appear here: they travel in-band as
/// `AnalysisResult::Failure` with a 200 status.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation failed for {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    #[error("Document parse error: {0}")]
    DocumentParse(#[from] ExtractionError),

    #[error("Upload exceeds the {0} byte limit")]
    PayloadTooLarge(usize),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Validation(errors) => {
                tracing::warn!("Validation error: {errors:?}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    json!({ "detail": errors }),
                )
            }
            AppError::DocumentParse(e) => {
                tracing::error!("Document parse error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "detail": { "error": "Failed to extract text from the uploaded document." } }),
                )
            }
            AppError::PayloadTooLarge(limit) => (
                StatusCode::PAYLOAD_TOO_LARGE,
                json!({ "detail": { "error": format!("Upload exceeds the {limit} byte limit.") } }),
            ),
            AppError::Internal(e) => {
                tracing::error!("Unexpected error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "detail": { "error": "An internal server error occurred" } }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Response for a handler panic, in the same envelope as any other unexpected failure.
/// Installed through tower-http's `CatchPanicLayer`.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = panic
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| panic.downcast_ref::<&str>().map(|s| s.to_string()))
        .unwrap_or_else(|| "unknown panic payload".to_string());
    AppError::Internal(anyhow::anyhow!("handler panicked: {message}")).into_response()
}
