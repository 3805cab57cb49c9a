//! Error types for preview lookups and downloads.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::models::ErrorBody;

/// Main error type for all preview operations.
#[derive(Debug, Error)]
pub enum PreviewError {
    /// The inbound request carried no usable track id.
    #[error("Missing trackId")]
    MissingTrackId,

    /// The track has no preview, or the upstream lookup did not succeed.
    #[error("Not found")]
    NotFound,

    /// The configured upstream base URL could not be parsed.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// HTTP request failed.
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    /// I/O operation failed.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl PreviewError {
    /// HTTP status reported to resolver clients.
    ///
    /// Everything except a missing track id collapses into 404.
    pub fn status(&self) -> StatusCode {
        match self {
            PreviewError::MissingTrackId => StatusCode::BAD_REQUEST,
            _ => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for PreviewError {
    fn into_response(self) -> Response {
        let message = match &self {
            PreviewError::MissingTrackId => "Missing trackId",
            _ => "Not found",
        };
        (self.status(), Json(ErrorBody::new(message))).into_response()
    }
}

/// Result type alias for preview operations.
pub type Result<T> = std::result::Result<T, PreviewError>;
