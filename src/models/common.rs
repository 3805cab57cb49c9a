//! Request and response bodies of the resolver endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Inbound body of `POST /api/get-preview-url`.
///
/// `trackId` is kept as raw JSON so both string and numeric ids survive;
/// see [`TrackId::from_json`](super::TrackId::from_json).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PreviewRequest {
    #[serde(rename = "trackId", default)]
    pub track_id: Value,
}

/// Successful resolver answer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PreviewResponse {
    #[serde(rename = "previewUrl")]
    pub preview_url: String,
}

impl PreviewResponse {
    /// Create a response carrying the given preview URL.
    pub fn new<S: Into<String>>(preview_url: S) -> Self {
        Self {
            preview_url: preview_url.into(),
        }
    }
}

/// Error answer, `{"error": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    /// Create an error body with the given message.
    pub fn new<S: Into<String>>(error: S) -> Self {
        Self {
            error: error.into(),
        }
    }
}
