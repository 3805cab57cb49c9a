//! Track-related models.
//!
//! Only the slice of the Deezer track object that preview lookups need,
//! plus the normalized identifier used to address it.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Track as returned by `GET /track/{id}`, reduced to the preview fields.
///
/// Built with [`TrackPreview::from_json`], which reads each field on its own
/// so an odd `id` or `title` never hides a usable `preview`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TrackPreview {
    /// Deezer track ID. Negative for user-uploaded tracks.
    #[serde(default)]
    pub id: Option<i64>,

    /// Track title.
    #[serde(default)]
    pub title: Option<String>,

    /// URL of the 30 second preview clip.
    #[serde(default)]
    pub preview: Option<String>,
}

impl TrackPreview {
    /// Read the preview fields out of a raw track object.
    ///
    /// Fields of an unexpected type are treated as absent. `id` may come as
    /// a number or as numeric text.
    pub fn from_json(json: &Value) -> Self {
        let id = json.get("id").and_then(|v| {
            v.as_i64()
                .or_else(|| v.as_str().and_then(|s| s.parse().ok()))
        });

        Self {
            id,
            title: get_string(json, "title"),
            preview: get_string(json, "preview"),
        }
    }

    /// Get the preview URL, if one is present and non-empty.
    pub fn preview_url(&self) -> Option<&str> {
        self.preview.as_deref().filter(|url| !url.is_empty())
    }
}

fn get_string(json: &Value, key: &str) -> Option<String> {
    json.get(key).and_then(|v| v.as_str()).map(str::to_string)
}

/// Track identifier as accepted from clients.
///
/// Deezer ids are numeric, but callers send them either as JSON strings or
/// numbers. Both forms are kept as text and forwarded unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrackId(String);

impl TrackId {
    /// Build an id from an inbound JSON value.
    ///
    /// Returns `None` for anything that is not a usable id: null, empty
    /// strings, zero, booleans, arrays and objects. `true` and non-empty
    /// arrays or objects are rejected too rather than forwarded as text,
    /// since Deezer has no track addressed by them.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) if !s.is_empty() => Some(Self(s.clone())),
            Value::Number(n) if n.as_f64() != Some(0.0) => Some(Self(n.to_string())),
            _ => None,
        }
    }

    /// Get the id as text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
