//! Public Deezer API client.
//!
//! This module provides a client for the public Deezer API (api.deezer.com),
//! limited to the track lookup used to resolve preview URLs.
//! No authentication is required.

use reqwest::{Client, StatusCode, Url};
use serde_json::Value;
use tracing::debug;

use crate::error::{PreviewError, Result};
use crate::models::TrackPreview;

/// Base URL for the Deezer public API.
pub const API_BASE_URL: &str = "https://api.deezer.com/";

/// Public Deezer API client.
///
/// Every lookup is a single GET with library-default timeouts. Nothing is
/// cached and failed calls are not retried.
///
/// # Example
///
/// ```rust,no_run
/// use deezer_preview::DeezerApi;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let api = DeezerApi::new();
///     match api.get_preview_url("3135556").await? {
///         Some(url) => println!("Preview: {}", url),
///         None => println!("No preview"),
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct DeezerApi {
    client: Client,
    base_url: Url,
}

impl Default for DeezerApi {
    fn default() -> Self {
        Self::new()
    }
}

impl DeezerApi {
    /// Create a new Deezer API client against the production API.
    pub fn new() -> Self {
        let base_url = Url::parse(API_BASE_URL).expect("API_BASE_URL is a valid URL");
        Self {
            client: build_client(),
            base_url,
        }
    }

    /// Create a client against another base URL, e.g. a local mock or proxy.
    ///
    /// # Errors
    ///
    /// Returns `InvalidBaseUrl` if `base_url` is not an absolute http(s) URL.
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let mut url = Url::parse(base_url)
            .map_err(|e| PreviewError::InvalidBaseUrl(format!("{}: {}", base_url, e)))?;

        if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
            return Err(PreviewError::InvalidBaseUrl(base_url.to_string()));
        }

        // Url::join semantics: without the slash the last segment is replaced
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        Ok(Self {
            client: build_client(),
            base_url: url,
        })
    }

    /// Get the base URL lookups are made against.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Build `{base}track/{id}`, percent-encoding the id as one path segment.
    fn track_url(&self, track_id: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("track").push(track_id);
        }
        url
    }

    /// Get the preview fields of a track.
    ///
    /// Returns `None` when the API answers with anything but 200, or with
    /// one of its in-body error objects (`{"error": {...}}` with status 200).
    pub async fn get_track_preview(&self, track_id: &str) -> Result<Option<TrackPreview>> {
        let url = self.track_url(track_id);
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            debug!("Deezer API returned {} for track {}", status, track_id);
            return Ok(None);
        }

        let body = response.bytes().await?;
        let data: Value = serde_json::from_slice(&body)?;

        if let Some(error) = data.get("error") {
            let error_msg = error
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or("Unknown error");
            debug!("Deezer API error for track {}: {}", track_id, error_msg);
            return Ok(None);
        }

        Ok(Some(TrackPreview::from_json(&data)))
    }

    /// Get the preview URL of a track.
    ///
    /// `Ok(None)` covers both a non-200 answer and a track whose `preview`
    /// field is missing, null or empty.
    pub async fn get_preview_url(&self, track_id: &str) -> Result<Option<String>> {
        let track = self.get_track_preview(track_id).await?;
        Ok(track.and_then(|t| t.preview_url().map(str::to_string)))
    }
}

fn build_client() -> Client {
    Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Failed to create HTTP client")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_track_url() {
        let api = DeezerApi::new();
        assert_eq!(
            api.track_url("3135556").as_str(),
            "https://api.deezer.com/track/3135556"
        );
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let api = DeezerApi::with_base_url("http://127.0.0.1:8080/deezer").unwrap();
        assert_eq!(api.base_url(), "http://127.0.0.1:8080/deezer/");
        assert_eq!(
            api.track_url("42").as_str(),
            "http://127.0.0.1:8080/deezer/track/42"
        );
    }

    #[test]
    fn test_track_id_is_one_segment() {
        let api = DeezerApi::new();
        assert_eq!(
            api.track_url("1/../album?x").as_str(),
            "https://api.deezer.com/track/1%2F..%2Falbum%3Fx"
        );
    }

    #[test]
    fn test_invalid_base_urls() {
        assert!(matches!(
            DeezerApi::with_base_url("not a url"),
            Err(PreviewError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            DeezerApi::with_base_url("ftp://example.com/"),
            Err(PreviewError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            DeezerApi::with_base_url("mailto:someone@example.com"),
            Err(PreviewError::InvalidBaseUrl(_))
        ));
    }
}
