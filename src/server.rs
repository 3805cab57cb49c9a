//! HTTP surface of the preview resolver.
//!
//! `POST /api/get-preview-url` takes `{"trackId": ...}`, looks the track up
//! on the Deezer API and answers with `{"previewUrl": ...}`. A missing id is
//! a 400; any failed or empty lookup is a 404.

use std::net::SocketAddr;

use axum::body::Bytes;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

use crate::api::{DeezerApi, API_BASE_URL};
use crate::error::{PreviewError, Result};
use crate::models::TrackId;

pub use crate::models::{ErrorBody, PreviewRequest, PreviewResponse};

/// Default listen address.
pub const DEFAULT_BIND: &str = "127.0.0.1:5000";

/// Settings for [`serve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on.
    pub bind: SocketAddr,
    /// Deezer API base URL.
    pub api_base: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 5000)),
            api_base: API_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
struct AppState {
    api: DeezerApi,
}

/// Build the resolver application.
pub fn router(api: DeezerApi) -> Router {
    Router::new()
        .route("/api/get-preview-url", post(get_preview_url))
        .route("/health", get(health))
        .with_state(AppState { api })
}

/// Bind `config.bind` and serve until Ctrl-C.
pub async fn serve(config: ServerConfig) -> Result<()> {
    let api = DeezerApi::with_base_url(&config.api_base)?;
    let listener = TcpListener::bind(config.bind).await?;
    info!(
        "Preview resolver listening on {} (upstream {})",
        listener.local_addr()?,
        api.base_url()
    );

    axum::serve(listener, router(api))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Preview resolver stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Could not listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}

/// `POST /api/get-preview-url`
///
/// The body is parsed as JSON whatever its content type; a body that is not
/// a JSON object counts as a missing track id.
async fn get_preview_url(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PreviewResponse>> {
    let track_id = parse_track_id(&body).ok_or(PreviewError::MissingTrackId)?;

    match state.api.get_preview_url(track_id.as_str()).await {
        Ok(Some(url)) => {
            debug!("Track {} preview: {}", track_id, url);
            Ok(Json(PreviewResponse::new(url)))
        }
        Ok(None) => {
            debug!("Track {} has no preview", track_id);
            Err(PreviewError::NotFound)
        }
        Err(e) => {
            // Reported to the client as a plain 404 all the same
            warn!("Preview lookup for track {} failed: {}", track_id, e);
            Err(e)
        }
    }
}

/// `GET /health`
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

fn parse_track_id(body: &[u8]) -> Option<TrackId> {
    let value: Value = serde_json::from_slice(body).ok()?;
    // Structs also deserialize from JSON arrays; only objects are requests.
    if !value.is_object() {
        return None;
    }
    let request: PreviewRequest = serde_json::from_value(value).ok()?;
    TrackId::from_json(&request.track_id)
}
