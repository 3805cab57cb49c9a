//! # Deezer Preview
//!
//! Resolve and fetch the 30 second preview clips Deezer publishes for its
//! tracks.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use deezer_preview::DeezerApi;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = DeezerApi::new();
//!     if let Some(url) = api.get_preview_url("3135556").await? {
//!         println!("Preview: {}", url);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Components
//!
//! - [`server`] - `POST /api/get-preview-url` relay in front of [`DeezerApi`]
//! - [`PreviewFetcher`] - downloads one preview clip to disk
//!
//! The `preview-server` and `preview-fetch` binaries wrap these two.

pub mod api;
pub mod error;
pub mod fetcher;
pub mod logging;
pub mod models;
pub mod server;

pub use api::DeezerApi;
pub use error::PreviewError;
pub use fetcher::{FetchOutcome, PreviewFetcher};
pub use models::{TrackId, TrackPreview};
pub use server::ServerConfig;
