//! Data models for the Deezer track API and the resolver endpoint.

pub mod common;
pub mod track;

// Re-exports for convenience
pub use common::{ErrorBody, PreviewRequest, PreviewResponse};
pub use track::{TrackId, TrackPreview};
