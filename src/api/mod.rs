//! API clients for Deezer.
//!
//! - [`DeezerApi`]: Public API for track lookups (no auth required)

pub mod public;

pub use public::{DeezerApi, API_BASE_URL};
