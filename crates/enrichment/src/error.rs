//! Typed error enum for the enrichment crate.

use std::time::Duration;

use song_library_core::ValidationError;
use thiserror::Error;

/// Errors from song info API calls.
#[derive(Debug, Error)]
pub enum EnrichmentError {
    #[error("song info request failed: {0}")]
    HttpRequest(#[source] reqwest::Error),
    #[error("song info request timed out after {0:?}")]
    Timeout(Duration),
    #[error("song info API returned status {code}: {body}")]
    HttpStatus { code: u16, body: String },
    #[error("JSON parse error in {context}: {source}")]
    JsonParse {
        context: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("song info payload rejected: {0}")]
    InvalidPayload(#[from] ValidationError),
    #[error("client initialization failed: {0}")]
    ClientInit(String),
}

impl EnrichmentError {
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }
}
