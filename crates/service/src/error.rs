//! Typed error enum for the service layer.
//!
//! Unifies storage and song info API failures so handlers can match on the
//! failure mode instead of inspecting messages.

use song_library_enrichment::EnrichmentError;
use song_library_storage::StorageError;
use thiserror::Error;

/// Service-layer error unifying storage and enrichment failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed (DB, not found, duplicate).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Song info API call failed or returned an unusable payload.
    #[error("song info API: {0}")]
    Enrichment(#[from] EnrichmentError),

    /// Enrichment succeeded but the song could not be saved.
    #[error("failed to save song {group} - {song}: {source}")]
    SaveSong {
        group: String,
        song: String,
        #[source]
        source: StorageError,
    },

    /// Caller provided invalid input.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl ServiceError {
    /// Whether this error is likely transient (worth retrying by the caller).
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Storage(e) | Self::SaveSong { source: e, .. } => e.is_transient(),
            Self::Enrichment(e) => e.is_timeout(),
            Self::InvalidInput(_) => false,
        }
    }

    /// Whether this error represents a not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Storage(e) if e.is_not_found())
    }

    /// Whether this error represents a duplicate/conflict.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Storage(e) if e.is_duplicate())
    }
}
