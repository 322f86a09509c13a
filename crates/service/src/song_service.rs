use std::sync::Arc;

use song_library_core::{Page, Song, SongFilter, SongUpdate};
use song_library_enrichment::SongInfoClient;
use song_library_storage::SongStore;

use crate::ServiceError;

pub struct SongService {
    storage: Arc<dyn SongStore>,
    song_info: SongInfoClient,
}

impl SongService {
    #[must_use]
    pub fn new(storage: Arc<dyn SongStore>, song_info: SongInfoClient) -> Self {
        Self { storage, song_info }
    }

    /// Fetch metadata for `(group, song)` from the song info API and store
    /// the song. Nothing is written when the API call fails.
    pub async fn add_song_with_api(&self, group: &str, song: &str) -> Result<i32, ServiceError> {
        tracing::info!(group, song, "adding song via song info API");

        let detail = self.song_info.fetch_song_info(group, song).await.map_err(|e| {
            tracing::error!(group, song, error = %e, "song info API call failed");
            e
        })?;
        let new_song = detail.into_new_song(group, song).map_err(|e| {
            tracing::error!(group, song, error = %e, "song info API returned an unusable payload");
            e
        })?;

        match self.storage.add_song(&new_song).await {
            Ok(id) => {
                tracing::info!(id, group, song, "song added");
                Ok(id)
            },
            Err(e) if e.is_duplicate() => {
                tracing::warn!(group, song, "song already exists");
                Err(ServiceError::Storage(e))
            },
            Err(source) => {
                tracing::error!(group, song, error = %source, "failed to save song");
                Err(ServiceError::SaveSong {
                    group: group.to_owned(),
                    song: song.to_owned(),
                    source,
                })
            },
        }
    }

    pub async fn get_id(&self, group: &str, song: &str) -> Result<i32, ServiceError> {
        tracing::debug!(group, song, "resolving song id");
        Ok(self.storage.get_id(group, song).await?)
    }

    pub async fn get_songs(
        &self,
        filter: &SongFilter,
        page: Page,
    ) -> Result<Vec<Song>, ServiceError> {
        tracing::debug!(
            filters = filter.len(),
            limit = page.limit(),
            offset = page.offset(),
            "listing songs"
        );
        let songs = self.storage.get_filtered_songs(filter, page).await?;
        tracing::debug!(count = songs.len(), "songs listed");
        Ok(songs)
    }

    pub async fn get_song_verses(
        &self,
        group: &str,
        song: &str,
        page: Page,
    ) -> Result<Vec<String>, ServiceError> {
        tracing::debug!(group, song, limit = page.limit(), offset = page.offset(), "reading verses");
        Ok(self.storage.get_song_verses(group, song, page).await?)
    }

    pub async fn update_song(&self, id: i32, update: &SongUpdate) -> Result<(), ServiceError> {
        if update.is_empty() {
            return Err(ServiceError::InvalidInput("update contains no fields".to_owned()));
        }
        self.storage.update_song(id, update).await.map_err(|e| {
            tracing::warn!(id, error = %e, "song update failed");
            e
        })?;
        tracing::info!(id, "song updated");
        Ok(())
    }

    pub async fn delete_song(&self, group: &str, song: &str) -> Result<(), ServiceError> {
        self.storage.delete_song(group, song).await.map_err(|e| {
            tracing::warn!(group, song, error = %e, "song delete failed");
            e
        })?;
        tracing::info!(group, song, "song deleted");
        Ok(())
    }
}
