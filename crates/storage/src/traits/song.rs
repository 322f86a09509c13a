use async_trait::async_trait;
use song_library_core::verse::verse_page;
use song_library_core::{NewSong, Page, Song, SongFilter, SongUpdate};

use crate::error::StorageError;

/// Song catalog operations.
#[async_trait]
pub trait SongStore: Send + Sync {
    /// Insert a song and return its id. A stored `(group, song)` pair yields
    /// [`StorageError::Duplicate`].
    async fn add_song(&self, song: &NewSong) -> Result<i32, StorageError>;

    /// Apply a partial update. Unset fields keep their stored values.
    async fn update_song(&self, id: i32, update: &SongUpdate) -> Result<(), StorageError>;

    /// Delete by `(group, song)`. Zero affected rows is [`StorageError::NotFound`].
    async fn delete_song(&self, group: &str, song: &str) -> Result<(), StorageError>;

    /// Look up the id of `(group, song)`.
    async fn get_id(&self, group: &str, song: &str) -> Result<i32, StorageError>;

    /// Songs matching every condition of `filter`, ordered by id.
    async fn get_filtered_songs(
        &self,
        filter: &SongFilter,
        page: Page,
    ) -> Result<Vec<Song>, StorageError>;

    /// Raw stored lyrics of `(group, song)`.
    async fn get_song_text(&self, group: &str, song: &str) -> Result<String, StorageError>;

    /// One page of verses of `(group, song)`. An offset past the last verse
    /// yields an empty vector.
    async fn get_song_verses(
        &self,
        group: &str,
        song: &str,
        page: Page,
    ) -> Result<Vec<String>, StorageError> {
        let text = self.get_song_text(group, song).await?;
        Ok(verse_page(&text, page))
    }
}
