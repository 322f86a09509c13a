//! SongStore implementation for PgStorage.

use async_trait::async_trait;
use song_library_core::{NewSong, Page, Song, SongFilter, SongUpdate};

use super::PgStorage;
use super::query::filtered_songs_query;
use crate::error::StorageError;
use crate::traits::SongStore;

#[async_trait]
impl SongStore for PgStorage {
    async fn add_song(&self, song: &NewSong) -> Result<i32, StorageError> {
        // An existing (or concurrently inserted) pair returns no row.
        let id: Option<i32> = sqlx::query_scalar(
            r#"INSERT INTO songs ("group", song, release_date, text, link)
               VALUES ($1, $2, $3, $4, $5)
               ON CONFLICT ("group", song) DO NOTHING
               RETURNING id"#,
        )
        .bind(&song.group)
        .bind(&song.song)
        .bind(song.release_date)
        .bind(&song.text)
        .bind(&song.link)
        .fetch_optional(&self.pool)
        .await
        .map_err(StorageError::op("add_song"))?;

        match id {
            Some(id) => {
                tracing::info!(id, group = %song.group, song = %song.song, "song added");
                Ok(id)
            },
            None => {
                tracing::warn!(group = %song.group, song = %song.song, "attempt to add existing song");
                Err(StorageError::song_exists(&song.group, &song.song))
            },
        }
    }

    async fn update_song(&self, id: i32, update: &SongUpdate) -> Result<(), StorageError> {
        let result = sqlx::query(
            r#"UPDATE songs
               SET "group" = COALESCE($1, "group"),
                   song = COALESCE($2, song),
                   release_date = COALESCE($3, release_date),
                   text = COALESCE($4, text),
                   link = COALESCE($5, link)
               WHERE id = $6"#,
        )
        .bind(update.group.as_ref().into_option().map(String::as_str))
        .bind(update.song.as_ref().into_option().map(String::as_str))
        .bind(update.release_date.as_ref().into_option().copied())
        .bind(update.text.as_ref().into_option().map(String::as_str))
        .bind(update.link.as_ref().into_option().map(String::as_str))
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(StorageError::op("update_song"))?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound { entity: "song", id: id.to_string() });
        }
        Ok(())
    }

    async fn delete_song(&self, group: &str, song: &str) -> Result<(), StorageError> {
        let result = sqlx::query(r#"DELETE FROM songs WHERE "group" = $1 AND song = $2"#)
            .bind(group)
            .bind(song)
            .execute(&self.pool)
            .await
            .map_err(StorageError::op("delete_song"))?;

        if result.rows_affected() == 0 {
            return Err(StorageError::song_not_found(group, song));
        }
        Ok(())
    }

    async fn get_id(&self, group: &str, song: &str) -> Result<i32, StorageError> {
        let id: Option<i32> =
            sqlx::query_scalar(r#"SELECT id FROM songs WHERE "group" = $1 AND song = $2"#)
                .bind(group)
                .bind(song)
                .fetch_optional(&self.pool)
                .await
                .map_err(StorageError::op("get_id"))?;
        id.ok_or_else(|| StorageError::song_not_found(group, song))
    }

    async fn get_filtered_songs(
        &self,
        filter: &SongFilter,
        page: Page,
    ) -> Result<Vec<Song>, StorageError> {
        let mut qb = filtered_songs_query(filter, page);
        qb.build_query_as::<Song>()
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::op("get_filtered_songs"))
    }

    async fn get_song_text(&self, group: &str, song: &str) -> Result<String, StorageError> {
        let text: Option<String> =
            sqlx::query_scalar(r#"SELECT text FROM songs WHERE "group" = $1 AND song = $2"#)
                .bind(group)
                .bind(song)
                .fetch_optional(&self.pool)
                .await
                .map_err(StorageError::op("get_song_text"))?;
        text.ok_or_else(|| StorageError::song_not_found(group, song))
    }
}
