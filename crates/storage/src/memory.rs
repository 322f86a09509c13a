//! In-memory [`SongStore`] for tests of the layers above storage.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use song_library_core::{FilterValue, NewSong, Page, Song, SongField, SongFilter, SongUpdate};

use crate::error::StorageError;
use crate::traits::SongStore;

#[derive(Debug, Default)]
struct Inner {
    songs: BTreeMap<i32, Song>,
    next_id: i32,
}

/// Map-backed store with the same uniqueness and not-found rules as
/// [`crate::PgStorage`].
#[derive(Debug, Default)]
pub struct MemoryStorage {
    inner: Mutex<Inner>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored songs.
    pub fn len(&self) -> usize {
        self.lock().songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Inner {
    fn find(&self, group: &str, song: &str) -> Option<&Song> {
        self.songs.values().find(|s| s.group == group && s.song == song)
    }
}

fn condition_holds(song: &Song, field: SongField, value: &FilterValue) -> bool {
    match (field, value) {
        (SongField::ReleaseDate, FilterValue::Date(date)) => song.release_date == *date,
        (SongField::Group, FilterValue::Text(v)) => song.group == *v,
        (SongField::Song, FilterValue::Text(v)) => song.song == *v,
        (SongField::Text, FilterValue::Text(v)) => song.text == *v,
        (SongField::Link, FilterValue::Text(v)) => song.link == *v,
        _ => false,
    }
}

#[async_trait]
impl SongStore for MemoryStorage {
    async fn add_song(&self, song: &NewSong) -> Result<i32, StorageError> {
        let mut inner = self.lock();
        if inner.find(&song.group, &song.song).is_some() {
            return Err(StorageError::song_exists(&song.group, &song.song));
        }
        inner.next_id = inner.next_id.saturating_add(1);
        let id = inner.next_id;
        inner.songs.insert(
            id,
            Song {
                id,
                group: song.group.clone(),
                song: song.song.clone(),
                release_date: song.release_date,
                text: song.text.clone(),
                link: song.link.clone(),
            },
        );
        Ok(id)
    }

    async fn update_song(&self, id: i32, update: &SongUpdate) -> Result<(), StorageError> {
        let mut inner = self.lock();
        let Some(current) = inner.songs.get(&id) else {
            return Err(StorageError::NotFound { entity: "song", id: id.to_string() });
        };
        let group = update.group.as_ref().into_option().unwrap_or(&current.group).clone();
        let song = update.song.as_ref().into_option().unwrap_or(&current.song).clone();
        if inner.find(&group, &song).is_some_and(|other| other.id != id) {
            return Err(StorageError::song_exists(&group, &song));
        }

        let Some(stored) = inner.songs.get_mut(&id) else {
            return Err(StorageError::NotFound { entity: "song", id: id.to_string() });
        };
        stored.group = group;
        stored.song = song;
        if let Some(date) = update.release_date.as_ref().into_option() {
            stored.release_date = *date;
        }
        if let Some(text) = update.text.as_ref().into_option() {
            stored.text.clone_from(text);
        }
        if let Some(link) = update.link.as_ref().into_option() {
            stored.link.clone_from(link);
        }
        Ok(())
    }

    async fn delete_song(&self, group: &str, song: &str) -> Result<(), StorageError> {
        let mut inner = self.lock();
        let id = inner.find(group, song).map(|s| s.id);
        match id {
            Some(id) => {
                inner.songs.remove(&id);
                Ok(())
            },
            None => Err(StorageError::song_not_found(group, song)),
        }
    }

    async fn get_id(&self, group: &str, song: &str) -> Result<i32, StorageError> {
        self.lock()
            .find(group, song)
            .map(|s| s.id)
            .ok_or_else(|| StorageError::song_not_found(group, song))
    }

    async fn get_filtered_songs(
        &self,
        filter: &SongFilter,
        page: Page,
    ) -> Result<Vec<Song>, StorageError> {
        let inner = self.lock();
        Ok(inner
            .songs
            .values()
            .filter(|song| filter.conditions().all(|(field, value)| condition_holds(song, field, value)))
            .skip(page.offset())
            .take(page.limit())
            .cloned()
            .collect())
    }

    async fn get_song_text(&self, group: &str, song: &str) -> Result<String, StorageError> {
        self.lock()
            .find(group, song)
            .map(|s| s.text.clone())
            .ok_or_else(|| StorageError::song_not_found(group, song))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use song_library_core::FieldUpdate;

    use super::*;

    fn new_song(group: &str, song: &str) -> NewSong {
        NewSong::new(
            group,
            song,
            NaiveDate::from_ymd_opt(2009, 9, 14).unwrap(),
            "verse one\n\nverse two".to_owned(),
            "https://example.com/song",
        )
        .unwrap()
    }

    #[tokio::test]
    async fn duplicate_pair_is_rejected() {
        let store = MemoryStorage::new();
        store.add_song(&new_song("Muse", "Uprising")).await.unwrap();
        let err = store.add_song(&new_song("Muse", "Uprising")).await.unwrap_err();
        assert!(err.is_duplicate());
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn rename_onto_existing_pair_is_rejected() {
        let store = MemoryStorage::new();
        store.add_song(&new_song("Muse", "Uprising")).await.unwrap();
        let id = store.add_song(&new_song("Muse", "Resistance")).await.unwrap();
        let update =
            SongUpdate { song: FieldUpdate::Set("Uprising".to_owned()), ..SongUpdate::default() };
        assert!(store.update_song(id, &update).await.unwrap_err().is_duplicate());
    }

    #[tokio::test]
    async fn filters_and_pages_by_id() {
        let store = MemoryStorage::new();
        for title in ["A", "B", "C"] {
            store.add_song(&new_song("Muse", title)).await.unwrap();
        }
        store.add_song(&new_song("Queen", "D")).await.unwrap();

        let filter = SongFilter::new().with(SongField::Group, "Muse").unwrap();
        let songs = store.get_filtered_songs(&filter, Page::new(2, 1).unwrap()).await.unwrap();
        let titles: Vec<&str> = songs.iter().map(|s| s.song.as_str()).collect();
        assert_eq!(titles, vec!["B", "C"]);
    }

    #[tokio::test]
    async fn verses_use_default_trait_impl() {
        let store = MemoryStorage::new();
        store.add_song(&new_song("Muse", "Uprising")).await.unwrap();
        let verses =
            store.get_song_verses("Muse", "Uprising", Page::new(5, 1).unwrap()).await.unwrap();
        assert_eq!(verses, vec!["verse two"]);
    }
}
