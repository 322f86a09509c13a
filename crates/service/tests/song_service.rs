//! SongService tests over the in-memory store and a mocked song info API.

#![allow(clippy::unwrap_used, reason = "test code")]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use song_library_core::{FieldUpdate, NewSong, Page, Song, SongField, SongFilter, SongUpdate};
use song_library_enrichment::{EnrichmentError, SongInfoClient};
use song_library_service::{ServiceError, SongService};
use song_library_storage::{MemoryStorage, SongStore, StorageError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LYRICS: &str = "Ooh baby, don't you know I suffer?\nOoh baby, can you hear me moan?\n\nYou caught me under false pretenses";

async fn song_info_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/info"))
        .and(query_param("group", "Muse"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "releaseDate": "16.07.2006",
            "text": LYRICS,
            "link": "https://www.youtube.com/watch?v=Xsp3_a-PMTw"
        })))
        .mount(&server)
        .await;
    server
}

fn service_with(storage: Arc<dyn SongStore>, server: &MockServer) -> SongService {
    let client = SongInfoClient::new(&server.uri(), Duration::from_secs(5)).unwrap();
    SongService::new(storage, client)
}

fn page(limit: usize, offset: usize) -> Page {
    Page::new(limit, offset).unwrap()
}

#[tokio::test]
async fn add_song_stores_enriched_metadata() {
    let server = song_info_server().await;
    let storage = Arc::new(MemoryStorage::new());
    let service = service_with(storage.clone(), &server);

    let id = service.add_song_with_api("Muse", "Supermassive Black Hole").await.unwrap();

    let filter = SongFilter::new().with(SongField::Song, "Supermassive Black Hole").unwrap();
    let songs = service.get_songs(&filter, page(10, 0)).await.unwrap();
    assert_eq!(songs.len(), 1);
    let song = &songs[0];
    assert_eq!(song.id, id);
    assert_eq!(song.release_date.to_string(), "2006-07-16");
    assert_eq!(song.text, LYRICS);
}

#[tokio::test]
async fn add_existing_song_is_duplicate() {
    let server = song_info_server().await;
    let service = service_with(Arc::new(MemoryStorage::new()), &server);

    service.add_song_with_api("Muse", "Hysteria").await.unwrap();
    let err = service.add_song_with_api("Muse", "Hysteria").await.unwrap_err();
    assert!(err.is_duplicate(), "expected duplicate, got {err:?}");
}

#[tokio::test]
async fn enrichment_failure_writes_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/info"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream down"))
        .mount(&server)
        .await;
    let storage = Arc::new(MemoryStorage::new());
    let service = service_with(storage.clone(), &server);

    let err = service.add_song_with_api("Muse", "Uprising").await.unwrap_err();
    assert!(matches!(err, ServiceError::Enrichment(EnrichmentError::HttpStatus { code: 500, .. })));
    assert!(storage.is_empty());
}

#[tokio::test]
async fn invalid_payload_writes_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "releaseDate": "sometime in 2006",
            "text": "la la",
            "link": "https://example.com"
        })))
        .mount(&server)
        .await;
    let storage = Arc::new(MemoryStorage::new());
    let service = service_with(storage.clone(), &server);

    let err = service.add_song_with_api("Muse", "Uprising").await.unwrap_err();
    assert!(matches!(err, ServiceError::Enrichment(EnrichmentError::InvalidPayload(_))));
    assert!(storage.is_empty());
}

struct BrokenStore;

#[async_trait]
impl SongStore for BrokenStore {
    async fn add_song(&self, _song: &NewSong) -> Result<i32, StorageError> {
        Err(StorageError::Migration("songs table missing".to_owned()))
    }
    async fn update_song(&self, _id: i32, _update: &SongUpdate) -> Result<(), StorageError> {
        unreachable!()
    }
    async fn delete_song(&self, _group: &str, _song: &str) -> Result<(), StorageError> {
        unreachable!()
    }
    async fn get_id(&self, _group: &str, _song: &str) -> Result<i32, StorageError> {
        unreachable!()
    }
    async fn get_filtered_songs(
        &self,
        _filter: &SongFilter,
        _page: Page,
    ) -> Result<Vec<Song>, StorageError> {
        unreachable!()
    }
    async fn get_song_text(&self, _group: &str, _song: &str) -> Result<String, StorageError> {
        unreachable!()
    }
}

#[tokio::test]
async fn storage_failure_on_add_is_wrapped() {
    let server = song_info_server().await;
    let service = service_with(Arc::new(BrokenStore), &server);

    let err = service.add_song_with_api("Muse", "Starlight").await.unwrap_err();
    match err {
        ServiceError::SaveSong { group, song, .. } => {
            assert_eq!(group, "Muse");
            assert_eq!(song, "Starlight");
        },
        other => panic!("expected SaveSong, got {other:?}"),
    }
}

#[tokio::test]
async fn verses_are_paged() {
    let server = song_info_server().await;
    let service = service_with(Arc::new(MemoryStorage::new()), &server);
    service.add_song_with_api("Muse", "Supermassive Black Hole").await.unwrap();

    let verses =
        service.get_song_verses("Muse", "Supermassive Black Hole", page(1, 1)).await.unwrap();
    assert_eq!(verses, vec!["You caught me under false pretenses"]);

    let err = service.get_song_verses("Muse", "Missing", page(5, 0)).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn update_then_delete() {
    let server = song_info_server().await;
    let service = service_with(Arc::new(MemoryStorage::new()), &server);
    service.add_song_with_api("Muse", "Madness").await.unwrap();

    let id = service.get_id("Muse", "Madness").await.unwrap();
    let update =
        SongUpdate { text: FieldUpdate::Set("I, I can't get these memories".to_owned()), ..SongUpdate::default() };
    service.update_song(id, &update).await.unwrap();
    let verses = service.get_song_verses("Muse", "Madness", page(5, 0)).await.unwrap();
    assert_eq!(verses, vec!["I, I can't get these memories"]);

    service.delete_song("Muse", "Madness").await.unwrap();
    assert!(service.get_id("Muse", "Madness").await.unwrap_err().is_not_found());
    assert!(service.delete_song("Muse", "Madness").await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn empty_update_is_invalid_input() {
    let server = song_info_server().await;
    let service = service_with(Arc::new(MemoryStorage::new()), &server);
    let err = service.update_song(1, &SongUpdate::default()).await.unwrap_err();
    assert!(matches!(err, ServiceError::InvalidInput(_)));
}
