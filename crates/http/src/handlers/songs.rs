use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use song_library_core::Song;

use crate::AppState;
use crate::api_error::ApiError;
use crate::extract::{ApiJson, ApiQuery};
use crate::query_types::{
    AddSongRequest, ListSongsQuery, SongKeyQuery, UpdateSongRequest, VersesQuery,
};
use crate::response_types::{CreatedResponse, MessageResponse, UpdatedResponse};

pub async fn list_songs(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<ListSongsQuery>,
) -> Result<Json<Vec<Song>>, ApiError> {
    let (filter, page) = query.validate()?;
    let songs = state.song_service.get_songs(&filter, page).await?;
    Ok(Json(songs))
}

pub async fn get_song_verses(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<VersesQuery>,
) -> Result<Json<Vec<String>>, ApiError> {
    let (group, song, page) = query.validate()?;
    let verses = state.song_service.get_song_verses(&group, &song, page).await?;
    Ok(Json(verses))
}

pub async fn add_song(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<AddSongRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let (group, song) = req.validate()?;
    let id = state.song_service.add_song_with_api(&group, &song).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

pub async fn update_song(
    State(state): State<Arc<AppState>>,
    ApiQuery(key): ApiQuery<SongKeyQuery>,
    ApiJson(req): ApiJson<UpdateSongRequest>,
) -> Result<Json<UpdatedResponse>, ApiError> {
    let (group, song) = key.validate()?;
    let update = req.validate()?;
    let id = state.song_service.get_id(&group, &song).await?;
    state.song_service.update_song(id, &update).await?;
    Ok(Json(UpdatedResponse { id, message: "song updated".to_owned() }))
}

pub async fn delete_song(
    State(state): State<Arc<AppState>>,
    ApiQuery(key): ApiQuery<SongKeyQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    let (group, song) = key.validate()?;
    state.song_service.delete_song(&group, &song).await?;
    Ok(Json(MessageResponse { message: "song deleted".to_owned() }))
}
