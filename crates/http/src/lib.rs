//! HTTP API server for song-library.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]

pub mod api_error;
mod extract;
mod handlers;
mod query_types;
mod response_types;

use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::routing::get;
use song_library_service::SongService;
use tower_http::trace::TraceLayer;

pub use response_types::{CreatedResponse, MessageResponse, UpdatedResponse, VersionResponse};

/// Shared application state for all HTTP handlers.
pub struct AppState {
    /// Song catalog operations
    pub song_service: Arc<SongService>,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route(
            "/api/songs",
            get(handlers::songs::list_songs)
                .post(handlers::songs::add_song)
                .put(handlers::songs::update_song)
                .delete(handlers::songs::delete_song),
        )
        .route("/api/songs/verses", get(handlers::songs::get_song_verses))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
