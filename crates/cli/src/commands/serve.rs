use std::sync::Arc;

use anyhow::{Context, Result};
use song_library_enrichment::SongInfoClient;
use song_library_http::{AppState, create_router};
use song_library_service::SongService;
use song_library_storage::PgStorage;

use crate::config::{database_url, song_api_timeout, song_api_url};

pub(crate) async fn run(port: u16, host: String) -> Result<()> {
    let song_api_url = song_api_url()?;
    let timeout = song_api_timeout();
    let song_info = SongInfoClient::new(&song_api_url, timeout)?;
    tracing::info!(url = %song_info.base_url(), ?timeout, "song info API configured");

    let storage = PgStorage::connect(&database_url()?)
        .await
        .context("failed to connect to PostgreSQL")?;
    let song_service = Arc::new(SongService::new(Arc::new(storage), song_info));

    let router = create_router(Arc::new(AppState { song_service }));
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(e) => tracing::warn!(error = %e, "unable to listen for shutdown signal"),
    }
}
