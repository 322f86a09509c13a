//! Schema bootstrap without starting the server.

use anyhow::{Context, Result};
use song_library_storage::PgStorage;

use crate::config::database_url;

pub(crate) async fn run() -> Result<()> {
    // Connecting applies the schema.
    PgStorage::connect(&database_url()?)
        .await
        .context("failed to migrate PostgreSQL schema")?;
    println!("songs schema is up to date");
    Ok(())
}
