//! PostgreSQL schema bootstrap for song-library storage.

use sqlx::PgPool;

use crate::error::StorageError;

/// Create the `songs` table and its indexes if they do not exist yet.
pub async fn run_pg_migrations(pool: &PgPool) -> Result<(), StorageError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS songs (
            id SERIAL PRIMARY KEY,
            "group" VARCHAR(255) NOT NULL,
            song VARCHAR(255) NOT NULL,
            release_date DATE NOT NULL,
            text TEXT NOT NULL,
            link TEXT NOT NULL,
            CONSTRAINT songs_group_song_key UNIQUE ("group", song)
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| StorageError::Migration(format!("create songs table: {e}")))?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_songs_release_date ON songs (release_date)")
        .execute(pool)
        .await
        .map_err(|e| StorageError::Migration(format!("create release_date index: {e}")))?;

    tracing::info!("songs schema ready");
    Ok(())
}
