//! Environment configuration for the binary.

use std::time::Duration;

use anyhow::{Result, anyhow};
use song_library_core::{DEFAULT_SONG_API_TIMEOUT_SECS, env_parse_with_default};
use url::Url;

const DEFAULT_DB_PORT: u16 = 5432;

/// `DATABASE_URL`, or a URL composed from `DB_HOST`, `DB_PORT`, `DB_USER`,
/// `DB_PASSWORD` and `DB_NAME`.
pub(crate) fn database_url() -> Result<String> {
    database_url_from(|key| std::env::var(key).ok())
}

fn database_url_from(lookup: impl Fn(&str) -> Option<String>) -> Result<String> {
    let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());

    if let Some(url) = non_empty("DATABASE_URL") {
        return Ok(url);
    }

    let host = non_empty("DB_HOST")
        .ok_or_else(|| anyhow!("DATABASE_URL or DB_HOST environment variable must be set"))?;
    let port = match non_empty("DB_PORT") {
        Some(raw) => raw.parse::<u16>().map_err(|e| anyhow!("invalid DB_PORT '{raw}': {e}"))?,
        None => DEFAULT_DB_PORT,
    };
    let name = non_empty("DB_NAME").ok_or_else(|| anyhow!("DB_NAME environment variable must be set"))?;

    let mut url = Url::parse(&format!("postgres://{host}:{port}"))
        .map_err(|e| anyhow!("invalid DB_HOST '{host}': {e}"))?;
    url.set_path(&name);
    if let Some(user) = non_empty("DB_USER") {
        url.set_username(&user).map_err(|()| anyhow!("invalid DB_USER"))?;
        if let Some(password) = non_empty("DB_PASSWORD") {
            url.set_password(Some(&password)).map_err(|()| anyhow!("invalid DB_PASSWORD"))?;
        }
    }
    Ok(url.into())
}

/// Base URL of the song info API.
pub(crate) fn song_api_url() -> Result<String> {
    let raw = std::env::var("SONG_API_URL")
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| anyhow!("SONG_API_URL environment variable must be set"))?;
    Url::parse(&raw).map_err(|e| anyhow!("invalid SONG_API_URL '{raw}': {e}"))?;
    Ok(raw)
}

pub(crate) fn song_api_timeout() -> Duration {
    Duration::from_secs(env_parse_with_default(
        "SONG_API_TIMEOUT_SECS",
        DEFAULT_SONG_API_TIMEOUT_SECS,
    ))
}
