//! Shared constants for song-library.

/// Maximum length (in characters) of a group or song name.
pub const MAX_NAME_LEN: usize = 255;

/// Upper bound for a page size; larger requests are capped to this.
pub const MAX_PAGE_LIMIT: usize = 1000;

/// Default page size for song listings.
pub const DEFAULT_SONGS_LIMIT: usize = 10;

/// Default page size for verse pagination.
pub const DEFAULT_VERSES_LIMIT: usize = 5;

/// PostgreSQL connection pool: maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 20;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;

/// Timeout for a single call to the song info API, in seconds.
pub const DEFAULT_SONG_API_TIMEOUT_SECS: u64 = 10;
