//! Storage layer for song-library
//!
//! PostgreSQL storage behind the [`SongStore`] trait.

mod error;
#[cfg(any(test, feature = "testing"))]
mod memory;
mod pg_migrations;
mod pg_storage;
pub mod traits;

pub use error::StorageError;
#[cfg(any(test, feature = "testing"))]
pub use memory::MemoryStorage;
pub use pg_migrations::run_pg_migrations;
pub use pg_storage::PgStorage;
pub use traits::SongStore;
