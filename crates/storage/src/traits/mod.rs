//! Storage trait abstraction
//!
//! Async domain traits implemented by [`crate::PgStorage`] and by in-memory
//! fakes in tests.

pub mod song;

pub use song::SongStore;
