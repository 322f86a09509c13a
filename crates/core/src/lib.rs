//! Core types for song-library
//!
//! Domain types, input validation and lyric verse handling shared by the
//! storage, service and HTTP crates.

pub mod constants;
mod env_config;
mod error;
mod filter;
mod song;
pub mod verse;

pub use constants::*;
pub use env_config::env_parse_with_default;
pub use error::*;
pub use filter::*;
pub use song::*;
