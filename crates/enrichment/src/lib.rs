//! Client for the external song info API.
//!
//! New songs are created from a `(group, song)` pair; release date, lyrics and
//! link come from `GET {base}/info?group=..&song=..`.

mod client;
mod error;
mod song_detail;


pub use client::SongInfoClient;
pub use error::EnrichmentError;
pub use song_detail::SongDetail;
