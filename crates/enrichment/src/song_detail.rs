use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use song_library_core::{NewSong, ValidationError, parse_release_date};

use crate::error::EnrichmentError;

/// Song metadata returned by the song info API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongDetail {
    #[serde(rename = "releaseDate")]
    pub release_date: String,
    pub text: String,
    pub link: String,
}

impl SongDetail {
    /// Validate the payload into an insertable song for `(group, song)`.
    ///
    /// The API has been seen to send dates as `16.07.2006` as well as
    /// `2006-07-16`; both are accepted.
    pub fn into_new_song(self, group: &str, song: &str) -> Result<NewSong, EnrichmentError> {
        let release_date = parse_api_date(&self.release_date)?;
        Ok(NewSong::new(group, song, release_date, self.text, &self.link)?)
    }
}

fn parse_api_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    parse_release_date(raw).or_else(|err| {
        NaiveDate::parse_from_str(raw.trim(), "%d.%m.%Y").map_err(|_| err)
    })
}
