use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::MAX_NAME_LEN;
use crate::error::ValidationError;

#[allow(clippy::unwrap_used, reason = "literal pattern")]
static ISO_DATE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

/// A stored song with its lyrics and reference link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-types", derive(sqlx::FromRow))]
pub struct Song {
    /// Surrogate key assigned by storage
    pub id: i32,
    /// Performing artist or group
    pub group: String,
    /// Track title
    pub song: String,
    /// Release date, serialized as `YYYY-MM-DD`
    pub release_date: NaiveDate,
    /// Full lyrics, verses separated by blank lines
    pub text: String,
    /// External media or source URL
    pub link: String,
}

/// Validated input for inserting a song.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSong {
    pub group: String,
    pub song: String,
    pub release_date: NaiveDate,
    pub text: String,
    pub link: String,
}

impl NewSong {
    /// Validates every field. Names are trimmed; text and link are kept as given.
    pub fn new(
        group: &str,
        song: &str,
        release_date: NaiveDate,
        text: String,
        link: &str,
    ) -> Result<Self, ValidationError> {
        if text.trim().is_empty() {
            return Err(ValidationError::Empty { field: "text" });
        }
        Ok(Self {
            group: validate_name("group", group)?,
            song: validate_name("song", song)?,
            release_date,
            text,
            link: validate_link(link)?,
        })
    }
}

/// Per-field marker for partial updates.
///
/// `Unchanged` keeps the stored value; `Set` replaces it, even with an empty
/// string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    Unchanged,
    Set(T),
}

impl<T> Default for FieldUpdate<T> {
    fn default() -> Self {
        Self::Unchanged
    }
}

impl<T> FieldUpdate<T> {
    pub const fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }

    pub const fn as_ref(&self) -> FieldUpdate<&T> {
        match self {
            Self::Unchanged => FieldUpdate::Unchanged,
            Self::Set(v) => FieldUpdate::Set(v),
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Unchanged => None,
            Self::Set(v) => Some(v),
        }
    }
}

impl<T> From<Option<T>> for FieldUpdate<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Unchanged, Self::Set)
    }
}

/// Partial update of a song. Omitted fields keep their stored values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SongUpdate {
    pub group: FieldUpdate<String>,
    pub song: FieldUpdate<String>,
    pub release_date: FieldUpdate<NaiveDate>,
    pub text: FieldUpdate<String>,
    pub link: FieldUpdate<String>,
}

impl SongUpdate {
    pub const fn is_empty(&self) -> bool {
        !(self.group.is_set()
            || self.song.is_set()
            || self.release_date.is_set()
            || self.text.is_set()
            || self.link.is_set())
    }
}

/// Trim and check a group or song name: non-empty, at most 255 characters.
pub fn validate_name(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong { field, max: MAX_NAME_LEN });
    }
    Ok(trimmed.to_owned())
}

/// Parse a strict `YYYY-MM-DD` date.
pub fn parse_release_date(value: &str) -> Result<NaiveDate, ValidationError> {
    let value = value.trim();
    if !ISO_DATE.is_match(value) {
        return Err(ValidationError::InvalidDate(value.to_owned()));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(value.to_owned()))
}

/// Check that `value` is an absolute URL with a host (`https://…`, `ftp://…`).
pub fn validate_link(value: &str) -> Result<String, ValidationError> {
    let value = value.trim();
    let parsed = url::Url::parse(value).map_err(|e| ValidationError::InvalidLink {
        value: value.to_owned(),
        reason: e.to_string(),
    })?;
    if !parsed.has_host() {
        return Err(ValidationError::InvalidLink {
            value: value.to_owned(),
            reason: "missing host".to_owned(),
        });
    }
    Ok(value.to_owned())
}
