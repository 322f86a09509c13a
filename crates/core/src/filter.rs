//! Listing filters and pagination bounds.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::MAX_PAGE_LIMIT;
use crate::error::ValidationError;
use crate::song::parse_release_date;

/// Song columns that a listing can be filtered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SongField {
    Group,
    Song,
    ReleaseDate,
    Text,
    Link,
}

impl SongField {
    pub const ALL: [Self; 5] = [Self::Group, Self::Song, Self::ReleaseDate, Self::Text, Self::Link];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Group => "group",
            Self::Song => "song",
            Self::ReleaseDate => "release_date",
            Self::Text => "text",
            Self::Link => "link",
        }
    }

    /// Quoted SQL identifier. `group` is a reserved word, so every column is
    /// emitted quoted.
    pub const fn column(self) -> &'static str {
        match self {
            Self::Group => "\"group\"",
            Self::Song => "\"song\"",
            Self::ReleaseDate => "\"release_date\"",
            Self::Text => "\"text\"",
            Self::Link => "\"link\"",
        }
    }
}

impl std::str::FromStr for SongField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "group" => Ok(Self::Group),
            "song" => Ok(Self::Song),
            "release_date" => Ok(Self::ReleaseDate),
            "text" => Ok(Self::Text),
            "link" => Ok(Self::Link),
            other => Err(format!("unknown song field: {other}")),
        }
    }
}

impl std::fmt::Display for SongField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed exact-match value for one filter condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FilterValue {
    Text(String),
    Date(NaiveDate),
}

/// Conjunction of exact-match conditions over [`SongField`]s.
///
/// At most one condition per field; conditions iterate in field order so the
/// generated SQL is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SongFilter {
    conditions: BTreeMap<SongField, FilterValue>,
}

impl SongFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a filter from raw key/value pairs such as a query string.
    ///
    /// Unknown keys and empty values are skipped. A `release_date` value that
    /// is not `YYYY-MM-DD` is an error.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut filter = Self::new();
        for (key, value) in pairs {
            let key = key.as_ref();
            match key.parse::<SongField>() {
                Ok(field) => filter.insert(field, value.as_ref())?,
                Err(_) => tracing::debug!(key, "ignoring unknown song filter"),
            }
        }
        Ok(filter)
    }

    /// Add or replace the condition on `field`. Empty values are ignored.
    pub fn insert(&mut self, field: SongField, raw: &str) -> Result<(), ValidationError> {
        if raw.is_empty() {
            return Ok(());
        }
        let value = match field {
            SongField::ReleaseDate => FilterValue::Date(parse_release_date(raw)?),
            _ => FilterValue::Text(raw.to_owned()),
        };
        self.conditions.insert(field, value);
        Ok(())
    }

    /// Builder-style [`Self::insert`].
    pub fn with(mut self, field: SongField, raw: &str) -> Result<Self, ValidationError> {
        self.insert(field, raw)?;
        Ok(self)
    }

    pub fn get(&self, field: SongField) -> Option<&FilterValue> {
        self.conditions.get(&field)
    }

    pub fn conditions(&self) -> impl Iterator<Item = (SongField, &FilterValue)> {
        self.conditions.iter().map(|(field, value)| (*field, value))
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }
}

/// Validated `LIMIT`/`OFFSET` window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Page {
    limit: usize,
    offset: usize,
}

impl Page {
    /// A zero limit is rejected rather than clamped; limits above
    /// [`MAX_PAGE_LIMIT`] are capped.
    pub fn new(limit: usize, offset: usize) -> Result<Self, ValidationError> {
        if limit == 0 {
            return Err(ValidationError::InvalidLimit(limit.to_string()));
        }
        Ok(Self { limit: limit.min(MAX_PAGE_LIMIT), offset })
    }

    pub const fn limit(self) -> usize {
        self.limit
    }

    pub const fn offset(self) -> usize {
        self.offset
    }
}
