//! Request/query types (Deserialize) and their validation into domain types.
//!
//! Paging parameters arrive as raw strings so that `limit=abc` or
//! `offset=-1` produce a specific message instead of a generic
//! deserialization failure.

use std::collections::HashMap;

use serde::Deserialize;
use song_library_core::{
    DEFAULT_SONGS_LIMIT, DEFAULT_VERSES_LIMIT, FieldUpdate, Page, SongFilter, SongUpdate,
    ValidationError, parse_release_date, validate_link, validate_name,
};

/// Parse optional `limit`/`offset` strings. Absent values take the defaults;
/// present ones must be integers with `limit > 0` and `offset >= 0`.
pub fn parse_page(
    limit: Option<&str>,
    offset: Option<&str>,
    default_limit: usize,
) -> Result<Page, ValidationError> {
    let limit = match limit {
        None => default_limit,
        Some(raw) => match raw.trim().parse::<i64>() {
            Ok(n) if n > 0 => usize::try_from(n).unwrap_or(usize::MAX),
            _ => return Err(ValidationError::InvalidLimit(raw.to_owned())),
        },
    };
    let offset = match offset {
        None => 0,
        Some(raw) => match raw.trim().parse::<i64>() {
            Ok(n) if n >= 0 => usize::try_from(n).unwrap_or(usize::MAX),
            _ => return Err(ValidationError::InvalidOffset(raw.to_owned())),
        },
    };
    Page::new(limit, offset)
}

fn required_name(field: &'static str, value: Option<&str>) -> Result<String, ValidationError> {
    let value = value.ok_or(ValidationError::Missing { field })?;
    validate_name(field, value)
}

/// `GET /api/songs`: every key other than `limit`/`offset` is a filter
/// candidate; unknown keys are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct ListSongsQuery {
    pub params: HashMap<String, String>,
}

impl ListSongsQuery {
    pub fn validate(&self) -> Result<(SongFilter, Page), ValidationError> {
        let page = parse_page(
            self.params.get("limit").map(String::as_str),
            self.params.get("offset").map(String::as_str),
            DEFAULT_SONGS_LIMIT,
        )?;
        let filter = SongFilter::from_pairs(
            self.params.iter().filter(|(key, _)| key.as_str() != "limit" && key.as_str() != "offset"),
        )?;
        Ok((filter, page))
    }
}

/// `GET /api/songs/verses`
#[derive(Debug, Default, Deserialize)]
pub struct VersesQuery {
    pub group: Option<String>,
    pub song: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl VersesQuery {
    pub fn validate(&self) -> Result<(String, String, Page), ValidationError> {
        let group = required_name("group", self.group.as_deref())?;
        let song = required_name("song", self.song.as_deref())?;
        let page = parse_page(self.limit.as_deref(), self.offset.as_deref(), DEFAULT_VERSES_LIMIT)?;
        Ok((group, song, page))
    }
}

/// `?group=..&song=..` identifying one song for update and delete.
#[derive(Debug, Default, Deserialize)]
pub struct SongKeyQuery {
    pub group: Option<String>,
    pub song: Option<String>,
}

impl SongKeyQuery {
    pub fn validate(&self) -> Result<(String, String), ValidationError> {
        Ok((
            required_name("group", self.group.as_deref())?,
            required_name("song", self.song.as_deref())?,
        ))
    }
}

/// `POST /api/songs` body.
#[derive(Debug, Default, Deserialize)]
pub struct AddSongRequest {
    pub group: Option<String>,
    pub song: Option<String>,
}

impl AddSongRequest {
    pub fn validate(&self) -> Result<(String, String), ValidationError> {
        Ok((
            required_name("group", self.group.as_deref())?,
            required_name("song", self.song.as_deref())?,
        ))
    }
}

/// `PUT /api/songs` body. Absent fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateSongRequest {
    pub group: Option<String>,
    pub song: Option<String>,
    pub release_date: Option<String>,
    pub text: Option<String>,
    pub link: Option<String>,
}

impl UpdateSongRequest {
    pub fn validate(self) -> Result<SongUpdate, ValidationError> {
        let update = SongUpdate {
            group: self.group.map(|v| validate_name("group", &v)).transpose()?.into(),
            song: self.song.map(|v| validate_name("song", &v)).transpose()?.into(),
            release_date: self.release_date.map(|v| parse_release_date(&v)).transpose()?.into(),
            text: FieldUpdate::from(self.text),
            link: self.link.map(|v| validate_link(&v)).transpose()?.into(),
        };
        if update.is_empty() {
            return Err(ValidationError::EmptyUpdate);
        }
        Ok(update)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use song_library_core::{FilterValue, MAX_PAGE_LIMIT, SongField};

    use super::*;

    fn list_query(pairs: &[(&str, &str)]) -> ListSongsQuery {
        ListSongsQuery {
            params: pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect(),
        }
    }

    #[test]
    fn page_defaults() {
        let page = parse_page(None, None, DEFAULT_SONGS_LIMIT).unwrap();
        assert_eq!(page.limit(), 10);
        assert_eq!(page.offset(), 0);
        assert_eq!(parse_page(None, None, DEFAULT_VERSES_LIMIT).unwrap().limit(), 5);
    }

    #[test]
    fn page_rejects_bad_limit() {
        for bad in ["0", "-1", "abc", "", "1.5"] {
            assert_eq!(
                parse_page(Some(bad), None, 10),
                Err(ValidationError::InvalidLimit(bad.to_owned())),
                "limit {bad:?}"
            );
        }
    }

    #[test]
    fn page_rejects_bad_offset() {
        for bad in ["-1", "x", ""] {
            assert_eq!(
                parse_page(None, Some(bad), 10),
                Err(ValidationError::InvalidOffset(bad.to_owned())),
                "offset {bad:?}"
            );
        }
        assert_eq!(parse_page(None, Some("0"), 10).unwrap().offset(), 0);
    }

    #[test]
    fn page_caps_large_limit() {
        assert_eq!(parse_page(Some("1000000"), None, 10).unwrap().limit(), MAX_PAGE_LIMIT);
    }

    #[test]
    fn list_query_splits_paging_from_filters() {
        let (filter, page) =
            list_query(&[("group", "Muse"), ("genre", "rock"), ("limit", "2"), ("offset", "4")])
                .validate()
                .unwrap();
        assert_eq!(filter.len(), 1);
        assert_eq!(filter.get(SongField::Group), Some(&FilterValue::Text("Muse".to_owned())));
        assert_eq!((page.limit(), page.offset()), (2, 4));
    }

    #[test]
    fn list_query_rejects_bad_release_date() {
        assert!(list_query(&[("release_date", "16.07.2006")]).validate().is_err());
    }

    #[test]
    fn verses_query_requires_group_and_song() {
        let query = VersesQuery { song: Some("Uprising".to_owned()), ..VersesQuery::default() };
        assert_eq!(query.validate().unwrap_err(), ValidationError::Missing { field: "group" });

        let query = VersesQuery {
            group: Some("Muse".to_owned()),
            song: Some("  ".to_owned()),
            ..VersesQuery::default()
        };
        assert_eq!(query.validate().unwrap_err(), ValidationError::Empty { field: "song" });
    }

    #[test]
    fn add_request_trims_names() {
        let req = AddSongRequest { group: Some(" Muse ".to_owned()), song: Some("Uprising".to_owned()) };
        assert_eq!(req.validate().unwrap(), ("Muse".to_owned(), "Uprising".to_owned()));
    }

    #[test]
    fn update_request_validates_present_fields_only() {
        let update = UpdateSongRequest {
            release_date: Some("2009-09-14".to_owned()),
            ..UpdateSongRequest::default()
        }
        .validate()
        .unwrap();
        assert_eq!(
            update.release_date,
            FieldUpdate::Set(NaiveDate::from_ymd_opt(2009, 9, 14).unwrap())
        );
        assert_eq!(update.group, FieldUpdate::Unchanged);

        let bad_date = UpdateSongRequest {
            release_date: Some("14.09.2009".to_owned()),
            ..UpdateSongRequest::default()
        };
        assert!(matches!(bad_date.validate(), Err(ValidationError::InvalidDate(_))));

        let bad_link =
            UpdateSongRequest { link: Some("not a link".to_owned()), ..UpdateSongRequest::default() };
        assert!(matches!(bad_link.validate(), Err(ValidationError::InvalidLink { .. })));

        let empty_group =
            UpdateSongRequest { group: Some(String::new()), ..UpdateSongRequest::default() };
        assert_eq!(empty_group.validate().unwrap_err(), ValidationError::Empty { field: "group" });
    }

    #[test]
    fn empty_update_is_rejected() {
        assert_eq!(
            UpdateSongRequest::default().validate().unwrap_err(),
            ValidationError::EmptyUpdate
        );
    }
}
