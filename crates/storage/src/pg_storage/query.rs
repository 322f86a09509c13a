//! Dynamic SQL for filtered listings.

use song_library_core::{FilterValue, Page, SongFilter};
use sqlx::{Postgres, QueryBuilder};

use super::{SONG_COLUMNS, usize_to_i64};

/// `SELECT … FROM songs [WHERE a = $1 AND …] ORDER BY id LIMIT $n OFFSET $m`.
///
/// Column names come from the closed `SongField` set and are always quoted;
/// values are bound, never interpolated.
pub(crate) fn filtered_songs_query(filter: &SongFilter, page: Page) -> QueryBuilder<'_, Postgres> {
    let mut qb = QueryBuilder::new(format!("SELECT {SONG_COLUMNS} FROM songs"));
    for (i, (field, value)) in filter.conditions().enumerate() {
        qb.push(if i == 0 { " WHERE " } else { " AND " });
        qb.push(field.column());
        qb.push(" = ");
        match value {
            FilterValue::Text(text) => qb.push_bind(text.as_str()),
            FilterValue::Date(date) => qb.push_bind(*date),
        };
    }
    qb.push(" ORDER BY id LIMIT ");
    qb.push_bind(usize_to_i64(page.limit()));
    qb.push(" OFFSET ");
    qb.push_bind(usize_to_i64(page.offset()));
    qb
}
