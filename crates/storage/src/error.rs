//! Typed error enum for the storage layer.
//!
//! Callers match on specific failure modes (not found, duplicate, transient
//! DB errors) instead of inspecting opaque database errors.

use thiserror::Error;

/// Storage-layer error with variants covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Row not found for expected-present entity.
    #[error("not found: {entity} {id}")]
    NotFound { entity: &'static str, id: String },

    /// Unique constraint violation on `(group, song)`.
    #[error("already exists: {0}")]
    Duplicate(String),

    /// SQL / connection / timeout failure, tagged with the failing operation.
    #[error("{op}: database error: {source}")]
    Database {
        op: &'static str,
        #[source]
        source: sqlx::Error,
    },

    /// Schema bootstrap failure.
    #[error("migration error: {0}")]
    Migration(String),
}

impl StorageError {
    pub fn song_not_found(group: &str, song: &str) -> Self {
        Self::NotFound { entity: "song", id: format!("'{song}' by '{group}'") }
    }

    pub fn song_exists(group: &str, song: &str) -> Self {
        Self::Duplicate(format!("song '{song}' by '{group}' already exists"))
    }

    /// Whether this error is likely transient (worth retrying).
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::Database { source: sqlx::Error::PoolTimedOut | sqlx::Error::Io(_), .. }
        )
    }

    /// Whether this error is a unique-constraint violation.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Classify a sqlx error raised by `op`.
    ///
    /// - SQLSTATE 23505 → `Duplicate`
    /// - `RowNotFound` → `NotFound` (callers with better context remap it)
    /// - everything else → `Database`
    pub(crate) fn from_sqlx(op: &'static str, err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::NotFound { entity: "row", id: op.to_owned() },
            sqlx::Error::Database(db_err) if db_err.code().is_some_and(|c| c == "23505") => {
                Self::Duplicate(db_err.message().to_owned())
            },
            _ => Self::Database { op, source: err },
        }
    }

    /// `map_err` adapter: `.map_err(StorageError::op("get_id"))`.
    pub(crate) fn op(op: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |err| Self::from_sqlx(op, err)
    }
}
