//! Typed error enum for the storage layer.
//!
//! Callers match on specific failure modes (not found, duplicate key,
//! transient DB errors) instead of downcasting opaque boxes.

use thiserror::Error;

/// Storage-layer error with variants covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No record matched the filter.
    #[error("not found: {entity} with {key}")]
    NotFound { entity: &'static str, key: String },

    /// Unique constraint violation on `name` or `slug`.
    #[error("duplicate key{}: {message}", .field.as_deref().map(|f| format!(" on {f}")).unwrap_or_default())]
    Duplicate { field: Option<String>, message: String },

    /// SQLite statement or connection failure.
    #[cfg(feature = "sqlite")]
    #[error("database error: {0}")]
    Database(#[source] rusqlite::Error),

    /// Could not check a connection out of the SQLite pool.
    #[cfg(feature = "sqlite")]
    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    /// PostgreSQL query / connection / timeout failure.
    #[cfg(feature = "postgres")]
    #[error("database error: {0}")]
    Postgres(#[source] sqlx::Error),

    /// Row data could not be deserialized into domain type.
    #[error("data corruption: {context}")]
    DataCorruption {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Migration failure.
    #[error("migration error: {0}")]
    Migration(String),

    /// Blocking task panicked or was cancelled.
    #[error("storage task failed: {0}")]
    Task(String),
}

impl StorageError {
    /// Whether this error is likely transient (worth retrying).
    pub fn is_transient(&self) -> bool {
        match self {
            #[cfg(feature = "sqlite")]
            Self::Database(rusqlite::Error::SqliteFailure(e, _)) => matches!(
                e.code,
                rusqlite::ErrorCode::DatabaseBusy | rusqlite::ErrorCode::DatabaseLocked
            ),
            #[cfg(feature = "sqlite")]
            Self::Pool(_) => true,
            #[cfg(feature = "postgres")]
            Self::Postgres(e) => matches!(e, sqlx::Error::PoolTimedOut | sqlx::Error::Io(_)),
            _ => false,
        }
    }

    /// Whether this error is a unique-constraint violation.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Column whose uniqueness was violated, when the backend reported it.
    pub fn duplicate_field(&self) -> Option<&str> {
        match self {
            Self::Duplicate { field, .. } => field.as_deref(),
            _ => None,
        }
    }
}

/// Custom `From<rusqlite::Error>`, not a blanket `#[from]`.
///
/// - `SQLITE_CONSTRAINT_UNIQUE` / `SQLITE_CONSTRAINT_PRIMARYKEY` → `Duplicate`
/// - `FromSqlConversionFailure` (undecodable column) → `DataCorruption`
/// - Everything else → `Database`
#[cfg(feature = "sqlite")]
impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(e, msg)
                if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
                    || e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY =>
            {
                let message = msg.unwrap_or_else(|| e.to_string());
                Self::Duplicate { field: sqlite_unique_column(&message), message }
            },
            rusqlite::Error::FromSqlConversionFailure(column, _, source) => Self::DataCorruption {
                context: format!("undecodable value in column {column}"),
                source,
            },
            other => Self::Database(other),
        }
    }
}

/// Extract the column from `UNIQUE constraint failed: universities.slug`.
#[cfg(feature = "sqlite")]
fn sqlite_unique_column(message: &str) -> Option<String> {
    let (_, columns) = message.split_once("constraint failed: ")?;
    let first = columns.split(',').next()?.trim();
    let column = first.rsplit_once('.').map_or(first, |(_, column)| column);
    Some(column.to_owned())
}

/// Custom `From<sqlx::Error>`, not a blanket `#[from]`.
///
/// - `RowNotFound` → `NotFound` (generic; callers remap with entity context)
/// - SQLSTATE 23505 → `Duplicate`, field taken from the constraint name
/// - Everything else → `Postgres`
#[cfg(feature = "postgres")]
impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::NotFound { entity: "row", key: "unknown".into() },
            sqlx::Error::Database(db_err) if db_err.code().is_some_and(|c| c == "23505") => {
                Self::Duplicate {
                    field: db_err.constraint().map(pg_unique_column),
                    message: db_err.message().to_owned(),
                }
            },
            _ => Self::Postgres(err),
        }
    }
}

/// `universities_slug_key` → `slug`
#[cfg(feature = "postgres")]
fn pg_unique_column(constraint: &str) -> String {
    constraint
        .strip_prefix("universities_")
        .and_then(|rest| rest.strip_suffix("_key"))
        .unwrap_or(constraint)
        .to_owned()
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        Self::DataCorruption {
            context: "JSON serialization/deserialization".to_owned(),
            source: Box::new(err),
        }
    }
}

impl From<tokio::task::JoinError> for StorageError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Task(err.to_string())
    }
}
