//! PostgreSQL storage backend using sqlx.

mod universities;

use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use unidir_core::{
    Contact, PG_POOL_ACQUIRE_TIMEOUT_SECS, PG_POOL_IDLE_TIMEOUT_SECS, PG_POOL_MAX_CONNECTIONS,
    University,
};

use crate::error::StorageError;

use super::pg_migrations::run_pg_migrations;

pub(crate) const COLUMNS: &str =
    "id, name, slug, description, address, contacts, avg_gre, avg_lang, fees";

#[derive(Clone, Debug)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(PG_POOL_MAX_CONNECTIONS)
            .acquire_timeout(std::time::Duration::from_secs(PG_POOL_ACQUIRE_TIMEOUT_SECS))
            .idle_timeout(std::time::Duration::from_secs(PG_POOL_IDLE_TIMEOUT_SECS))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;
        run_pg_migrations(&pool).await.map_err(|e| StorageError::Migration(e.to_string()))?;
        tracing::info!("PgStorage initialized");
        Ok(Self { pool })
    }
}

/// Convert `usize` to `i64` for SQL LIMIT binds.
/// Saturates to `i64::MAX` on overflow (only possible on 128-bit targets).
pub(crate) fn usize_to_i64(val: usize) -> i64 {
    i64::try_from(val).unwrap_or(i64::MAX)
}

pub(crate) fn row_to_university(row: &sqlx::postgres::PgRow) -> Result<University, StorageError> {
    let contacts: serde_json::Value = row.try_get("contacts")?;
    let contacts: Vec<Contact> = serde_json::from_value(contacts)?;
    Ok(University::new(
        row.try_get("id")?,
        row.try_get("name")?,
        row.try_get("slug")?,
        row.try_get("description")?,
        row.try_get("address")?,
        contacts,
        row.try_get("avg_gre")?,
        row.try_get("avg_lang")?,
        row.try_get("fees")?,
    ))
}
