//! PostgreSQL schema migrations for unidir storage.

use sqlx::PgPool;

/// Run all PostgreSQL migrations.
///
/// Unique constraints are named `universities_<column>_key` so duplicate-key
/// errors can be traced back to the column.
pub async fn run_pg_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS universities (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL CONSTRAINT universities_name_key UNIQUE,
            slug TEXT NOT NULL CONSTRAINT universities_slug_key UNIQUE,
            description TEXT NOT NULL,
            address TEXT NOT NULL,
            contacts JSONB NOT NULL DEFAULT '[]',
            avg_gre DOUBLE PRECISION,
            avg_lang DOUBLE PRECISION,
            fees DOUBLE PRECISION
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("PostgreSQL schema up to date");
    Ok(())
}
