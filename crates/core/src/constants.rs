//! Shared constants for unidir.

/// Maximum number of records for any listing (DoS protection).
pub const MAX_QUERY_LIMIT: usize = 1000;

/// Default number of records when limit is not specified by the caller.
pub const DEFAULT_QUERY_LIMIT: usize = 20;

/// SQLite connection pool size when `UNIDIR_DB_POOL_SIZE` is unset.
pub const SQLITE_POOL_SIZE: u32 = 8;

/// SQLite busy timeout in milliseconds.
pub const SQLITE_BUSY_TIMEOUT_MS: i32 = 30_000;

/// PostgreSQL connection pool: maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 20;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;

/// Clamp a caller-supplied limit into `1..=MAX_QUERY_LIMIT`.
#[must_use]
pub fn clamp_limit(limit: usize) -> usize {
    limit.clamp(1, MAX_QUERY_LIMIT)
}
