//! Storage layer for unidir
//!
//! One narrow repository trait, [`traits::UniversityStore`], implemented by
//! a `SQLite` backend (default) and a PostgreSQL backend (`postgres` feature).
//! Uniqueness of `name` and `slug` is enforced here by unique indexes and
//! surfaces as [`StorageError::Duplicate`].

mod backend;
pub mod error;
#[cfg(feature = "postgres")]
mod pg_migrations;
#[cfg(feature = "postgres")]
mod pg_storage;
#[cfg(feature = "sqlite")]
mod migrations;
#[cfg(feature = "sqlite")]
mod sqlite_async;
#[cfg(feature = "sqlite")]
mod storage;
#[cfg(all(test, feature = "sqlite"))]
mod tests;
pub mod traits;

pub use backend::StorageBackend;
pub use error::StorageError;
#[cfg(feature = "postgres")]
pub use pg_storage::PgStorage;
#[cfg(feature = "sqlite")]
pub use storage::Storage;
pub use traits::UniversityStore;
