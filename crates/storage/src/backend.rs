//! Unified storage backend with enum dispatch.

#[cfg(feature = "sqlite")]
use std::path::Path;

use async_trait::async_trait;
use unidir_core::{PreparedUniversity, University, UniversityFilter, UniversityUpdate};

use crate::error::StorageError;
use crate::traits::UniversityStore;

macro_rules! dispatch {
    ($self:expr, $trait:path, $method:ident ( $($arg:expr),* $(,)? )) => {
        match $self {
            #[cfg(feature = "sqlite")]
            StorageBackend::Sqlite(s) => <crate::Storage as $trait>::$method(s, $($arg),*).await,
            #[cfg(feature = "postgres")]
            StorageBackend::Postgres(s) => <crate::pg_storage::PgStorage as $trait>::$method(s, $($arg),*).await,
        }
    };
}

#[derive(Clone, Debug)]
pub enum StorageBackend {
    #[cfg(feature = "sqlite")]
    Sqlite(crate::Storage),
    #[cfg(feature = "postgres")]
    Postgres(crate::pg_storage::PgStorage),
}

impl StorageBackend {
    #[cfg(feature = "sqlite")]
    pub fn new_sqlite(db_path: &Path) -> Result<Self, StorageError> {
        Ok(Self::Sqlite(crate::Storage::new(db_path)?))
    }

    #[cfg(feature = "postgres")]
    pub async fn new_postgres(database_url: &str) -> Result<Self, StorageError> {
        Ok(Self::Postgres(crate::pg_storage::PgStorage::new(database_url).await?))
    }

    /// Short backend name for logs.
    pub const fn kind(&self) -> &'static str {
        match *self {
            #[cfg(feature = "sqlite")]
            Self::Sqlite(_) => "sqlite",
            #[cfg(feature = "postgres")]
            Self::Postgres(_) => "postgres",
        }
    }
}

#[async_trait]
impl UniversityStore for StorageBackend {
    async fn create(&self, prepared: &PreparedUniversity) -> Result<University, StorageError> {
        dispatch!(self, UniversityStore, create(prepared))
    }

    async fn update_one(
        &self,
        filter: &UniversityFilter,
        update: &UniversityUpdate,
    ) -> Result<University, StorageError> {
        dispatch!(self, UniversityStore, update_one(filter, update))
    }

    async fn get(&self, filter: &UniversityFilter) -> Result<Option<University>, StorageError> {
        dispatch!(self, UniversityStore, get(filter))
    }

    async fn list(&self, limit: usize) -> Result<Vec<University>, StorageError> {
        dispatch!(self, UniversityStore, list(limit))
    }

    async fn count(&self) -> Result<usize, StorageError> {
        dispatch!(self, UniversityStore, count())
    }
}
