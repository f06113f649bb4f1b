//! Storage backend trait abstraction
//!
//! The write path hands already-prepared records and update sets to this
//! trait; backends only persist them and enforce uniqueness.

use async_trait::async_trait;
use unidir_core::{PreparedUniversity, University, UniversityFilter, UniversityUpdate};

use crate::error::StorageError;

/// University repository operations.
#[async_trait]
pub trait UniversityStore: Send + Sync {
    /// Insert a new record, generating its id.
    ///
    /// Fails with [`StorageError::Duplicate`] when `name` or `slug` is taken.
    async fn create(&self, prepared: &PreparedUniversity) -> Result<University, StorageError>;

    /// Apply `update` to the single record matching `filter` and return it.
    ///
    /// Fails with [`StorageError::NotFound`] when nothing matches and with
    /// [`StorageError::Duplicate`] when the change collides; in both cases
    /// the record is left as it was. An empty update returns the record unchanged.
    async fn update_one(
        &self,
        filter: &UniversityFilter,
        update: &UniversityUpdate,
    ) -> Result<University, StorageError>;

    /// Fetch the record matching `filter`.
    async fn get(&self, filter: &UniversityFilter) -> Result<Option<University>, StorageError>;

    /// List records ordered by name.
    async fn list(&self, limit: usize) -> Result<Vec<University>, StorageError>;

    /// Total number of stored records.
    async fn count(&self) -> Result<usize, StorageError>;
}
