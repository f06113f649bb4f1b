//! Async trait implementation for SQLite `Storage` via `spawn_blocking`.

use async_trait::async_trait;
use unidir_core::{PreparedUniversity, University, UniversityFilter, UniversityUpdate};

use crate::Storage;
use crate::error::StorageError;
use crate::traits::UniversityStore;

/// Helper: run a blocking closure on the tokio blocking pool.
async fn blocking<F, T>(f: F) -> Result<T, StorageError>
where
    F: FnOnce() -> Result<T, StorageError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await?
}

/// Body-generating macro for async-to-blocking delegation.
///
/// Each argument is annotated with a capture kind:
/// - `@ref arg`: `.clone()` a `&T`, pass as `&arg`
/// - `@val arg`: move directly (Copy/owned types)
macro_rules! delegate {
    ($self:ident, $method:ident $(, @$kind:ident $arg:ident)*) => {{
        let s = $self.clone();
        $(delegate!(@capture $kind $arg);)*
        blocking(move || s.$method($(delegate!(@pass $kind $arg)),*)).await
    }};
    (@capture ref $arg:ident) => { let $arg = $arg.clone(); };
    (@capture val $arg:ident) => { };
    (@pass ref $arg:ident) => { &$arg };
    (@pass val $arg:ident) => { $arg };
}

#[async_trait]
impl UniversityStore for Storage {
    async fn create(&self, prepared: &PreparedUniversity) -> Result<University, StorageError> {
        delegate!(self, create_university, @ref prepared)
    }
    async fn update_one(
        &self,
        filter: &UniversityFilter,
        update: &UniversityUpdate,
    ) -> Result<University, StorageError> {
        delegate!(self, update_university, @ref filter, @ref update)
    }
    async fn get(&self, filter: &UniversityFilter) -> Result<Option<University>, StorageError> {
        delegate!(self, get_university, @ref filter)
    }
    async fn list(&self, limit: usize) -> Result<Vec<University>, StorageError> {
        delegate!(self, list_universities, @val limit)
    }
    async fn count(&self) -> Result<usize, StorageError> {
        delegate!(self, count_universities)
    }
}
