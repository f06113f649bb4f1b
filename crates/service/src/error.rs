//! Typed error enum for the service layer.
//!
//! Keeps validation failures (nothing was written) apart from storage
//! failures (the write was attempted and rejected).

use thiserror::Error;
use unidir_core::ValidationError;
use unidir_storage::StorageError;

/// Service-layer error.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Candidate failed validation; no write was attempted.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Storage operation failed (duplicate key, not found, DB, etc.).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),
}

impl ServiceError {
    /// Whether this error is likely transient (worth retrying).
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Storage(e) => e.is_transient(),
            Self::Validation(_) => false,
        }
    }

    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Whether this error represents a not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Storage(e) if e.is_not_found())
    }

    /// Whether this error represents a duplicate-key conflict.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Storage(e) if e.is_duplicate())
    }
}
