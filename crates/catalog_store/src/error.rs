//! Store error types.

use thiserror::Error;

/// Errors that can occur during store operations.
///
/// Lookup misses are not errors: `find_by_id` reports absence as `Ok(None)`
/// and callers decide whether that is fatal. Only `update` against an unknown
/// id fails with [`StoreError::NotFound`] directly.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Entity not found.
    #[error("{entity} not found, id {id}")]
    NotFound { entity: &'static str, id: u64 },
}

impl StoreError {
    /// Creates a not found error.
    pub fn not_found(entity: &'static str, id: u64) -> Self {
        Self::NotFound { entity, id }
    }

    /// Returns true if this error is a not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
