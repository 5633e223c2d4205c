//! Domain-level error types.

use thiserror::Error;

/// Record store errors.
///
/// A malformed identifier and a missing record are both `NotFound`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Store write failed: {0}")]
    Write(String),

    #[error("Post not found")]
    NotFound,
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound)
    }
}
