//! Record store error types.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by direct store mutation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Insert target already holds a record
    #[error("object {object} with id {id} exists")]
    Conflict { object: String, id: String },
}
