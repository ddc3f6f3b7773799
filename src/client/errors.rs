//! Client-facing error types.
//!
//! Every failure a caller can observe flows through [`ApiError`].
//! Messages mirror the remote API's wording, so assertions written
//! against recorded traffic keep passing against the double.

use thiserror::Error;

use crate::schema::SchemaError;
use crate::store::StoreError;

/// Result type for client operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced by the client's verb operations
///
/// None are retried or swallowed; each operation is all-or-nothing.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Insert target already populated
    #[error("{0}")]
    Store(#[from] StoreError),

    /// Update target absent from the store
    #[error("provided external ID field does not exist or is not accessible: {id}")]
    NotFound { id: String },

    /// Object type has no schema entry (only when the governing flag
    /// is enabled)
    #[error("no schema for object {object}")]
    SchemaMissing { object: String },

    /// Insert attributes omit schema-required fields
    #[error("REQUIRED_FIELD_MISSING: required fields are missing: [{}]", .fields.join(", "))]
    RequiredFieldMissing { fields: Vec<String> },

    /// Attributes name fields the stored record does not carry
    #[error("INVALID_FIELD_FOR_INSERT_UPDATE: unable to create/update fields: [{}]", .fields.join(", "))]
    UnknownFields { fields: Vec<String> },

    /// Target path carries no object segment
    #[error("invalid target path: {0}")]
    InvalidPath(String),

    /// Schema file unconfigured, unreadable, or malformed — a fatal
    /// configuration problem rather than a per-call rejection
    #[error("{0}")]
    Schema(#[from] SchemaError),
}
