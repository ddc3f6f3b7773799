//! Schema registry error types.
//!
//! These are fatal configuration problems around the schema
//! description file, distinct from the per-call validation errors the
//! client raises.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Problems loading or writing the schema description file
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A schema-dependent check ran without a configured schema file
    #[error("schema file is not defined")]
    NotConfigured,

    /// Schema file path does not resolve
    #[error("schema file {} is not available: {source}", .path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Schema file exists but is not valid JSON of the expected shape
    #[error("schema file {} is malformed: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
