//! Field schema subsystem for mockforce
//!
//! A schema is an optional overlay over record storage: any object
//! type may store records, and only types with a schema entry
//! participate in schema-driven validation.
//!
//! # Design Principles
//!
//! - Schemas describe required-ness per field, nothing more
//! - Declaration order in the schema file is preserved and observable
//! - A missing schema file is a fatal configuration problem, not a
//!   per-call error

mod errors;
mod registry;
mod types;

pub use errors::{SchemaError, SchemaResult};
pub use registry::SchemaRegistry;
pub use types::{FieldDef, ObjectSchema};
