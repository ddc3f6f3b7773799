//! Schema registry: loads and dumps the schema description file.
//!
//! The file is JSON of the shape
//!
//! ```text
//! { "<ObjectType>": { "<FieldName>": { "required": bool } } }
//! ```
//!
//! Object and field order in the file is preserved in memory, so the
//! required-field check enumerates missing fields in declared order.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use tracing::debug;

use super::errors::{SchemaError, SchemaResult};
use super::types::ObjectSchema;

/// In-memory registry of per-object field requirements.
///
/// Read-only from the client's perspective once loaded; the client
/// caches it after the first load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaRegistry {
    objects: IndexMap<String, ObjectSchema>,
}

impl SchemaRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the registry from a schema description file.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Unavailable` when the path does not
    /// resolve and `SchemaError::Malformed` on invalid JSON.
    pub fn load(path: &Path) -> SchemaResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| SchemaError::Unavailable {
            path: path.to_path_buf(),
            source,
        })?;
        let objects: IndexMap<String, ObjectSchema> =
            serde_json::from_str(&content).map_err(|source| SchemaError::Malformed {
                path: path.to_path_buf(),
                source,
            })?;
        debug!(path = %path.display(), objects = objects.len(), "schema file loaded");
        Ok(Self { objects })
    }

    /// Writes the registry out as pretty JSON.
    ///
    /// The counterpart of [`SchemaRegistry::load`]; harness tooling
    /// that captures a live schema uses this to produce the file.
    pub fn dump(&self, path: &Path) -> SchemaResult<()> {
        let content =
            serde_json::to_string_pretty(&self.objects).map_err(|source| SchemaError::Malformed {
                path: path.to_path_buf(),
                source,
            })?;
        fs::write(path, content).map_err(|source| SchemaError::Unavailable {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "schema file written");
        Ok(())
    }

    /// Registers an object schema programmatically.
    pub fn register(&mut self, object: impl Into<String>, schema: ObjectSchema) {
        self.objects.insert(object.into(), schema);
    }

    /// The field definitions for an object type, if declared.
    pub fn get(&self, object: &str) -> Option<&ObjectSchema> {
        self.objects.get(object)
    }

    /// Whether the object type has a schema entry.
    pub fn contains(&self, object: &str) -> bool {
        self.objects.contains_key(object)
    }

    /// Required field names of an object type, in declaration order.
    ///
    /// An object type without a schema entry has no required fields.
    pub fn required_fields(&self, object: &str) -> Vec<&str> {
        self.objects
            .get(object)
            .into_iter()
            .flat_map(|schema| {
                schema
                    .iter()
                    .filter(|(_, def)| def.required)
                    .map(|(name, _)| name.as_str())
            })
            .collect()
    }

    /// Number of object types in the registry.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }
}
