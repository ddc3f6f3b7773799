//! Schema description types.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Requirement metadata for a single field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Whether inserts must supply the field
    #[serde(default)]
    pub required: bool,
}

impl FieldDef {
    /// Create a required field
    pub fn required() -> Self {
        Self { required: true }
    }

    /// Create an optional field
    pub fn optional() -> Self {
        Self { required: false }
    }
}

/// Field definitions of one object type, in declaration order.
///
/// Declaration order is observable: the required-field check reports
/// missing fields in the order the schema file declares them.
pub type ObjectSchema = IndexMap<String, FieldDef>;
