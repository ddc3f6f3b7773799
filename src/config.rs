//! Validation behavior flags.
//!
//! Constructed by the test harness and read by the client; the core
//! never mutates it.

use std::collections::HashSet;
use std::path::PathBuf;

/// Flags governing which validation checks are active.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the schema description file, when one is available.
    /// Schema-driven checks are inert without it.
    pub schema_file: Option<PathBuf>,
    /// Reject inserts that omit schema-declared required fields
    pub error_on_required: bool,
    /// Reject operations on object types without a schema entry
    pub raise_on_schema_missing: bool,
    /// Field names always exempt from the required check
    pub required_exclusions: HashSet<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema_file: None,
            error_on_required: true,
            raise_on_schema_missing: false,
            required_exclusions: HashSet::new(),
        }
    }
}

impl Config {
    /// Config with a schema file and everything else at defaults.
    pub fn with_schema_file(path: impl Into<PathBuf>) -> Self {
        Self {
            schema_file: Some(path.into()),
            ..Self::default()
        }
    }

    /// Adds a field name to the required-check exclusion set.
    pub fn exclude_required(mut self, field: impl Into<String>) -> Self {
        self.required_exclusions.insert(field.into());
        self
    }
}
