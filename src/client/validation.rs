//! Pre-mutation validation checks.
//!
//! Each check is independently gated by configuration; the client
//! invokes them in a fixed order before touching the store:
//! schema existence, then record existence (update) or required
//! fields (insert).

use crate::schema::{SchemaError, SchemaRegistry};
use crate::store::{Record, RecordStore};

use super::errors::{ApiError, ApiResult};
use super::Client;

impl Client {
    /// The cached schema registry, loading it on first use.
    ///
    /// An unconfigured or unreadable schema file surfaces here as the
    /// schema module's error.
    pub(super) fn schemas(&self) -> ApiResult<&SchemaRegistry> {
        if let Some(registry) = self.schemas.get() {
            return Ok(registry);
        }
        let path = self
            .config
            .schema_file
            .as_deref()
            .ok_or(SchemaError::NotConfigured)?;
        let loaded = SchemaRegistry::load(path)?;
        Ok(self.schemas.get_or_init(|| loaded))
    }

    /// Rejects object types without a schema entry.
    ///
    /// Active only when `raise_on_schema_missing` is set.
    pub(super) fn validate_schema_exists(&self, object: &str) -> ApiResult<()> {
        if !self.config.raise_on_schema_missing {
            return Ok(());
        }
        if !self.schemas()?.contains(object) {
            return Err(ApiError::SchemaMissing {
                object: object.to_string(),
            });
        }
        Ok(())
    }

    /// Rejects updates whose target record is absent.
    ///
    /// Always active. Takes the already-locked store so the check and
    /// the following merge happen under one lock.
    pub(super) fn validate_record_exists(
        &self,
        store: &RecordStore,
        object: &str,
        id: &str,
    ) -> ApiResult<()> {
        if store.get(object, id).is_none() {
            return Err(ApiError::NotFound { id: id.to_string() });
        }
        Ok(())
    }

    /// Rejects attribute sets that omit schema-required fields.
    ///
    /// Active only when a schema file is configured AND
    /// `error_on_required` is set. Missing fields are enumerated in
    /// the schema's declaration order, minus the configured
    /// exclusions.
    pub(super) fn validate_required_fields(&self, object: &str, attrs: &Record) -> ApiResult<()> {
        if self.config.schema_file.is_none() || !self.config.error_on_required {
            return Ok(());
        }
        let missing: Vec<String> = self
            .schemas()?
            .required_fields(object)
            .into_iter()
            .filter(|field| !attrs.contains_key(*field))
            .filter(|field| !self.config.required_exclusions.contains(*field))
            .map(str::to_string)
            .collect();
        if !missing.is_empty() {
            return Err(ApiError::RequiredFieldMissing { fields: missing });
        }
        Ok(())
    }
}

/// Rejects attributes naming fields the stored record does not carry.
///
/// Mirrors the remote API's INVALID_FIELD_FOR_INSERT_UPDATE rejection.
/// Not wired into the verb paths; harnesses that want the stricter
/// behavior call it against a fetched record before updating.
pub fn validate_known_fields(current: &Record, attrs: &Record) -> ApiResult<()> {
    let unknown: Vec<String> = attrs
        .keys()
        .filter(|field| !current.contains_key(*field))
        .cloned()
        .collect();
    if !unknown.is_empty() {
        return Err(ApiError::UnknownFields { fields: unknown });
    }
    Ok(())
}
