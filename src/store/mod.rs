//! Record storage subsystem for mockforce
//!
//! Records are bucketed by object-type name, then keyed by record id.
//! The store is the single stateful component of the crate.
//!
//! # Design Principles
//!
//! - Reading an unseen object type observes an empty bucket, never an
//!   absent one
//! - Mutation goes through an explicit get-or-create bucket operation
//! - Merge on update is shallow; the incoming value fully replaces the
//!   stored one per field
//! - Lifecycle is explicit: `new`, `reset`, drop — never process exit

mod errors;

use indexmap::IndexMap;
use serde_json::Value;
use tracing::trace;

pub use errors::{StoreError, StoreResult};

/// One stored record: field name to value, insertion-ordered.
pub type Record = IndexMap<String, Value>;

/// All records of one object type, keyed by record id.
pub type Bucket = IndexMap<String, Record>;

/// In-memory record storage with an explicit lifecycle.
///
/// Not synchronized by itself; the client guards it with a single
/// mutex so check-then-act verb sequences stay atomic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    buckets: IndexMap<String, Bucket>,
}

impl RecordStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get-or-create the bucket for an object type.
    pub fn bucket(&mut self, object: &str) -> &mut Bucket {
        self.buckets.entry(object.to_string()).or_default()
    }

    /// Iterates `(id, record)` pairs of one object type in insertion
    /// order. Unseen object types iterate as empty.
    pub fn records(&self, object: &str) -> impl Iterator<Item = (&str, &Record)> {
        self.buckets
            .get(object)
            .into_iter()
            .flat_map(|bucket| bucket.iter().map(|(id, record)| (id.as_str(), record)))
    }

    /// Inserts a record under `(object, id)`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Conflict` if the id already holds a record
    /// under this object type.
    pub fn insert(&mut self, object: &str, id: &str, record: Record) -> StoreResult<()> {
        if self.buckets.get(object).map_or(false, |b| b.contains_key(id)) {
            return Err(StoreError::Conflict {
                object: object.to_string(),
                id: id.to_string(),
            });
        }
        trace!(object, id, "store insert");
        self.bucket(object).insert(id.to_string(), record);
        Ok(())
    }

    /// Returns the record for `(object, id)`, or `None` if absent.
    ///
    /// Reads never create buckets.
    pub fn get(&self, object: &str, id: &str) -> Option<&Record> {
        self.buckets.get(object).and_then(|bucket| bucket.get(id))
    }

    /// Shallow-merges `attrs` over the current record, writes the
    /// result back, and returns it.
    ///
    /// Existence is not checked here — callers validate first. Merging
    /// onto an absent record merges onto an empty one.
    pub fn update(&mut self, object: &str, id: &str, attrs: &Record) -> Record {
        trace!(object, id, "store update");
        let current = self.bucket(object).entry(id.to_string()).or_default();
        for (field, value) in attrs {
            current.insert(field.clone(), value.clone());
        }
        current.clone()
    }

    /// Id of the first record whose `field` string-equals `value`.
    ///
    /// Scan order is bucket insertion order; comparison is exact and
    /// case-sensitive, against string values only.
    pub fn find_by_field(&self, object: &str, field: &str, value: &str) -> Option<&str> {
        self.records(object)
            .find(|(_, record)| record.get(field).and_then(Value::as_str) == Some(value))
            .map(|(id, _)| id)
    }

    /// Drops every bucket across all object types.
    ///
    /// Test isolation between scenarios requires calling this
    /// explicitly.
    pub fn reset(&mut self) {
        trace!("store reset");
        self.buckets = IndexMap::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(pairs: &[(&str, &str)]) -> Record {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), json!(v)))
            .collect()
    }

    #[test]
    fn test_insert_then_get_returns_record() {
        let mut store = RecordStore::new();
        let rec = record(&[("Name", "Name here")]);

        store.insert("Contact", "some id", rec.clone()).unwrap();

        assert_eq!(store.get("Contact", "some id"), Some(&rec));
    }

    #[test]
    fn test_second_insert_with_same_id_conflicts() {
        let mut store = RecordStore::new();
        store
            .insert("Contact", "some id", record(&[("Name", "a")]))
            .unwrap();

        let result = store.insert("Contact", "some id", record(&[("Name", "b")]));

        assert_eq!(
            result,
            Err(StoreError::Conflict {
                object: "Contact".to_string(),
                id: "some id".to_string(),
            })
        );
        // First record is untouched
        assert_eq!(store.get("Contact", "some id"), Some(&record(&[("Name", "a")])));
    }

    #[test]
    fn test_same_id_under_different_object_types_is_fine() {
        let mut store = RecordStore::new();
        store.insert("Contact", "x", Record::new()).unwrap();
        store.insert("Account", "x", Record::new()).unwrap();
    }

    #[test]
    fn test_get_unseen_object_type_is_none_not_panic() {
        let store = RecordStore::new();
        assert_eq!(store.get("Never", "seen"), None);
        assert_eq!(store.records("Never").count(), 0);
    }

    #[test]
    fn test_update_merges_shallowly_attrs_win() {
        let mut store = RecordStore::new();
        store
            .insert(
                "Contact",
                "some id",
                record(&[("Name", "Name here"), ("Location", "Somewhere")]),
            )
            .unwrap();

        let merged = store.update("Contact", "some id", &record(&[("Location", "None")]));

        let expected = record(&[("Name", "Name here"), ("Location", "None")]);
        assert_eq!(merged, expected);
        assert_eq!(store.get("Contact", "some id"), Some(&expected));
    }

    #[test]
    fn test_update_replaces_nested_values_wholesale() {
        let mut store = RecordStore::new();
        let mut original = Record::new();
        original.insert("Meta".to_string(), json!({"a": 1, "b": 2}));
        store.insert("Contact", "id", original).unwrap();

        let mut attrs = Record::new();
        attrs.insert("Meta".to_string(), json!({"a": 9}));
        let merged = store.update("Contact", "id", &attrs);

        // No recursive merge: "b" is gone
        assert_eq!(merged.get("Meta"), Some(&json!({"a": 9})));
    }

    #[test]
    fn test_find_by_field_first_match_in_insertion_order() {
        let mut store = RecordStore::new();
        store
            .insert("Contact", "first", record(&[("Email", "dup@example.com")]))
            .unwrap();
        store
            .insert("Contact", "second", record(&[("Email", "dup@example.com")]))
            .unwrap();

        assert_eq!(
            store.find_by_field("Contact", "Email", "dup@example.com"),
            Some("first")
        );
    }

    #[test]
    fn test_find_by_field_is_exact_and_case_sensitive() {
        let mut store = RecordStore::new();
        store
            .insert("Contact", "id", record(&[("Email", "a@b.com")]))
            .unwrap();

        assert_eq!(store.find_by_field("Contact", "Email", "A@B.com"), None);
        assert_eq!(store.find_by_field("Contact", "email", "a@b.com"), None);
        assert_eq!(store.find_by_field("Contact", "Email", "a@b.com"), Some("id"));
    }

    #[test]
    fn test_find_by_field_ignores_non_string_values() {
        let mut store = RecordStore::new();
        let mut rec = Record::new();
        rec.insert("Age".to_string(), json!(42));
        store.insert("Contact", "id", rec).unwrap();

        assert_eq!(store.find_by_field("Contact", "Age", "42"), None);
    }

    #[test]
    fn test_reset_clears_all_object_types() {
        let mut store = RecordStore::new();
        store.insert("Contact", "a", Record::new()).unwrap();
        store.insert("Account", "b", Record::new()).unwrap();

        store.reset();

        assert_eq!(store.get("Contact", "a"), None);
        assert_eq!(store.get("Account", "b"), None);
    }
}
