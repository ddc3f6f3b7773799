//! Request-handling client for mockforce
//!
//! A stateless façade over the record store: parses path-like targets
//! of the form `.../sobjects/<ObjectType>(/<Id>)?`, runs the
//! configured validation checks, and shapes results into the
//! envelopes the remote API would produce.
//!
//! # Design Principles
//!
//! - The client holds no record state; the store behind the mutex does
//! - Validation order is fixed: schema existence, then record
//!   existence (update) or required fields (insert)
//! - Check-then-act sequences hold the store lock for the whole
//!   operation
//! - The schema registry is loaded once and cached

mod errors;
mod response;
mod validation;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use rand::rngs::OsRng;
use rand::RngCore;
use tracing::debug;

use crate::config::Config;
use crate::query::ParsedQuery;
use crate::schema::SchemaRegistry;
use crate::store::{Record, RecordStore};

pub use errors::{ApiError, ApiResult};
pub use response::{Envelope, ListBody, QueryRecord, RecordAttributes, SingleBody};
pub use validation::validate_known_fields;

/// Random bytes in a generated record id.
const RECORD_ID_BYTES: usize = 13;

/// Shared handle to the record store backing a client.
pub type SharedStore = Arc<Mutex<RecordStore>>;

/// The verb-operation entry point of the test double.
pub struct Client {
    store: SharedStore,
    config: Config,
    schemas: OnceLock<SchemaRegistry>,
}

impl Client {
    /// Client over a fresh empty store.
    pub fn new(config: Config) -> Self {
        Self::with_store(Arc::new(Mutex::new(RecordStore::new())), config)
    }

    /// Client over a store owned by the test harness.
    pub fn with_store(store: SharedStore, config: Config) -> Self {
        Self {
            store,
            config,
            schemas: OnceLock::new(),
        }
    }

    /// Clone of the shared store handle, for direct harness seeding.
    pub fn store(&self) -> SharedStore {
        Arc::clone(&self.store)
    }

    /// Fetches a record by id, or runs a query when `path` is the
    /// literal `"query"` and a payload is supplied.
    ///
    /// The by-id shape nests the whole fetched record (or null) under
    /// the key `"id"`; an absent record is not an error.
    pub fn fetch(
        &self,
        path: &str,
        params: Option<&HashMap<String, String>>,
    ) -> ApiResult<Envelope> {
        if path == "query" {
            if let Some(raw) = params.and_then(|p| p.values().next()) {
                return Ok(Envelope::List(self.run_query(raw)));
            }
        }
        let (object, id) = parse_record_path(path)?;
        debug!(%object, %id, "fetch");
        let store = self.store.lock().unwrap();
        Ok(Envelope::Single(SingleBody::from_record(
            store.get(&object, &id),
        )))
    }

    /// Updates `(object, id)` with a shallow merge of `attrs` and
    /// returns the merged record.
    pub fn update(&self, path: &str, attrs: &Record) -> ApiResult<Record> {
        let (object, id) = parse_record_path(path)?;
        debug!(%object, %id, "update");
        self.validate_schema_exists(&object)?;
        let mut store = self.store.lock().unwrap();
        self.validate_record_exists(&store, &object, &id)?;
        Ok(store.update(&object, &id, attrs))
    }

    /// Inserts `attrs` under a freshly generated record id and returns
    /// a single envelope carrying that id.
    pub fn insert(&self, path: &str, attrs: Record) -> ApiResult<Envelope> {
        let object = parse_object_path(path)?;
        let id = generate_record_id();
        debug!(%object, %id, "insert");
        self.validate_schema_exists(&object)?;
        self.validate_required_fields(&object, &attrs)?;
        let mut store = self.store.lock().unwrap();
        store.insert(&object, &id, attrs)?;
        Ok(Envelope::Single(SingleBody::new(id)))
    }

    /// Seeds a record directly, bypassing validation.
    ///
    /// # Errors
    ///
    /// Conflicts like a plain store insert.
    pub fn add_record(&self, object: &str, id: &str, record: Record) -> ApiResult<()> {
        let mut store = self.store.lock().unwrap();
        store.insert(object, id, record)?;
        Ok(())
    }

    /// Reads a record directly from the store.
    pub fn get_record(&self, object: &str, id: &str) -> Option<Record> {
        self.store.lock().unwrap().get(object, id).cloned()
    }

    /// Drops every stored record. Call between test scenarios.
    pub fn reset(&self) {
        self.store.lock().unwrap().reset();
    }

    fn run_query(&self, raw: &str) -> ListBody {
        debug!(query = raw, "query fetch");
        match ParsedQuery::parse(raw) {
            Some(query) => {
                let store = self.store.lock().unwrap();
                let matched = store
                    .find_by_field(&query.object, &query.field, &query.value)
                    .map(str::to_string);
                ListBody::from_match(&query.object, matched)
            }
            // A query that does not fit the grammar matches nothing
            None => ListBody::from_match("", None),
        }
    }
}

/// 13 random bytes as URL-safe base64 without padding.
///
/// Collisions are possible and tolerated, matching the remote API
/// mock traffic this double stands in for.
fn generate_record_id() -> String {
    let mut bytes = [0u8; RECORD_ID_BYTES];
    OsRng.fill_bytes(&mut bytes);
    base64::Engine::encode(&base64::engine::general_purpose::URL_SAFE_NO_PAD, bytes)
}

/// Splits `.../sobjects/<Object>/<Id>` into its trailing segments.
fn parse_record_path(path: &str) -> ApiResult<(String, String)> {
    let (_, rest) = path
        .split_once("sobjects/")
        .ok_or_else(|| ApiError::InvalidPath(path.to_string()))?;
    let (object, id) = rest
        .trim_end_matches('/')
        .rsplit_once('/')
        .ok_or_else(|| ApiError::InvalidPath(path.to_string()))?;
    if object.is_empty() || id.is_empty() {
        return Err(ApiError::InvalidPath(path.to_string()));
    }
    Ok((object.to_string(), id.to_string()))
}

/// Extracts `<Object>` from `.../sobjects/<Object>`.
fn parse_object_path(path: &str) -> ApiResult<String> {
    let (_, rest) = path
        .split_once("sobjects/")
        .ok_or_else(|| ApiError::InvalidPath(path.to_string()))?;
    let object = rest.trim_matches('/');
    if object.is_empty() {
        return Err(ApiError::InvalidPath(path.to_string()));
    }
    Ok(object.to_string())
}
