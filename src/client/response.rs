//! Response envelopes mimicking the remote API's shapes.

use serde::Serialize;
use serde_json::Value;

use crate::store::Record;

/// Either of the two response shapes a verb operation can produce.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Envelope {
    /// Flat single-record shape
    Single(SingleBody),
    /// Query result-set shape
    List(ListBody),
}

impl Envelope {
    /// The single-record body, if this is a single envelope.
    pub fn as_single(&self) -> Option<&SingleBody> {
        match self {
            Envelope::Single(body) => Some(body),
            Envelope::List(_) => None,
        }
    }

    /// The result-set body, if this is a list envelope.
    pub fn as_list(&self) -> Option<&ListBody> {
        match self {
            Envelope::List(body) => Some(body),
            Envelope::Single(_) => None,
        }
    }
}

/// Flat single-record shape: one `id` key.
///
/// Inserts put the fresh record id here. Fetch-by-id nests the whole
/// fetched record (or null) under the same key — that reproduces the
/// remote API mock traffic's shaping, not the record's own id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SingleBody {
    pub id: Value,
}

impl SingleBody {
    /// Body holding a record id, as returned by insert.
    pub fn new(id: impl Into<Value>) -> Self {
        Self { id: id.into() }
    }

    /// By-id fetch shape: the record itself (or null) under `id`.
    pub fn from_record(record: Option<&Record>) -> Self {
        let id = record.map_or(Value::Null, |rec| {
            Value::Object(rec.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
        });
        Self { id }
    }
}

/// Query result-set shape.
///
/// `records` holds zero or one row — the matcher's first-match policy
/// never yields more. `total_size` counts the populated rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListBody {
    #[serde(rename = "totalSize")]
    pub total_size: usize,
    pub done: bool,
    pub records: Vec<QueryRecord>,
}

impl ListBody {
    /// Builds the result set for a query against `object`.
    pub fn from_match(object: &str, matched: Option<String>) -> Self {
        let records: Vec<QueryRecord> = matched
            .map(|id| QueryRecord::new(object, id))
            .into_iter()
            .collect();
        Self {
            total_size: records.len(),
            done: true,
            records,
        }
    }

    /// Id of the matched record, if any.
    pub fn first_id(&self) -> Option<&str> {
        self.records.first().map(|record| record.id.as_str())
    }
}

/// One row of a query result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryRecord {
    pub attributes: RecordAttributes,
    #[serde(rename = "Id")]
    pub id: String,
}

impl QueryRecord {
    fn new(object: &str, id: String) -> Self {
        Self {
            attributes: RecordAttributes {
                object_type: object.to_string(),
                url: String::new(),
            },
            id,
        }
    }
}

/// Row metadata block carried by every query record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordAttributes {
    #[serde(rename = "type")]
    pub object_type: String,
    pub url: String,
}
