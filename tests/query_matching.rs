//! Query matching tests
//!
//! The closed single-clause equality grammar, end to end: seed the
//! store, fetch through the literal "query" path, check the list
//! envelope.

use std::collections::HashMap;

use mockforce::client::Client;
use mockforce::config::Config;
use mockforce::store::Record;
use serde_json::json;

// =============================================================================
// Helper Functions
// =============================================================================

fn record(pairs: &[(&str, &str)]) -> Record {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), json!(v)))
        .collect()
}

fn params(query: &str) -> HashMap<String, String> {
    HashMap::from([("q".to_string(), query.to_string())])
}

// =============================================================================
// Matching
// =============================================================================

/// Insert-then-query round trip on an email value.
#[test]
fn test_query_matches_stored_record() {
    let client = Client::new(Config::default());
    client
        .add_record(
            "Contact",
            "12345",
            record(&[("Email", "debrah.obrian@yahoo.com")]),
        )
        .unwrap();

    let envelope = client
        .fetch(
            "query",
            Some(&params(
                "Select Id FROM Contact WHERE Email = 'debrah.obrian@yahoo.com'",
            )),
        )
        .unwrap();

    assert_eq!(envelope.as_list().unwrap().first_id(), Some("12345"));
}

/// An escaped apostrophe in the query matches the unescaped stored
/// value.
#[test]
fn test_query_with_escaped_apostrophe() {
    let client = Client::new(Config::default());
    client
        .add_record(
            "Contact",
            "123456",
            record(&[("Email", "debrah.o'brian@yahoo.com")]),
        )
        .unwrap();

    let envelope = client
        .fetch(
            "query",
            Some(&params(
                "Select Id FROM Contact WHERE Email = 'debrah.o\\'brian@yahoo.com'",
            )),
        )
        .unwrap();

    assert_eq!(envelope.as_list().unwrap().first_id(), Some("123456"));
}

/// No matching record is an empty list, not an error.
#[test]
fn test_query_without_match_is_empty_list() {
    let client = Client::new(Config::default());

    let envelope = client
        .fetch(
            "query",
            Some(&params(
                "Select Id FROM Contact WHERE Email = 'no.exist@yahoo.com'",
            )),
        )
        .unwrap();

    let list = envelope.as_list().unwrap();
    assert_eq!(list.first_id(), None);
    assert_eq!(list.total_size, 0);
    assert!(list.done);
    assert!(list.records.is_empty());
}

/// Insertion order decides which of several matches wins.
#[test]
fn test_query_returns_first_match_in_insertion_order() {
    let client = Client::new(Config::default());
    client
        .add_record("Contact", "first", record(&[("Email", "dup@example.com")]))
        .unwrap();
    client
        .add_record("Contact", "second", record(&[("Email", "dup@example.com")]))
        .unwrap();

    let envelope = client
        .fetch(
            "query",
            Some(&params("Select Id FROM Contact WHERE Email = 'dup@example.com'")),
        )
        .unwrap();

    assert_eq!(envelope.as_list().unwrap().first_id(), Some("first"));
}

// =============================================================================
// Envelope shape
// =============================================================================

/// The list envelope carries the remote API's result-set structure.
#[test]
fn test_query_envelope_shape() {
    let client = Client::new(Config::default());
    client
        .add_record("Contact", "12345", record(&[("Email", "a@b.com")]))
        .unwrap();

    let envelope = client
        .fetch(
            "query",
            Some(&params("Select Id FROM Contact WHERE Email = 'a@b.com'")),
        )
        .unwrap();

    assert_eq!(
        serde_json::to_value(&envelope).unwrap(),
        json!({
            "totalSize": 1,
            "done": true,
            "records": [{
                "attributes": {"type": "Contact", "url": ""},
                "Id": "12345"
            }]
        })
    );
}
