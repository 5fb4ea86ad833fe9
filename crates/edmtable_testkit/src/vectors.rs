//! Shared decode test vectors.
//!
//! These vectors pin down how service payloads decode, so that other
//! client implementations can check themselves against the same cases.

use edmtable_codec::CodecError;
use serde::{Deserialize, Serialize};

/// An entity payload and what decoding it must produce.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestVector {
    /// Unique identifier for this vector.
    pub id: String,
    /// Human-readable description.
    pub description: String,
    /// The JSON payload.
    pub payload: String,
    /// Expected `(property, kind)` pairs, in wire order.
    pub expected_kinds: Vec<(String, String)>,
    /// Expected ETag.
    pub expected_etag: String,
    /// Expected error kind (if this should fail).
    pub expected_error: Option<String>,
}

/// A table listing and the names it must produce.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableVector {
    /// Unique identifier for this vector.
    pub id: String,
    /// The JSON payload.
    pub payload: String,
    /// Expected table names.
    pub expected_names: Vec<String>,
    /// Expected error kind (if this should fail).
    pub expected_error: Option<String>,
}

/// Names the kind of a codec error, as used in `expected_error`.
pub fn error_kind(err: &CodecError) -> &'static str {
    match err {
        CodecError::MalformedPayload { .. } => "MalformedPayload",
        CodecError::UnsupportedKind { .. } => "UnsupportedKind",
        CodecError::ValueConversion { .. } => "ValueConversion",
    }
}

fn ok(id: &str, description: &str, payload: &str, kinds: &[(&str, &str)], etag: &str) -> TestVector {
    TestVector {
        id: id.into(),
        description: description.into(),
        payload: payload.into(),
        expected_kinds: kinds
            .iter()
            .map(|(name, kind)| ((*name).to_string(), (*kind).to_string()))
            .collect(),
        expected_etag: etag.into(),
        expected_error: None,
    }
}

fn fails(id: &str, description: &str, payload: &str, error: &str) -> TestVector {
    TestVector {
        id: id.into(),
        description: description.into(),
        payload: payload.into(),
        expected_kinds: Vec::new(),
        expected_etag: String::new(),
        expected_error: Some(error.into()),
    }
}

/// Entity decode vectors.
pub fn entity_decode_vectors() -> Vec<TestVector> {
    vec![
        ok(
            "inferred_scalars",
            "Unannotated JSON scalars take their natural kinds",
            r#"{"S":"a","I":1,"F":1.5,"B":true}"#,
            &[
                ("S", "Edm.String"),
                ("I", "Edm.Int32"),
                ("F", "Edm.Double"),
                ("B", "Edm.Boolean"),
            ],
            "",
        ),
        ok(
            "annotated_int64",
            "An annotation decides the kind of a string value",
            r#"{"N":"12","N@odata.type":"Edm.Int64"}"#,
            &[("N", "Edm.Int64")],
            "",
        ),
        ok(
            "annotation_before_value",
            "Annotation order on the wire does not matter",
            r#"{"G@odata.type":"Edm.Guid","G":"c9da6455-213d-42c9-9a79-3e9149a57833"}"#,
            &[("G", "Edm.Guid")],
            "",
        ),
        ok(
            "metadata_filtering",
            "odata.* keys and annotations never become properties",
            r#"{"odata.etag":"e","odata.foo":"x","X@odata.type":"Edm.Int64","X":"1"}"#,
            &[("X", "Edm.Int64")],
            "e",
        ),
        ok(
            "timestamp_etag",
            "A missing ETag is derived from the timestamp",
            r#"{"Timestamp":"2020-01-01T00:00:00Z"}"#,
            &[("Timestamp", "Edm.DateTime")],
            "W/\"datetime'5e0be100'\"",
        ),
        ok(
            "null_value",
            "Unannotated nulls decode as strings",
            r#"{"N":null}"#,
            &[("N", "Edm.String")],
            "",
        ),
        ok(
            "large_integer",
            "Integers outside the 32-bit range infer Int64",
            r#"{"N":5000000000}"#,
            &[("N", "Edm.Int64")],
            "",
        ),
        fails(
            "unknown_type",
            "Unknown annotations are rejected",
            r#"{"P":"1","P@odata.type":"Edm.Decimal"}"#,
            "UnsupportedKind",
        ),
        fails(
            "bad_int32",
            "Values that do not fit their annotation are rejected",
            r#"{"P":"x","P@odata.type":"Edm.Int32"}"#,
            "ValueConversion",
        ),
        fails(
            "not_an_object",
            "The body must be a JSON object",
            "[]",
            "MalformedPayload",
        ),
    ]
}

/// Table listing vectors.
pub fn table_list_vectors() -> Vec<TableVector> {
    vec![
        TableVector {
            id: "two_tables".into(),
            payload: r#"{"value":[{"TableName":"a"},{"TableName":"b"}]}"#.into(),
            expected_names: vec!["a".into(), "b".into()],
            expected_error: None,
        },
        TableVector {
            id: "no_tables".into(),
            payload: r#"{"value":[]}"#.into(),
            expected_names: Vec::new(),
            expected_error: None,
        },
        TableVector {
            id: "missing_list".into(),
            payload: r#"{"odata.metadata":"x"}"#.into(),
            expected_names: Vec::new(),
            expected_error: Some("MalformedPayload".into()),
        },
    ]
}

/// Generate all test vectors as JSON for cross-language use.
pub fn all_vectors_json() -> String {
    let vectors = AllTestVectors {
        entity: entity_decode_vectors(),
        table_list: table_list_vectors(),
    };

    serde_json::to_string_pretty(&vectors).expect("Failed to serialize vectors")
}

#[derive(Debug, Serialize, Deserialize)]
struct AllTestVectors {
    entity: Vec<TestVector>,
    table_list: Vec<TableVector>,
}
