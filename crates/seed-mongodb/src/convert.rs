//! Conversion between seeded records and BSON documents.
//!
//! The model's primary key is stored as MongoDB's `_id`; every other field
//! keeps its name.

use bson::spec::BinarySubtype;
use bson::{oid::ObjectId, Bson, DateTime as BsonDateTime, Document};
use seed_core::{Record, SeedValue};
use uuid::Uuid;

/// Name of the document field holding `name`.
pub fn document_field<'a>(name: &'a str, key: &str) -> &'a str {
    if name == key {
        "_id"
    } else {
        name
    }
}

pub fn seed_value_to_bson(value: &SeedValue) -> Bson {
    match value {
        SeedValue::Null => Bson::Null,
        SeedValue::Bool(b) => Bson::Boolean(*b),
        SeedValue::Int64(i) => Bson::Int64(*i),
        SeedValue::Float64(f) => Bson::Double(*f),
        SeedValue::String(s) => Bson::String(s.clone()),

        // MongoDB has a native UUID binary subtype
        SeedValue::Uuid(u) => Bson::Binary(bson::Binary {
            subtype: BinarySubtype::Uuid,
            bytes: u.as_bytes().to_vec(),
        }),
        SeedValue::ObjectId(bytes) => Bson::ObjectId(ObjectId::from_bytes(*bytes)),

        // Millisecond precision
        SeedValue::DateTime(dt) => Bson::DateTime(BsonDateTime::from_chrono(*dt)),

        SeedValue::Array(items) => Bson::Array(items.iter().map(seed_value_to_bson).collect()),
        SeedValue::Object(map) => Bson::Document(
            map.iter()
                .map(|(k, v)| (k.clone(), seed_value_to_bson(v)))
                .collect(),
        ),
    }
}

pub fn bson_to_seed_value(value: Bson) -> SeedValue {
    match value {
        Bson::Null | Bson::Undefined => SeedValue::Null,
        Bson::Boolean(b) => SeedValue::Bool(b),
        Bson::Int32(i) => SeedValue::Int64(i64::from(i)),
        Bson::Int64(i) => SeedValue::Int64(i),
        Bson::Double(f) => SeedValue::Float64(f),
        Bson::String(s) => SeedValue::String(s),
        Bson::ObjectId(oid) => SeedValue::ObjectId(oid.bytes()),
        Bson::DateTime(dt) => SeedValue::DateTime(dt.to_chrono()),
        Bson::Binary(bin) if bin.subtype == BinarySubtype::Uuid && bin.bytes.len() == 16 => {
            Uuid::from_slice(&bin.bytes).map_or(SeedValue::Null, SeedValue::Uuid)
        }
        Bson::Array(items) => SeedValue::Array(items.into_iter().map(bson_to_seed_value).collect()),
        Bson::Document(doc) => SeedValue::Object(
            doc.into_iter()
                .map(|(k, v)| (k, bson_to_seed_value(v)))
                .collect(),
        ),
        // Decimal128, timestamps, regexes... kept in their display form
        other => SeedValue::String(other.to_string()),
    }
}

/// Convert a record, storing its `key` field as `_id`.
pub fn record_to_document(record: &Record, key: &str) -> Document {
    let mut doc = Document::new();
    for (name, value) in record.iter() {
        doc.insert(document_field(name, key), seed_value_to_bson(value));
    }
    doc
}

/// Convert a document back, renaming `_id` to `key`.
pub fn document_to_record(doc: Document, key: &str) -> Record {
    doc.into_iter()
        .map(|(name, value)| {
            let name = if name == "_id" { key.to_string() } else { name };
            (name, bson_to_seed_value(value))
        })
        .collect()
}

/// Fill `key` on an inserted record from the `_id` the server reported.
pub fn with_inserted_id(mut record: Record, key: &str, id: Bson) -> Record {
    record.insert(key.to_string(), bson_to_seed_value(id));
    record
}

/// Projection document keeping `fields` (and `_id`, which MongoDB always returns).
pub fn projection_document(fields: &[String], key: &str) -> Document {
    let mut projection = Document::new();
    for name in fields {
        projection.insert(document_field(name, key), 1);
    }
    projection
}
