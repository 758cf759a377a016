//! Value representations for seeded records.
//!
//! `SeedValue` is the store-agnostic value universe produced by the
//! synthesizer and the reference resolver. Storage clients convert it to
//! their native representation (BSON, JSON, ...) at the edge.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

/// Raw seeded value before conversion to a store's native format.
#[derive(Debug, Clone, PartialEq)]
pub enum SeedValue {
    /// Null value
    Null,

    /// Boolean value
    Bool(bool),

    /// 64-bit signed integer
    Int64(i64),

    /// 64-bit floating point
    Float64(f64),

    /// String value
    String(String),

    /// UUID value
    Uuid(Uuid),

    /// 12-byte object identifier (MongoDB native id format)
    ObjectId([u8; 12]),

    /// Date/time with timezone
    DateTime(DateTime<Utc>),

    /// Array of values
    Array(Vec<SeedValue>),

    /// Object/map of values
    Object(BTreeMap<String, SeedValue>),
}

impl SeedValue {
    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Try to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as an i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int64(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as an f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float64(f) => Some(*f),
            Self::Int64(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a UUID.
    pub fn as_uuid(&self) -> Option<&Uuid> {
        match self {
            Self::Uuid(u) => Some(u),
            _ => None,
        }
    }

    /// Try to get this value as a DateTime.
    pub fn as_datetime(&self) -> Option<&DateTime<Utc>> {
        match self {
            Self::DateTime(dt) => Some(dt),
            _ => None,
        }
    }

    /// Try to get this value as an array.
    pub fn as_array(&self) -> Option<&Vec<SeedValue>> {
        match self {
            Self::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Try to get this value as an object.
    pub fn as_object(&self) -> Option<&BTreeMap<String, SeedValue>> {
        match self {
            Self::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Convert to a JSON value.
    ///
    /// UUIDs and object ids become strings, datetimes become RFC 3339 strings,
    /// and non-finite floats become null.
    pub fn to_json(&self) -> JsonValue {
        match self {
            Self::Null => JsonValue::Null,
            Self::Bool(b) => JsonValue::Bool(*b),
            Self::Int64(i) => JsonValue::from(*i),
            Self::Float64(f) => serde_json::Number::from_f64(*f)
                .map(JsonValue::Number)
                .unwrap_or(JsonValue::Null),
            Self::String(s) => JsonValue::String(s.clone()),
            Self::Uuid(u) => JsonValue::String(u.to_string()),
            Self::ObjectId(bytes) => JsonValue::String(object_id_hex(bytes)),
            Self::DateTime(dt) => {
                JsonValue::String(dt.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
            Self::Array(arr) => JsonValue::Array(arr.iter().map(SeedValue::to_json).collect()),
            Self::Object(obj) => JsonValue::Object(
                obj.iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
        }
    }
}

impl fmt::Display for SeedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            other => write!(f, "{}", other.to_json()),
        }
    }
}

impl From<&str> for SeedValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for SeedValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i64> for SeedValue {
    fn from(i: i64) -> Self {
        Self::Int64(i)
    }
}

impl From<bool> for SeedValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Uuid> for SeedValue {
    fn from(u: Uuid) -> Self {
        Self::Uuid(u)
    }
}

/// Lower-case hex rendering of an object id.
pub fn object_id_hex(bytes: &[u8; 12]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// One record of a model: field name -> value.
///
/// Fields are kept sorted by name so records compare and print stably.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: BTreeMap<String, SeedValue>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, builder style.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<SeedValue>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Insert or replace a field value.
    pub fn insert(&mut self, name: impl Into<String>, value: SeedValue) -> Option<SeedValue> {
        self.fields.insert(name.into(), value)
    }

    /// Get a field value by name.
    pub fn get(&self, name: &str) -> Option<&SeedValue> {
        self.fields.get(name)
    }

    /// Remove a field.
    pub fn remove(&mut self, name: &str) -> Option<SeedValue> {
        self.fields.remove(name)
    }

    /// Whether the record carries a field with this name.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &SeedValue)> {
        self.fields.iter()
    }

    /// Keep only the named fields.
    pub fn project(&self, names: &[String]) -> Record {
        Record {
            fields: self
                .fields
                .iter()
                .filter(|(k, _)| names.contains(k))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        }
    }

    /// Non-null value stored under `key`, used as an identifier.
    pub fn identifier(&self, key: &str) -> Option<&SeedValue> {
        self.fields.get(key).filter(|v| !v.is_null())
    }

    /// Convert to a JSON object.
    pub fn to_json(&self) -> JsonValue {
        JsonValue::Object(
            self.fields
                .iter()
                .map(|(k, v)| (k.clone(), v.to_json()))
                .collect(),
        )
    }
}

impl FromIterator<(String, SeedValue)> for Record {
    fn from_iter<T: IntoIterator<Item = (String, SeedValue)>>(iter: T) -> Self {
        Record {
            fields: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Record {
    type Item = (String, SeedValue);
    type IntoIter = std::collections::btree_map::IntoIter<String, SeedValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}
