//! Static value generator and YAML to SeedValue conversion.

use crate::generators::timestamp::parse_timestamp;
use seed_core::{FieldType, SeedValue};
use serde_yaml::Value as YamlValue;
use std::collections::BTreeMap;

/// Convert a YAML value to a SeedValue.
pub fn yaml_to_seed_value(yaml: &YamlValue) -> SeedValue {
    match yaml {
        YamlValue::Null => SeedValue::Null,
        YamlValue::Bool(b) => SeedValue::Bool(*b),
        YamlValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                SeedValue::Int64(i)
            } else if let Some(f) = n.as_f64() {
                SeedValue::Float64(f)
            } else {
                SeedValue::String(n.to_string())
            }
        }
        YamlValue::String(s) => SeedValue::String(s.clone()),
        YamlValue::Sequence(arr) => SeedValue::Array(arr.iter().map(yaml_to_seed_value).collect()),
        YamlValue::Mapping(map) => {
            let values: BTreeMap<String, SeedValue> = map
                .iter()
                .filter_map(|(k, v)| {
                    let key = match k {
                        YamlValue::String(s) => s.clone(),
                        YamlValue::Number(n) => n.to_string(),
                        YamlValue::Bool(b) => b.to_string(),
                        _ => return None,
                    };
                    Some((key, yaml_to_seed_value(v)))
                })
                .collect();
            SeedValue::Object(values)
        }
        YamlValue::Tagged(tagged) => yaml_to_seed_value(&tagged.value),
    }
}

/// Convert a YAML literal, coercing date strings for date-typed fields.
pub fn yaml_to_typed_value(yaml: &YamlValue, field_type: FieldType) -> SeedValue {
    match (field_type, yaml) {
        (FieldType::Date, YamlValue::String(s)) => parse_timestamp(s)
            .map(SeedValue::DateTime)
            .unwrap_or_else(|| SeedValue::String(s.clone())),
        _ => yaml_to_seed_value(yaml),
    }
}
