//! Field value synthesizer.

use crate::generators::hints::{self, DATE_HINTS, NUMBER_HINTS, STRING_HINTS};
use crate::generators::{
    array, catalog, identifier, numeric, pattern, static_value, text, timestamp,
};
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use seed_core::{Field, FieldConfig, FieldType, SeedValue};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Native identifier format of a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdFormat {
    #[default]
    Uuid,
    ObjectId,
    Integer,
}

/// Produces one value per call for a field, its merged configuration, and
/// the record ordinal.
///
/// The synthesizer is stateless across calls apart from its RNG (and the
/// object-id counter), so a synthesizer built with [`FieldSynthesizer::new`]
/// and a fixed clock ([`FieldSynthesizer::with_now`]) reproduces the same
/// values for the same sequence of calls.
pub struct FieldSynthesizer {
    rng: StdRng,
    now: DateTime<Utc>,
    id_format: IdFormat,
    object_id_counter: u32,
}

impl FieldSynthesizer {
    /// Create a synthesizer with a seeded RNG.
    pub fn new(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Create a synthesizer seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    fn with_rng(mut rng: StdRng) -> Self {
        let object_id_counter = rng.gen_range(0..0x00ff_ffff);
        Self {
            rng,
            now: Utc::now(),
            id_format: IdFormat::default(),
            object_id_counter,
        }
    }

    /// Fix the reference instant used for date generation.
    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    pub fn with_id_format(mut self, id_format: IdFormat) -> Self {
        self.id_format = id_format;
        self
    }

    pub fn set_id_format(&mut self, id_format: IdFormat) {
        self.id_format = id_format;
    }

    pub fn id_format(&self) -> IdFormat {
        self.id_format
    }

    /// Shared RNG, for callers sampling alongside synthesis.
    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Synthesize a value for `field`.
    ///
    /// Returns `None` when the field must be omitted from the record:
    /// ignored fields, identifiers / primary keys, and enums without values.
    ///
    /// Resolution order, first match wins:
    /// 1. `config.ignore`
    /// 2. identifier or primary key
    /// 3. the field's literal default, unless the config shapes the value
    /// 4. `config.default_value`
    /// 5. dispatch on `config.type`, else the declared type
    pub fn synthesize(
        &mut self,
        field: &Field,
        config: Option<&FieldConfig>,
        index: u64,
    ) -> Option<SeedValue> {
        let empty = FieldConfig::default();
        let config = config.unwrap_or(&empty);

        if config.is_ignored() || field.is_store_assigned(config.field_type) {
            return None;
        }

        let field_type = config.field_type.unwrap_or(field.field_type);

        if !config.overrides_value() {
            if let Some(literal) = field.literal_default() {
                return Some(static_value::yaml_to_typed_value(literal, field_type));
            }
        }

        if let Some(literal) = &config.default_value {
            return Some(static_value::yaml_to_typed_value(literal, field_type));
        }

        match field_type {
            FieldType::String | FieldType::Unknown => Some(self.string_value(field, config, index)),
            FieldType::Number => Some(self.number_value(field, config)),
            FieldType::Date => Some(SeedValue::DateTime(self.date_value(field, config))),
            FieldType::Boolean => Some(SeedValue::Bool(self.rng.gen_bool(0.5))),
            FieldType::Enum => self.enum_value(field, config),
            FieldType::Reference | FieldType::Identifier => Some(self.native_id()),
            FieldType::Array => Some(self.array_value(config)),
            FieldType::Object => Some(SeedValue::Object(Default::default())),
        }
    }

    /// Fresh identifier in the store's native format.
    pub fn native_id(&mut self) -> SeedValue {
        match self.id_format {
            IdFormat::Uuid => SeedValue::Uuid(identifier::generate_uuid_v4(&mut self.rng)),
            IdFormat::ObjectId => {
                self.object_id_counter = (self.object_id_counter + 1) & 0x00ff_ffff;
                identifier::generate_object_id(&mut self.rng, self.now, self.object_id_counter)
            }
            IdFormat::Integer => identifier::generate_integer_id(&mut self.rng),
        }
    }

    fn string_value(&mut self, field: &Field, config: &FieldConfig, index: u64) -> SeedValue {
        if let Some(hint) = hints::match_hint(STRING_HINTS, &field.name) {
            debug!("Field '{}' matched string hint '{}'", field.name, hint.label);
            return SeedValue::String((hint.generate)(&mut self.rng));
        }

        if let Some(path) = &config.generator {
            match catalog::lookup(path) {
                Some(generate) => return generate(&mut self.rng, self.now),
                None => warn!(
                    "Unknown generator '{}' for field '{}', falling back",
                    path, field.name
                ),
            }
        }

        if let Some(pattern) = &config.pattern {
            return SeedValue::String(pattern::generate_pattern(pattern, &mut self.rng, index));
        }

        SeedValue::String(text::phrase(&mut self.rng))
    }

    fn number_value(&mut self, field: &Field, config: &FieldConfig) -> SeedValue {
        if let Some(hint) = hints::match_hint(NUMBER_HINTS, &field.name) {
            return (hint.generate)(&mut self.rng);
        }

        let min = config.min.map(|m| m.round() as i64).unwrap_or(0);
        let max = config.max.map(|m| m.round() as i64).unwrap_or(1000);
        numeric::generate_int_range(&mut self.rng, min, max)
    }

    fn date_value(&mut self, field: &Field, config: &FieldConfig) -> DateTime<Utc> {
        if let Some(hint) = hints::match_hint(DATE_HINTS, &field.name) {
            return (hint.generate)(&mut self.rng, self.now, config.max);
        }

        timestamp::recent(&mut self.rng, self.now, hints::DEFAULT_DATE_DAYS)
    }

    fn enum_value(&mut self, field: &Field, config: &FieldConfig) -> Option<SeedValue> {
        if let Some(choice) = field.enum_values.choose(&mut self.rng) {
            return Some(SeedValue::String(choice.clone()));
        }

        config
            .values
            .as_deref()
            .and_then(|values| values.choose(&mut self.rng))
            .map(static_value::yaml_to_seed_value)
    }

    fn array_value(&mut self, config: &FieldConfig) -> SeedValue {
        let min = config.min.map(|m| m.max(0.0) as usize).unwrap_or(0);
        let max = config
            .max
            .map(|m| m.max(0.0) as usize)
            .unwrap_or(array::DEFAULT_MAX_LENGTH);

        match config.values.as_deref() {
            Some(values) if !values.is_empty() => {
                let pool: Vec<SeedValue> = values
                    .iter()
                    .map(static_value::yaml_to_seed_value)
                    .collect();
                array::generate_sample_array(&mut self.rng, &pool, min, max)
            }
            _ => array::generate_word_array(&mut self.rng, min, max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use seed_core::FieldDefault;
    use serde_yaml::Value as YamlValue;

    fn synthesizer() -> FieldSynthesizer {
        let now = DateTime::parse_from_rfc3339("2024-06-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        FieldSynthesizer::new(42).with_now(now)
    }

    fn yaml(s: &str) -> YamlValue {
        serde_yaml::from_str(s).unwrap()
    }

    #[test]
    fn test_email_hint_shape() {
        let mut synth = synthesizer();
        let field = Field::new("email", FieldType::String);

        for i in 0..50 {
            let value = synth.synthesize(&field, None, i).unwrap();
            let email = value.as_str().unwrap();
            let (local, domain) = email.split_once('@').unwrap();
            assert!(!local.is_empty());
            assert!(domain.contains('.'));
        }
    }

    #[test]
    fn test_age_hint_range() {
        let mut synth = synthesizer();
        let field = Field::new("age", FieldType::Number);

        for i in 0..200 {
            let age = synth.synthesize(&field, None, i).unwrap().as_i64().unwrap();
            assert!((18..=100).contains(&age));
        }
    }

    #[test]
    fn test_ignored_and_identifier_fields_are_absent() {
        let mut synth = synthesizer();
        let ignore = FieldConfig {
            ignore: Some(true),
            ..FieldConfig::default()
        };

        let plain = Field::new("nickname", FieldType::String);
        assert!(synth.synthesize(&plain, Some(&ignore), 0).is_none());

        let pk = Field::new("code", FieldType::String).primary_key();
        assert!(synth.synthesize(&pk, None, 0).is_none());

        let id = Field::new("_id", FieldType::Identifier);
        assert!(synth.synthesize(&id, None, 0).is_none());
    }

    #[test]
    fn test_identifier_with_type_override_is_synthesized() {
        let mut synth = synthesizer().with_id_format(IdFormat::ObjectId);
        let field = Field::new("externalRef", FieldType::Identifier);

        let as_string = FieldConfig {
            field_type: Some(FieldType::String),
            pattern: Some("EXT-{index}".to_string()),
            ..FieldConfig::default()
        };
        assert_eq!(
            synth.synthesize(&field, Some(&as_string), 4),
            Some(SeedValue::from("EXT-4"))
        );

        let as_identifier = FieldConfig {
            field_type: Some(FieldType::Identifier),
            ..FieldConfig::default()
        };
        assert!(matches!(
            synth.synthesize(&field, Some(&as_identifier), 0),
            Some(SeedValue::ObjectId(_))
        ));

        // A primary key stays store-assigned whatever its config says
        let pk = Field::new("id", FieldType::Identifier).primary_key();
        assert!(synth.synthesize(&pk, Some(&as_string), 0).is_none());
    }

    #[test]
    fn test_literal_default_precedence() {
        let mut synth = synthesizer();
        let field = Field::new("status", FieldType::String)
            .with_default(FieldDefault::Literal(yaml("active")));

        // Field default applies without config
        assert_eq!(
            synth.synthesize(&field, None, 0),
            Some(SeedValue::from("active"))
        );

        // Config default beats field default
        let config = FieldConfig {
            default_value: Some(yaml("archived")),
            ..FieldConfig::default()
        };
        assert_eq!(
            synth.synthesize(&field, Some(&config), 0),
            Some(SeedValue::from("archived"))
        );

        // Any value-shaping option disables the field default
        let config = FieldConfig {
            pattern: Some("S-###".to_string()),
            ..FieldConfig::default()
        };
        let value = synth.synthesize(&field, Some(&config), 0).unwrap();
        assert!(value.as_str().unwrap().starts_with("S-"));
    }

    #[test]
    fn test_function_default_is_synthesized() {
        let mut synth = synthesizer();
        let field = Field::new("createdAt", FieldType::Date)
            .with_default(FieldDefault::Function("now".to_string()));

        let value = synth.synthesize(&field, None, 0).unwrap();
        assert!(value.as_datetime().is_some());
    }

    #[test]
    fn test_generator_and_pattern_fallbacks() {
        let mut synth = synthesizer();
        let field = Field::new("alias", FieldType::String);

        let config = FieldConfig {
            generator: Some("internet.email".to_string()),
            ..FieldConfig::default()
        };
        let value = synth.synthesize(&field, Some(&config), 0).unwrap();
        assert!(value.as_str().unwrap().contains('@'));

        // Unknown generator falls through to the pattern
        let config = FieldConfig {
            generator: Some("nope.nothing".to_string()),
            pattern: Some("alias-{index}".to_string()),
            ..FieldConfig::default()
        };
        assert_eq!(
            synth.synthesize(&field, Some(&config), 7),
            Some(SeedValue::from("alias-7"))
        );

        // Nothing configured: a short phrase
        let value = synth.synthesize(&field, None, 0).unwrap();
        assert!(!value.as_str().unwrap().is_empty());
    }

    #[test]
    fn test_number_range_from_config() {
        let mut synth = synthesizer();
        let field = Field::new("quantity", FieldType::Number);
        let config = FieldConfig {
            min: Some(5.0),
            max: Some(9.0),
            ..FieldConfig::default()
        };

        for i in 0..100 {
            let v = synth
                .synthesize(&field, Some(&config), i)
                .unwrap()
                .as_i64()
                .unwrap();
            assert!((5..=9).contains(&v));
        }

        let v = synth.synthesize(&field, None, 0).unwrap().as_i64().unwrap();
        assert!((0..=1000).contains(&v));
    }

    #[test]
    fn test_price_has_two_decimals() {
        let mut synth = synthesizer();
        let field = Field::new("price", FieldType::Number);

        for i in 0..50 {
            let v = synth.synthesize(&field, None, i).unwrap().as_f64().unwrap();
            assert!((0.01..=10_000.0).contains(&v));
            assert_eq!((v * 100.0).round() / 100.0, v);
        }
    }

    #[test]
    fn test_date_hints() {
        let mut synth = synthesizer();
        let now = synth.now;

        let created = Field::new("createdAt", FieldType::Date);
        let config = FieldConfig {
            max: Some(7.0),
            ..FieldConfig::default()
        };
        let dt = *synth
            .synthesize(&created, Some(&config), 0)
            .unwrap()
            .as_datetime()
            .unwrap();
        assert!(dt <= now && dt >= now - Duration::days(7));

        let plain = Field::new("publishedOn", FieldType::Date);
        let dt = *synth.synthesize(&plain, None, 0).unwrap().as_datetime().unwrap();
        assert!(dt <= now && dt >= now - Duration::days(30));

        let future = Field::new("expiresAt", FieldType::Date);
        let dt = *synth.synthesize(&future, None, 0).unwrap().as_datetime().unwrap();
        assert!(dt >= now);
    }

    #[test]
    fn test_extreme_date_max_does_not_panic() {
        let mut synth = synthesizer();
        let now = synth.now;

        for name in ["createdAt", "expiresAt", "pastVisit"] {
            let field = Field::new(name, FieldType::Date);
            for max in [1e8, 1e15, f64::MAX, f64::INFINITY, f64::NAN, -1e9] {
                let config = FieldConfig {
                    max: Some(max),
                    ..FieldConfig::default()
                };
                let value = synth.synthesize(&field, Some(&config), 0).unwrap();
                let dt = *value.as_datetime().unwrap();
                assert!((dt - now).num_days().abs() <= timestamp::MAX_OFFSET_DAYS);
            }
        }
    }

    #[test]
    fn test_enum_values() {
        let mut synth = synthesizer();

        let field =
            Field::new("status", FieldType::Enum).with_enum_values(["draft", "published"]);
        for i in 0..20 {
            let value = synth.synthesize(&field, None, i).unwrap();
            assert!(["draft", "published"].contains(&value.as_str().unwrap()));
        }

        let bare = Field::new("level", FieldType::Enum);
        assert!(synth.synthesize(&bare, None, 0).is_none());

        let config = FieldConfig {
            values: Some(vec![yaml("1"), yaml("2")]),
            ..FieldConfig::default()
        };
        let value = synth.synthesize(&bare, Some(&config), 0).unwrap();
        assert!(matches!(value, SeedValue::Int64(1) | SeedValue::Int64(2)));
    }

    #[test]
    fn test_array_values() {
        let mut synth = synthesizer();
        let field = Field::new("tags", FieldType::Array);

        let config = FieldConfig {
            values: Some(vec![yaml("red"), yaml("blue")]),
            min: Some(1.0),
            max: Some(3.0),
            ..FieldConfig::default()
        };
        for i in 0..20 {
            let value = synth.synthesize(&field, Some(&config), i).unwrap();
            let arr = value.as_array().unwrap();
            assert!((1..=3).contains(&arr.len()));
        }

        let value = synth.synthesize(&field, None, 0).unwrap();
        assert!(value.as_array().unwrap().len() <= array::DEFAULT_MAX_LENGTH);
    }

    #[test]
    fn test_type_override_and_unknown_type() {
        let mut synth = synthesizer();

        let field = Field::new("flag", FieldType::String);
        let config = FieldConfig {
            field_type: Some(FieldType::Boolean),
            ..FieldConfig::default()
        };
        let value = synth.synthesize(&field, Some(&config), 0).unwrap();
        assert!(value.as_bool().is_some());

        let geo = Field::new("location", FieldType::Unknown);
        let value = synth.synthesize(&geo, None, 0).unwrap();
        assert!(value.as_str().is_some());

        let meta = Field::new("meta", FieldType::Object);
        assert_eq!(
            synth.synthesize(&meta, None, 0),
            Some(SeedValue::Object(Default::default()))
        );
    }

    #[test]
    fn test_native_id_formats() {
        let mut synth = synthesizer();
        let field = Field::new("externalRef", FieldType::Reference);

        assert!(matches!(
            synth.synthesize(&field, None, 0),
            Some(SeedValue::Uuid(_))
        ));

        synth.set_id_format(IdFormat::ObjectId);
        let a = synth.synthesize(&field, None, 0).unwrap();
        let b = synth.synthesize(&field, None, 1).unwrap();
        assert!(matches!(a, SeedValue::ObjectId(_)));
        assert_ne!(a, b);

        synth.set_id_format(IdFormat::Integer);
        assert!(synth.native_id().as_i64().is_some());
    }

    #[test]
    fn test_deterministic_with_seed() {
        let field = Field::new("title", FieldType::String);

        let mut a = synthesizer();
        let mut b = synthesizer();

        for i in 0..10 {
            assert_eq!(
                a.synthesize(&field, None, i),
                b.synthesize(&field, None, i)
            );
        }
    }
}
