//! Seeding configuration and layer merging.
//!
//! Configuration comes in three layers, lowest precedence first:
//!
//! 1. `global` defaults of the config file
//! 2. the config file's entry for a model (`models.<name>`)
//! 3. the per-call override passed to a seed operation
//!
//! Merging is option by option: any `Some` in a higher layer replaces the
//! lower one, and `fields` / `relations` maps merge per key.
//!
//! ```yaml
//! global:
//!   reset: true
//!   seed: 42
//! models:
//!   User:
//!     count: 20
//!     fields:
//!       role:
//!         values: [admin, member]
//!       legacyId:
//!         ignore: true
//!   Post:
//!     count: 50
//!     relations:
//!       tags: { min: 1, max: 4 }
//! ```

use crate::model::FieldType;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Records seeded per model when nothing configures a count.
pub const DEFAULT_COUNT: u64 = 10;

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// Per-field override.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Replaces the declared field type for synthesis
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub field_type: Option<FieldType>,

    /// Generator path such as `person.firstName`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generator: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,

    /// Pattern with `{index}`, `{uuid}`, `{rand:N}`, `#` and `?` placeholders
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Pool of values to pick from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<serde_yaml::Value>>,

    /// Literal value used as-is
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<serde_yaml::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore: Option<bool>,
}

impl FieldConfig {
    /// Merge `over` on top of `self`; `over` wins wherever it is set.
    pub fn merge(&self, over: &FieldConfig) -> FieldConfig {
        FieldConfig {
            field_type: over.field_type.or(self.field_type),
            generator: over.generator.clone().or_else(|| self.generator.clone()),
            min: over.min.or(self.min),
            max: over.max.or(self.max),
            pattern: over.pattern.clone().or_else(|| self.pattern.clone()),
            values: over.values.clone().or_else(|| self.values.clone()),
            default_value: over
                .default_value
                .clone()
                .or_else(|| self.default_value.clone()),
            ignore: over.ignore.or(self.ignore),
        }
    }

    pub fn is_ignored(&self) -> bool {
        self.ignore.unwrap_or(false)
    }

    /// Whether any option shaping the produced value is set.
    ///
    /// A field's own literal default only applies when this is false.
    pub fn overrides_value(&self) -> bool {
        self.field_type.is_some()
            || self.generator.is_some()
            || self.pattern.is_some()
            || self.values.is_some()
            || self.default_value.is_some()
            || self.min.is_some()
            || self.max.is_some()
    }
}

/// Cardinality bounds for a many-valued relation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u64>,

    /// Resolve against this model instead of the declared target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl RelationConfig {
    pub fn merge(&self, over: &RelationConfig) -> RelationConfig {
        RelationConfig {
            min: over.min.or(self.min),
            max: over.max.or(self.max),
            model: over.model.clone().or_else(|| self.model.clone()),
        }
    }
}

/// Per-model configuration entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reset: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub incremental: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub randomize: Option<bool>,

    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub fields: HashMap<String, FieldConfig>,

    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub relations: HashMap<String, RelationConfig>,
}

impl ModelConfig {
    /// Merge `over` on top of `self`.
    pub fn merge(&self, over: &ModelConfig) -> ModelConfig {
        let mut fields = self.fields.clone();
        for (name, field) in &over.fields {
            let merged = match fields.get(name) {
                Some(base) => base.merge(field),
                None => field.clone(),
            };
            fields.insert(name.clone(), merged);
        }

        let mut relations = self.relations.clone();
        for (name, relation) in &over.relations {
            let merged = match relations.get(name) {
                Some(base) => base.merge(relation),
                None => relation.clone(),
            };
            relations.insert(name.clone(), merged);
        }

        ModelConfig {
            count: over.count.or(self.count),
            reset: over.reset.or(self.reset),
            incremental: over.incremental.or(self.incremental),
            randomize: over.randomize.or(self.randomize),
            fields,
            relations,
        }
    }

    /// Builder-style field override, used by callers constructing overrides.
    pub fn with_field(mut self, name: impl Into<String>, field: FieldConfig) -> Self {
        self.fields.insert(name.into(), field);
        self
    }
}

/// Options applying to every model of a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Clear existing records before seeding
    pub reset: bool,

    /// Append to existing records; suppresses `reset`
    pub incremental: bool,

    /// Insert records one at a time in shuffled order
    pub randomize: bool,

    /// RNG seed for reproducible runs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Record count for models without one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_count: Option<u64>,
}

/// Full seeding configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    pub global: GlobalConfig,

    pub models: HashMap<String, ModelConfig>,
}

impl SeedConfig {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Config-file entry for a model.
    pub fn model(&self, name: &str) -> Option<&ModelConfig> {
        self.models.get(name)
    }

    /// Merge all layers for one model.
    pub fn resolve(&self, model: &str, overrides: Option<&ModelConfig>) -> ResolvedModelConfig {
        let global = ModelConfig {
            count: self.global.default_count,
            reset: Some(self.global.reset),
            incremental: Some(self.global.incremental),
            randomize: Some(self.global.randomize),
            ..ModelConfig::default()
        };

        let mut merged = match self.model(model) {
            Some(entry) => global.merge(entry),
            None => global,
        };
        if let Some(overrides) = overrides {
            merged = merged.merge(overrides);
        }

        let incremental = merged.incremental.unwrap_or(false);
        ResolvedModelConfig {
            count: merged.count.unwrap_or(DEFAULT_COUNT),
            reset: merged.reset.unwrap_or(false) && !incremental,
            incremental,
            randomize: merged.randomize.unwrap_or(false),
            fields: merged.fields,
            relations: merged.relations,
        }
    }
}

/// Fully merged configuration for one model.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedModelConfig {
    pub count: u64,
    pub reset: bool,
    pub incremental: bool,
    pub randomize: bool,
    pub fields: HashMap<String, FieldConfig>,
    pub relations: HashMap<String, RelationConfig>,
}

impl ResolvedModelConfig {
    pub fn field(&self, name: &str) -> Option<&FieldConfig> {
        self.fields.get(name)
    }

    pub fn relation(&self, name: &str) -> Option<&RelationConfig> {
        self.relations.get(name)
    }
}
