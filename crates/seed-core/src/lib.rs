//! Core types for the schema-seeder framework.
//!
//! This crate provides the foundational types shared by every other crate
//! in the workspace:
//!
//! - [`Model`], [`Field`], [`Relation`] - normalized model definitions
//! - [`ModelRegistry`] - read-only lookup over the models of a run
//! - [`SchemaSource`] - introspection collaborator producing the model list
//! - [`SeedConfig`] - layered seeding configuration loaded from YAML
//! - [`SeedValue`], [`Record`] - store-agnostic seeded values
//!
//! # Architecture
//!
//! ```text
//! seed-core (this crate)
//!    │
//!    ├─── seed-generator  (synthesizes SeedValues for Fields)
//!    │
//!    ├─── seed-engine     (orders, resolves references, drives storage)
//!    │
//!    └─── seed-mongodb    (converts Records to BSON documents)
//! ```

pub mod config;
pub mod introspect;
pub mod model;
pub mod values;

// Re-exports for convenience
pub use config::{
    ConfigError, FieldConfig, GlobalConfig, ModelConfig, RelationConfig, ResolvedModelConfig,
    SeedConfig, DEFAULT_COUNT,
};
pub use introspect::{SchemaDocument, SchemaSource, YamlSchemaSource};
pub use model::{
    Field, FieldDefault, FieldType, Model, ModelRegistry, Relation, RelationKind, SchemaError,
};
pub use values::{object_id_hex, Record, SeedValue};
