//! Schema introspection sources.
//!
//! The seeding engine consumes a normalized model list; a [`SchemaSource`]
//! produces it from whatever format a store describes itself in. The YAML
//! source reads a document of the form:
//!
//! ```yaml
//! models:
//!   - name: User
//!     fields:
//!       - name: id
//!         type: identifier
//!         primary_key: true
//!       - name: email
//!         type: string
//!         unique: true
//!   - name: Post
//!     fields:
//!       - name: authorId
//!         type: reference
//!         foreign_key: true
//!         relation_model: User
//! ```

use crate::model::{Model, ModelRegistry, SchemaError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Produces the normalized model list for a seeding run.
pub trait SchemaSource {
    /// Read model definitions. Fields keep their source order.
    fn introspect(&self) -> Result<Vec<Model>, SchemaError>;

    /// Introspect and build a validated registry.
    fn registry(&self) -> Result<ModelRegistry, SchemaError> {
        ModelRegistry::new(self.introspect()?)
    }
}

/// Serialized form of a schema file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaDocument {
    #[serde(default)]
    pub models: Vec<Model>,
}

impl SchemaDocument {
    /// Parse from YAML, deriving relations the document leaves out.
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        let mut document: SchemaDocument = serde_yaml::from_str(yaml)?;
        for model in &mut document.models {
            model.derive_relations();
        }
        Ok(document)
    }
}

/// Schema source backed by a YAML file or string.
#[derive(Debug, Clone)]
pub enum YamlSchemaSource {
    File(PathBuf),
    Inline(String),
}

impl YamlSchemaSource {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }

    pub fn from_yaml(yaml: impl Into<String>) -> Self {
        Self::Inline(yaml.into())
    }
}

impl SchemaSource for YamlSchemaSource {
    fn introspect(&self) -> Result<Vec<Model>, SchemaError> {
        let document = match self {
            Self::File(path) => SchemaDocument::from_yaml(&fs::read_to_string(path)?)?,
            Self::Inline(yaml) => SchemaDocument::from_yaml(yaml)?,
        };
        Ok(document.models)
    }
}
