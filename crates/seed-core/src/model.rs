//! Model definitions for the seeding engine.
//!
//! A [`Model`] is a named entity type (table, collection) with an ordered
//! list of [`Field`]s and the [`Relation`]s derived from them. The
//! [`ModelRegistry`] holds the normalized model list produced by schema
//! introspection and is read-only for the rest of a seeding run.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for schema operations.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Error reading schema file
    #[error("Failed to read schema file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Model not found in registry
    #[error("Model not found: {0}")]
    ModelNotFound(String),

    /// Field not found in model
    #[error("Field '{field}' not found in model '{model}'")]
    FieldNotFound { model: String, field: String },

    /// Field definition breaks a model invariant
    #[error("Invalid field '{field}' in model '{model}': {reason}")]
    InvalidField {
        model: String,
        field: String,
        reason: String,
    },

    /// Two models share a name
    #[error("Duplicate model: {0}")]
    DuplicateModel(String),
}

// ============================================================================
// Fields
// ============================================================================

/// Recognized field type tags.
///
/// Unknown tags deserialize to [`FieldType::Unknown`], which synthesis treats
/// as a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    String,
    Number,
    Boolean,
    #[serde(alias = "datetime")]
    Date,
    Enum,
    Reference,
    Array,
    Object,
    Identifier,
    #[serde(other)]
    Unknown,
}

/// Default declared on a field by the schema source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldDefault {
    /// Static literal value
    Literal(serde_yaml::Value),

    /// Store-side generator function (`now`, `autoincrement`, `uuid`, ...)
    Function(String),
}

/// One attribute of a model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Field name
    pub name: String,

    /// Declared type
    #[serde(rename = "type")]
    pub field_type: FieldType,

    #[serde(default, rename = "required")]
    pub is_required: bool,

    #[serde(default, rename = "unique")]
    pub is_unique: bool,

    #[serde(default, rename = "primary_key")]
    pub is_primary_key: bool,

    #[serde(default, rename = "foreign_key")]
    pub is_foreign_key: bool,

    /// Model this field refers to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation_model: Option<String>,

    /// Field of the related model holding the referenced identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation_field: Option<String>,

    /// Written as `default: { literal: ... }` or `default: { function: ... }`
    #[serde(
        default,
        rename = "default",
        skip_serializing_if = "Option::is_none",
        with = "serde_yaml::with::singleton_map"
    )]
    pub default_value: Option<FieldDefault>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<String>,
}

impl Field {
    /// Create a plain optional field.
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            is_required: false,
            is_unique: false,
            is_primary_key: false,
            is_foreign_key: false,
            relation_model: None,
            relation_field: None,
            default_value: None,
            enum_values: Vec::new(),
        }
    }

    /// Mark as the primary key.
    pub fn primary_key(mut self) -> Self {
        self.is_primary_key = true;
        self.is_required = true;
        self
    }

    /// Mark as a foreign key referencing `model`.
    pub fn foreign_key(mut self, model: impl Into<String>) -> Self {
        self.is_foreign_key = true;
        self.relation_model = Some(model.into());
        self
    }

    /// Set the referenced field on the related model.
    pub fn referencing(mut self, field: impl Into<String>) -> Self {
        self.relation_field = Some(field.into());
        self
    }

    /// Mark as a non-owning relation field (back-reference to `model`).
    pub fn relation(mut self, model: impl Into<String>) -> Self {
        self.relation_model = Some(model.into());
        self
    }

    pub fn required(mut self) -> Self {
        self.is_required = true;
        self
    }

    pub fn unique(mut self) -> Self {
        self.is_unique = true;
        self
    }

    pub fn with_default(mut self, default: FieldDefault) -> Self {
        self.default_value = Some(default);
        self
    }

    pub fn with_enum_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enum_values = values.into_iter().map(Into::into).collect();
        self
    }

    /// Whether the store assigns this field's value: the primary key, or an
    /// identifier-typed field whose type is not overridden by configuration.
    pub fn is_store_assigned(&self, type_override: Option<FieldType>) -> bool {
        self.is_primary_key
            || (self.field_type == FieldType::Identifier && type_override.is_none())
    }

    /// Static literal default, if the schema declares one.
    pub fn literal_default(&self) -> Option<&serde_yaml::Value> {
        match &self.default_value {
            Some(FieldDefault::Literal(value)) => Some(value),
            _ => None,
        }
    }
}

// ============================================================================
// Relations
// ============================================================================

/// Cardinality of a relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RelationKind {
    OneToOne,
    OneToMany,
    ManyToMany,
}

/// Declared reference from one model's field to another model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relation {
    /// Relation name (key of `ModelConfig::relations`)
    pub name: String,

    pub kind: RelationKind,

    pub target_model: String,

    /// Field on the owning model that carries the relation
    pub source_field_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreign_key_field_name: Option<String>,
}

impl Relation {
    /// Derive the relation carried by a field, if it refers to another model.
    pub fn from_field(field: &Field) -> Option<Relation> {
        let target_model = field.relation_model.clone()?;
        let is_list = field.field_type == FieldType::Array;

        let kind = match (field.is_foreign_key, is_list) {
            (true, true) => RelationKind::ManyToMany,
            (true, false) if field.is_unique => RelationKind::OneToOne,
            (true, false) => RelationKind::OneToMany,
            (false, _) => RelationKind::OneToMany,
        };

        Some(Relation {
            name: field.name.clone(),
            kind,
            target_model,
            source_field_name: field.name.clone(),
            foreign_key_field_name: field.is_foreign_key.then(|| field.name.clone()),
        })
    }

    /// Whether resolving this relation yields a set of identifiers.
    pub fn is_many(&self) -> bool {
        self.kind == RelationKind::ManyToMany
    }
}

// ============================================================================
// Models
// ============================================================================

/// A named entity type with fields and relations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub name: String,

    pub fields: Vec<Field>,

    #[serde(default)]
    pub relations: Vec<Relation>,
}

impl Model {
    /// Create a model and derive its relations from the fields.
    pub fn new(name: impl Into<String>, fields: Vec<Field>) -> Self {
        let mut model = Self {
            name: name.into(),
            fields,
            relations: Vec::new(),
        };
        model.derive_relations();
        model
    }

    /// Add a relation for every relation-carrying field that has none declared.
    pub fn derive_relations(&mut self) {
        for field in &self.fields {
            let declared = self
                .relations
                .iter()
                .any(|r| r.source_field_name == field.name);
            if declared {
                continue;
            }
            if let Some(relation) = Relation::from_field(field) {
                self.relations.push(relation);
            }
        }
    }

    /// Get a field by name.
    pub fn get_field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Get all field names, in declaration order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    /// Name of the primary key field.
    ///
    /// Falls back to `id`, then `_id`, when no field is flagged.
    pub fn primary_key(&self) -> &str {
        if let Some(field) = self.fields.iter().find(|f| f.is_primary_key) {
            return &field.name;
        }
        if self.fields.iter().any(|f| f.name == "_id") && self.get_field("id").is_none() {
            return "_id";
        }
        "id"
    }

    /// Foreign key fields, in declaration order.
    pub fn foreign_keys(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.is_foreign_key)
    }

    /// Models this model depends on through foreign keys, excluding itself.
    ///
    /// Each dependency appears once, in the order of its first foreign key.
    pub fn dependencies(&self) -> Vec<&str> {
        let mut deps: Vec<&str> = Vec::new();
        for target in self.foreign_keys().filter_map(|f| f.relation_model.as_deref()) {
            if target != self.name && !deps.contains(&target) {
                deps.push(target);
            }
        }
        deps
    }

    /// Relation whose source is the given field.
    pub fn relation_for_field(&self, field_name: &str) -> Option<&Relation> {
        self.relations
            .iter()
            .find(|r| r.source_field_name == field_name)
    }

    /// Check field-level invariants.
    pub fn validate(&self) -> Result<(), SchemaError> {
        for field in &self.fields {
            if field.is_foreign_key && field.relation_model.is_none() {
                return Err(SchemaError::InvalidField {
                    model: self.name.clone(),
                    field: field.name.clone(),
                    reason: "foreign key without relation_model".to_string(),
                });
            }
        }
        Ok(())
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Read-only lookup over the normalized model list.
#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
    models: Vec<Model>,

    /// Cached model lookup
    model_map: HashMap<String, usize>,
}

impl ModelRegistry {
    /// Build a registry, validating every model.
    pub fn new(models: Vec<Model>) -> Result<Self, SchemaError> {
        let mut model_map = HashMap::with_capacity(models.len());
        for (idx, model) in models.iter().enumerate() {
            model.validate()?;
            if model_map.insert(model.name.clone(), idx).is_some() {
                return Err(SchemaError::DuplicateModel(model.name.clone()));
            }
        }
        Ok(Self { models, model_map })
    }

    /// Get a model by name.
    pub fn get(&self, name: &str) -> Option<&Model> {
        self.model_map
            .get(name)
            .and_then(|&idx| self.models.get(idx))
    }

    /// Get a model by name or fail.
    pub fn require(&self, name: &str) -> Result<&Model, SchemaError> {
        self.get(name)
            .ok_or_else(|| SchemaError::ModelNotFound(name.to_string()))
    }

    /// Get a field of a model.
    pub fn get_field(&self, model: &str, field: &str) -> Result<&Field, SchemaError> {
        self.require(model)?
            .get_field(field)
            .ok_or_else(|| SchemaError::FieldNotFound {
                model: model.to_string(),
                field: field.to_string(),
            })
    }

    /// Position of a model in the registry.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.model_map.get(name).copied()
    }

    /// All models, in introspection order.
    pub fn models(&self) -> &[Model] {
        &self.models
    }

    /// All model names, in introspection order.
    pub fn names(&self) -> Vec<&str> {
        self.models.iter().map(|m| m.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blog_models() -> Vec<Model> {
        vec![
            Model::new(
                "User",
                vec![
                    Field::new("id", FieldType::Identifier).primary_key(),
                    Field::new("email", FieldType::String).unique(),
                    Field::new("posts", FieldType::Array).relation("Post"),
                ],
            ),
            Model::new(
                "Post",
                vec![
                    Field::new("id", FieldType::Identifier).primary_key(),
                    Field::new("authorId", FieldType::Reference).foreign_key("User"),
                    Field::new("tags", FieldType::Array).foreign_key("Tag"),
                    Field::new("parentId", FieldType::Reference).foreign_key("Post"),
                ],
            ),
            Model::new("Tag", vec![Field::new("label", FieldType::String)]),
        ]
    }

    #[test]
    fn test_field_yaml() {
        let yaml = r#"
name: status
type: enum
required: true
enum_values: [draft, published]
default:
  literal: draft
"#;
        let field: Field = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(field.field_type, FieldType::Enum);
        assert!(field.is_required);
        assert!(!field.is_primary_key);
        assert_eq!(field.enum_values, vec!["draft", "published"]);
        assert_eq!(
            field.literal_default(),
            Some(&serde_yaml::Value::String("draft".to_string()))
        );
    }

    #[test]
    fn test_default_map_form_round_trips() {
        let field: Field =
            serde_yaml::from_str("name: createdAt\ntype: date\ndefault: { function: now }\n")
                .unwrap();
        assert_eq!(
            field.default_value,
            Some(FieldDefault::Function("now".to_string()))
        );

        let field = Field::new("status", FieldType::String)
            .with_default(FieldDefault::Literal(serde_yaml::Value::from("draft")));
        let yaml = serde_yaml::to_string(&field).unwrap();
        assert!(yaml.contains("literal: draft"), "{yaml}");
        assert_eq!(serde_yaml::from_str::<Field>(&yaml).unwrap(), field);

        let bare: Field = serde_yaml::from_str("name: title\ntype: string\n").unwrap();
        assert!(bare.default_value.is_none());
    }

    #[test]
    fn test_unknown_field_type() {
        let field: Field = serde_yaml::from_str("name: location\ntype: geo_point\n").unwrap();
        assert_eq!(field.field_type, FieldType::Unknown);

        let field: Field = serde_yaml::from_str("name: at\ntype: datetime\n").unwrap();
        assert_eq!(field.field_type, FieldType::Date);
    }

    #[test]
    fn test_store_assigned_fields() {
        let pk = Field::new("id", FieldType::Identifier).primary_key();
        assert!(pk.is_store_assigned(None));
        assert!(pk.is_store_assigned(Some(FieldType::String)));

        let external = Field::new("externalRef", FieldType::Identifier);
        assert!(external.is_store_assigned(None));
        assert!(!external.is_store_assigned(Some(FieldType::String)));
        assert!(!external.is_store_assigned(Some(FieldType::Identifier)));

        assert!(!Field::new("email", FieldType::String).is_store_assigned(None));
    }

    #[test]
    fn test_function_default_is_not_literal() {
        let field = Field::new("createdAt", FieldType::Date)
            .with_default(FieldDefault::Function("now".to_string()));
        assert!(field.literal_default().is_none());
    }

    #[test]
    fn test_derived_relations() {
        let models = blog_models();
        let post = &models[1];

        let author = post.relation_for_field("authorId").unwrap();
        assert_eq!(author.kind, RelationKind::OneToMany);
        assert_eq!(author.target_model, "User");
        assert_eq!(author.foreign_key_field_name.as_deref(), Some("authorId"));

        let tags = post.relation_for_field("tags").unwrap();
        assert!(tags.is_many());

        let back = models[0].relation_for_field("posts").unwrap();
        assert_eq!(back.kind, RelationKind::OneToMany);
        assert!(back.foreign_key_field_name.is_none());

        let unique = Relation::from_field(
            &Field::new("profileId", FieldType::Reference)
                .foreign_key("Profile")
                .unique(),
        )
        .unwrap();
        assert_eq!(unique.kind, RelationKind::OneToOne);
    }

    #[test]
    fn test_dependencies_skip_self_and_duplicates() {
        let mut post = blog_models().remove(1);
        post.fields
            .push(Field::new("editorId", FieldType::Reference).foreign_key("User"));

        assert_eq!(post.dependencies(), vec!["User", "Tag"]);
    }

    #[test]
    fn test_primary_key_fallbacks() {
        let models = blog_models();
        assert_eq!(models[0].primary_key(), "id");
        assert_eq!(models[2].primary_key(), "id");

        let mongo = Model::new("Doc", vec![Field::new("_id", FieldType::String)]);
        assert_eq!(mongo.primary_key(), "_id");
    }

    #[test]
    fn test_registry_lookup() {
        let registry = ModelRegistry::new(blog_models()).unwrap();

        assert_eq!(registry.len(), 3);
        assert_eq!(registry.names(), vec!["User", "Post", "Tag"]);
        assert_eq!(registry.index_of("Tag"), Some(2));
        assert!(registry.get("Comment").is_none());
        assert!(matches!(
            registry.require("Comment"),
            Err(SchemaError::ModelNotFound(_))
        ));
        assert!(matches!(
            registry.get_field("User", "missing"),
            Err(SchemaError::FieldNotFound { .. })
        ));
    }

    #[test]
    fn test_registry_rejects_invalid_models() {
        let mut broken = Field::new("ownerId", FieldType::Reference);
        broken.is_foreign_key = true;
        let result = ModelRegistry::new(vec![Model::new("Pet", vec![broken])]);
        assert!(matches!(result, Err(SchemaError::InvalidField { .. })));

        let result = ModelRegistry::new(vec![
            Model::new("Tag", vec![]),
            Model::new("Tag", vec![]),
        ]);
        assert!(matches!(result, Err(SchemaError::DuplicateModel(_))));
    }
}
