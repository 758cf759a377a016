//! Models command handler.

use seed_core::SchemaDocument;
use seed_engine::order_models;
use std::path::Path;

use super::run::load_registry;
use crate::ModelsFormat;

/// Print the schema's models in seeding order.
pub fn run_models(schema: &Path, format: ModelsFormat) -> anyhow::Result<()> {
    let registry = load_registry(schema)?;
    let ordered = order_models(registry.models());

    match format {
        ModelsFormat::Text => {
            for model in ordered {
                let dependencies = model.dependencies();
                println!(
                    "{}  primary_key={}  fields={}  relations={}  depends_on={}",
                    model.name,
                    model.primary_key(),
                    model.fields.len(),
                    model.relations.len(),
                    if dependencies.is_empty() {
                        "-".to_string()
                    } else {
                        dependencies.join(",")
                    }
                );
            }
        }
        ModelsFormat::Yaml => {
            let document = SchemaDocument {
                models: ordered.into_iter().cloned().collect(),
            };
            print!("{}", serde_yaml::to_string(&document)?);
        }
    }

    Ok(())
}
