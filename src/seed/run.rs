//! Seed command runner.

use anyhow::Context;
use seed_core::{ModelRegistry, SchemaSource, YamlSchemaSource};
use seed_engine::{SeedResult, SeedRun, Seeder, StorageBindings};
use seed_mongodb::MongoDBStore;
use seed_populate::CommonSeedArgs;
use std::path::Path;

use super::mask_connection_password;
use crate::SeedTarget;

/// Load and validate the schema file.
pub fn load_registry(schema: &Path) -> anyhow::Result<ModelRegistry> {
    YamlSchemaSource::from_file(schema)
        .registry()
        .with_context(|| format!("Failed to load schema from {schema:?}"))
}

/// Build a seeder with the config file and CLI flags layered.
pub fn build_seeder(
    common: &CommonSeedArgs,
    registry: ModelRegistry,
    bindings: StorageBindings,
) -> anyhow::Result<Seeder> {
    let config = common
        .load_config()
        .with_context(|| format!("Failed to load config from {:?}", common.config))?;
    Ok(Seeder::new(registry, bindings, config).with_overrides(common.overrides()))
}

/// Seed the models selected with `--models`, or every model.
///
/// Selected models are seeded in dependency order within one run. Names
/// missing from the schema produce a failed result.
pub async fn seed_selected(seeder: &mut Seeder, common: &CommonSeedArgs) -> Vec<SeedResult> {
    if common.models.is_empty() {
        return seeder.seed_all().await;
    }

    let mut run = SeedRun::new();
    let mut results = Vec::new();
    for planned in seeder.plan().into_iter().filter(|p| common.selects(&p.model)) {
        results.push(
            seeder
                .seed_in(&mut run, &planned.model, planned.count, None)
                .await,
        );
    }

    let unknown: Vec<String> = common
        .models
        .iter()
        .filter(|name| seeder.registry().get(name).is_none())
        .cloned()
        .collect();
    for name in unknown {
        results.push(seeder.seed_in(&mut run, &name, 0, None).await);
    }

    results
}

/// Log every result, failing when any model failed.
pub fn report_results(results: &[SeedResult]) -> anyhow::Result<()> {
    for result in results {
        if result.success {
            tracing::info!("{}", result);
        } else {
            tracing::error!("{}", result);
        }
    }

    let total: u64 = results.iter().map(|r| r.count).sum();
    let failed = results.iter().filter(|r| !r.success).count();
    tracing::info!(
        "Seeding complete: {} records across {} models",
        total,
        results.len() - failed
    );

    if failed > 0 {
        anyhow::bail!("Seeding failed for {} model(s)", failed);
    }
    Ok(())
}

fn log_plan(seeder: &Seeder, common: &CommonSeedArgs) {
    for planned in seeder.plan().iter().filter(|p| common.selects(&p.model)) {
        tracing::info!(
            "[DRY-RUN] {}: {} records (reset={}, incremental={}, randomize={}, depends on {:?})",
            planned.model,
            planned.count,
            planned.reset,
            planned.incremental,
            planned.randomize,
            planned.dependencies
        );
    }
}

/// Run seed command to fill a database with synthesized records
pub async fn run_seed(target: SeedTarget) -> anyhow::Result<()> {
    match target {
        SeedTarget::MongoDB { args } => {
            let registry = load_registry(&args.common.schema)?;

            if args.common.dry_run {
                tracing::info!(
                    "[DRY-RUN] Connection: {}",
                    mask_connection_password(&args.mongodb_connection_string)
                );
                tracing::info!("[DRY-RUN] Database: {}", args.mongodb_database);

                let seeder = build_seeder(&args.common, registry, StorageBindings::new())?;
                log_plan(&seeder, &args.common);
                tracing::info!("[DRY-RUN] Schema and configuration validated successfully");
                return Ok(());
            }

            tracing::info!(
                "Seeding MongoDB at {} (database: {})",
                mask_connection_password(&args.mongodb_connection_string),
                args.mongodb_database
            );

            let store =
                MongoDBStore::connect(&args.mongodb_connection_string, &args.mongodb_database)
                    .await
                    .context("Failed to connect to MongoDB")?
                    .with_batch_size(args.common.batch_size);
            let bindings = store.bindings(&registry);

            let mut seeder = build_seeder(&args.common, registry, bindings)?;
            let results = seed_selected(&mut seeder, &args.common).await;
            report_results(&results)
        }
    }
}
