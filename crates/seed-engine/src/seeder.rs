//! Seeding orchestrator.

use crate::error::SeedError;
use crate::order::order_models;
use crate::resolve::ReferenceResolver;
use crate::result::SeedResult;
use crate::run::SeedRun;
use crate::storage::StorageBindings;
use rand::seq::SliceRandom;
use rand::Rng;
use seed_core::{
    Field, FieldConfig, FieldType, Model, ModelConfig, ModelRegistry, Record, ResolvedModelConfig,
    SeedConfig, SeedValue,
};
use seed_generator::FieldSynthesizer;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Upper bound on the size of a resolved reference set when the relation
/// has no configured `max`.
pub const DEFAULT_MAX_RELATED: u64 = 3;

/// What [`Seeder::seed_all`] would do for one model.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedModel {
    pub model: String,
    pub count: u64,
    pub reset: bool,
    pub incremental: bool,
    pub randomize: bool,
    /// Models referenced through foreign keys
    pub dependencies: Vec<String>,
}

/// Drives seeding of models against their bound storage clients.
///
/// Models are seeded one at a time. Within a run, records persisted for one
/// model become the reference pool for models seeded after it.
pub struct Seeder {
    registry: ModelRegistry,
    bindings: StorageBindings,
    config: SeedConfig,
    /// Layer applied on top of the config file for every model
    overrides: Option<ModelConfig>,
    synthesizer: FieldSynthesizer,
}

impl Seeder {
    /// Create a seeder. The synthesizer is seeded from `config.global.seed`
    /// when set, otherwise from OS entropy.
    pub fn new(registry: ModelRegistry, bindings: StorageBindings, config: SeedConfig) -> Self {
        let synthesizer = match config.global.seed {
            Some(seed) => FieldSynthesizer::new(seed),
            None => FieldSynthesizer::from_entropy(),
        };
        Self {
            registry,
            bindings,
            config,
            overrides: None,
            synthesizer,
        }
    }

    /// Apply `overrides` to every model, below any per-call override.
    pub fn with_overrides(mut self, overrides: ModelConfig) -> Self {
        self.overrides = Some(overrides);
        self
    }

    /// Replace the synthesizer (fixed clock, explicit seed).
    pub fn with_synthesizer(mut self, synthesizer: FieldSynthesizer) -> Self {
        self.synthesizer = synthesizer;
        self
    }

    /// Registered models, in registry order.
    pub fn models(&self) -> &[Model] {
        self.registry.models()
    }

    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    pub fn config(&self) -> &SeedConfig {
        &self.config
    }

    /// Models in seeding order with their resolved settings.
    pub fn plan(&self) -> Vec<PlannedModel> {
        order_models(self.registry.models())
            .into_iter()
            .map(|model| {
                let settings = self.config.resolve(&model.name, self.overrides.as_ref());
                PlannedModel {
                    model: model.name.clone(),
                    count: settings.count,
                    reset: settings.reset,
                    incremental: settings.incremental,
                    randomize: settings.randomize,
                    dependencies: model.dependencies().into_iter().map(String::from).collect(),
                }
            })
            .collect()
    }

    /// Seed `count` records of one model in a fresh run.
    ///
    /// References can only resolve against records already in storage.
    pub async fn seed(
        &mut self,
        model: &str,
        count: u64,
        overrides: Option<&ModelConfig>,
    ) -> SeedResult {
        let mut run = SeedRun::new();
        self.seed_in(&mut run, model, count, overrides).await
    }

    /// Seed `count` records of one model as part of `run`.
    ///
    /// Failures are reported in the returned result, never raised.
    pub async fn seed_in(
        &mut self,
        run: &mut SeedRun,
        model: &str,
        count: u64,
        overrides: Option<&ModelConfig>,
    ) -> SeedResult {
        let start_time = Instant::now();

        match self.try_seed(run, model, count, overrides).await {
            Ok(inserted) => {
                let result = SeedResult::succeeded(model, inserted, start_time.elapsed());
                info!(
                    "Seeded '{}': {} records in {:.2?} ({:.0} records/sec)",
                    model,
                    inserted,
                    result.duration,
                    result.records_per_second()
                );
                result
            }
            Err(e) => {
                error!("Failed to seed '{}': {}", model, e);
                SeedResult::failed(model, e.to_string(), start_time.elapsed())
            }
        }
    }

    /// Seed every registered model in dependency order, each with its
    /// configured count.
    ///
    /// A failing model does not stop the run; there is one result per model.
    pub async fn seed_all(&mut self) -> Vec<SeedResult> {
        let plan: Vec<(String, u64)> = order_models(self.registry.models())
            .into_iter()
            .map(|m| {
                let count = self.config.resolve(&m.name, self.overrides.as_ref()).count;
                (m.name.clone(), count)
            })
            .collect();

        info!(
            "Seeding {} models: {}",
            plan.len(),
            plan.iter()
                .map(|(name, _)| name.as_str())
                .collect::<Vec<_>>()
                .join(" -> ")
        );

        let mut run = SeedRun::new();
        let mut results = Vec::with_capacity(plan.len());
        for (model, count) in plan {
            results.push(self.seed_in(&mut run, &model, count, None).await);
        }

        let failed = results.iter().filter(|r| !r.success).count();
        if failed > 0 {
            warn!("{} of {} models failed to seed", failed, results.len());
        }
        results
    }

    async fn try_seed(
        &mut self,
        run: &mut SeedRun,
        model_name: &str,
        count: u64,
        overrides: Option<&ModelConfig>,
    ) -> Result<u64, SeedError> {
        let Self {
            registry,
            bindings,
            config,
            overrides: run_overrides,
            synthesizer,
        } = self;

        let model = registry
            .get(model_name)
            .ok_or_else(|| SeedError::ModelNotFound(model_name.to_string()))?;
        let store = bindings
            .get(model_name)
            .ok_or_else(|| SeedError::StorageNotBound(model_name.to_string()))?;
        let layered = match (run_overrides.as_ref(), overrides) {
            (Some(run), Some(call)) => Some(run.merge(call)),
            (Some(run), None) => Some(run.clone()),
            (None, call) => call.cloned(),
        };
        let settings = config.resolve(model_name, layered.as_ref());
        synthesizer.set_id_format(store.id_format());

        if settings.reset {
            let removed = store.delete_many().await?;
            run.forget(model_name);
            info!("Reset '{}': removed {} existing records", model_name, removed);
        }

        let existing = store.count().await?;
        let start_index = if settings.incremental { existing } else { 0 };
        debug!(
            "Generating {} '{}' records (start index {}, {} existing)",
            count, model_name, start_index, existing
        );

        let resolver = ReferenceResolver::new(registry, bindings);
        let mut records = Vec::with_capacity(count as usize);
        for offset in 0..count {
            let record = build_record(
                model,
                &settings,
                start_index + offset,
                synthesizer,
                &resolver,
                run,
            )
            .await;
            records.push(record);
        }

        if settings.randomize {
            records.shuffle(synthesizer.rng());
            let mut persisted = Vec::with_capacity(records.len());
            for record in records {
                match store.insert_one(record).await {
                    Ok(stored) => persisted.push(stored),
                    Err(e) => {
                        // Records inserted before the failure remain valid targets
                        run.generated.append(model_name, persisted);
                        return Err(e.into());
                    }
                }
            }
            let inserted = persisted.len() as u64;
            run.generated.append(model_name, persisted);
            Ok(inserted)
        } else {
            let persisted = store.insert_many(records).await?;
            let inserted = persisted.len() as u64;
            run.generated.append(model_name, persisted);
            Ok(inserted)
        }
    }
}

/// Build one record: synthesized values, resolved references, absent
/// values omitted.
async fn build_record(
    model: &Model,
    settings: &ResolvedModelConfig,
    index: u64,
    synthesizer: &mut FieldSynthesizer,
    resolver: &ReferenceResolver<'_>,
    run: &mut SeedRun,
) -> Record {
    let mut record = Record::new();

    for field in &model.fields {
        let field_config = settings.field(&field.name);
        if field_config.is_some_and(FieldConfig::is_ignored) || field.is_primary_key {
            continue;
        }

        let value = if field.is_foreign_key {
            resolve_reference(model, field, settings, synthesizer, resolver, run).await
        } else if field.is_store_assigned(field_config.and_then(|c| c.field_type))
            || field.relation_model.is_some()
        {
            // Store-assigned, or carried by the other side of the relation
            None
        } else {
            synthesizer.synthesize(field, field_config, index)
        };

        if let Some(value) = value {
            record.insert(field.name.clone(), value);
        }
    }

    record
}

async fn resolve_reference(
    model: &Model,
    field: &Field,
    settings: &ResolvedModelConfig,
    synthesizer: &mut FieldSynthesizer,
    resolver: &ReferenceResolver<'_>,
    run: &mut SeedRun,
) -> Option<SeedValue> {
    let relation = model.relation_for_field(&field.name);
    let relation_config = relation.and_then(|r| settings.relation(&r.name));
    let target = relation_config
        .and_then(|c| c.model.as_deref())
        .or(field.relation_model.as_deref())?;

    let many = relation
        .map(|r| r.is_many())
        .unwrap_or(field.field_type == FieldType::Array);

    if many {
        let min = relation_config.and_then(|c| c.min).unwrap_or(0);
        let max = relation_config
            .and_then(|c| c.max)
            .unwrap_or(DEFAULT_MAX_RELATED);
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        let size = synthesizer.rng().gen_range(min..=max);

        let values = resolver
            .resolve_many(field, target, size, run, synthesizer.rng())
            .await;
        return Some(SeedValue::Array(values));
    }

    let value = resolver
        .resolve(field, target, run, synthesizer.rng())
        .await;
    if value.is_none() {
        warn!(
            "No '{}' records available for {}.{}; field omitted",
            target, model.name, field.name
        );
    }
    value
}
