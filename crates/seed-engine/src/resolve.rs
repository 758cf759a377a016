//! Reference resolution for foreign key fields.

use crate::run::SeedRun;
use crate::storage::StorageBindings;
use rand::seq::SliceRandom;
use rand::Rng;
use seed_core::{Field, ModelRegistry, SeedValue};
use tracing::{debug, warn};

/// Maximum number of records sampled from a store when a target model has
/// nothing generated in the current run.
pub const STORE_SAMPLE_LIMIT: usize = 100;

/// Picks identifiers of existing target records for reference fields.
///
/// Records persisted earlier in the run are preferred. Only when the run has
/// none for the target model is its store sampled; the sample is cached on
/// the [`SeedRun`].
pub struct ReferenceResolver<'a> {
    registry: &'a ModelRegistry,
    bindings: &'a StorageBindings,
}

impl<'a> ReferenceResolver<'a> {
    pub fn new(registry: &'a ModelRegistry, bindings: &'a StorageBindings) -> Self {
        Self { registry, bindings }
    }

    /// Field of `target` holding the identifier that `field` refers to.
    pub fn reference_key(&self, field: &Field, target: &str) -> String {
        if let Some(key) = &field.relation_field {
            return key.clone();
        }
        self.registry
            .get(target)
            .map(|m| m.primary_key().to_string())
            .unwrap_or_else(|| "id".to_string())
    }

    /// Identifier of one uniformly chosen `target` record, or `None` when
    /// neither the run nor the store has any.
    pub async fn resolve<R: Rng>(
        &self,
        field: &Field,
        target: &str,
        run: &mut SeedRun,
        rng: &mut R,
    ) -> Option<SeedValue> {
        let key = self.reference_key(field, target);

        let generated: Vec<&SeedValue> = run.generated.identifiers(target, &key).collect();
        if let Some(value) = generated.choose(rng) {
            return Some((*value).clone());
        }

        self.store_sample(target, &key, run).await.choose(rng).cloned()
    }

    /// Resolve `count` times, keeping every non-absent result.
    ///
    /// Draws are independent, so the same identifier may appear twice.
    pub async fn resolve_many<R: Rng>(
        &self,
        field: &Field,
        target: &str,
        count: u64,
        run: &mut SeedRun,
        rng: &mut R,
    ) -> Vec<SeedValue> {
        let mut values = Vec::new();
        for _ in 0..count {
            if let Some(value) = self.resolve(field, target, run, rng).await {
                values.push(value);
            }
        }
        values
    }

    async fn store_sample<'r>(
        &self,
        target: &str,
        key: &str,
        run: &'r mut SeedRun,
    ) -> &'r [SeedValue] {
        let cache_key = (target.to_string(), key.to_string());
        if !run.store_samples.contains_key(&cache_key) {
            let sample = self.fetch_sample(target, key).await;
            run.store_samples.insert(cache_key.clone(), sample);
        }
        run.store_samples
            .get(&cache_key)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    async fn fetch_sample(&self, target: &str, key: &str) -> Vec<SeedValue> {
        let Some(client) = self.bindings.get(target) else {
            debug!("No storage client bound for '{target}', cannot sample references");
            return Vec::new();
        };

        let projection = [key.to_string()];
        match client.find(STORE_SAMPLE_LIMIT, Some(&projection[..])).await {
            Ok(records) => {
                let sample: Vec<SeedValue> = records
                    .iter()
                    .filter_map(|r| r.identifier(key).cloned())
                    .collect();
                debug!(
                    "Sampled {} existing '{target}' identifiers from storage",
                    sample.len()
                );
                sample
            }
            Err(e) => {
                warn!("Failed to sample '{target}' records for references: {e}");
                Vec::new()
            }
        }
    }
}
