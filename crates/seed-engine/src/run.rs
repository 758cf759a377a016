//! Per-run state shared across the models of one seeding run.

use seed_core::{Record, SeedValue};
use std::collections::HashMap;

/// Records persisted so far in a run, per model, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct GeneratedRecordSet {
    records: HashMap<String, Vec<Record>>,
}

impl GeneratedRecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append persisted records of a model.
    pub fn append(&mut self, model: &str, records: impl IntoIterator<Item = Record>) {
        self.records
            .entry(model.to_string())
            .or_default()
            .extend(records);
    }

    /// Persisted records of a model; empty when none.
    pub fn get(&self, model: &str) -> &[Record] {
        self.records.get(model).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Non-null values of `key` across a model's persisted records.
    pub fn identifiers<'a>(&'a self, model: &str, key: &'a str) -> impl Iterator<Item = &'a SeedValue> {
        self.get(model).iter().filter_map(move |r| r.identifier(key))
    }

    /// Drop every record of a model.
    pub fn remove(&mut self, model: &str) {
        self.records.remove(model);
    }

    pub fn len(&self, model: &str) -> usize {
        self.get(model).len()
    }

    /// Total persisted records across all models.
    pub fn total(&self) -> usize {
        self.records.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// State of one seeding run.
///
/// Owned by the caller of `Seeder::seed_in`; [`crate::Seeder::seed_all`]
/// creates one per call.
#[derive(Debug, Default)]
pub struct SeedRun {
    /// Records persisted during the run
    pub generated: GeneratedRecordSet,

    /// Identifiers fetched from stores for models with nothing generated,
    /// keyed by `(model, key)`
    pub(crate) store_samples: HashMap<(String, String), Vec<SeedValue>>,
}

impl SeedRun {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything known about a model's stored records, after its
    /// collection was cleared.
    pub fn forget(&mut self, model: &str) {
        self.generated.remove(model);
        self.store_samples.retain(|(sampled, _), _| sampled != model);
    }
}
