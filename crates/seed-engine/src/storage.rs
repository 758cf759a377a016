//! Storage client contract and per-model bindings.

use crate::error::StorageError;
use async_trait::async_trait;
use seed_core::Record;
use seed_generator::IdFormat;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Persistence operations against one concrete model.
#[async_trait]
pub trait StorageClient: Send + Sync {
    /// Insert records in one batch, returning them in input order with
    /// store-assigned fields filled in.
    async fn insert_many(&self, records: Vec<Record>) -> Result<Vec<Record>, StorageError>;

    /// Insert one record, returning it with store-assigned fields filled in.
    async fn insert_one(&self, record: Record) -> Result<Record, StorageError>;

    /// Read up to `limit` records in natural (insertion) order, optionally
    /// keeping only the projected fields.
    async fn find(
        &self,
        limit: usize,
        projection: Option<&[String]>,
    ) -> Result<Vec<Record>, StorageError>;

    /// Remove every record, returning how many were removed.
    async fn delete_many(&self) -> Result<u64, StorageError>;

    /// Number of stored records.
    async fn count(&self) -> Result<u64, StorageError>;

    /// Native identifier format, used for reference/identifier synthesis.
    fn id_format(&self) -> IdFormat {
        IdFormat::Uuid
    }
}

/// Model name -> storage client.
#[derive(Clone, Default)]
pub struct StorageBindings {
    clients: HashMap<String, Arc<dyn StorageClient>>,
}

impl StorageBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a client to a model, replacing any previous binding.
    pub fn bind(&mut self, model: impl Into<String>, client: Arc<dyn StorageClient>) {
        self.clients.insert(model.into(), client);
    }

    /// Builder-style [`bind`](Self::bind).
    pub fn with(mut self, model: impl Into<String>, client: Arc<dyn StorageClient>) -> Self {
        self.bind(model, client);
        self
    }

    pub fn get(&self, model: &str) -> Option<Arc<dyn StorageClient>> {
        self.clients.get(model).cloned()
    }

    pub fn contains(&self, model: &str) -> bool {
        self.clients.contains_key(model)
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}

impl fmt::Debug for StorageBindings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut models: Vec<&String> = self.clients.keys().collect();
        models.sort();
        f.debug_struct("StorageBindings")
            .field("models", &models)
            .finish()
    }
}
