//! In-process storage client.
//!
//! [`MemoryStore`] keeps one [`MemoryCollection`] per model. Collections
//! assign the model's primary key on insert (UUID, object id or
//! auto-increment integer) and keep insertion order, which makes them a
//! faithful stand-in for a real store in tests and dry runs.

use crate::error::StorageError;
use crate::storage::{StorageBindings, StorageClient};
use async_trait::async_trait;
use seed_core::{ModelRegistry, Record, SeedValue};
use seed_generator::IdFormat;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Records of one model.
#[derive(Debug)]
pub struct MemoryCollection {
    key: String,
    id_format: IdFormat,
    records: Mutex<Vec<Record>>,
    next_id: AtomicI64,
}

impl MemoryCollection {
    /// Create an empty collection assigning ids to `key`.
    pub fn new(key: impl Into<String>, id_format: IdFormat) -> Self {
        Self {
            key: key.into(),
            id_format,
            records: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Copy of every stored record, in insertion order.
    pub async fn snapshot(&self) -> Vec<Record> {
        self.records.lock().await.clone()
    }

    fn assign_id(&self, record: &mut Record) {
        if record.identifier(&self.key).is_some() {
            return;
        }
        let seq = self.next_id.fetch_add(1, Ordering::Relaxed);
        let id = match self.id_format {
            IdFormat::Uuid => SeedValue::Uuid(Uuid::new_v4()),
            IdFormat::Integer => SeedValue::Int64(seq),
            IdFormat::ObjectId => {
                let mut bytes = [0u8; 12];
                bytes[4..].copy_from_slice(&seq.to_be_bytes());
                SeedValue::ObjectId(bytes)
            }
        };
        record.insert(self.key.clone(), id);
    }
}

#[async_trait]
impl StorageClient for MemoryCollection {
    async fn insert_many(&self, records: Vec<Record>) -> Result<Vec<Record>, StorageError> {
        let mut stored = self.records.lock().await;
        let mut inserted = Vec::with_capacity(records.len());
        for mut record in records {
            self.assign_id(&mut record);
            stored.push(record.clone());
            inserted.push(record);
        }
        Ok(inserted)
    }

    async fn insert_one(&self, mut record: Record) -> Result<Record, StorageError> {
        self.assign_id(&mut record);
        self.records.lock().await.push(record.clone());
        Ok(record)
    }

    async fn find(
        &self,
        limit: usize,
        projection: Option<&[String]>,
    ) -> Result<Vec<Record>, StorageError> {
        let stored = self.records.lock().await;
        Ok(stored
            .iter()
            .take(limit)
            .map(|r| match projection {
                Some(fields) => r.project(fields),
                None => r.clone(),
            })
            .collect())
    }

    async fn delete_many(&self) -> Result<u64, StorageError> {
        let mut stored = self.records.lock().await;
        let removed = stored.len() as u64;
        stored.clear();
        Ok(removed)
    }

    async fn count(&self) -> Result<u64, StorageError> {
        Ok(self.records.lock().await.len() as u64)
    }

    fn id_format(&self) -> IdFormat {
        self.id_format
    }
}

/// One in-memory collection per model of a registry.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: BTreeMap<String, Arc<MemoryCollection>>,
}

impl MemoryStore {
    /// Create a collection for every model, keyed on its primary key.
    pub fn for_registry(registry: &ModelRegistry, id_format: IdFormat) -> Self {
        let collections = registry
            .models()
            .iter()
            .map(|model| {
                let collection = MemoryCollection::new(model.primary_key(), id_format);
                (model.name.clone(), Arc::new(collection))
            })
            .collect();
        Self { collections }
    }

    pub fn collection(&self, model: &str) -> Option<&Arc<MemoryCollection>> {
        self.collections.get(model)
    }

    /// Model names in alphabetical order.
    pub fn models(&self) -> impl Iterator<Item = &str> {
        self.collections.keys().map(String::as_str)
    }

    /// Bindings pointing every model at its collection.
    pub fn bindings(&self) -> StorageBindings {
        let mut bindings = StorageBindings::new();
        for (name, collection) in &self.collections {
            let client: Arc<dyn StorageClient> = collection.clone();
            bindings.bind(name.clone(), client);
        }
        bindings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seed_core::{Field, FieldType, Model};

    #[tokio::test]
    async fn test_insert_assigns_ids() {
        let collection = MemoryCollection::new("id", IdFormat::Integer);

        let inserted = collection
            .insert_many(vec![Record::new().with("n", 1i64), Record::new().with("n", 2i64)])
            .await
            .unwrap();
        let inserted_ids: Vec<_> = inserted.iter().filter_map(|r| r.get("id")?.as_i64()).collect();
        assert_eq!(inserted_ids, vec![1, 2]);
        assert_eq!(inserted[1].get("n"), Some(&SeedValue::Int64(2)));

        let one = collection
            .insert_one(Record::new().with("n", 3i64))
            .await
            .unwrap();
        assert_eq!(one.get("id"), Some(&SeedValue::Int64(3)));

        let all = collection.find(10, None).await.unwrap();
        let ids: Vec<_> = all.iter().filter_map(|r| r.get("id")?.as_i64()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_existing_id_is_kept() {
        let collection = MemoryCollection::new("_id", IdFormat::Uuid);
        let record = collection
            .insert_one(Record::new().with("_id", "fixed"))
            .await
            .unwrap();

        assert_eq!(record.get("_id"), Some(&SeedValue::from("fixed")));
    }

    #[tokio::test]
    async fn test_find_limit_projection_and_delete() {
        let collection = MemoryCollection::new("id", IdFormat::ObjectId);
        for i in 0..5i64 {
            collection
                .insert_one(Record::new().with("n", i).with("extra", "x"))
                .await
                .unwrap();
        }

        let projection = vec!["id".to_string()];
        let found = collection.find(3, Some(&projection)).await.unwrap();
        assert_eq!(found.len(), 3);
        assert!(found.iter().all(|r| r.len() == 1 && r.contains("id")));
        assert!(matches!(found[0].get("id"), Some(SeedValue::ObjectId(_))));

        assert_eq!(collection.delete_many().await.unwrap(), 5);
        assert_eq!(collection.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_store_binds_every_model() {
        let registry = ModelRegistry::new(vec![
            Model::new("User", vec![Field::new("id", FieldType::Identifier).primary_key()]),
            Model::new("Doc", vec![Field::new("_id", FieldType::String)]),
        ])
        .unwrap();
        let store = MemoryStore::for_registry(&registry, IdFormat::Uuid);
        let bindings = store.bindings();

        assert_eq!(bindings.len(), 2);
        assert!(bindings.contains("User"));
        assert_eq!(store.models().collect::<Vec<_>>(), vec!["Doc", "User"]);

        let doc = bindings
            .get("Doc")
            .unwrap()
            .insert_one(Record::new())
            .await
            .unwrap();
        assert!(matches!(doc.get("_id"), Some(SeedValue::Uuid(_))));
    }
}
