//! Collection-level operations used by the MongoDB storage client.

use crate::error::MongoDBStoreError;
use bson::{doc, Bson, Document};
use mongodb::Collection;
use tracing::debug;

/// Default batch size for INSERT operations.
pub const DEFAULT_BATCH_SIZE: usize = 100;

/// Insert documents in batches of at most `batch_size`, returning the
/// `_id` of every document in input order.
pub async fn insert_batches(
    collection: &Collection<Document>,
    documents: Vec<Document>,
    batch_size: usize,
) -> Result<Vec<Bson>, MongoDBStoreError> {
    let batch_size = batch_size.max(1);
    let mut remaining = documents;
    let mut inserted_ids = Vec::with_capacity(remaining.len());
    let mut batch_count = 0u64;

    while !remaining.is_empty() {
        let rest = remaining.split_off(remaining.len().min(batch_size));
        let batch_len = remaining.len();
        let mut result = collection.insert_many(remaining).await?;
        for index in 0..batch_len {
            let id = result.inserted_ids.remove(&index).ok_or_else(|| {
                MongoDBStoreError::Document(format!(
                    "insert_many returned no _id for document {index} of batch {}",
                    batch_count + 1
                ))
            })?;
            inserted_ids.push(id);
        }
        batch_count += 1;
        remaining = rest;

        debug!(
            "Batch {} complete: {} documents inserted, {} remaining",
            batch_count,
            inserted_ids.len(),
            remaining.len()
        );
    }

    Ok(inserted_ids)
}

/// Insert a single document, returning its `_id`.
pub async fn insert_single(
    collection: &Collection<Document>,
    document: Document,
) -> Result<Bson, MongoDBStoreError> {
    let result = collection.insert_one(document).await?;
    Ok(result.inserted_id)
}

/// Read up to `limit` documents in natural order.
pub async fn find_documents(
    collection: &Collection<Document>,
    limit: usize,
    projection: Option<Document>,
) -> Result<Vec<Document>, MongoDBStoreError> {
    if limit == 0 {
        // a zero limit means "no limit" to MongoDB
        return Ok(Vec::new());
    }

    let mut find = collection
        .find(doc! {})
        .sort(doc! { "$natural": 1 })
        .limit(i64::try_from(limit).unwrap_or(i64::MAX));
    if let Some(projection) = projection {
        find = find.projection(projection);
    }

    let mut cursor = find.await?;
    let mut documents = Vec::new();
    while cursor.advance().await? {
        let document: Document = cursor
            .current()
            .try_into()
            .map_err(|e: bson::raw::Error| MongoDBStoreError::Document(e.to_string()))?;
        documents.push(document);
    }

    Ok(documents)
}

/// Delete every document of a collection.
pub async fn delete_all(collection: &Collection<Document>) -> Result<u64, MongoDBStoreError> {
    let result = collection.delete_many(doc! {}).await?;
    Ok(result.deleted_count)
}

/// Get the document count for a collection.
pub async fn count_documents(
    collection: &Collection<Document>,
) -> Result<u64, MongoDBStoreError> {
    let count = collection.count_documents(doc! {}).await?;
    Ok(count)
}
