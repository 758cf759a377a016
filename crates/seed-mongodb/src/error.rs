//! Error types for the MongoDB storage backend.

use seed_engine::StorageError;
use thiserror::Error;

/// Errors that can occur while talking to MongoDB.
#[derive(Error, Debug)]
pub enum MongoDBStoreError {
    /// MongoDB connection or query error.
    #[error("MongoDB error: {0}")]
    MongoDB(#[from] mongodb::error::Error),

    /// Document could not be read from a cursor.
    #[error("Invalid document: {0}")]
    Document(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<MongoDBStoreError> for StorageError {
    fn from(e: MongoDBStoreError) -> Self {
        match e {
            MongoDBStoreError::Document(msg) => StorageError::Conversion(msg),
            other => StorageError::Backend(other.to_string()),
        }
    }
}
