//! Error types for the seeding engine.

use thiserror::Error;

/// Failure reported by a storage client.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing store failed (connection lost, query error, ...).
    #[error("Storage backend error: {0}")]
    Backend(String),

    /// The store refused a record.
    #[error("Insert rejected: {0}")]
    Rejected(String),

    /// A value could not be converted to or from the store's format.
    #[error("Conversion error: {0}")]
    Conversion(String),
}

/// Errors that end the seeding of one model.
///
/// These never escape `Seeder::seed` / `Seeder::seed_all`; they are
/// rendered into the model's `SeedResult`.
#[derive(Debug, Error)]
pub enum SeedError {
    /// Model not present in the registry.
    #[error("Model not found: {0}")]
    ModelNotFound(String),

    /// No storage client bound for the model.
    #[error("No storage client bound for model '{0}'")]
    StorageNotBound(String),

    /// Storage client failure.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SeedError::ModelNotFound("User".to_string()).to_string(),
            "Model not found: User"
        );
        assert_eq!(
            SeedError::StorageNotBound("Post".to_string()).to_string(),
            "No storage client bound for model 'Post'"
        );

        let err: SeedError = StorageError::Rejected("duplicate key".to_string()).into();
        assert_eq!(err.to_string(), "Storage error: Insert rejected: duplicate key");
    }
}
