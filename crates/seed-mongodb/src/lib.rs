//! MongoDB storage backend for schema-seeder.
//!
//! [`MongoDBStore`] binds each model to the collection of the same name.
//! Records are converted to BSON with the model's primary key stored as
//! `_id`, and MongoDB-assigned ObjectIds flow back into the seeding run so
//! later models can reference them.

pub mod args;
pub mod convert;
pub mod error;
pub mod insert;
pub mod store;

pub use args::MongoDBSeedArgs;
pub use error::MongoDBStoreError;
pub use insert::DEFAULT_BATCH_SIZE;
pub use store::{MongoDBCollection, MongoDBStore};
