//! Seeding engine for schema-seeder.
//!
//! Given a [`ModelRegistry`](seed_core::ModelRegistry), a storage client
//! per model and a [`SeedConfig`](seed_core::SeedConfig), the [`Seeder`]
//! fills every model with synthesized records whose references point at
//! records that actually exist.
//!
//! # Architecture
//!
//! ```text
//!  ModelRegistry ──► order_models ──► [User, Post, Comment]
//!                                           │ one model at a time
//!                                           ▼
//!  SeedConfig ──► resolve ──►  ┌───────────────────────────┐
//!                              │          Seeder           │
//!                              │  FieldSynthesizer         │  plain fields
//!                              │  ReferenceResolver ◄──────┼── SeedRun.generated
//!                              └─────────────┬─────────────┘
//!                                            ▼
//!                              StorageClient (per model)
//! ```
//!
//! Records persisted for a model are appended to the run's
//! [`GeneratedRecordSet`], so later models reference them without
//! round-tripping through storage.

pub mod error;
pub mod memory;
pub mod order;
pub mod resolve;
pub mod result;
pub mod run;
pub mod seeder;
pub mod storage;

pub use error::{SeedError, StorageError};
pub use memory::{MemoryCollection, MemoryStore};
pub use order::{dependency_order, order_models};
pub use resolve::{ReferenceResolver, STORE_SAMPLE_LIMIT};
pub use result::SeedResult;
pub use run::{GeneratedRecordSet, SeedRun};
pub use seeder::{PlannedModel, Seeder, DEFAULT_MAX_RELATED};
pub use storage::{StorageBindings, StorageClient};
