//! Common types and utilities for schema-seeder backends.
//!
//! This crate provides the argument types shared by every `seed-*` backend
//! crate, so each backend's CLI exposes the same seeding flags.

pub mod args;

pub use args::CommonSeedArgs;
