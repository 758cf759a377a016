//! Seed command handlers.
//!
//! This module contains handlers for the seed, generate and models commands.

pub mod generate;
pub mod logging;
pub mod models;
pub mod run;

pub use generate::run_generate;
pub use logging::{init_tracing, mask_connection_password};
pub use models::run_models;
pub use run::{build_seeder, load_registry, report_results, run_seed, seed_selected};
