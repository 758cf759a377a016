//! Field value synthesizer for schema-seeder.
//!
//! This crate provides the [`FieldSynthesizer`], which produces one
//! plausible value for a model field from its declared type, its name, and
//! the merged [`FieldConfig`](seed_core::FieldConfig) override. It uses a
//! seeded RNG so runs with the same seed and clock are reproducible.
//!
//! # Architecture
//!
//! ```text
//! Field + FieldConfig + index
//!          │
//!          ▼
//! ┌────────────────────┐
//! │  FieldSynthesizer  │
//! │                    │
//! │  - rng (StdRng)    │
//! │  - now             │
//! │  - id_format       │
//! └─────────┬──────────┘
//!           │  ignore / identifier / defaults / type dispatch
//!           ▼
//!   Option<SeedValue>   (None = omit the field)
//! ```
//!
//! # Example
//!
//! ```rust
//! use seed_core::{Field, FieldType};
//! use seed_generator::FieldSynthesizer;
//!
//! let mut synthesizer = FieldSynthesizer::new(42);
//! let email = Field::new("email", FieldType::String);
//! let value = synthesizer.synthesize(&email, None, 0).unwrap();
//! assert!(value.as_str().unwrap().contains('@'));
//! ```
//!
//! # Type dispatch
//!
//! - `string` - name hints, then generator path, then pattern, then a phrase
//! - `number` - name hints (age, price, rating, percentage), then `[min, max]`
//! - `date` - name hints (birth, created/updated, future, past), then last 30 days
//! - `boolean` - fair coin
//! - `enum` - declared values, then configured `values`
//! - `reference` / `identifier` - fresh id in the store's native format
//! - `array` - sampled `values` or words, length in `[min, max]`
//! - `object` - empty object
//! - unknown - as `string`

pub mod generators;
pub mod synthesizer;

// Re-exports for convenience
pub use synthesizer::{FieldSynthesizer, IdFormat};
