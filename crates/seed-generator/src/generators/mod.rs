//! Individual value generators for different data types.
//!
//! Each module holds pure functions of an RNG (and, for dates, a reference
//! instant). The [`FieldSynthesizer`](crate::FieldSynthesizer) picks among
//! them based on the field's type, name hints and configuration.

pub mod array;
pub mod catalog;
pub mod hints;
pub mod identifier;
pub mod numeric;
pub mod pattern;
pub mod static_value;
pub mod text;
pub mod timestamp;
