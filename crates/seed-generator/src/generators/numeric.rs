//! Numeric value generators.

use rand::Rng;
use seed_core::SeedValue;

/// Order a `(min, max)` pair so ranges never panic on inverted bounds.
fn ordered<T: PartialOrd>(min: T, max: T) -> (T, T) {
    if min > max {
        (max, min)
    } else {
        (min, max)
    }
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Generate a random integer in the given range (inclusive).
pub fn generate_int_range<R: Rng>(rng: &mut R, min: i64, max: i64) -> SeedValue {
    let (min, max) = ordered(min, max);
    SeedValue::Int64(rng.gen_range(min..=max))
}

/// Generate a random float in the given range (inclusive).
pub fn generate_float_range<R: Rng>(rng: &mut R, min: f64, max: f64) -> SeedValue {
    let (min, max) = ordered(min, max);
    SeedValue::Float64(rng.gen_range(min..=max))
}

/// Generate a random float in the given range with two decimal places.
pub fn generate_decimal_range<R: Rng>(rng: &mut R, min: f64, max: f64) -> SeedValue {
    let (min, max) = ordered(min, max);
    let value = round2(rng.gen_range(min..=max));
    // Rounding may step just outside the range
    SeedValue::Float64(value.clamp(min, max))
}

/// Age in whole years.
pub fn age<R: Rng>(rng: &mut R) -> SeedValue {
    generate_int_range(rng, 18, 100)
}

/// Monetary amount.
pub fn price<R: Rng>(rng: &mut R) -> SeedValue {
    generate_decimal_range(rng, 0.01, 10_000.0)
}

/// Rating on a 0-5 scale.
pub fn rating<R: Rng>(rng: &mut R) -> SeedValue {
    generate_decimal_range(rng, 0.0, 5.0)
}

pub fn percentage<R: Rng>(rng: &mut R) -> SeedValue {
    generate_decimal_range(rng, 0.0, 100.0)
}
