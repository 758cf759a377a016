//! Array value generators.

use crate::generators::text;
use rand::seq::SliceRandom;
use rand::Rng;
use seed_core::SeedValue;

/// Default upper bound for array lengths.
pub const DEFAULT_MAX_LENGTH: usize = 5;

/// Hard cap on configured array lengths.
pub const MAX_LENGTH: usize = 10_000;

fn pick_length<R: Rng>(rng: &mut R, min_length: usize, max_length: usize) -> usize {
    let (min, max) = if min_length > max_length {
        (max_length, min_length)
    } else {
        (min_length, max_length)
    };
    rng.gen_range(min.min(MAX_LENGTH)..=max.min(MAX_LENGTH))
}

/// Generate an array by sampling from a pool of values (duplicates allowed).
///
/// An empty pool yields an empty array.
pub fn generate_sample_array<R: Rng>(
    rng: &mut R,
    pool: &[SeedValue],
    min_length: usize,
    max_length: usize,
) -> SeedValue {
    if pool.is_empty() {
        return SeedValue::Array(vec![]);
    }

    let length = pick_length(rng, min_length, max_length);

    let items: Vec<SeedValue> = (0..length)
        .filter_map(|_| pool.choose(rng).cloned())
        .collect();

    SeedValue::Array(items)
}

/// Generate an array of short synthesized words.
pub fn generate_word_array<R: Rng>(rng: &mut R, min_length: usize, max_length: usize) -> SeedValue {
    let length = pick_length(rng, min_length, max_length);
    let items = (0..length)
        .map(|_| SeedValue::String(text::word(rng)))
        .collect();
    SeedValue::Array(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pool() -> Vec<SeedValue> {
        vec![
            SeedValue::from("a"),
            SeedValue::from("b"),
            SeedValue::from("c"),
        ]
    }

    #[test]
    fn test_generate_sample_array() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool = pool();

        for _ in 0..10 {
            let value = generate_sample_array(&mut rng, &pool, 1, 3);
            let arr = value.as_array().unwrap();
            assert!(!arr.is_empty());
            assert!(arr.len() <= 3);
            assert!(arr.iter().all(|v| pool.contains(v)));
        }
    }

    #[test]
    fn test_generate_sample_array_empty_pool() {
        let mut rng = StdRng::seed_from_u64(42);

        let value = generate_sample_array(&mut rng, &[], 0, 3);
        assert_eq!(value, SeedValue::Array(vec![]));
    }

    #[test]
    fn test_generate_word_array() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..10 {
            let value = generate_word_array(&mut rng, 0, DEFAULT_MAX_LENGTH);
            let arr = value.as_array().unwrap();
            assert!(arr.len() <= DEFAULT_MAX_LENGTH);
            assert!(arr.iter().all(|v| v.as_str().is_some_and(|s| !s.is_empty())));
        }
    }

    #[test]
    fn test_deterministic_generation() {
        let pool = pool();

        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        assert_eq!(
            generate_sample_array(&mut rng1, &pool, 1, 3),
            generate_sample_array(&mut rng2, &pool, 1, 3)
        );
    }

    #[test]
    fn test_length_is_capped() {
        let mut rng = StdRng::seed_from_u64(42);
        let SeedValue::Array(items) = generate_word_array(&mut rng, usize::MAX, usize::MAX) else {
            panic!("Expected array");
        };
        assert_eq!(items.len(), MAX_LENGTH);
    }
}
