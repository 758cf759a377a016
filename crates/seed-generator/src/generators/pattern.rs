//! Pattern-based string generator.
//!
//! Supports placeholders:
//! - `{index}` - record ordinal within the model
//! - `{uuid}` - random UUID
//! - `{rand:N}` - random N-digit number
//! - `#` - one random digit
//! - `?` - one random lowercase letter
//!
//! A malformed `{rand:...}` placeholder is left in the output verbatim.

use crate::generators::identifier::generate_uuid_v4;
use rand::Rng;
use tracing::warn;

/// Generate a string based on a pattern with placeholders.
pub fn generate_pattern<R: Rng>(pattern: &str, rng: &mut R, index: u64) -> String {
    let mut result = pattern.replace("{index}", &index.to_string());

    // Replace {uuid}
    while result.contains("{uuid}") {
        let uuid = generate_uuid_v4(rng).to_string();
        result = result.replacen("{uuid}", &uuid, 1);
    }

    // Replace {rand:N} patterns
    let mut search_from = 0;
    while let Some(offset) = result[search_from..].find("{rand:") {
        let start = search_from + offset;
        let Some(end) = result[start..].find('}').map(|e| start + e) else {
            warn!("Unterminated placeholder in pattern '{}', kept verbatim", pattern);
            break;
        };
        match result[start + 6..end].parse::<usize>() {
            Ok(digits) => {
                let random_num = generate_random_digits(rng, digits);
                result = format!("{}{}{}", &result[..start], random_num, &result[end + 1..]);
                search_from = start + random_num.len();
            }
            Err(_) => {
                warn!(
                    "Malformed placeholder '{}' in pattern '{}', kept verbatim",
                    &result[start..=end],
                    pattern
                );
                search_from = end + 1;
            }
        }
    }

    replace_symbols(&result, rng)
}

/// Replace `#` with a digit and `?` with a lowercase letter.
fn replace_symbols<R: Rng>(input: &str, rng: &mut R) -> String {
    input
        .chars()
        .map(|c| match c {
            '#' => char::from(b'0' + rng.gen_range(0..10u8)),
            '?' => char::from(b'a' + rng.gen_range(0..26u8)),
            other => other,
        })
        .collect()
}

/// Generate a random number with exactly N digits.
fn generate_random_digits<R: Rng>(rng: &mut R, digits: usize) -> String {
    if digits == 0 {
        return String::new();
    }

    let mut result = String::with_capacity(digits);

    // First digit should be 1-9 to avoid leading zeros
    result.push(char::from(b'0' + rng.gen_range(1..10u8)));

    // Remaining digits can be 0-9
    for _ in 1..digits {
        result.push(char::from(b'0' + rng.gen_range(0..10u8)));
    }

    result
}
