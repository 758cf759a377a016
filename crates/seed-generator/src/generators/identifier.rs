//! Identifier value generators.

use chrono::{DateTime, Utc};
use rand::Rng;
use seed_core::SeedValue;
use uuid::Uuid;

/// Generate a random UUID v4 using the provided RNG.
pub fn generate_uuid_v4<R: Rng>(rng: &mut R) -> Uuid {
    // Generate 16 random bytes
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes);

    // Set version (4) and variant (RFC 4122) bits
    bytes[6] = (bytes[6] & 0x0f) | 0x40; // Version 4
    bytes[8] = (bytes[8] & 0x3f) | 0x80; // Variant RFC 4122

    Uuid::from_bytes(bytes)
}

/// Generate a 12-byte object id: 4-byte big-endian seconds, 5 random bytes,
/// 3-byte big-endian counter.
pub fn generate_object_id<R: Rng>(rng: &mut R, now: DateTime<Utc>, counter: u32) -> SeedValue {
    let mut bytes = [0u8; 12];
    let secs = now.timestamp().clamp(0, u32::MAX as i64) as u32;
    bytes[..4].copy_from_slice(&secs.to_be_bytes());
    rng.fill(&mut bytes[4..9]);
    bytes[9..].copy_from_slice(&counter.to_be_bytes()[1..]);
    SeedValue::ObjectId(bytes)
}

/// Generate a positive integer identifier.
pub fn generate_integer_id<R: Rng>(rng: &mut R) -> SeedValue {
    SeedValue::Int64(rng.gen_range(1..=i64::from(i32::MAX)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_uuid_v4() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = generate_uuid_v4(&mut rng);

        assert_eq!(value.get_version_num(), 4);
        assert_ne!(value, generate_uuid_v4(&mut rng));
    }

    #[test]
    fn test_uuid_deterministic() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        assert_eq!(generate_uuid_v4(&mut rng1), generate_uuid_v4(&mut rng2));
    }

    #[test]
    fn test_object_id_layout() {
        let mut rng = StdRng::seed_from_u64(42);
        let now = DateTime::from_timestamp(0x651f_0000, 0).unwrap();

        let SeedValue::ObjectId(bytes) = generate_object_id(&mut rng, now, 0x0a0b0c) else {
            panic!("Expected ObjectId");
        };
        assert_eq!(&bytes[..4], &[0x65, 0x1f, 0x00, 0x00]);
        assert_eq!(&bytes[9..], &[0x0a, 0x0b, 0x0c]);
    }

    #[test]
    fn test_integer_id_positive() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let id = generate_integer_id(&mut rng).as_i64().unwrap();
            assert!(id >= 1);
        }
    }
}
