//! Value generation for the appending scenario.
//!
//! Produces a reproducible stream of small signed integers so the demo can
//! show a list growing one element at a time from arbitrary data.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Smallest generated value.
pub const MIN_VALUE: i32 = -1000;

/// Largest generated value.
pub const MAX_VALUE: i32 = 1000;

/// Generate `count` values in `MIN_VALUE..=MAX_VALUE`.
///
/// The same seed always yields the same values.
pub fn generate_values(seed: u64, count: usize) -> Vec<i32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count).map(|_| rng.gen_range(MIN_VALUE..=MAX_VALUE)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_values() {
        let values = generate_values(42, 100);
        assert_eq!(values.len(), 100);
        assert!(values.iter().all(|v| (MIN_VALUE..=MAX_VALUE).contains(v)));
    }

    #[test]
    fn test_determinism() {
        assert_eq!(generate_values(12345, 50), generate_values(12345, 50));
    }

    #[test]
    fn test_different_seeds() {
        assert_ne!(generate_values(1, 50), generate_values(2, 50));
    }

    #[test]
    fn test_zero_count() {
        assert!(generate_values(7, 0).is_empty());
    }
}
