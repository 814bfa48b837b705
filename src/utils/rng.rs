//! Simple random number generator for reproducibility.
//!
//! This module provides a lightweight xorshift-based PRNG that doesn't require
//! external dependencies, ensuring reproducible weight initialization across
//! runs when a seed is fixed.

use std::time::{SystemTime, UNIX_EPOCH};

/// Simple RNG for reproducibility without external crates.
///
/// Uses xorshift algorithm for fast, deterministic random number generation.
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    /// Create a new RNG with explicit seed (if zero, use a fixed value).
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { 0x9e3779b97f4a7c15 } else { seed };
        Self { state }
    }

    /// Create a new RNG seeded from the current time.
    pub fn from_time() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos() as u64;
        Self::new(nanos)
    }

    /// Basic xorshift to generate u32.
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        (x >> 32) as u32
    }

    /// Convert to [0, 1], both bounds reachable.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / f64::from(u32::MAX)
    }

    /// Uniform sample in [low, high], inclusive on both ends.
    pub fn range(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.next_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(42);
        let mut rng2 = SimpleRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_zero_seed_falls_back() {
        let mut rng1 = SimpleRng::new(0);
        let mut rng2 = SimpleRng::new(0x9e3779b97f4a7c15);
        assert_eq!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_rng_next_f64_range() {
        let mut rng = SimpleRng::new(12345);

        for _ in 0..1000 {
            let val = rng.next_f64();
            assert!((0.0..=1.0).contains(&val));
        }
    }

    #[test]
    fn test_rng_range_negative_bounds() {
        let mut rng = SimpleRng::new(67890);

        for _ in 0..1000 {
            let val = rng.range(-2.0, 2.0);
            assert!(val >= -2.0 && val <= 2.0);
        }
    }

    #[test]
    fn test_rng_range_narrow_bounds() {
        let mut rng = SimpleRng::new(54321);

        for _ in 0..1000 {
            let val = rng.range(-0.2, 0.2);
            assert!(val >= -0.2 && val <= 0.2);
        }
    }
}
