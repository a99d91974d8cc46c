//! Random source implementations.

use std::sync::{Arc, Mutex};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use expertgm_domain::RandomSource;

/// System random - uses real randomness.
pub struct SystemRandom;

impl SystemRandom {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for SystemRandom {
    fn gen_range(&self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        rand::thread_rng().gen_range(min..=max)
    }
}

/// Seeded random - the same seed replays the same rolls.
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn gen_range(&self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_range(min..=max)
    }
}

/// Seeded when a seed is configured, otherwise system randomness.
pub fn random_source(seed: Option<u64>) -> Arc<dyn RandomSource> {
    match seed {
        Some(seed) => {
            tracing::info!(seed = seed, "Using seeded random source");
            Arc::new(SeededRandom::new(seed))
        }
        None => Arc::new(SystemRandom::new()),
    }
}

/// Fixed random for testing.
#[cfg(test)]
pub struct FixedRandom(pub i32);

#[cfg(test)]
impl RandomSource for FixedRandom {
    fn gen_range(&self, min: i32, max: i32) -> i32 {
        self.0.clamp(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_random_stays_in_range() {
        let rng = SystemRandom::new();
        for _ in 0..500 {
            let value = rng.gen_range(1, 6);
            assert!((1..=6).contains(&value));
        }
    }

    #[test]
    fn test_degenerate_range_returns_min() {
        assert_eq!(SystemRandom::new().gen_range(4, 4), 4);
        assert_eq!(SeededRandom::new(1).gen_range(9, 2), 9);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let a = SeededRandom::new(42);
        let b = SeededRandom::new(42);
        let first: Vec<i32> = (0..20).map(|_| a.gen_range(1, 20)).collect();
        let second: Vec<i32> = (0..20).map(|_| b.gen_range(1, 20)).collect();
        assert_eq!(first, second);
    }
}
