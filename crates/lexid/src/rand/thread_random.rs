use crate::RandSource;
use rand::{Rng, rng};

/// A `RandSource` that uses the thread-local RNG (`rand::rng()`).
///
/// This RNG is fast, cryptographically secure (ChaCha-based), and automatically
/// reseeded periodically. Sampling goes through `random_range`, which rejects
/// out-of-zone values, so every symbol is equally likely.
///
/// Each OS thread has its own RNG instance, so calls from multiple threads are
/// contention-free and safe. This type does **not** store the RNG itself; it
/// simply accesses the thread-local generator on each call.
#[derive(Default, Clone, Copy, Debug)]
pub struct ThreadRandom;

impl RandSource for ThreadRandom {
    fn pick(&self, choices: usize) -> usize {
        rng().random_range(0..choices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_stay_in_range_and_cover_every_choice() {
        let mut seen = [false; 37];
        for _ in 0..10_000 {
            let pick = ThreadRandom.pick(37);
            assert!(pick < 37);
            seen[pick] = true;
        }
        assert!(seen.iter().all(|&hit| hit));
    }
}
