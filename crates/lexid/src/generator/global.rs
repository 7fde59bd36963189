//! Process-wide convenience API.
//!
//! A single [`LockMonoGenerator`] backed by the system wall clock and the
//! thread-local RNG is created on first use and shared by the whole process.
//! Nothing forces callers to use it: [`create_monotonic_generator`] returns an
//! independent instance with its own state, e.g. one per request.
//!
//! # Example
//! ```rust
//! let first = lexid::generate_monotonic().unwrap();
//! let second = lexid::generate_monotonic().unwrap();
//! assert_ne!(first, second);
//!
//! let batch = lexid::generate_batch(4).unwrap();
//! assert!(batch.windows(2).all(|w| w[0] < w[1]));
//! ```

use crate::{
    LexConfig, LexId, LockMonoGenerator, Result, ThreadRandom, WallClock, mint_batch, mint_one,
    mint_one_with_random_length,
};
use alloc::vec::Vec;
use std::sync::LazyLock;

/// The generator type behind the process-wide default.
pub type DefaultGenerator = LockMonoGenerator<WallClock, ThreadRandom>;

static DEFAULT_GENERATOR: LazyLock<DefaultGenerator> = LazyLock::new(create_monotonic_generator);

/// Creates an independent monotonic generator with its own state, reading
/// the system wall clock and the thread-local RNG.
pub fn create_monotonic_generator() -> DefaultGenerator {
    LockMonoGenerator::new(WallClock::default(), ThreadRandom)
}

/// The process-wide generator, initialised once on first access.
pub fn default_generator() -> &'static DefaultGenerator {
    &DEFAULT_GENERATOR
}

/// Generates the next identifier from the process-wide generator.
///
/// # Errors
/// See [`LockMonoGenerator::generate`].
pub fn generate_monotonic() -> Result<LexId> {
    DEFAULT_GENERATOR.generate()
}

/// Mints one fresh identifier with the default layout.
///
/// # Errors
/// See [`mint_one`].
pub fn generate_one() -> Result<LexId> {
    mint_one(&LexConfig::default(), &WallClock::default(), &ThreadRandom)
}

/// Mints one fresh identifier with a `random_length`-symbol suffix.
///
/// # Errors
/// See [`mint_one_with_random_length`].
pub fn generate_one_with_random_length(random_length: usize) -> Result<LexId> {
    mint_one_with_random_length(
        &LexConfig::default(),
        &WallClock::default(),
        &ThreadRandom,
        random_length,
    )
}

/// Mints `count` strictly increasing identifiers from one fresh seed.
///
/// # Errors
/// See [`mint_batch`].
pub fn generate_batch(count: usize) -> Result<Vec<LexId>> {
    mint_batch(&LexConfig::default(), &WallClock::default(), &ThreadRandom, count)
}
