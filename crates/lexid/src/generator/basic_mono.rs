use crate::{
    GeneratorState, LexConfig, LexId, MonotonicGenerator, RandSource, Result, TimeSource,
    mint_batch,
};
use alloc::vec::Vec;
use core::cell::RefCell;
#[cfg(feature = "tracing")]
use tracing::instrument;

/// A *monotonic* identifier generator suitable for single-threaded
/// environments.
///
/// The state lives in a [`RefCell`], so the generator is `!Sync` and cannot be
/// shared between threads: the single-threaded usage contract is enforced by
/// the type system rather than by a lock.
///
/// ## Features
/// - ❌ Not thread-safe
/// - ✅ Probabilistically unique (no coordination required)
/// - ✅ Time-ordered (monotonically increasing per millisecond)
///
/// ## Recommended When
/// - You're in a single-threaded environment (no shared access)
/// - You want one generator per request or per logical stream
///
/// ## See Also
/// - [`LockMonoGenerator`]
///
/// [`LockMonoGenerator`]: crate::LockMonoGenerator
pub struct BasicMonoGenerator<T, R>
where
    T: TimeSource,
    R: RandSource,
{
    config: LexConfig,
    state: RefCell<GeneratorState>,
    time: T,
    rng: R,
}

impl<T, R> BasicMonoGenerator<T, R>
where
    T: TimeSource,
    R: RandSource,
{
    /// Creates a new [`BasicMonoGenerator`] with the default layout.
    ///
    /// # Parameters
    /// - `time`: A [`TimeSource`] used to retrieve the current timestamp
    /// - `rng`: A [`RandSource`] used to pick random suffix symbols
    ///
    /// # Example
    /// ```
    /// use lexid::{BasicMonoGenerator, ThreadRandom, WallClock};
    ///
    /// let generator = BasicMonoGenerator::new(WallClock::default(), ThreadRandom);
    /// let a = generator.generate().unwrap();
    /// let b = generator.generate().unwrap();
    /// assert!(a < b || a.split_at(9).0 != b.split_at(9).0);
    /// ```
    pub fn new(time: T, rng: R) -> Self {
        Self::with_config(LexConfig::default(), time, rng)
    }

    /// Creates a new generator with an explicit layout.
    pub fn with_config(config: LexConfig, time: T, rng: R) -> Self {
        Self::from_state(config, GeneratorState::Uninitialized, time, rng)
    }

    /// Creates a generator that resumes from a previously captured state.
    ///
    /// # ⚠️ Note
    /// In typical use cases, you should prefer [`Self::new`] and let the
    /// generator start from [`GeneratorState::Uninitialized`].
    pub fn from_state(config: LexConfig, state: GeneratorState, time: T, rng: R) -> Self {
        Self {
            config,
            state: RefCell::new(state),
            time,
            rng,
        }
    }

    pub fn config(&self) -> &LexConfig {
        &self.config
    }

    /// A snapshot of the current state.
    pub fn state(&self) -> GeneratorState {
        self.state.borrow().clone()
    }

    /// Generates the next identifier.
    ///
    /// # Errors
    /// - [`Error::Overflow`] or [`Error::SuffixExhausted`] when the previous
    ///   identifier cannot be incremented
    /// - [`Error::TimestampOutOfRange`] when the clock is beyond the prefix
    ///   range
    ///
    /// On error the state is left unchanged.
    ///
    /// [`Error::Overflow`]: crate::Error::Overflow
    /// [`Error::SuffixExhausted`]: crate::Error::SuffixExhausted
    /// [`Error::TimestampOutOfRange`]: crate::Error::TimestampOutOfRange
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn generate(&self) -> Result<LexId> {
        let now = self.time.current_millis();
        let (next, id) = self
            .state
            .borrow()
            .next_state(now, &self.config, &self.rng)?;
        self.state.replace(next);
        Ok(id)
    }

    /// Mints `count` strictly increasing identifiers from one fresh seed,
    /// without reading or touching this generator's state.
    ///
    /// # Errors
    /// See [`mint_batch`].
    pub fn generate_batch(&self, count: usize) -> Result<Vec<LexId>> {
        mint_batch(&self.config, &self.time, &self.rng, count)
    }
}

impl<T, R> MonotonicGenerator for BasicMonoGenerator<T, R>
where
    T: TimeSource,
    R: RandSource,
{
    type Err = crate::Error;

    fn generate(&self) -> Result<LexId, Self::Err> {
        self.generate()
    }

    fn config(&self) -> &LexConfig {
        self.config()
    }
}
