use crate::{
    Error, GeneratorState, LexConfig, LexId, MonotonicGenerator, RandSource, Result,
    TimeSource, generator::Mutex, mint_batch,
};
use alloc::{sync::Arc, vec::Vec};
#[cfg(feature = "tracing")]
use tracing::instrument;

/// A lock-based *monotonic* identifier generator suitable for multi-threaded
/// environments.
///
/// This generator wraps its state in an [`Arc<Mutex<_>>`], allowing safe
/// shared use across threads. Clones share the same state.
///
/// The clock is read while the lock is held, so the whole
/// read-decide-mutate step is one critical section: two callers can never
/// observe the same previous identifier, and a caller that read an older
/// millisecond can never commit after one that read a newer millisecond.
///
/// ## Features
/// - ✅ Thread-safe
/// - ✅ Probabilistically unique (no coordination required)
/// - ✅ Time-ordered (monotonically increasing per millisecond)
///
/// ## Recommended When
/// - You're in a multi-threaded environment
/// - You want a process-wide or per-service generator
///
/// ## See Also
/// - [`BasicMonoGenerator`]
///
/// [`BasicMonoGenerator`]: crate::BasicMonoGenerator
pub struct LockMonoGenerator<T, R>
where
    T: TimeSource,
    R: RandSource,
{
    config: Arc<LexConfig>,
    #[cfg(feature = "cache-padded")]
    state: Arc<crossbeam_utils::CachePadded<Mutex<GeneratorState>>>,
    #[cfg(not(feature = "cache-padded"))]
    state: Arc<Mutex<GeneratorState>>,
    time: T,
    rng: R,
}

impl<T, R> LockMonoGenerator<T, R>
where
    T: TimeSource,
    R: RandSource,
{
    /// Creates a new [`LockMonoGenerator`] with the default layout.
    ///
    /// # Parameters
    /// - `time`: A [`TimeSource`] used to retrieve the current timestamp
    /// - `rng`: A [`RandSource`] used to pick random suffix symbols
    ///
    /// # Example
    /// ```
    /// use lexid::{LockMonoGenerator, ThreadRandom, WallClock};
    ///
    /// let generator = LockMonoGenerator::new(WallClock::default(), ThreadRandom);
    /// let id = generator.generate().unwrap();
    /// assert_eq!(id.len(), 17);
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
            config: Arc::new(config),
            #[cfg(feature = "cache-padded")]
            state: Arc::new(crossbeam_utils::CachePadded::new(Mutex::new(state))),
            #[cfg(not(feature = "cache-padded"))]
            state: Arc::new(Mutex::new(state)),
            time,
            rng,
        }
    }

    pub fn config(&self) -> &LexConfig {
        &self.config
    }

    /// A snapshot of the current state.
    ///
    /// # Errors
    /// Returns [`Error::LockPoisoned`] if another thread panicked while
    /// holding the lock (std mutex only).
    pub fn state(&self) -> Result<GeneratorState, Error> {
        #[cfg(feature = "parking-lot")]
        let state = self.state.lock();
        #[cfg(not(feature = "parking-lot"))]
        let state = self.state.lock()?;

        Ok(state.clone())
    }

    /// Generates the next identifier.
    ///
    /// # Errors
    /// - [`Error::Overflow`] or [`Error::SuffixExhausted`] when the previous
    ///   identifier cannot be incremented
    /// - [`Error::TimestampOutOfRange`] when the clock is beyond the prefix
    ///   range
    /// - [`Error::LockPoisoned`] if the lock is poisoned (std mutex only)
    ///
    /// On error the state is left unchanged.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn generate(&self) -> Result<LexId, Error> {
        #[cfg(feature = "parking-lot")]
        let mut state = self.state.lock();
        #[cfg(not(feature = "parking-lot"))]
        let mut state = self.state.lock()?;

        let now = self.time.current_millis();
        let (next, id) = state.next_state(now, &self.config, &self.rng)?;
        *state = next;
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

impl<T, R> Clone for LockMonoGenerator<T, R>
where
    T: TimeSource + Clone,
    R: RandSource + Clone,
{
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            state: Arc::clone(&self.state),
            time: self.time.clone(),
            rng: self.rng.clone(),
        }
    }
}

impl<T, R> MonotonicGenerator for LockMonoGenerator<T, R>
where
    T: TimeSource,
    R: RandSource,
{
    type Err = Error;

    fn generate(&self) -> Result<LexId, Self::Err> {
        self.generate()
    }

    fn config(&self) -> &LexConfig {
        self.config()
    }
}
