use crate::{LexConfig, LexId, RandSource, Result, TimeSource};
use alloc::vec::Vec;

/// Mints one fresh identifier at the current time.
///
/// No state is kept, so two calls in the same millisecond are not ordered
/// relative to each other.
///
/// # Errors
/// Returns [`Error::TimestampOutOfRange`] if the clock is beyond the prefix
/// range.
///
/// [`Error::TimestampOutOfRange`]: crate::Error::TimestampOutOfRange
pub fn mint_one<T, R>(config: &LexConfig, time: &T, rng: &R) -> Result<LexId>
where
    T: TimeSource + ?Sized,
    R: RandSource + ?Sized,
{
    config.mint(time.current_millis(), rng)
}

/// Like [`mint_one`] with a one-off suffix length.
///
/// # Errors
/// Returns [`Error::TimestampOutOfRange`] if the clock is beyond the prefix
/// range.
///
/// [`Error::TimestampOutOfRange`]: crate::Error::TimestampOutOfRange
pub fn mint_one_with_random_length<T, R>(
    config: &LexConfig,
    time: &T,
    rng: &R,
    random_length: usize,
) -> Result<LexId>
where
    T: TimeSource + ?Sized,
    R: RandSource + ?Sized,
{
    config.mint_with_random_length(time.current_millis(), rng, random_length)
}

/// Mints one fresh seed and returns the `count` identifiers that follow it.
///
/// The results are strictly increasing relative to each other and to the
/// seed, which is not itself returned. There is no coordination with any
/// generator or other batch.
///
/// # Errors
/// See [`mint_one`] and [`batch_from_seed`].
pub fn mint_batch<T, R>(config: &LexConfig, time: &T, rng: &R, count: usize) -> Result<Vec<LexId>>
where
    T: TimeSource + ?Sized,
    R: RandSource + ?Sized,
{
    let seed = mint_one(config, time, rng)?;
    batch_from_seed(config, &seed, count)
}

/// Applies [`LexConfig::advance`] `count` times starting from `seed`,
/// collecting every intermediate result.
///
/// `count == 0` yields an empty batch.
///
/// # Errors
/// Fails as a whole if any step fails; no partial batch is returned.
///
/// # Example
/// ```
/// use lexid::{LexConfig, LexId, batch_from_seed};
///
/// let seed = LexId::new("0gzfy0hpvbcojf7hx");
/// let batch = batch_from_seed(&LexConfig::default(), &seed, 3).unwrap();
/// assert_eq!(batch, ["0gzfy0hpvbcojf7hy", "0gzfy0hpvbcojf7hz", "0gzfy0hpvbcojf7i0"]);
/// ```
pub fn batch_from_seed(config: &LexConfig, seed: &LexId, count: usize) -> Result<Vec<LexId>> {
    let mut ids: Vec<LexId> = Vec::with_capacity(count);
    for _ in 0..count {
        let next = config.advance(ids.last().unwrap_or(seed))?;
        ids.push(next);
    }
    Ok(ids)
}
