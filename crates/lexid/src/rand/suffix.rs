use crate::{Alphabet, RandSource};
use alloc::string::String;

/// Default length of the random suffix, in symbols.
pub const RANDOM_LENGTH: usize = 8;

/// Produces `length` symbols, each drawn independently from `alphabet`.
///
/// With the default alphabet and [`RANDOM_LENGTH`], the suffix space holds
/// 37^8 (about 3.5e12) values, keeping the chance of a collision between two
/// fresh identifiers minted in the same millisecond negligible.
pub fn random_suffix<R>(length: usize, alphabet: &Alphabet, rng: &R) -> String
where
    R: RandSource + ?Sized,
{
    (0..length)
        .map(|_| char::from(alphabet.symbol(rng.pick(alphabet.base()))))
        .collect()
}
