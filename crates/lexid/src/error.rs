use crate::AlphabetError;
use core::fmt;

/// A result type defaulting to the crate-wide [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All errors that `lexid` can emit.
///
/// Every fallible operation either fully succeeds or fails with one of these
/// variants; no partial result is ever observable.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Error {
    /// A character outside the configured alphabet was encountered while
    /// decoding or incrementing.
    ///
    /// This usually means data corruption or an identifier produced under a
    /// different alphabet.
    InvalidSymbol {
        /// The offending character.
        symbol: char,
        /// Byte offset of the character in the input.
        index: usize,
    },

    /// Increment ran off the left edge: every symbol was already the
    /// alphabet's maximum.
    Overflow,

    /// Increment would have carried into the timestamp prefix while the
    /// generator was configured with [`CarryPolicy::Confine`].
    ///
    /// [`CarryPolicy::Confine`]: crate::CarryPolicy::Confine
    SuffixExhausted,

    /// The timestamp does not fit in the configured prefix width.
    TimestampOutOfRange {
        /// The rejected timestamp.
        timestamp: u64,
        /// The largest timestamp the prefix can represent.
        max: u64,
    },

    /// A decoded value does not fit in its target integer: `u128` for
    /// [`decode`], `u64` for [`TimestampCodec::decode`].
    ///
    /// [`decode`]: crate::decode
    /// [`TimestampCodec::decode`]: crate::TimestampCodec::decode
    DecodeOverflow {
        /// Length of the input that overflowed.
        len: usize,
    },

    /// The timestamp prefix must be at least one symbol wide.
    InvalidTimeLength {
        /// The rejected length.
        len: usize,
    },

    /// The alphabet could not be constructed.
    Alphabet(AlphabetError),

    /// The generator state lock was **poisoned**.
    ///
    /// This occurs when a thread panics while holding the lock. When the
    /// `parking-lot` feature is enabled, mutexes do **not** poison, so this
    /// variant is not available.
    #[cfg_attr(docsrs, doc(cfg(all(feature = "std", not(feature = "parking-lot")))))]
    #[cfg(all(feature = "std", not(feature = "parking-lot")))]
    LockPoisoned,
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl core::error::Error for Error {}

impl From<AlphabetError> for Error {
    fn from(err: AlphabetError) -> Self {
        Self::Alphabet(err)
    }
}

#[cfg(all(feature = "std", not(feature = "parking-lot")))]
use crate::generator::{MutexGuard, PoisonError};
#[cfg(all(feature = "std", not(feature = "parking-lot")))]
impl<T> From<PoisonError<MutexGuard<'_, T>>> for Error {
    fn from(_: PoisonError<MutexGuard<'_, T>>) -> Self {
        Self::LockPoisoned
    }
}
