use crate::{
    Alphabet, LexId, RANDOM_LENGTH, RandSource, Result, TimestampCodec, increment_above,
    random_suffix,
};
use alloc::string::String;

/// What happens when an increment carries out of the random suffix.
///
/// The increment engine treats the whole identifier as one numeral, so a long
/// enough carry chain reaches the timestamp prefix. The prefix then no longer
/// encodes a captured timestamp, although ordering is still preserved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CarryPolicy {
    /// Let the carry continue into the prefix.
    #[default]
    Spill,
    /// Fail with [`Error::SuffixExhausted`] instead of touching the prefix.
    ///
    /// [`Error::SuffixExhausted`]: crate::Error::SuffixExhausted
    Confine,
}

/// Layout and alphabet shared by every identifier a generator produces.
///
/// All values are fixed at construction.
///
/// # Example
/// ```
/// use lexid::{Alphabet, CarryPolicy, LexConfig};
///
/// let config = LexConfig::new(Alphabet::DEFAULT, 9, 12)
///     .unwrap()
///     .with_carry_policy(CarryPolicy::Confine);
/// assert_eq!(config.id_length(), 21);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexConfig {
    timestamp: TimestampCodec,
    random_length: usize,
    carry: CarryPolicy,
}

impl LexConfig {
    /// # Errors
    /// Returns [`Error::InvalidTimeLength`] if `time_length` is zero.
    ///
    /// [`Error::InvalidTimeLength`]: crate::Error::InvalidTimeLength
    pub fn new(alphabet: Alphabet, time_length: usize, random_length: usize) -> Result<Self> {
        Ok(Self {
            timestamp: TimestampCodec::new(alphabet, time_length)?,
            random_length,
            carry: CarryPolicy::default(),
        })
    }

    #[must_use]
    pub const fn with_carry_policy(mut self, carry: CarryPolicy) -> Self {
        self.carry = carry;
        self
    }

    pub const fn alphabet(&self) -> &Alphabet {
        self.timestamp.alphabet()
    }

    pub const fn timestamp_codec(&self) -> &TimestampCodec {
        &self.timestamp
    }

    pub const fn time_length(&self) -> usize {
        self.timestamp.width()
    }

    pub const fn random_length(&self) -> usize {
        self.random_length
    }

    /// Total length of a freshly minted identifier.
    pub const fn id_length(&self) -> usize {
        self.time_length() + self.random_length
    }

    pub const fn carry_policy(&self) -> CarryPolicy {
        self.carry
    }

    pub const fn max_timestamp(&self) -> u64 {
        self.timestamp.max_timestamp()
    }

    /// Encodes `timestamp` as a fixed-width prefix.
    ///
    /// # Errors
    /// See [`TimestampCodec::encode`].
    pub fn encode_timestamp(&self, timestamp: u64) -> Result<String> {
        self.timestamp.encode(timestamp)
    }

    /// Decodes the timestamp prefix of `id`.
    ///
    /// After a carry has spilled into the prefix this is no longer a real
    /// captured time.
    ///
    /// # Errors
    /// See [`TimestampCodec::decode`].
    pub fn timestamp_of(&self, id: &LexId) -> Result<u64> {
        let (prefix, _) = id.split_at(self.time_length());
        self.timestamp.decode(prefix)
    }

    /// Mints a fresh identifier: the encoded `timestamp` followed by
    /// [`Self::random_length`] random symbols.
    ///
    /// # Errors
    /// Returns [`Error::TimestampOutOfRange`] if `timestamp` does not fit in
    /// the prefix.
    ///
    /// [`Error::TimestampOutOfRange`]: crate::Error::TimestampOutOfRange
    pub fn mint<R>(&self, timestamp: u64, rng: &R) -> Result<LexId>
    where
        R: RandSource + ?Sized,
    {
        self.mint_with_random_length(timestamp, rng, self.random_length)
    }

    /// Like [`Self::mint`] with a one-off suffix length.
    ///
    /// # Errors
    /// Returns [`Error::TimestampOutOfRange`] if `timestamp` does not fit in
    /// the prefix.
    ///
    /// [`Error::TimestampOutOfRange`]: crate::Error::TimestampOutOfRange
    pub fn mint_with_random_length<R>(
        &self,
        timestamp: u64,
        rng: &R,
        random_length: usize,
    ) -> Result<LexId>
    where
        R: RandSource + ?Sized,
    {
        let mut id = self.timestamp.encode(timestamp)?;
        id.push_str(&random_suffix(random_length, self.alphabet(), rng));
        Ok(LexId::from(id))
    }

    /// Returns the identifier immediately after `id`, honouring the
    /// [`CarryPolicy`].
    ///
    /// # Errors
    /// - [`Error::InvalidSymbol`] for a foreign character on the carry path
    /// - [`Error::Overflow`] when every symbol is maximal
    /// - [`Error::SuffixExhausted`] under [`CarryPolicy::Confine`] when the
    ///   suffix is all maximal symbols
    ///
    /// [`Error::InvalidSymbol`]: crate::Error::InvalidSymbol
    /// [`Error::Overflow`]: crate::Error::Overflow
    /// [`Error::SuffixExhausted`]: crate::Error::SuffixExhausted
    pub fn advance(&self, id: &LexId) -> Result<LexId> {
        let floor = match self.carry {
            CarryPolicy::Spill => 0,
            CarryPolicy::Confine => self.time_length(),
        };
        let next = increment_above(id.as_str(), self.alphabet(), floor)?;

        #[cfg(feature = "tracing")]
        {
            let tl = self.time_length();
            if next.as_bytes().get(..tl) != id.as_str().as_bytes().get(..tl) {
                tracing::warn!(previous = %id, next = %next, "carry spilled into timestamp prefix");
            }
        }

        Ok(LexId::from(next))
    }
}

impl Default for LexConfig {
    fn default() -> Self {
        Self {
            timestamp: TimestampCodec::default(),
            random_length: RANDOM_LENGTH,
            carry: CarryPolicy::default(),
        }
    }
}
