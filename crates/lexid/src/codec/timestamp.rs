use crate::{Alphabet, Error, Result, decode, encode_padded};
use alloc::string::String;

/// Default width of the timestamp prefix, in symbols.
pub const TIME_LENGTH: usize = 9;

/// Fixed-width, left-padded encoding of millisecond timestamps.
///
/// The width bounds the representable range to `base^width - 1`. Encoding a
/// timestamp beyond that fails instead of silently producing a wider prefix,
/// which would break the fixed-length layout of every identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimestampCodec {
    alphabet: Alphabet,
    width: usize,
    max: u64,
}

impl TimestampCodec {
    /// Creates a codec producing `width`-symbol prefixes over `alphabet`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidTimeLength`] if `width` is zero.
    pub fn new(alphabet: Alphabet, width: usize) -> Result<Self> {
        if width == 0 {
            return Err(Error::InvalidTimeLength { len: width });
        }
        let max = u32::try_from(width)
            .ok()
            .and_then(|exp| (alphabet.base() as u128).checked_pow(exp))
            .and_then(|capacity| u64::try_from(capacity - 1).ok())
            .unwrap_or(u64::MAX);
        Ok(Self {
            alphabet,
            width,
            max,
        })
    }

    /// The alphabet the prefix is written in.
    pub const fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Number of symbols in every encoded prefix.
    pub const fn width(&self) -> usize {
        self.width
    }

    /// The largest timestamp that fits in [`Self::width`] symbols.
    pub const fn max_timestamp(&self) -> u64 {
        self.max
    }

    /// Encodes `timestamp` as exactly [`Self::width`] symbols.
    ///
    /// # Errors
    /// Returns [`Error::TimestampOutOfRange`] if the timestamp needs more
    /// symbols than the configured width.
    ///
    /// # Example
    /// ```
    /// use lexid::TimestampCodec;
    ///
    /// let codec = TimestampCodec::default();
    /// assert_eq!(codec.encode(0).unwrap(), "000000000");
    /// assert_eq!(codec.encode(1_707_383_186_568).unwrap(), "0gzfy0hpv");
    /// ```
    pub fn encode(&self, timestamp: u64) -> Result<String> {
        if timestamp > self.max {
            return Err(Error::TimestampOutOfRange {
                timestamp,
                max: self.max,
            });
        }
        Ok(encode_padded(
            u128::from(timestamp),
            &self.alphabet,
            self.width,
        ))
    }

    /// Decodes a prefix produced by [`Self::encode`].
    ///
    /// # Errors
    /// - [`Error::InvalidSymbol`] for a character outside the alphabet
    /// - [`Error::DecodeOverflow`] if the value does not fit in a `u64`
    pub fn decode(&self, prefix: &str) -> Result<u64> {
        let value = decode(prefix, &self.alphabet)?;
        u64::try_from(value).map_err(|_| Error::DecodeOverflow { len: prefix.len() })
    }
}

impl Default for TimestampCodec {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::DEFAULT,
            width: TIME_LENGTH,
            // 37^9 - 1
            max: 129_961_739_795_076,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX_DOCUMENTED: u64 = (1 << 46) - 1;

    #[test]
    fn default_matches_computed_bounds() {
        let computed = TimestampCodec::new(Alphabet::DEFAULT, TIME_LENGTH).unwrap();
        assert_eq!(TimestampCodec::default(), computed);
        assert!(computed.max_timestamp() >= MAX_DOCUMENTED);
    }

    #[test]
    fn encode_is_always_fixed_width() {
        let codec = TimestampCodec::default();
        for ts in [0, 1, 36, 37, 1_735_689_600_000, MAX_DOCUMENTED, codec.max_timestamp()] {
            let prefix = codec.encode(ts).unwrap();
            assert_eq!(prefix.len(), TIME_LENGTH, "timestamp {ts} -> {prefix}");
            assert_eq!(codec.decode(&prefix).unwrap(), ts);
        }
        assert_eq!(codec.encode(MAX_DOCUMENTED).unwrap(), "j19fatwen");
        assert_eq!(codec.encode(codec.max_timestamp()).unwrap(), "zzzzzzzzz");
    }

    #[test]
    fn encode_rejects_timestamp_wider_than_prefix() {
        let codec = TimestampCodec::default();
        let max = codec.max_timestamp();
        assert_eq!(
            codec.encode(max + 1).unwrap_err(),
            Error::TimestampOutOfRange {
                timestamp: max + 1,
                max
            }
        );
    }

    #[test]
    fn new_rejects_zero_width() {
        assert_eq!(
            TimestampCodec::new(Alphabet::DEFAULT, 0).unwrap_err(),
            Error::InvalidTimeLength { len: 0 }
        );
    }

    #[test]
    fn wide_prefix_saturates_at_u64_max() {
        let codec = TimestampCodec::new(Alphabet::DEFAULT, 20).unwrap();
        assert_eq!(codec.max_timestamp(), u64::MAX);
        assert_eq!(codec.encode(u64::MAX).unwrap().len(), 20);
    }

    #[test]
    fn decode_rejects_values_beyond_u64() {
        let codec = TimestampCodec::new(Alphabet::DEFAULT, 20).unwrap();
        assert_eq!(
            codec.decode("zzzzzzzzzzzzzzzzzzzz").unwrap_err(),
            Error::DecodeOverflow { len: 20 }
        );
    }
}
