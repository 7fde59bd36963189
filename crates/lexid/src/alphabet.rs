use crate::{Error, Result};
use core::{cmp::Ordering, fmt};

/// The default symbol set: digits, underscore, then lowercase letters.
///
/// Every symbol sorts above its predecessor in ASCII, so plain string
/// comparison agrees with numeral order.
///
/// ⚠️ Changing the order of an alphabet changes the meaning of every
/// identifier previously produced with it. Never change it for persisted data.
pub const DEFAULT_ALPHABET: &str = "0123456789_abcdefghijklmnopqrstuvwxyz";

const NO_VALUE: u8 = 255;

/// Reasons an [`Alphabet`] can be rejected at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum AlphabetError {
    /// Fewer than two symbols cannot form a numeral system.
    TooShort { len: usize },
    /// Only ASCII symbols are supported.
    NonAscii { byte: u8, index: usize },
    /// A symbol appears more than once.
    Duplicate { symbol: char, index: usize },
}

impl fmt::Display for AlphabetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort { len } => write!(f, "alphabet too short: {len} symbols"),
            Self::NonAscii { byte, index } => {
                write!(f, "non-ascii byte {byte:#04x} at index {index}")
            }
            Self::Duplicate { symbol, index } => {
                write!(f, "duplicate symbol {symbol:?} at index {index}")
            }
        }
    }
}

impl core::error::Error for AlphabetError {}

/// An ordered set of distinct ASCII symbols.
///
/// The position of a symbol is both its numeral value and its sort rank:
/// position 0 is the zero symbol, the last position is the maximum symbol.
#[derive(Clone)]
pub struct Alphabet {
    symbols: &'static str,
    lookup: [u8; 256],
}

impl Alphabet {
    /// The alphabet built from [`DEFAULT_ALPHABET`].
    pub const DEFAULT: Self = match Self::new(DEFAULT_ALPHABET) {
        Ok(alphabet) => alphabet,
        Err(_) => panic!("default alphabet must be valid"),
    };

    /// Builds an alphabet, validating that the symbols are distinct ASCII
    /// characters and that there are at least two of them.
    ///
    /// # Errors
    /// - [`AlphabetError::TooShort`] for fewer than two symbols
    /// - [`AlphabetError::NonAscii`] for any byte above `0x7F`
    /// - [`AlphabetError::Duplicate`] for a repeated symbol
    ///
    /// # Example
    /// ```
    /// use lexid::Alphabet;
    ///
    /// let hex = Alphabet::new("0123456789abcdef").unwrap();
    /// assert_eq!(hex.base(), 16);
    /// assert!(Alphabet::new("aa").is_err());
    /// ```
    pub const fn new(symbols: &'static str) -> Result<Self, AlphabetError> {
        let bytes = symbols.as_bytes();
        let len = bytes.len();
        if len < 2 {
            return Err(AlphabetError::TooShort { len });
        }

        let mut lookup = [NO_VALUE; 256];
        let mut i = 0;
        while i < len {
            let b = bytes[i];
            if !b.is_ascii() {
                return Err(AlphabetError::NonAscii { byte: b, index: i });
            }
            if lookup[b as usize] != NO_VALUE {
                return Err(AlphabetError::Duplicate {
                    symbol: b as char,
                    index: i,
                });
            }
            // ASCII bounds the length to 128, so the position fits in a u8.
            lookup[b as usize] = i as u8;
            i += 1;
        }

        Ok(Self { symbols, lookup })
    }

    /// The numeral base, i.e. the number of symbols.
    #[inline]
    pub const fn base(&self) -> usize {
        self.symbols.len()
    }

    /// The symbols in order.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.symbols
    }

    /// The symbol with value zero (position 0).
    #[inline]
    pub const fn zero(&self) -> u8 {
        self.symbols.as_bytes()[0]
    }

    /// The symbol with the largest value.
    #[inline]
    pub const fn max(&self) -> u8 {
        self.symbols.as_bytes()[self.symbols.len() - 1]
    }

    /// The symbol at `position`.
    ///
    /// # Panics
    /// Panics if `position >= self.base()`.
    #[inline]
    pub const fn symbol(&self, position: usize) -> u8 {
        self.symbols.as_bytes()[position]
    }

    /// The position of `byte`, or `None` if it is not part of the alphabet.
    #[inline]
    pub const fn position(&self, byte: u8) -> Option<u8> {
        match self.lookup[byte as usize] {
            NO_VALUE => None,
            pos => Some(pos),
        }
    }

    /// Looks up the byte at `index` of `input`, reporting an
    /// [`Error::InvalidSymbol`] if it is foreign.
    #[inline]
    pub(crate) fn position_in(&self, input: &str, index: usize) -> Result<u8> {
        self.position(input.as_bytes()[index])
            .ok_or_else(|| invalid_symbol(input, index))
    }

    /// Checks that every character of `input` belongs to this alphabet.
    ///
    /// # Errors
    /// Returns [`Error::InvalidSymbol`] for the first foreign character.
    pub fn validate(&self, input: &str) -> Result<()> {
        for index in 0..input.len() {
            self.position_in(input, index)?;
        }
        Ok(())
    }

    /// Orders two strings by symbol position, i.e. numeral order for
    /// equal-length inputs.
    ///
    /// A proper prefix sorts before the longer string.
    ///
    /// # Errors
    /// Returns [`Error::InvalidSymbol`] if either input holds a foreign
    /// character.
    pub fn compare(&self, a: &str, b: &str) -> Result<Ordering> {
        self.validate(a)?;
        self.validate(b)?;
        for (&x, &y) in a.as_bytes().iter().zip(b.as_bytes()) {
            let ord = self.lookup[x as usize].cmp(&self.lookup[y as usize]);
            if ord != Ordering::Equal {
                return Ok(ord);
            }
        }
        Ok(a.len().cmp(&b.len()))
    }

    /// Whether ASCII byte order agrees with symbol order.
    ///
    /// When it does, `Ord` on identifier strings is numeral order and no
    /// call to [`Self::compare`] is needed.
    pub fn is_ascii_ordered(&self) -> bool {
        self.symbols.as_bytes().windows(2).all(|w| w[0] < w[1])
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl PartialEq for Alphabet {
    fn eq(&self, other: &Self) -> bool {
        self.symbols == other.symbols
    }
}

impl Eq for Alphabet {}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Alphabet").field(&self.symbols).finish()
    }
}

/// Builds an [`Error::InvalidSymbol`] for the character covering byte
/// `index`, which may sit inside a multi-byte sequence.
pub(crate) fn invalid_symbol(input: &str, index: usize) -> Error {
    let (index, symbol) = input
        .char_indices()
        .take_while(|&(start, _)| start <= index)
        .last()
        .unwrap_or((index, char::REPLACEMENT_CHARACTER));
    Error::InvalidSymbol { symbol, index }
}
