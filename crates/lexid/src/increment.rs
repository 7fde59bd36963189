use crate::{Alphabet, Error, Result};
use alloc::string::String;
use core::iter;

/// Returns the lexicographically next string over `alphabet`.
///
/// The whole input is treated as one numeral and incremented by one: trailing
/// maximum symbols roll over to the zero symbol and the carry moves left until
/// it lands on a non-maximal symbol. The input is never modified.
///
/// Only the positions the carry visits are validated, so a foreign character
/// to the left of the first non-maximal symbol goes unnoticed.
///
/// # Errors
/// - [`Error::InvalidSymbol`] for a foreign character on the carry path
/// - [`Error::Overflow`] if every symbol is already the maximum
///
/// # Example
/// ```
/// use lexid::{Alphabet, increment};
///
/// let next = increment("0gzfy0hpvbcojf7hx", &Alphabet::DEFAULT).unwrap();
/// assert_eq!(next, "0gzfy0hpvbcojf7hy");
///
/// let carried = increment("0az", &Alphabet::DEFAULT).unwrap();
/// assert_eq!(carried, "0b0");
/// ```
pub fn increment(id: &str, alphabet: &Alphabet) -> Result<String> {
    increment_above(id, alphabet, 0)
}

/// Like [`increment`], but the carry never reaches positions below `floor`.
///
/// Positions `0..floor` are left untouched. When every position at or above
/// `floor` is already maximal the call fails instead of carrying further.
///
/// # Errors
/// - [`Error::InvalidSymbol`] for a foreign character on the carry path
/// - [`Error::Overflow`] if `floor` is zero and every symbol is maximal
/// - [`Error::SuffixExhausted`] if `floor` is non-zero and every symbol from
///   `floor` onward is maximal
pub fn increment_above(id: &str, alphabet: &Alphabet, floor: usize) -> Result<String> {
    let bytes = id.as_bytes();
    let max = alphabet.max();

    for index in (floor..bytes.len()).rev() {
        let position = alphabet.position_in(id, index)?;
        if bytes[index] == max {
            continue;
        }

        // `index` holds an ASCII symbol, so it is a char boundary.
        let mut out = String::with_capacity(bytes.len());
        out.push_str(&id[..index]);
        out.push(char::from(alphabet.symbol(usize::from(position) + 1)));
        out.extend(iter::repeat_n(
            char::from(alphabet.zero()),
            bytes.len() - index - 1,
        ));
        return Ok(out);
    }

    if floor == 0 {
        Err(Error::Overflow)
    } else {
        Err(Error::SuffixExhausted)
    }
}
