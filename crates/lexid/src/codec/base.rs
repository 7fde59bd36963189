use crate::{Alphabet, Error, Result};
use alloc::string::String;
use core::iter;

/// Enough digits for `u128::MAX` in the smallest possible base (2).
const MAX_DIGITS: usize = 128;

/// Encodes `n` as a numeral over `alphabet`, most significant symbol first.
///
/// The output has no leading zero symbols, so its length varies with `n`;
/// zero encodes to the single zero symbol. Use [`encode_padded`] when a fixed
/// width is required.
///
/// # Example
/// ```
/// use lexid::{Alphabet, encode};
///
/// assert_eq!(encode(0, &Alphabet::DEFAULT), "0");
/// assert_eq!(encode(37, &Alphabet::DEFAULT), "10");
/// ```
pub fn encode(mut n: u128, alphabet: &Alphabet) -> String {
    let base = alphabet.base() as u128;
    let mut buf = [0_u8; MAX_DIGITS];
    let mut start = MAX_DIGITS;

    loop {
        start -= 1;
        buf[start] = alphabet.symbol((n % base) as usize);
        n /= base;
        if n == 0 {
            break;
        }
    }

    buf[start..].iter().copied().map(char::from).collect()
}

/// Encodes `n` and left-pads the result with the zero symbol up to `width`.
///
/// A numeral already wider than `width` is returned unpadded and untruncated.
pub fn encode_padded(n: u128, alphabet: &Alphabet, width: usize) -> String {
    let digits = encode(n, alphabet);
    let pad = width.saturating_sub(digits.len());

    let mut out = String::with_capacity(pad + digits.len());
    out.extend(iter::repeat_n(char::from(alphabet.zero()), pad));
    out.push_str(&digits);
    out
}

/// Decodes a numeral over `alphabet` back into an integer.
///
/// Leading zero symbols are insignificant and the empty string decodes to 0.
///
/// # Errors
/// - [`Error::InvalidSymbol`] if a character is not part of `alphabet`
/// - [`Error::DecodeOverflow`] if the value does not fit in a `u128`
///
/// # Example
/// ```
/// use lexid::{Alphabet, Error, decode};
///
/// assert_eq!(decode("10", &Alphabet::DEFAULT).unwrap(), 37);
/// assert!(matches!(
///     decode("0gzf!0000", &Alphabet::DEFAULT),
///     Err(Error::InvalidSymbol { symbol: '!', index: 4 })
/// ));
/// ```
pub fn decode(input: &str, alphabet: &Alphabet) -> Result<u128> {
    let base = alphabet.base() as u128;
    let mut acc = 0_u128;

    for index in 0..input.len() {
        let digit = alphabet.position_in(input, index)?;
        acc = acc
            .checked_mul(base)
            .and_then(|acc| acc.checked_add(u128::from(digit)))
            .ok_or(Error::DecodeOverflow { len: input.len() })?;
    }

    Ok(acc)
}
