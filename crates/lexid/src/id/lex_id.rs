use alloc::string::String;
use core::{borrow::Borrow, convert::Infallible, fmt, str::FromStr};

/// A fixed-length, sortable identifier: an encoded timestamp prefix followed
/// by a random (and, within one millisecond, incremented) suffix.
///
/// The prefix/suffix split is purely logical and depends on the configuration
/// that produced the identifier; see [`LexConfig::timestamp_of`].
///
/// `Ord` compares the underlying bytes. For ASCII-ordered alphabets (such as
/// the default) that is the same as numeral order; otherwise use
/// [`Alphabet::compare`].
///
/// [`LexConfig::timestamp_of`]: crate::LexConfig::timestamp_of
/// [`Alphabet::compare`]: crate::Alphabet::compare
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LexId(String);

impl LexId {
    /// Wraps an existing string without validating it against any alphabet.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Length in bytes.
    ///
    /// Equal to the number of symbols for identifiers valid under an
    /// alphabet, since alphabet symbols are ASCII.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Splits into `(prefix, suffix)` after `time_length` symbols.
    ///
    /// If `time_length` is past the end (or not on a char boundary) the whole
    /// identifier is returned as the prefix.
    pub fn split_at(&self, time_length: usize) -> (&str, &str) {
        self.0
            .split_at_checked(time_length)
            .unwrap_or((self.0.as_str(), ""))
    }
}

impl fmt::Display for LexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for LexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LexId").field(&self.0).finish()
    }
}

impl FromStr for LexId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<String> for LexId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<LexId> for String {
    fn from(id: LexId) -> Self {
        id.0
    }
}

impl AsRef<str> for LexId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for LexId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for LexId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for LexId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<String> for LexId {
    fn eq(&self, other: &String) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn split_at_separates_prefix_and_suffix() {
        let id = LexId::new("0gzfy0hpvbcojf7hx");
        assert_eq!(id.split_at(9), ("0gzfy0hpv", "bcojf7hx"));
        assert_eq!(id.split_at(40), ("0gzfy0hpvbcojf7hx", ""));
    }

    #[test]
    fn ordering_is_byte_order() {
        let a: LexId = "0gzfy0hpv0000000z".parse().unwrap();
        let b = LexId::new("0gzfy0hpv000000_0");
        assert!(a < b);
        assert_eq!(a.to_string(), "0gzfy0hpv0000000z");
        assert_eq!(a, "0gzfy0hpv0000000z");
    }

    #[test]
    fn compares_against_owned_strings() {
        let id = LexId::new("0gzfy0hpvbcojf7hx");
        assert_eq!(id, String::from("0gzfy0hpvbcojf7hx"));
        assert_ne!(id, String::from("0gzfy0hpvbcojf7hy"));
    }

    #[test]
    fn len_counts_bytes() {
        assert_eq!(LexId::new("0gzfy0hpv").len(), 9);
        assert_eq!(LexId::new("0gzf€").len(), 7);
    }
}
