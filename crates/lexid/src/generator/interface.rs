use crate::{LexConfig, LexId, Result};
use core::fmt;

/// A minimal interface for stateful, monotonic identifier generators.
pub trait MonotonicGenerator {
    type Err: fmt::Debug;

    /// Returns the next identifier.
    ///
    /// Within one millisecond every result sorts strictly after the previous
    /// one; a new millisecond mints a fresh identifier.
    ///
    /// # Errors
    /// Implementation specific; see each generator.
    fn generate(&self) -> Result<LexId, Self::Err>;

    /// The layout every identifier from this generator follows.
    fn config(&self) -> &LexConfig;
}
