/// A source of uniformly distributed choices.
///
/// This abstraction allows you to plug in a real random source or a mocked
/// random source in tests. Implementations must pick every index in
/// `0..choices` with equal probability, independently across calls.
///
/// # Example
/// ```
/// use lexid::RandSource;
///
/// struct AlwaysFirst;
/// impl RandSource for AlwaysFirst {
///     fn pick(&self, _choices: usize) -> usize {
///         0
///     }
/// }
///
/// assert_eq!(AlwaysFirst.pick(37), 0);
/// ```
pub trait RandSource {
    /// Returns an index in `0..choices`. `choices` is never zero.
    fn pick(&self, choices: usize) -> usize;
}

impl<R: RandSource + ?Sized> RandSource for &R {
    fn pick(&self, choices: usize) -> usize {
        (**self).pick(choices)
    }
}
