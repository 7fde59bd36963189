use crate::{TimeSource, UNIX_EPOCH};
use core::time::Duration;
use std::time::SystemTime;

/// A time source that reads the system wall clock on every call, offset from
/// a user-defined epoch.
///
/// Clock adjustments (NTP corrections, manual changes) are passed through
/// as-is. A clock set before the epoch reads as 0.
#[derive(Clone, Copy, Debug)]
pub struct WallClock {
    epoch: Duration,
}

impl Default for WallClock {
    /// Constructs a wall clock aligned to the [`UNIX_EPOCH`].
    fn default() -> Self {
        Self::with_epoch(UNIX_EPOCH)
    }
}

impl WallClock {
    /// Constructs a wall clock using `epoch` as the origin (t = 0), specified
    /// as a [`Duration`] since 1970-01-01 UTC.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use lexid::{TimeSource, WallClock};
    ///
    /// let clock = WallClock::with_epoch(Duration::from_millis(1_735_689_600_000));
    /// let since_2025: u64 = clock.current_millis();
    /// assert!(since_2025 < WallClock::default().current_millis());
    /// ```
    pub const fn with_epoch(epoch: Duration) -> Self {
        Self { epoch }
    }
}

impl TimeSource for WallClock {
    fn current_millis(&self) -> u64 {
        SystemTime::UNIX_EPOCH
            .elapsed()
            .ok()
            .and_then(|now| now.checked_sub(self.epoch))
            .map_or(0, |elapsed| {
                u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_in_the_future_reads_as_zero() {
        let clock = WallClock::with_epoch(Duration::from_millis(u64::MAX));
        assert_eq!(clock.current_millis(), 0);
    }

    #[test]
    fn default_clock_reads_unix_millis() {
        let before = SystemTime::UNIX_EPOCH.elapsed().unwrap().as_millis() as u64;
        let now = WallClock::default().current_millis();
        let after = SystemTime::UNIX_EPOCH.elapsed().unwrap().as_millis() as u64;
        assert!(before <= now && now <= after);
    }
}
