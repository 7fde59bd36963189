use crate::{LexConfig, LexId, RandSource, Result};

/// The memory of a monotonic generator.
///
/// Transitions are computed by [`Self::next_state`] without touching `self`,
/// so a failed step leaves the stored state exactly as it was.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum GeneratorState {
    /// Nothing generated yet.
    #[default]
    Uninitialized,
    /// The last identifier handed out and the millisecond it was issued in.
    Active { last_timestamp: u64, last_id: LexId },
}

impl GeneratorState {
    /// Computes the state after generating at time `now`, together with the
    /// identifier to return.
    ///
    /// - Same millisecond as the last call: increment the last identifier.
    /// - Anything else, including a clock that moved backwards: mint fresh.
    ///
    /// # Errors
    /// Propagates failures from [`LexConfig::mint`] and
    /// [`LexConfig::advance`].
    pub fn next_state<R>(&self, now: u64, config: &LexConfig, rng: &R) -> Result<(Self, LexId)>
    where
        R: RandSource + ?Sized,
    {
        let id = match self {
            Self::Active {
                last_timestamp,
                last_id,
            } if *last_timestamp == now => config.advance(last_id)?,
            Self::Active { last_timestamp, .. } if now < *last_timestamp => {
                Self::cold_clock_behind(now, *last_timestamp);
                config.mint(now, rng)?
            }
            Self::Active { .. } | Self::Uninitialized => config.mint(now, rng)?,
        };

        let next = Self::Active {
            last_timestamp: now,
            last_id: id.clone(),
        };
        Ok((next, id))
    }

    pub const fn last_timestamp(&self) -> Option<u64> {
        match self {
            Self::Active { last_timestamp, .. } => Some(*last_timestamp),
            Self::Uninitialized => None,
        }
    }

    pub const fn last_id(&self) -> Option<&LexId> {
        match self {
            Self::Active { last_id, .. } => Some(last_id),
            Self::Uninitialized => None,
        }
    }

    #[cold]
    #[inline(never)]
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn cold_clock_behind(now: u64, last_timestamp: u64) {
        #[cfg(feature = "tracing")]
        tracing::debug!(now, last_timestamp, "clock moved backwards, minting fresh id");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    struct MinRand;
    impl RandSource for MinRand {
        fn pick(&self, _choices: usize) -> usize {
            0
        }
    }

    #[test]
    fn uninitialized_mints_fresh() {
        let config = LexConfig::default();
        let (state, id) = GeneratorState::Uninitialized
            .next_state(1_707_383_186_568, &config, &MinRand)
            .unwrap();
        assert_eq!(id, "0gzfy0hpv00000000");
        assert_eq!(state.last_timestamp(), Some(1_707_383_186_568));
        assert_eq!(state.last_id(), Some(&id));
    }

    #[test]
    fn same_millisecond_increments() {
        let config = LexConfig::default();
        let state = GeneratorState::Active {
            last_timestamp: 7,
            last_id: LexId::new("00000000700000000"),
        };
        let (_, id) = state.next_state(7, &config, &MinRand).unwrap();
        assert_eq!(id, "00000000700000001");
    }

    #[test]
    fn earlier_millisecond_mints_fresh() {
        let config = LexConfig::default();
        let state = GeneratorState::Active {
            last_timestamp: 8,
            last_id: LexId::new("0000000080000000z"),
        };
        let (next, id) = state.next_state(7, &config, &MinRand).unwrap();
        assert_eq!(id, "00000000700000000");
        assert_eq!(next.last_timestamp(), Some(7));
    }

    #[test]
    fn failed_increment_reports_error() {
        let config = LexConfig::default();
        let state = GeneratorState::Active {
            last_timestamp: 7,
            last_id: LexId::new("zzzzzzzzzzzzzzzzz"),
        };
        assert_eq!(
            state.next_state(7, &config, &MinRand).unwrap_err(),
            Error::Overflow
        );
    }
}
