//! Injectable sources of randomness and time
//!
//! Transitions never reach for ambient entropy or the wall clock directly, so
//! tests can script both.

use crate::consts::tracker_consts::{BREACH_PROBABILITY, TIMESTAMP_FORMAT};
use chrono::Utc;
use rand::{Rng, SeedableRng, rngs::StdRng};

#[cfg(test)]
use mockall::automock;

/// Random decisions taken while simulating an alert.
#[cfg_attr(test, automock)]
pub trait Entropy: Send {
    /// Index of the alert message to raise, in `0..len`.
    fn alert_index(&mut self, len: usize) -> usize;

    /// Whether this alert compromises the container seal.
    fn breach(&mut self) -> bool;
}

/// Source of event log timestamps.
#[cfg_attr(test, automock)]
pub trait Clock: Send {
    fn timestamp(&self) -> String;
}

/// [`Entropy`] backed by a seedable PRNG.
#[derive(Debug)]
pub struct RngEntropy {
    rng: StdRng,
}

impl RngEntropy {
    /// Seeded from the operating system.
    pub fn from_os() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic sequence for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Entropy for RngEntropy {
    fn alert_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }

    fn breach(&mut self) -> bool {
        self.rng.gen_bool(BREACH_PROBABILITY)
    }
}

/// UTC wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn timestamp(&self) -> String {
        Utc::now().format(TIMESTAMP_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Two generators with the same seed make the same decisions.
    fn test_seeded_entropy_is_reproducible() {
        let mut a = RngEntropy::seeded(42);
        let mut b = RngEntropy::seeded(42);

        for _ in 0..32 {
            assert_eq!(a.alert_index(3), b.alert_index(3));
            assert_eq!(a.breach(), b.breach());
        }
    }

    #[test]
    fn test_alert_index_in_range() {
        let mut entropy = RngEntropy::from_os();
        for _ in 0..100 {
            assert!(entropy.alert_index(3) < 3);
        }
        assert_eq!(entropy.alert_index(0), 0);
    }

    #[test]
    fn test_system_clock_format() {
        let stamp = SystemClock.timestamp();
        // YYYY-MM-DD HH:MM:SS
        assert_eq!(stamp.len(), 19);
        assert_eq!(&stamp[4..5], "-");
        assert_eq!(&stamp[10..11], " ");
        assert!(chrono::NaiveDateTime::parse_from_str(&stamp, TIMESTAMP_FORMAT).is_ok());
    }
}
