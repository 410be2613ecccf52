//! Named time periods and wait defaults.

use std::fmt;
use std::time::Duration;

use crate::config::WaitConfig;
use crate::core::constants::wait::{DEFAULT_POLL_INTERVAL_MS, DEFAULT_TIMEOUT_MS};

/// A named span of time used for timeouts and settle delays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimePeriod(Duration);

impl TimePeriod {
    pub const NONE: Self = Self::from_secs(0);
    pub const SHORT: Self = Self::from_secs(1);
    pub const MEDIUM: Self = Self::from_secs(5);
    pub const DEFAULT: Self = Self::from_secs(10);
    pub const LONG: Self = Self::from_secs(30);
    pub const VERY_LONG: Self = Self::from_secs(60);

    #[must_use]
    pub const fn from_secs(secs: u64) -> Self { Self(Duration::from_secs(secs)) }

    #[must_use]
    pub const fn from_millis(millis: u64) -> Self { Self(Duration::from_millis(millis)) }

    #[must_use]
    pub const fn duration(self) -> Duration { self.0 }

    #[must_use]
    pub const fn is_none(self) -> bool { self.0.is_zero() }
}

impl From<TimePeriod> for Duration {
    fn from(period: TimePeriod) -> Self { period.0 }
}

impl From<Duration> for TimePeriod {
    fn from(duration: Duration) -> Self { Self(duration) }
}

impl fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{:?}", self.0) }
}

/// Timeout and poll interval applied when a wait does not set its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitDefaults {
    pub timeout: Duration,
    pub interval: Duration,
}

impl Default for WaitDefaults {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
        }
    }
}

impl From<&WaitConfig> for WaitDefaults {
    fn from(config: &WaitConfig) -> Self {
        Self {
            timeout: Duration::from_millis(config.timeout_ms),
            interval: Duration::from_millis(config.poll_interval_ms).max(MIN_INTERVAL),
        }
    }
}

/// Shortest delay between two polls of a wait condition.
pub(crate) const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Blocks the calling thread for `period`. A zero period returns at once.
pub fn sleep(period: impl Into<Duration>) {
    let period = period.into();
    if !period.is_zero() {
        std::thread::sleep(period);
    }
}
