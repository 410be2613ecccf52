//! Timing configuration types.
//!
//! Default wait budget and the settle delay applied after expanding an item.

use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::constants::wait::{DEFAULT_POLL_INTERVAL_MS, DEFAULT_TIMEOUT_MS};

/// Defaults for waits that do not set their own timeout or poll interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct WaitConfig {
    /// Time in milliseconds a wait polls before it times out.
    /// Default: 10000
    pub timeout_ms: u64,

    /// Time in milliseconds between two polls of a wait condition.
    /// Values below 1 are treated as 1.
    /// Default: 100
    pub poll_interval_ms: u64,
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT_MS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

/// Expand configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ExpandConfig {
    /// Time in milliseconds to wait after an item has been expanded, giving
    /// the application time to populate it.
    /// Default: 0
    pub settle_ms: u64,
}

impl ExpandConfig {
    /// Returns the settle delay.
    #[must_use]
    pub const fn settle(&self) -> Duration { Duration::from_millis(self.settle_ms) }
}
