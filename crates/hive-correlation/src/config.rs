//! # Correlation Configuration
//!
//! Tuning knobs for the watch loop. Timing is configured per engine, not
//! per call: every watch issued by one engine shares the same cadence.

use serde::{Deserialize, Serialize};

/// Correlation engine configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CorrelationConfig {
    /// Seconds between poll rounds. The engine clamps this to a one
    /// second floor to bound query rate.
    pub poll_interval_secs: u64,

    /// Seconds before an unmatched watch resolves as timed out.
    pub watch_timeout_secs: u64,
}

impl Default for CorrelationConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: 10,
            watch_timeout_secs: 120,
        }
    }
}

impl CorrelationConfig {
    /// Create a config for testing (tight timing).
    pub fn for_testing() -> Self {
        Self {
            poll_interval_secs: 1,
            watch_timeout_secs: 10,
        }
    }
}
