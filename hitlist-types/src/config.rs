//! Configuration shared by the orchestrator.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Global configuration for the `Hitlist` orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HitlistConfig {
    /// Upper bound for each individual provider call (chart fetch or lookup).
    pub provider_timeout: Duration,
    /// Number of chart entries enriched concurrently.
    ///
    /// `1` enriches strictly one entry after another. Output order is rank
    /// order for any value.
    pub max_in_flight: usize,
}

impl Default for HitlistConfig {
    fn default() -> Self {
        Self {
            provider_timeout: Duration::from_secs(10),
            max_in_flight: 1,
        }
    }
}
