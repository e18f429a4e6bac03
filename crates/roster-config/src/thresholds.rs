//! Day-count thresholds for the staleness and "ending soon" signals.

use serde::{Deserialize, Serialize};

const fn default_check_in_days() -> u32 {
    30
}

const fn default_ending_soon_days() -> u32 {
    90
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThresholdsConfig {
    /// Days without a check-in before a fellow needs one.
    #[serde(default = "default_check_in_days")]
    pub check_in_days: u32,

    /// Days before an end date at which a fellow counts as ending soon.
    #[serde(default = "default_ending_soon_days")]
    pub ending_soon_days: u32,
}

impl Default for ThresholdsConfig {
    fn default() -> Self {
        Self {
            check_in_days: default_check_in_days(),
            ending_soon_days: default_ending_soon_days(),
        }
    }
}
