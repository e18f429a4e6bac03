//! Monthly status-report schedule.

use serde::{Deserialize, Serialize};

fn default_end_month() -> String {
    "Sep 2026".to_string()
}

fn senior_end_month() -> String {
    "Nov 2026".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReportsConfig {
    /// Last required month (`"Mon YYYY"`) for fellows without an override.
    #[serde(default = "default_end_month")]
    pub default_end_month: String,

    /// Last required month for senior fellows.
    #[serde(default = "senior_end_month")]
    pub senior_end_month: String,
}

impl Default for ReportsConfig {
    fn default() -> Self {
        Self {
            default_end_month: default_end_month(),
            senior_end_month: senior_end_month(),
        }
    }
}
