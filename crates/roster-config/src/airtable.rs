//! Airtable connection settings.

use serde::{Deserialize, Serialize};

fn default_fellows_table() -> String {
    "Fellows".to_string()
}

fn default_alumni_table() -> String {
    "Alumni".to_string()
}

fn default_checkins_table() -> String {
    "Check-ins".to_string()
}

fn default_status_reports_table() -> String {
    "Status Reports".to_string()
}

fn default_base_url() -> String {
    "https://api.airtable.com/v0".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AirtableConfig {
    /// Personal access token, sent as a bearer token.
    #[serde(default)]
    pub api_key: String,

    /// Base id (`app...`).
    #[serde(default)]
    pub base_id: String,

    #[serde(default = "default_fellows_table")]
    pub fellows_table: String,

    #[serde(default = "default_alumni_table")]
    pub alumni_table: String,

    #[serde(default = "default_checkins_table")]
    pub checkins_table: String,

    #[serde(default = "default_status_reports_table")]
    pub status_reports_table: String,

    /// API root. Overridden in tests to point at a local server.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for AirtableConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_id: String::new(),
            fellows_table: default_fellows_table(),
            alumni_table: default_alumni_table(),
            checkins_table: default_checkins_table(),
            status_reports_table: default_status_reports_table(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl AirtableConfig {
    /// Check if both credentials needed for remote access are present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty() && !self.base_id.is_empty()
    }
}
