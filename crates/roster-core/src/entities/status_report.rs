use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A fellow's monthly status report for one `Mon YYYY` month.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default)]
pub struct StatusReport {
    pub id: String,
    pub fellow_ids: Vec<String>,
    /// Reporting month label, e.g. `Jan 2026`.
    pub month: Option<String>,
    pub submitted: bool,
    pub date_submitted: Option<String>,
    pub notes: Option<String>,
}

impl StatusReport {
    #[must_use]
    pub fn concerns(&self, fellow_id: &str) -> bool {
        self.fellow_ids.iter().any(|id| id == fellow_id)
    }
}
