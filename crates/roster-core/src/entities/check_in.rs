use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A logged contact between program staff and a fellow.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default)]
pub struct CheckIn {
    pub id: String,
    /// Linked fellow record ids.
    pub fellow_ids: Vec<String>,
    pub date: Option<String>,
    pub check_in_type: Option<String>,
    pub notes: Option<String>,
    pub staff_member: Option<String>,
}

impl CheckIn {
    /// Whether this check-in is linked to the given fellow.
    #[must_use]
    pub fn concerns(&self, fellow_id: &str) -> bool {
        self.fellow_ids.iter().any(|id| id == fellow_id)
    }
}
