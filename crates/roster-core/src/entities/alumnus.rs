use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A person whose fellowship term has concluded.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default)]
pub struct Alumnus {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub cohort: Option<String>,
    /// Fellowship programs the alumnus went through (multi-valued remotely).
    pub fellow_types: Vec<String>,
    pub office_served: Option<String>,
    pub chamber: Option<String>,
    pub party: Option<String>,
    pub current_role: Option<String>,
    pub current_org: Option<String>,
    /// Employment sector, e.g. `Government`, `Private`, `Policy/Think Tank`.
    pub sector: Option<String>,
    pub location: Option<String>,
    pub linkedin: Option<String>,
    /// `YYYY-MM-DD`; `None` means never engaged since the fellowship.
    pub last_engaged: Option<String>,
    pub engagement_notes: Option<String>,
    pub notes: Option<String>,
    pub prior_role: Option<String>,
    pub education: Option<String>,
}
