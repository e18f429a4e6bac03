use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::FellowStatus;

/// A person currently placed in an active fellowship term.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default)]
pub struct Fellow {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub fellow_type: Option<String>,
    pub party: Option<String>,
    pub office: Option<String>,
    pub chamber: Option<String>,
    pub linkedin: Option<String>,
    /// `YYYY-MM-DD`.
    pub start_date: Option<String>,
    /// `YYYY-MM-DD`.
    pub end_date: Option<String>,
    pub cohort: Option<String>,
    #[schemars(with = "Option<String>")]
    pub status: Option<FellowStatus>,
    /// `YYYY-MM-DD`; `None` means the fellow was never checked in with.
    pub last_check_in: Option<String>,
    pub prior_role: Option<String>,
    pub education: Option<String>,
    pub notes: Option<String>,
    pub requires_monthly_reports: bool,
    /// First day of the monthly reporting obligation, `YYYY-MM-DD`.
    pub report_start_date: Option<String>,
    /// Manual override of the last reporting month, e.g. `Aug 2026`.
    pub report_end_month: Option<String>,
}
