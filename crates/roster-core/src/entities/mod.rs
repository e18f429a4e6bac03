//! Record structs for the roster.
//!
//! Every field except `id` and `name` is optional: a value the source did
//! not provide is `None`, never an empty string. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema`.

mod alumnus;
mod check_in;
mod fellow;
mod status_report;

pub use alumnus::Alumnus;
pub use check_in::CheckIn;
pub use fellow::Fellow;
pub use status_report::StatusReport;

/// Collapse blank text to `None`.
///
/// Record sources use this at their boundary so that "absent" and "empty"
/// mean the same thing everywhere downstream.
#[must_use]
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}
