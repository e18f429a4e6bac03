//! Mapping between Airtable rows and roster records.
//!
//! Airtable addresses columns by their human-readable names. Reads tolerate
//! missing columns and odd value shapes: anything absent, blank or of an
//! unexpected type becomes `None`. Writes omit empty values.

use roster_core::entities::{Alumnus, CheckIn, Fellow, StatusReport, non_empty};
use roster_core::enums::FellowStatus;
use serde::Deserialize;
use serde_json::{Map, Value};

pub type Fields = Map<String, Value>;

/// Column names as they appear in the base.
pub mod column {
    pub const NAME: &str = "Name";
    pub const EMAIL: &str = "Email";
    pub const PHONE: &str = "Phone Number";
    pub const FELLOW_TYPE: &str = "Fellow Type";
    pub const PARTY: &str = "Party";
    pub const OFFICE: &str = "Office";
    pub const OFFICE_SERVED: &str = "Office Served";
    pub const CHAMBER: &str = "Chamber";
    pub const LINKEDIN: &str = "LinkedIn";
    pub const START_DATE: &str = "Start Date";
    pub const END_DATE: &str = "End Date";
    pub const COHORT: &str = "Cohort";
    pub const STATUS: &str = "Status";
    pub const LAST_CHECK_IN: &str = "Last Check-in";
    pub const PRIOR_ROLE: &str = "Prior Role";
    pub const EDUCATION: &str = "Education";
    pub const NOTES: &str = "Notes";
    pub const REQUIRES_MONTHLY_REPORTS: &str = "Requires Monthly Reports";
    pub const REPORT_START_DATE: &str = "Report Start Date";
    pub const REPORT_END_MONTH: &str = "Report End Month";
    pub const CURRENT_ROLE: &str = "Current Role";
    pub const CURRENT_ORG: &str = "Current Organization";
    pub const SECTOR: &str = "Sector";
    pub const LOCATION: &str = "Location";
    pub const LAST_ENGAGED: &str = "Last Engaged";
    pub const ENGAGEMENT_NOTES: &str = "Engagement Notes";
    pub const FELLOW: &str = "Fellow";
    pub const DATE: &str = "Date";
    pub const CHECK_IN_TYPE: &str = "Check-in Type";
    pub const STAFF_MEMBER: &str = "Staff Member";
    pub const MONTH: &str = "Month";
    pub const SUBMITTED: &str = "Submitted";
    pub const DATE_SUBMITTED: &str = "Date Submitted";
}

/// One row as returned by the REST API.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    pub id: String,
    #[serde(default)]
    pub fields: Fields,
}

/// One page of a list response. `offset` is present while more pages remain.
#[derive(Debug, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub records: Vec<RawRecord>,
    pub offset: Option<String>,
}

// ── Reads ──────────────────────────────────────────────────────────

/// A single-valued text column. Numbers are rendered as text and lists are
/// joined, so a cohort stored as a number or a one-item multi-select still
/// reads as a plain string.
fn text(fields: &Fields, column: &str) -> Option<String> {
    let raw = match fields.get(column)? {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .filter(|s| !s.trim().is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        _ => return None,
    };
    non_empty(Some(raw))
}

/// A multi-valued column (multi-select or linked records).
fn list(fields: &Fields, column: &str) -> Vec<String> {
    match fields.get(column) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .filter(|s| !s.trim().is_empty())
            .map(ToString::to_string)
            .collect(),
        Some(Value::String(s)) if !s.trim().is_empty() => vec![s.clone()],
        _ => Vec::new(),
    }
}

/// A checkbox column. Airtable omits unchecked boxes entirely.
fn flag(fields: &Fields, column: &str) -> bool {
    fields.get(column).and_then(Value::as_bool).unwrap_or(false)
}

#[must_use]
pub fn fellow_from_record(record: RawRecord) -> Fellow {
    let f = &record.fields;
    Fellow {
        name: text(f, column::NAME).unwrap_or_default(),
        email: text(f, column::EMAIL),
        phone: text(f, column::PHONE),
        fellow_type: text(f, column::FELLOW_TYPE),
        party: text(f, column::PARTY),
        office: text(f, column::OFFICE),
        chamber: text(f, column::CHAMBER),
        linkedin: text(f, column::LINKEDIN),
        start_date: text(f, column::START_DATE),
        end_date: text(f, column::END_DATE),
        cohort: text(f, column::COHORT),
        status: text(f, column::STATUS).map(|raw| FellowStatus::parse(&raw)),
        last_check_in: text(f, column::LAST_CHECK_IN),
        prior_role: text(f, column::PRIOR_ROLE),
        education: text(f, column::EDUCATION),
        notes: text(f, column::NOTES),
        requires_monthly_reports: flag(f, column::REQUIRES_MONTHLY_REPORTS),
        report_start_date: text(f, column::REPORT_START_DATE),
        report_end_month: text(f, column::REPORT_END_MONTH),
        id: record.id,
    }
}

#[must_use]
pub fn alumnus_from_record(record: RawRecord) -> Alumnus {
    let f = &record.fields;
    Alumnus {
        name: text(f, column::NAME).unwrap_or_default(),
        email: text(f, column::EMAIL),
        phone: text(f, column::PHONE),
        cohort: text(f, column::COHORT),
        fellow_types: list(f, column::FELLOW_TYPE),
        office_served: text(f, column::OFFICE_SERVED),
        chamber: text(f, column::CHAMBER),
        party: text(f, column::PARTY),
        current_role: text(f, column::CURRENT_ROLE),
        current_org: text(f, column::CURRENT_ORG),
        sector: text(f, column::SECTOR),
        location: text(f, column::LOCATION),
        linkedin: text(f, column::LINKEDIN),
        last_engaged: text(f, column::LAST_ENGAGED),
        engagement_notes: text(f, column::ENGAGEMENT_NOTES),
        notes: text(f, column::NOTES),
        prior_role: text(f, column::PRIOR_ROLE),
        education: text(f, column::EDUCATION),
        id: record.id,
    }
}

#[must_use]
pub fn check_in_from_record(record: RawRecord) -> CheckIn {
    let f = &record.fields;
    CheckIn {
        fellow_ids: list(f, column::FELLOW),
        date: text(f, column::DATE),
        check_in_type: text(f, column::CHECK_IN_TYPE),
        notes: text(f, column::NOTES),
        staff_member: text(f, column::STAFF_MEMBER),
        id: record.id,
    }
}

#[must_use]
pub fn status_report_from_record(record: RawRecord) -> StatusReport {
    let f = &record.fields;
    StatusReport {
        fellow_ids: list(f, column::FELLOW),
        month: text(f, column::MONTH),
        submitted: flag(f, column::SUBMITTED),
        date_submitted: text(f, column::DATE_SUBMITTED),
        notes: text(f, column::NOTES),
        id: record.id,
    }
}

// ── Writes ─────────────────────────────────────────────────────────

/// The select option a status is stored under. On-track fellows are
/// "Active" in the base.
#[must_use]
pub fn remote_status_label(status: &FellowStatus) -> &str {
    match status {
        FellowStatus::OnTrack => "Active",
        other => other.label(),
    }
}

fn put_text(fields: &mut Fields, column: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
        fields.insert(column.to_string(), Value::String(value.to_string()));
    }
}

fn put_list(fields: &mut Fields, column: &str, values: &[String]) {
    let items = values
        .iter()
        .filter(|v| !v.trim().is_empty())
        .map(|v| Value::String(v.clone()))
        .collect();
    fields.insert(column.to_string(), Value::Array(items));
}

/// Columns for a fellow create or update. Empty values and unchecked flags
/// are left out so an update never blanks a column.
#[must_use]
pub fn fellow_fields(fellow: &Fellow) -> Fields {
    let mut f = Fields::new();
    put_text(&mut f, column::NAME, Some(fellow.name.as_str()));
    put_text(&mut f, column::EMAIL, fellow.email.as_deref());
    put_text(&mut f, column::PHONE, fellow.phone.as_deref());
    put_text(&mut f, column::FELLOW_TYPE, fellow.fellow_type.as_deref());
    put_text(&mut f, column::PARTY, fellow.party.as_deref());
    put_text(&mut f, column::OFFICE, fellow.office.as_deref());
    put_text(&mut f, column::CHAMBER, fellow.chamber.as_deref());
    put_text(&mut f, column::LINKEDIN, fellow.linkedin.as_deref());
    put_text(&mut f, column::START_DATE, fellow.start_date.as_deref());
    put_text(&mut f, column::END_DATE, fellow.end_date.as_deref());
    put_text(&mut f, column::COHORT, fellow.cohort.as_deref());
    put_text(&mut f, column::STATUS, fellow.status.as_ref().map(remote_status_label));
    put_text(&mut f, column::LAST_CHECK_IN, fellow.last_check_in.as_deref());
    put_text(&mut f, column::PRIOR_ROLE, fellow.prior_role.as_deref());
    put_text(&mut f, column::EDUCATION, fellow.education.as_deref());
    put_text(&mut f, column::NOTES, fellow.notes.as_deref());
    if fellow.requires_monthly_reports {
        f.insert(column::REQUIRES_MONTHLY_REPORTS.to_string(), Value::Bool(true));
    }
    put_text(&mut f, column::REPORT_START_DATE, fellow.report_start_date.as_deref());
    put_text(&mut f, column::REPORT_END_MONTH, fellow.report_end_month.as_deref());
    f
}

/// Columns for an alumnus create or update. "Fellow Type" is always sent,
/// even when empty, so an update can clear it.
#[must_use]
pub fn alumnus_fields(alumnus: &Alumnus) -> Fields {
    let mut f = Fields::new();
    put_text(&mut f, column::NAME, Some(alumnus.name.as_str()));
    put_text(&mut f, column::EMAIL, alumnus.email.as_deref());
    put_text(&mut f, column::PHONE, alumnus.phone.as_deref());
    put_text(&mut f, column::COHORT, alumnus.cohort.as_deref());
    put_list(&mut f, column::FELLOW_TYPE, &alumnus.fellow_types);
    put_text(&mut f, column::OFFICE_SERVED, alumnus.office_served.as_deref());
    put_text(&mut f, column::CHAMBER, alumnus.chamber.as_deref());
    put_text(&mut f, column::PARTY, alumnus.party.as_deref());
    put_text(&mut f, column::CURRENT_ROLE, alumnus.current_role.as_deref());
    put_text(&mut f, column::CURRENT_ORG, alumnus.current_org.as_deref());
    put_text(&mut f, column::SECTOR, alumnus.sector.as_deref());
    put_text(&mut f, column::LOCATION, alumnus.location.as_deref());
    put_text(&mut f, column::LINKEDIN, alumnus.linkedin.as_deref());
    put_text(&mut f, column::LAST_ENGAGED, alumnus.last_engaged.as_deref());
    put_text(&mut f, column::ENGAGEMENT_NOTES, alumnus.engagement_notes.as_deref());
    put_text(&mut f, column::NOTES, alumnus.notes.as_deref());
    put_text(&mut f, column::PRIOR_ROLE, alumnus.prior_role.as_deref());
    put_text(&mut f, column::EDUCATION, alumnus.education.as_deref());
    f
}

#[must_use]
pub fn check_in_fields(check_in: &CheckIn) -> Fields {
    let mut f = Fields::new();
    if !check_in.fellow_ids.is_empty() {
        put_list(&mut f, column::FELLOW, &check_in.fellow_ids);
    }
    put_text(&mut f, column::DATE, check_in.date.as_deref());
    put_text(&mut f, column::CHECK_IN_TYPE, check_in.check_in_type.as_deref());
    put_text(&mut f, column::NOTES, check_in.notes.as_deref());
    put_text(&mut f, column::STAFF_MEMBER, check_in.staff_member.as_deref());
    f
}

/// Columns for a new status report. "Submitted" is always sent.
#[must_use]
pub fn status_report_fields(report: &StatusReport) -> Fields {
    let mut f = Fields::new();
    if !report.fellow_ids.is_empty() {
        put_list(&mut f, column::FELLOW, &report.fellow_ids);
    }
    put_text(&mut f, column::MONTH, report.month.as_deref());
    f.insert(column::SUBMITTED.to_string(), Value::Bool(report.submitted));
    put_text(&mut f, column::DATE_SUBMITTED, report.date_submitted.as_deref());
    put_text(&mut f, column::NOTES, report.notes.as_deref());
    f
}
