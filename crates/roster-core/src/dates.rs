//! Calendar-date parsing.
//!
//! Record fields hold dates as ISO strings. Those are parsed leniently: an
//! unparseable value is treated the same as an absent one. Dates typed by a
//! user (CLI flags) are parsed strictly and produce a [`CoreError`].

use chrono::NaiveDate;

use crate::errors::CoreError;

const ISO_DAY: &str = "%Y-%m-%d";

/// Parse a record date field.
///
/// Accepts `YYYY-MM-DD`, optionally followed by a time part
/// (`2026-01-15T09:30:00.000Z`), which is ignored. Returns `None` for
/// anything else.
#[must_use]
pub fn parse_record_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    let (day, rest) = match (trimmed.get(..10), trimmed.get(10..)) {
        (Some(day), Some(rest)) => (day, rest),
        _ => (trimmed, ""),
    };
    if !rest.is_empty() && !rest.starts_with('T') {
        return None;
    }
    NaiveDate::parse_from_str(day, ISO_DAY).ok()
}

/// Parse a user-supplied `YYYY-MM-DD` value.
///
/// # Errors
///
/// Returns [`CoreError::InvalidDate`] when `raw` is not a valid calendar day.
pub fn parse_day(raw: &str, field: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(raw.trim(), ISO_DAY).map_err(|_| CoreError::InvalidDate {
        field: field.to_string(),
        value: raw.to_string(),
    })
}

/// Format a day the way record fields store it.
#[must_use]
pub fn format_day(day: NaiveDate) -> String {
    day.format(ISO_DAY).to_string()
}
