//! Read-time derived fields.
//!
//! Nothing here is stored on a record. All arithmetic works in whole
//! calendar days relative to an injected `today`.

use chrono::NaiveDate;
use roster_core::dates::parse_record_date;
use roster_core::entities::{Alumnus, Fellow};
use roster_core::enums::FellowStatus;
use serde::Serialize;

/// Day-count thresholds behind the staleness and "ending soon" signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Thresholds {
    /// A fellow needs a check-in once the last one is older than this.
    pub check_in_days: u32,
    /// Upper bound of the "ending soon" display window.
    pub ending_soon_days: u32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            check_in_days: 30,
            ending_soon_days: 90,
        }
    }
}

/// Whole days from `date` to `today`. `None` when the date is absent or
/// unparseable.
#[must_use]
pub fn days_since(date: Option<&str>, today: NaiveDate) -> Option<i64> {
    let date = parse_record_date(date?)?;
    Some((today - date).num_days())
}

/// Whole days from `today` to `date`.
#[must_use]
pub fn days_until(date: Option<&str>, today: NaiveDate) -> Option<i64> {
    let date = parse_record_date(date?)?;
    Some((date - today).num_days())
}

/// A missing or unreadable check-in date counts as infinitely stale.
#[must_use]
pub fn needs_check_in(
    last_check_in: Option<&str>,
    today: NaiveDate,
    thresholds: Thresholds,
) -> bool {
    days_since(last_check_in, today)
        .is_none_or(|days| days > i64::from(thresholds.check_in_days))
}

/// Approximate term length in 30-day months, rounding halves up.
#[must_use]
pub fn duration_months(start: Option<&str>, end: Option<&str>) -> Option<i64> {
    let start = parse_record_date(start?)?;
    let end = parse_record_date(end?)?;
    let days = (end - start).num_days();
    // floor(days / 30 + 1/2)
    Some((2 * days + 30).div_euclid(60))
}

/// Derived values attached to a fellow for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FellowDerived {
    pub days_since_check_in: Option<i64>,
    pub needs_check_in: bool,
    /// `needs_check_in` on an otherwise on-track fellow.
    pub show_needs_check_in: bool,
    pub days_until_end: Option<i64>,
    /// End date falls within `(0, ending_soon_days]`. Display only.
    pub ending_soon_window: bool,
    pub duration_months: Option<i64>,
}

impl FellowDerived {
    #[must_use]
    pub fn compute(fellow: &Fellow, today: NaiveDate, thresholds: Thresholds) -> Self {
        let last_check_in = fellow.last_check_in.as_deref();
        let needs_check_in = needs_check_in(last_check_in, today, thresholds);
        let days_until_end = days_until(fellow.end_date.as_deref(), today);
        Self {
            days_since_check_in: days_since(last_check_in, today),
            needs_check_in,
            show_needs_check_in: needs_check_in
                && fellow.status.as_ref() == Some(&FellowStatus::OnTrack),
            days_until_end,
            ending_soon_window: days_until_end
                .is_some_and(|days| days > 0 && days <= i64::from(thresholds.ending_soon_days)),
            duration_months: duration_months(
                fellow.start_date.as_deref(),
                fellow.end_date.as_deref(),
            ),
        }
    }
}

/// A fellow together with its derived fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FellowView {
    #[serde(flatten)]
    pub fellow: Fellow,
    #[serde(flatten)]
    pub derived: FellowDerived,
}

impl FellowView {
    #[must_use]
    pub fn new(fellow: Fellow, today: NaiveDate, thresholds: Thresholds) -> Self {
        let derived = FellowDerived::compute(&fellow, today, thresholds);
        Self { fellow, derived }
    }
}

/// An alumnus together with its engagement recency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlumnusView {
    #[serde(flatten)]
    pub alumnus: Alumnus,
    pub days_since_engaged: Option<i64>,
}

impl AlumnusView {
    #[must_use]
    pub fn new(alumnus: Alumnus, today: NaiveDate) -> Self {
        let days_since_engaged = days_since(alumnus.last_engaged.as_deref(), today);
        Self {
            alumnus,
            days_since_engaged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(raw: &str) -> NaiveDate {
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn days_since_counts_calendar_days() {
        assert_eq!(days_since(Some("2026-01-15"), day("2026-02-01")), Some(17));
        assert_eq!(days_since(Some("2026-02-01"), day("2026-02-01")), Some(0));
        assert_eq!(days_since(None, day("2026-02-01")), None);
        assert_eq!(days_since(Some("soon"), day("2026-02-01")), None);
    }

    #[test]
    fn needs_check_in_boundary_is_exclusive() {
        let today = day("2026-02-01");
        let thresholds = Thresholds::default();
        // exactly 30 days
        assert!(!needs_check_in(Some("2026-01-02"), today, thresholds));
        // 31 days
        assert!(needs_check_in(Some("2026-01-01"), today, thresholds));
    }

    #[test]
    fn missing_check_in_always_needs_one() {
        let today = day("2026-02-01");
        assert!(needs_check_in(None, today, Thresholds::default()));
        assert!(needs_check_in(Some("not a date"), today, Thresholds::default()));
    }

    #[test]
    fn threshold_is_configurable() {
        let today = day("2026-02-01");
        let strict = Thresholds {
            check_in_days: 7,
            ..Thresholds::default()
        };
        assert!(needs_check_in(Some("2026-01-20"), today, strict));
        assert!(!needs_check_in(Some("2026-01-20"), today, Thresholds::default()));
    }

    #[test]
    fn duration_uses_thirty_day_months() {
        assert_eq!(duration_months(Some("2025-09-01"), Some("2026-08-31")), Some(12));
        assert_eq!(duration_months(Some("2025-01-01"), Some("2026-06-30")), Some(18));
        // 45 days is exactly 1.5 months
        assert_eq!(duration_months(Some("2026-01-01"), Some("2026-02-15")), Some(2));
        assert_eq!(duration_months(Some("2026-01-01"), Some("2026-02-14")), Some(1));
        assert_eq!(duration_months(None, Some("2026-02-14")), None);
    }

    #[test]
    fn ending_soon_window_excludes_past_and_far_dates() {
        let today = day("2026-06-01");
        let compute = |end: &str| {
            let fellow = Fellow {
                end_date: Some(end.into()),
                ..Fellow::default()
            };
            FellowDerived::compute(&fellow, today, Thresholds::default())
        };
        assert!(compute("2026-06-30").ending_soon_window);
        assert!(compute("2026-08-30").ending_soon_window);
        assert!(!compute("2026-08-31").ending_soon_window);
        assert!(!compute("2026-06-01").ending_soon_window);
        assert!(!compute("2026-05-01").ending_soon_window);
    }

    #[test]
    fn ending_soon_window_does_not_touch_status() {
        let fellow = Fellow {
            status: Some(FellowStatus::OnTrack),
            end_date: Some("2026-03-01".into()),
            last_check_in: Some("2026-01-30".into()),
            ..Fellow::default()
        };
        let view = FellowView::new(fellow, day("2026-02-01"), Thresholds::default());
        assert!(view.derived.ending_soon_window);
        assert_eq!(view.fellow.status, Some(FellowStatus::OnTrack));
    }

    #[test]
    fn badge_only_for_on_track_fellows() {
        let today = day("2026-02-01");
        let flagged = Fellow {
            status: Some(FellowStatus::Flagged),
            ..Fellow::default()
        };
        let derived = FellowDerived::compute(&flagged, today, Thresholds::default());
        assert!(derived.needs_check_in);
        assert!(!derived.show_needs_check_in);

        let on_track = Fellow {
            status: Some(FellowStatus::OnTrack),
            ..Fellow::default()
        };
        let derived = FellowDerived::compute(&on_track, today, Thresholds::default());
        assert!(derived.show_needs_check_in);
    }

    #[test]
    fn view_serializes_flat() {
        let fellow = Fellow {
            id: "fel-001".into(),
            name: "Sarah Chen".into(),
            last_check_in: Some("2026-01-15".into()),
            ..Fellow::default()
        };
        let view = FellowView::new(fellow, day("2026-02-01"), Thresholds::default());
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["name"], "Sarah Chen");
        assert_eq!(json["days_since_check_in"], 17);
        assert_eq!(json["needs_check_in"], false);
    }
}
