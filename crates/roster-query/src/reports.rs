//! Monthly status-report tracking.
//!
//! Fellows on a reporting plan owe one report per calendar month, from the
//! month of their report start date through an end month. Months are
//! labelled `"Mon YYYY"` (`"Sep 2026"`), matching how reports are stored.

use std::collections::HashSet;

use chrono::{Datelike, Months, NaiveDate};
use roster_core::dates::parse_record_date;
use roster_core::entities::{Fellow, StatusReport};
use serde::Serialize;

const MONTH_LABEL: &str = "%b %Y";

/// End months used when a fellow has no explicit override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSchedule {
    pub default_end_month: String,
    /// Applies to any fellow type containing "Senior".
    pub senior_end_month: String,
}

impl Default for ReportSchedule {
    fn default() -> Self {
        Self {
            default_end_month: "Sep 2026".to_string(),
            senior_end_month: "Nov 2026".to_string(),
        }
    }
}

impl ReportSchedule {
    /// The end month label that applies to `fellow`.
    #[must_use]
    pub fn end_month_for<'a>(&'a self, fellow: &'a Fellow) -> &'a str {
        if let Some(end) = fellow.report_end_month.as_deref() {
            return end;
        }
        if fellow
            .fellow_type
            .as_deref()
            .is_some_and(|kind| kind.contains("Senior"))
        {
            &self.senior_end_month
        } else {
            &self.default_end_month
        }
    }
}

/// Parse a `"Mon YYYY"` label into the first day of that month.
#[must_use]
pub fn parse_month(label: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("1 {}", label.trim()), "%d %b %Y").ok()
}

#[must_use]
pub fn month_label(month: NaiveDate) -> String {
    month.format(MONTH_LABEL).to_string()
}

fn last_day_of_month(first: NaiveDate) -> Option<NaiveDate> {
    first.checked_add_months(Months::new(1))?.pred_opt()
}

/// Every month `fellow` must report for, oldest first.
///
/// Empty when the fellow is not on a reporting plan, has no readable start
/// date, or the end month label cannot be parsed.
#[must_use]
pub fn required_report_months(fellow: &Fellow, schedule: &ReportSchedule) -> Vec<String> {
    if !fellow.requires_monthly_reports {
        return Vec::new();
    }
    let Some(start) = fellow
        .report_start_date
        .as_deref()
        .and_then(parse_record_date)
        .and_then(|day| day.with_day(1))
    else {
        return Vec::new();
    };
    let Some(end) = parse_month(schedule.end_month_for(fellow)) else {
        return Vec::new();
    };
    std::iter::successors(Some(start), |month| month.checked_add_months(Months::new(1)))
        .take_while(|month| *month <= end)
        .map(month_label)
        .collect()
}

/// Submission standing over the months already due.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReportStreak {
    /// Consecutive submitted months, counting back from the latest due month.
    pub streak: usize,
    /// Consecutive missed months, counting back from the latest due month.
    pub missed_count: usize,
    pub gift_card_eligible: bool,
    pub at_risk: bool,
    pub reimbursements_paused: bool,
}

/// Compute the streak for `required` months given the fellow's reports.
///
/// A month is due once its last day is on or before `today`.
#[must_use]
pub fn report_streak(
    reports: &[StatusReport],
    required: &[String],
    today: NaiveDate,
) -> ReportStreak {
    let submitted: HashSet<&str> = reports
        .iter()
        .filter(|report| report.submitted)
        .filter_map(|report| report.month.as_deref())
        .collect();
    let due: Vec<&str> = required
        .iter()
        .map(String::as_str)
        .filter(|label| {
            parse_month(label)
                .and_then(last_day_of_month)
                .is_some_and(|last| last <= today)
        })
        .collect();

    let streak = due
        .iter()
        .rev()
        .take_while(|month| submitted.contains(*month))
        .count();
    let missed_count = due
        .iter()
        .rev()
        .take_while(|month| !submitted.contains(*month))
        .count();

    ReportStreak {
        streak,
        missed_count,
        gift_card_eligible: streak >= 3,
        at_risk: missed_count == 1,
        reimbursements_paused: missed_count >= 2,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn day(raw: &str) -> NaiveDate {
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
    }

    fn reporting_fellow(start: &str, fellow_type: &str, end: Option<&str>) -> Fellow {
        Fellow {
            id: "fel-001".into(),
            fellow_type: Some(fellow_type.into()),
            requires_monthly_reports: true,
            report_start_date: Some(start.into()),
            report_end_month: end.map(Into::into),
            ..Fellow::default()
        }
    }

    fn report(month: &str, submitted: bool) -> StatusReport {
        StatusReport {
            id: format!("rep-{month}"),
            fellow_ids: vec!["fel-001".into()],
            month: Some(month.into()),
            submitted,
            ..StatusReport::default()
        }
    }

    fn months(labels: &[&str]) -> Vec<String> {
        labels.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn parse_month_reads_short_labels() {
        assert_eq!(parse_month("Feb 2026"), Some(day("2026-02-01")));
        assert_eq!(parse_month("Feb"), None);
        assert_eq!(parse_month("2026-02"), None);
    }

    #[test]
    fn standard_fellow_runs_to_default_end() {
        let fellow = reporting_fellow("2026-06-15", "Congressional Innovation Fellow", None);
        assert_eq!(
            required_report_months(&fellow, &ReportSchedule::default()),
            months(&["Jun 2026", "Jul 2026", "Aug 2026", "Sep 2026"])
        );
    }

    #[test]
    fn senior_fellow_runs_to_senior_end() {
        let fellow =
            reporting_fellow("2026-09-01", "Senior Congressional Innovation Fellow", None);
        assert_eq!(
            required_report_months(&fellow, &ReportSchedule::default()),
            months(&["Sep 2026", "Oct 2026", "Nov 2026"])
        );
    }

    #[test]
    fn override_crosses_year_boundary() {
        let fellow = reporting_fellow(
            "2025-11-03",
            "Congressional Innovation Fellow",
            Some("Feb 2026"),
        );
        assert_eq!(
            required_report_months(&fellow, &ReportSchedule::default()),
            months(&["Nov 2025", "Dec 2025", "Jan 2026", "Feb 2026"])
        );
    }

    #[rstest]
    #[case::not_on_plan(false, Some("2026-02-01"), None)]
    #[case::no_start(true, None, None)]
    #[case::bad_start(true, Some("soon"), None)]
    #[case::bad_end(true, Some("2026-02-01"), Some("Sept 2026"))]
    fn no_required_months(
        #[case] requires: bool,
        #[case] start: Option<&str>,
        #[case] end: Option<&str>,
    ) {
        let fellow = Fellow {
            requires_monthly_reports: requires,
            report_start_date: start.map(Into::into),
            report_end_month: end.map(Into::into),
            ..Fellow::default()
        };
        assert!(required_report_months(&fellow, &ReportSchedule::default()).is_empty());
    }

    #[test]
    fn no_required_months_is_all_zero() {
        let standing = report_streak(&[report("Jan 2026", true)], &[], day("2026-06-01"));
        assert_eq!(standing, ReportStreak::default());
    }

    #[test]
    fn streak_counts_back_from_latest_due_month() {
        let required = months(&["Feb 2026", "Mar 2026", "Apr 2026", "May 2026", "Jun 2026"]);
        let reports = [
            report("Feb 2026", false),
            report("Mar 2026", true),
            report("Apr 2026", true),
            report("May 2026", true),
        ];
        // June is not due until June 30.
        let standing = report_streak(&reports, &required, day("2026-06-15"));
        assert_eq!(standing.streak, 3);
        assert_eq!(standing.missed_count, 0);
        assert!(standing.gift_card_eligible);
        assert!(!standing.at_risk);
    }

    #[test]
    fn month_is_due_on_its_last_day() {
        let required = months(&["May 2026", "Jun 2026"]);
        let reports = [report("May 2026", true)];
        let standing = report_streak(&reports, &required, day("2026-06-30"));
        assert_eq!(standing.streak, 0);
        assert_eq!(standing.missed_count, 1);
        assert!(standing.at_risk);
    }

    #[test]
    fn two_misses_pause_reimbursements() {
        let required = months(&["Mar 2026", "Apr 2026", "May 2026"]);
        let reports = [report("Mar 2026", true), report("Apr 2026", false)];
        let standing = report_streak(&reports, &required, day("2026-06-02"));
        assert_eq!(standing.missed_count, 2);
        assert!(standing.reimbursements_paused);
        assert!(!standing.at_risk);
        assert!(!standing.gift_card_eligible);
    }
}
