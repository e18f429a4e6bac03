//! Aggregate projections behind the chart views.

use std::collections::BTreeMap;

use chrono::{Datelike, Months, NaiveDate};
use roster_core::dates::parse_record_date;
use roster_core::entities::{Alumnus, Fellow};
use serde::Serialize;

use crate::stats::GroupCounts;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CohortRow {
    pub cohort: String,
    pub fellows: usize,
    pub alumni: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrgRow {
    pub org: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthRow {
    /// `"Mon YY"`, e.g. `"Jan 26"`.
    pub month: String,
    pub count: usize,
}

/// Fellows and alumni per cohort, cohort ascending. Records without a cohort
/// are left out.
#[must_use]
pub fn cohort_breakdown(fellows: &[Fellow], alumni: &[Alumnus]) -> Vec<CohortRow> {
    let mut rows: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
    for cohort in fellows.iter().filter_map(|f| f.cohort.as_deref()) {
        rows.entry(cohort).or_default().0 += 1;
    }
    for cohort in alumni.iter().filter_map(|a| a.cohort.as_deref()) {
        rows.entry(cohort).or_default().1 += 1;
    }
    rows.into_iter()
        .map(|(cohort, (fellows, alumni))| CohortRow {
            cohort: cohort.to_string(),
            fellows,
            alumni,
        })
        .collect()
}

/// The `limit` most common alumni employers.
#[must_use]
pub fn top_organizations(alumni: &[Alumnus], limit: usize) -> Vec<OrgRow> {
    let mut counts = GroupCounts::default();
    for org in alumni.iter().filter_map(|a| a.current_org.as_deref()) {
        counts.tally(Some(org));
    }
    counts
        .ranked()
        .into_iter()
        .take(limit)
        .map(|(org, count)| OrgRow {
            org: org.to_string(),
            count,
        })
        .collect()
}

fn month_start(day: NaiveDate) -> NaiveDate {
    day.with_day(1).unwrap_or(day)
}

/// Count dates per calendar month over the `months` months ending with the
/// month containing `today`, oldest first. Absent, unparseable and
/// out-of-window dates are ignored.
#[must_use]
pub fn monthly_activity<'a>(
    dates: impl IntoIterator<Item = Option<&'a str>>,
    today: NaiveDate,
    months: u32,
) -> Vec<MonthRow> {
    if months == 0 {
        return Vec::new();
    }
    let current = month_start(today);
    let Some(first) = current.checked_sub_months(Months::new(months - 1)) else {
        return Vec::new();
    };
    let mut buckets: BTreeMap<NaiveDate, usize> = (0..months)
        .filter_map(|offset| first.checked_add_months(Months::new(offset)))
        .map(|month| (month, 0))
        .collect();
    for day in dates.into_iter().flatten().filter_map(parse_record_date) {
        if let Some(count) = buckets.get_mut(&month_start(day)) {
            *count += 1;
        }
    }
    buckets
        .into_iter()
        .map(|(month, count)| MonthRow {
            month: month.format("%b %y").to_string(),
            count,
        })
        .collect()
}

/// Every analytics table in one value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyticsReport {
    pub cohorts: Vec<CohortRow>,
    pub top_organizations: Vec<OrgRow>,
    /// Fellow check-ins per month.
    pub check_in_trend: Vec<MonthRow>,
    /// Alumni engagements per month.
    pub engagement_trend: Vec<MonthRow>,
}

impl AnalyticsReport {
    #[must_use]
    pub fn compute(
        fellows: &[Fellow],
        alumni: &[Alumnus],
        today: NaiveDate,
        months: u32,
        top: usize,
    ) -> Self {
        Self {
            cohorts: cohort_breakdown(fellows, alumni),
            top_organizations: top_organizations(alumni, top),
            check_in_trend: monthly_activity(
                fellows.iter().map(|f| f.last_check_in.as_deref()),
                today,
                months,
            ),
            engagement_trend: monthly_activity(
                alumni.iter().map(|a| a.last_engaged.as_deref()),
                today,
                months,
            ),
        }
    }
}
