//! # roster-query
//!
//! The roster query engine. Given a full collection of fellows or alumni, a
//! filter selection, a sort key and an injected `today`, it produces a new
//! ordered collection with derived fields attached plus aggregate statistics
//! over the unfiltered input.
//!
//! Every call is a pure recomputation. The engine never reads the clock,
//! never mutates its input, and raises no errors: gaps in record data are
//! values (`None`), not failures.

pub mod analytics;
pub mod derive;
pub mod filters;
pub mod reports;
pub mod sort;
pub mod stats;

use chrono::NaiveDate;
use roster_core::entities::{Alumnus, CheckIn, Fellow, StatusReport};
use roster_core::person::find_by_id;
use serde::Serialize;

use crate::derive::{AlumnusView, FellowView, Thresholds};
use crate::filters::RosterFilter;
use crate::reports::{ReportSchedule, ReportStreak, report_streak, required_report_months};
use crate::sort::{SortKey, sort_records};
use crate::stats::{AlumniStats, FellowStats};

/// Per-call parameters of a roster read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterQuery {
    pub filter: RosterFilter,
    pub sort: SortKey,
    pub today: NaiveDate,
}

impl RosterQuery {
    /// An unconstrained query in input order.
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        Self {
            filter: RosterFilter::default(),
            sort: SortKey::InputOrder,
            today,
        }
    }

    #[must_use]
    pub fn with_filter(mut self, filter: RosterFilter) -> Self {
        self.filter = filter;
        self
    }

    #[must_use]
    pub const fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FellowRoster {
    pub records: Vec<FellowView>,
    pub stats: FellowStats,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlumniRoster {
    pub records: Vec<AlumnusView>,
    pub stats: AlumniStats,
}

/// One fellow with everything linked to them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FellowDetail {
    pub fellow: FellowView,
    /// Most recent first.
    pub check_ins: Vec<CheckIn>,
    /// Oldest month first.
    pub status_reports: Vec<StatusReport>,
    pub required_months: Vec<String>,
    pub report_streak: ReportStreak,
}

/// Construction-time configuration for roster reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterEngine {
    thresholds: Thresholds,
    schedule: ReportSchedule,
}

impl RosterEngine {
    #[must_use]
    pub const fn new(thresholds: Thresholds, schedule: ReportSchedule) -> Self {
        Self {
            thresholds,
            schedule,
        }
    }

    #[must_use]
    pub const fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    #[must_use]
    pub const fn schedule(&self) -> &ReportSchedule {
        &self.schedule
    }

    /// Filter, sort and annotate fellows. Statistics cover all of `fellows`.
    #[must_use]
    pub fn fellows(&self, fellows: &[Fellow], query: &RosterQuery) -> FellowRoster {
        let mut selected = filters::apply(fellows, &query.filter);
        sort_records(&mut selected, query.sort, query.today);
        FellowRoster {
            records: selected
                .into_iter()
                .map(|fellow| FellowView::new(fellow, query.today, self.thresholds))
                .collect(),
            stats: FellowStats::compute(fellows, query.today, self.thresholds),
        }
    }

    /// Filter, sort and annotate alumni. Statistics cover all of `alumni`.
    #[must_use]
    pub fn alumni(&self, alumni: &[Alumnus], query: &RosterQuery) -> AlumniRoster {
        let mut selected = filters::apply(alumni, &query.filter);
        sort_records(&mut selected, query.sort, query.today);
        AlumniRoster {
            records: selected
                .into_iter()
                .map(|alumnus| AlumnusView::new(alumnus, query.today))
                .collect(),
            stats: AlumniStats::compute(alumni),
        }
    }

    /// Assemble the detail view for fellow `id`. Linked records that do not
    /// concern the fellow are ignored. `None` if no fellow has that id.
    #[must_use]
    pub fn fellow_detail(
        &self,
        fellows: &[Fellow],
        id: &str,
        check_ins: &[CheckIn],
        status_reports: &[StatusReport],
        today: NaiveDate,
    ) -> Option<FellowDetail> {
        let fellow = find_by_id(fellows, id)?;

        let mut check_ins: Vec<CheckIn> = check_ins
            .iter()
            .filter(|check_in| check_in.concerns(id))
            .cloned()
            .collect();
        check_ins.sort_by(|a, b| b.date.cmp(&a.date));

        let mut status_reports: Vec<StatusReport> = status_reports
            .iter()
            .filter(|report| report.concerns(id))
            .cloned()
            .collect();
        status_reports.sort_by_key(|report| {
            report.month.as_deref().and_then(reports::parse_month)
        });

        let required_months = required_report_months(fellow, &self.schedule);
        let streak = report_streak(&status_reports, &required_months, today);

        Some(FellowDetail {
            fellow: FellowView::new(fellow.clone(), today, self.thresholds),
            check_ins,
            status_reports,
            required_months,
            report_streak: streak,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use roster_core::sample;

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 1).unwrap()
    }

    #[test]
    fn stats_ignore_the_filter() {
        let engine = RosterEngine::default();
        let query = RosterQuery::new(today())
            .with_filter(RosterFilter::new().with_status("flagged"));
        let roster = engine.fellows(&sample::fellows(), &query);
        assert_eq!(roster.records.len(), 1);
        assert_eq!(roster.stats.total, 8);
    }

    #[test]
    fn input_is_not_mutated() {
        let engine = RosterEngine::default();
        let alumni = sample::alumni();
        let before = alumni.clone();
        let query = RosterQuery::new(today()).with_sort(SortKey::NameZa);
        let _ = engine.alumni(&alumni, &query);
        assert_eq!(alumni, before);
    }

    #[test]
    fn detail_collects_linked_records() {
        let engine = RosterEngine::default();
        let mut fellows = sample::fellows();
        fellows[0].requires_monthly_reports = true;
        fellows[0].report_start_date = Some("2025-11-01".into());
        let check_ins = vec![
            CheckIn {
                id: "chk-1".into(),
                fellow_ids: vec!["fel-001".into()],
                date: Some("2025-12-02".into()),
                ..CheckIn::default()
            },
            CheckIn {
                id: "chk-2".into(),
                fellow_ids: vec!["fel-002".into()],
                date: Some("2026-01-10".into()),
                ..CheckIn::default()
            },
            CheckIn {
                id: "chk-3".into(),
                fellow_ids: vec!["fel-001".into()],
                date: Some("2026-01-15".into()),
                ..CheckIn::default()
            },
        ];
        let reports: Vec<_> = ["Dec 2025", "Nov 2025"]
            .into_iter()
            .map(|month| StatusReport {
                id: month.into(),
                fellow_ids: vec!["fel-001".into()],
                month: Some(month.into()),
                submitted: true,
                ..StatusReport::default()
            })
            .collect();

        let detail = engine
            .fellow_detail(&fellows, "fel-001", &check_ins, &reports, today())
            .unwrap();
        let ids: Vec<_> = detail.check_ins.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["chk-3", "chk-1"]);
        let months: Vec<_> = detail
            .status_reports
            .iter()
            .filter_map(|r| r.month.as_deref())
            .collect();
        assert_eq!(months, ["Nov 2025", "Dec 2025"]);
        assert_eq!(detail.required_months.first().map(String::as_str), Some("Nov 2025"));
        // Nov and Dec submitted, Jan 2026 due on Jan 31 and missing.
        assert_eq!(detail.report_streak.missed_count, 1);
        assert!(detail.report_streak.at_risk);
    }

    #[test]
    fn detail_for_unknown_id_is_none() {
        let engine = RosterEngine::default();
        assert!(
            engine
                .fellow_detail(&sample::fellows(), "fel-999", &[], &[], today())
                .is_none()
        );
    }
}
