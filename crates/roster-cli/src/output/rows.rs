//! Column projections for `--format table` list output.

use roster_query::analytics::{CohortRow, MonthRow, OrgRow};
use roster_query::derive::{AlumnusView, FellowView};

/// A record that renders as one line of a fixed-column table.
pub trait TableRow {
    const HEADERS: &'static [&'static str];

    fn cells(&self) -> Vec<String>;
}

fn cell(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}

fn count_cell(value: Option<i64>) -> String {
    value.map_or_else(|| "-".to_string(), |days| days.to_string())
}

impl TableRow for FellowView {
    const HEADERS: &'static [&'static str] = &[
        "id",
        "name",
        "status",
        "cohort",
        "chamber",
        "office",
        "last check-in",
        "days",
        "attention",
    ];

    fn cells(&self) -> Vec<String> {
        let fellow = &self.fellow;
        let attention = if self.derived.show_needs_check_in {
            "check in"
        } else if self.derived.ending_soon_window {
            "ending soon"
        } else {
            ""
        };
        vec![
            fellow.id.clone(),
            fellow.name.clone(),
            cell(fellow.status.as_ref().map(|status| status.label())),
            cell(fellow.cohort.as_deref()),
            cell(fellow.chamber.as_deref()),
            cell(fellow.office.as_deref()),
            cell(fellow.last_check_in.as_deref()),
            count_cell(self.derived.days_since_check_in),
            attention.to_string(),
        ]
    }
}

impl TableRow for AlumnusView {
    const HEADERS: &'static [&'static str] = &[
        "id",
        "name",
        "cohort",
        "sector",
        "organization",
        "role",
        "chamber",
        "last engaged",
    ];

    fn cells(&self) -> Vec<String> {
        let alumnus = &self.alumnus;
        vec![
            alumnus.id.clone(),
            alumnus.name.clone(),
            cell(alumnus.cohort.as_deref()),
            cell(alumnus.sector.as_deref()),
            cell(alumnus.current_org.as_deref()),
            cell(alumnus.current_role.as_deref()),
            cell(alumnus.chamber.as_deref()),
            cell(alumnus.last_engaged.as_deref()),
        ]
    }
}

impl TableRow for CohortRow {
    const HEADERS: &'static [&'static str] = &["cohort", "fellows", "alumni"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.cohort.clone(),
            self.fellows.to_string(),
            self.alumni.to_string(),
        ]
    }
}

impl TableRow for OrgRow {
    const HEADERS: &'static [&'static str] = &["organization", "alumni"];

    fn cells(&self) -> Vec<String> {
        vec![self.org.clone(), self.count.to_string()]
    }
}

impl TableRow for MonthRow {
    const HEADERS: &'static [&'static str] = &["month", "count"];

    fn cells(&self) -> Vec<String> {
        vec![self.month.clone(), self.count.to_string()]
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use roster_core::entities::Fellow;
    use roster_core::enums::FellowStatus;
    use roster_query::derive::{FellowView, Thresholds};

    use super::TableRow;

    #[test]
    fn stale_on_track_fellow_asks_for_check_in() {
        let fellow = Fellow {
            id: "fel-009".to_string(),
            name: "Rachel Kim".to_string(),
            status: Some(FellowStatus::OnTrack),
            cohort: Some("2025".to_string()),
            last_check_in: Some("2025-12-01".to_string()),
            ..Default::default()
        };
        let today = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
        let view = FellowView::new(fellow, today, Thresholds::default());

        let cells = view.cells();
        assert_eq!(cells.len(), FellowView::HEADERS.len());
        assert_eq!(cells[2], "On Track");
        assert_eq!(cells[4], "-");
        assert_eq!(cells[7], "62");
        assert_eq!(cells[8], "check in");
    }
}
