//! Filter selections.
//!
//! Every dimension is an `Option`: `None` is the "no filter" sentinel and
//! constrains nothing. Active dimensions are combined with logical AND.
//! A record whose field is absent never matches an active dimension.

use roster_core::enums::FellowStatus;
use roster_core::person::Person;
use serde::{Deserialize, Serialize};

/// Label the UI shows for an unconstrained categorical dimension.
pub const ALL: &str = "All";

/// Whether a raw categorical selection means "do not filter".
#[must_use]
pub fn is_sentinel(raw: &str) -> bool {
    raw.trim().is_empty() || raw.trim().eq_ignore_ascii_case(ALL)
}

/// Surrounding whitespace is not part of a categorical value.
fn selection(raw: &str) -> Option<String> {
    (!is_sentinel(raw)).then(|| raw.trim().to_string())
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RosterFilter {
    /// Case-insensitive substring matched against name and office.
    pub search: Option<String>,
    pub cohort: Option<String>,
    pub fellow_type: Option<String>,
    pub chamber: Option<String>,
    pub party: Option<String>,
    /// Alumni only; never matches a fellow.
    pub sector: Option<String>,
    /// Fellows only; never matches an alumnus.
    pub status: Option<FellowStatus>,
}

impl RosterFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the free-text search. Only the empty string is the sentinel here,
    /// so a search for "all" still searches.
    #[must_use]
    pub fn with_search(mut self, raw: &str) -> Self {
        self.search = (!raw.is_empty()).then(|| raw.to_string());
        self
    }

    #[must_use]
    pub fn with_cohort(mut self, raw: &str) -> Self {
        self.cohort = selection(raw);
        self
    }

    #[must_use]
    pub fn with_fellow_type(mut self, raw: &str) -> Self {
        self.fellow_type = selection(raw);
        self
    }

    #[must_use]
    pub fn with_chamber(mut self, raw: &str) -> Self {
        self.chamber = selection(raw);
        self
    }

    #[must_use]
    pub fn with_party(mut self, raw: &str) -> Self {
        self.party = selection(raw);
        self
    }

    #[must_use]
    pub fn with_sector(mut self, raw: &str) -> Self {
        self.sector = selection(raw);
        self
    }

    #[must_use]
    pub fn with_status(mut self, raw: &str) -> Self {
        self.status = selection(raw).map(|value| FellowStatus::parse(&value));
        self
    }

    /// True when no dimension is active.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        *self == Self::default()
    }

    /// Whether `record` satisfies every active dimension.
    pub fn matches<P: Person>(&self, record: &P) -> bool {
        self.matches_search(record)
            && exact(self.cohort.as_deref(), record.cohort())
            && self
                .fellow_type
                .as_deref()
                .is_none_or(|selected| record.fellow_types().iter().any(|t| t == selected))
            && exact(self.chamber.as_deref(), record.chamber())
            && exact(self.party.as_deref(), record.party())
            && exact(self.sector.as_deref(), record.sector())
            && self
                .status
                .as_ref()
                .is_none_or(|selected| record.status() == Some(selected))
    }

    fn matches_search<P: Person>(&self, record: &P) -> bool {
        let Some(term) = self.search.as_deref() else {
            return true;
        };
        let needle = term.to_lowercase();
        record.name().to_lowercase().contains(&needle)
            || record
                .office()
                .is_some_and(|office| office.to_lowercase().contains(&needle))
    }
}

fn exact(selected: Option<&str>, value: Option<&str>) -> bool {
    selected.is_none_or(|selected| value == Some(selected))
}

/// Keep the records that satisfy `filter`, in input order.
pub fn apply<P: Person + Clone>(records: &[P], filter: &RosterFilter) -> Vec<P> {
    records
        .iter()
        .filter(|record| filter.matches(*record))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use roster_core::entities::{Alumnus, Fellow};

    use super::*;

    fn fellow(name: &str, office: Option<&str>) -> Fellow {
        Fellow {
            id: name.to_lowercase(),
            name: name.into(),
            office: office.map(Into::into),
            ..Fellow::default()
        }
    }

    #[test]
    fn sentinels_are_recognized() {
        assert!(is_sentinel("All"));
        assert!(is_sentinel("all"));
        assert!(is_sentinel(""));
        assert!(!is_sentinel("2024"));
        assert!(RosterFilter::new().with_cohort("All").is_unconstrained());
        assert!(RosterFilter::new().with_status("all").is_unconstrained());
    }

    #[test]
    fn search_sentinel_is_only_empty_text() {
        let filter = RosterFilter::new().with_search("all");
        assert_eq!(filter.search.as_deref(), Some("all"));
        assert!(RosterFilter::new().with_search("").is_unconstrained());
    }

    #[test]
    fn search_is_case_insensitive_over_name_and_office() {
        let filter = RosterFilter::new().with_search("CANTWELL");
        assert!(filter.matches(&fellow("Sarah Chen", Some("Sen. Maria Cantwell (D-WA)"))));
        assert!(!filter.matches(&fellow("Marcus Johnson", Some("Rep. Ro Khanna (D-CA)"))));
        assert!(!filter.matches(&fellow("No Office", None)));
    }

    #[test]
    fn absent_field_never_matches_active_dimension() {
        let record = fellow("Nadia Williams", None);
        assert!(!RosterFilter::new().with_cohort("2025").matches(&record));
        assert!(!RosterFilter::new().with_party("Democrat").matches(&record));
        assert!(!RosterFilter::new().with_status("on-track").matches(&record));
        assert!(RosterFilter::new().matches(&record));
    }

    #[test]
    fn categorical_match_is_exact() {
        let record = Fellow {
            chamber: Some("Senate".into()),
            ..fellow("Sarah Chen", None)
        };
        assert!(RosterFilter::new().with_chamber("Senate").matches(&record));
        assert!(!RosterFilter::new().with_chamber("senate").matches(&record));
        assert!(!RosterFilter::new().with_chamber("Sen").matches(&record));
    }

    #[test]
    fn padded_selection_is_trimmed_before_matching() {
        let record = Fellow {
            cohort: Some("2024".into()),
            ..fellow("Sarah Chen", None)
        };
        let filter = RosterFilter::new().with_cohort(" 2024 ");
        assert_eq!(filter.cohort.as_deref(), Some("2024"));
        assert!(filter.matches(&record));
        assert_eq!(
            RosterFilter::new().with_status(" flagged").status,
            Some(FellowStatus::Flagged)
        );
    }

    #[test]
    fn sector_never_matches_a_fellow() {
        let filter = RosterFilter::new().with_sector("Government");
        assert!(!filter.matches(&fellow("Sarah Chen", None)));
        let alumnus = Alumnus {
            sector: Some("Government".into()),
            ..Alumnus::default()
        };
        assert!(filter.matches(&alumnus));
    }

    #[test]
    fn status_never_matches_an_alumnus() {
        let filter = RosterFilter::new().with_status("flagged");
        assert!(!filter.matches(&Alumnus::default()));
    }

    #[test]
    fn alumni_fellow_type_matches_any_listed_type() {
        let alumnus = Alumnus {
            fellow_types: vec![
                "Congressional Innovation Fellow".into(),
                "Senior Congressional Innovation Fellow".into(),
            ],
            ..Alumnus::default()
        };
        assert!(
            RosterFilter::new()
                .with_fellow_type("Senior Congressional Innovation Fellow")
                .matches(&alumnus)
        );
        assert!(
            !RosterFilter::new()
                .with_fellow_type("AI Security Fellow")
                .matches(&alumnus)
        );
    }

    #[test]
    fn unknown_status_filter_matches_same_unknown_status() {
        let record = Fellow {
            status: Some(FellowStatus::parse("On Leave")),
            ..fellow("Taylor Brooks", None)
        };
        assert!(RosterFilter::new().with_status("On Leave").matches(&record));
        assert!(!RosterFilter::new().with_status("on leave").matches(&record));
    }
}
