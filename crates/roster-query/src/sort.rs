//! Sort keys and comparator rules.
//!
//! Every ordering is a stable sort: records that compare equal keep their
//! relative input order.

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;
use roster_core::enums::FellowStatus;
use roster_core::person::Person;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::derive::days_since;

/// The closed set of orderings a roster view can request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Cohort label, descending.
    CohortNewest,
    /// Cohort label, ascending.
    CohortOldest,
    NameAz,
    NameZa,
    /// Last engagement date ascending; never-engaged records first.
    LastEngagedOldestFirst,
    /// Most urgent status first, then most stale check-in first.
    StatusPriority,
    /// Leave the input order untouched.
    #[default]
    InputOrder,
}

impl SortKey {
    pub const ALL: [Self; 7] = [
        Self::CohortNewest,
        Self::CohortOldest,
        Self::NameAz,
        Self::NameZa,
        Self::LastEngagedOldestFirst,
        Self::StatusPriority,
        Self::InputOrder,
    ];

    /// Interpret a raw sort key. Unrecognized keys fall back to
    /// [`SortKey::InputOrder`] rather than failing.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "cohort-newest" => Self::CohortNewest,
            "cohort-oldest" => Self::CohortOldest,
            "name-az" => Self::NameAz,
            "name-za" => Self::NameZa,
            "last-engaged-oldest-first" | "last-engaged" => Self::LastEngagedOldestFirst,
            "status-priority" => Self::StatusPriority,
            _ => Self::InputOrder,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CohortNewest => "cohort-newest",
            Self::CohortOldest => "cohort-oldest",
            Self::NameAz => "name-az",
            Self::NameZa => "name-za",
            Self::LastEngagedOldestFirst => "last-engaged-oldest-first",
            Self::StatusPriority => "status-priority",
            Self::InputOrder => "input-order",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Primary-strength collation: letters compare by base form, so case and
/// accents never separate "Émile" from "emile".
#[must_use]
pub fn collate(a: &str, b: &str) -> Ordering {
    primary_weights(a).cmp(primary_weights(b))
}

fn primary_weights(name: &str) -> impl Iterator<Item = char> + '_ {
    name.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn status_rank<P: Person>(record: &P) -> u8 {
    record
        .status()
        .map_or(FellowStatus::UNKNOWN_PRIORITY, FellowStatus::priority)
}

/// Days since last contact; absent means maximally stale.
fn staleness<P: Person>(record: &P, today: NaiveDate) -> i64 {
    days_since(record.last_engaged(), today).unwrap_or(i64::MAX)
}

/// Compare two records under `key`.
pub fn compare<P: Person>(key: SortKey, a: &P, b: &P, today: NaiveDate) -> Ordering {
    let cohort = |record: &P| record.cohort().unwrap_or("").to_owned();
    match key {
        SortKey::CohortNewest => cohort(b).cmp(&cohort(a)),
        SortKey::CohortOldest => cohort(a).cmp(&cohort(b)),
        SortKey::NameAz => collate(a.name(), b.name()),
        SortKey::NameZa => collate(b.name(), a.name()),
        SortKey::LastEngagedOldestFirst => a
            .last_engaged()
            .unwrap_or("")
            .cmp(b.last_engaged().unwrap_or("")),
        SortKey::StatusPriority => status_rank(a)
            .cmp(&status_rank(b))
            .then_with(|| staleness(b, today).cmp(&staleness(a, today))),
        SortKey::InputOrder => Ordering::Equal,
    }
}

/// Stable in-place sort of `records` under `key`.
pub fn sort_records<P: Person>(records: &mut [P], key: SortKey, today: NaiveDate) {
    if key == SortKey::InputOrder {
        return;
    }
    records.sort_by(|a, b| compare(key, a, b, today));
}

#[cfg(test)]
mod tests {
    use roster_core::entities::{Alumnus, Fellow};

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 1).unwrap()
    }

    fn alumnus(id: &str, name: &str, cohort: Option<&str>, last_engaged: Option<&str>) -> Alumnus {
        Alumnus {
            id: id.into(),
            name: name.into(),
            cohort: cohort.map(Into::into),
            last_engaged: last_engaged.map(Into::into),
            ..Alumnus::default()
        }
    }

    fn ids<P: Person>(records: &[P]) -> Vec<&str> {
        records.iter().map(Person::id).collect()
    }

    #[test]
    fn parse_accepts_every_key_and_alias() {
        for key in SortKey::ALL {
            if key != SortKey::InputOrder {
                assert_eq!(SortKey::parse(key.as_str()), key);
            }
        }
        assert_eq!(SortKey::parse("last-engaged"), SortKey::LastEngagedOldestFirst);
    }

    #[test]
    fn unrecognized_key_keeps_input_order() {
        let mut records = vec![
            alumnus("b", "Zed", Some("2022"), None),
            alumnus("a", "Amy", Some("2024"), None),
        ];
        sort_records(&mut records, SortKey::parse("shoe-size"), today());
        assert_eq!(ids(&records), ["b", "a"]);
    }

    #[test]
    fn serde_uses_kebab_case() {
        let json = serde_json::to_string(&SortKey::LastEngagedOldestFirst).unwrap();
        assert_eq!(json, "\"last-engaged-oldest-first\"");
        let key: SortKey = serde_json::from_str("\"name-za\"").unwrap();
        assert_eq!(key, SortKey::NameZa);
    }

    #[test]
    fn cohort_oldest_puts_missing_first() {
        let mut records = vec![
            alumnus("a", "A", Some("2023"), None),
            alumnus("b", "B", None, None),
            alumnus("c", "C", Some("2016"), None),
        ];
        sort_records(&mut records, SortKey::CohortOldest, today());
        assert_eq!(ids(&records), ["b", "c", "a"]);
    }

    #[test]
    fn name_sort_ignores_case() {
        let mut records = vec![
            alumnus("1", "bravo", None, None),
            alumnus("2", "Alpha", None, None),
            alumnus("3", "charlie", None, None),
        ];
        sort_records(&mut records, SortKey::NameAz, today());
        assert_eq!(ids(&records), ["2", "1", "3"]);
        sort_records(&mut records, SortKey::NameZa, today());
        assert_eq!(ids(&records), ["3", "1", "2"]);
    }

    #[test]
    fn accented_names_sort_with_their_base_letter() {
        let mut records = vec![
            alumnus("zoe", "Zoe Park", None, None),
            alumnus("emile", "Émile Durand", None, None),
            alumnus("eve", "Eve Adams", None, None),
        ];
        sort_records(&mut records, SortKey::NameAz, today());
        assert_eq!(ids(&records), ["emile", "eve", "zoe"]);
        sort_records(&mut records, SortKey::NameZa, today());
        assert_eq!(ids(&records), ["zoe", "eve", "emile"]);
        assert_eq!(collate("José Núñez", "jose nunez"), Ordering::Equal);
    }

    #[test]
    fn name_ties_keep_input_order() {
        let mut records = vec![
            alumnus("first", "Sarah Chen", None, None),
            alumnus("x", "Amara Osei", None, None),
            alumnus("second", "sarah chen", None, None),
        ];
        sort_records(&mut records, SortKey::NameAz, today());
        assert_eq!(ids(&records), ["x", "first", "second"]);
    }

    #[test]
    fn last_engaged_puts_never_engaged_first() {
        let mut records = vec![
            alumnus("a", "A", None, Some("2026-01-15")),
            alumnus("b", "B", None, None),
            alumnus("c", "C", None, Some("2024-11-05")),
        ];
        sort_records(&mut records, SortKey::LastEngagedOldestFirst, today());
        assert_eq!(ids(&records), ["b", "c", "a"]);
    }

    #[test]
    fn status_priority_ties_break_on_staleness() {
        let fellow = |id: &str, status: FellowStatus, last: Option<&str>| Fellow {
            id: id.into(),
            status: Some(status),
            last_check_in: last.map(Into::into),
            ..Fellow::default()
        };
        let mut records = vec![
            fellow("recent", FellowStatus::OnTrack, Some("2026-01-30")),
            fellow("stale", FellowStatus::OnTrack, Some("2025-12-01")),
            fellow("never", FellowStatus::OnTrack, None),
            fellow("odd", FellowStatus::Other("Paused".into()), Some("2020-01-01")),
            fellow("flagged", FellowStatus::Flagged, Some("2026-01-31")),
        ];
        sort_records(&mut records, SortKey::StatusPriority, today());
        assert_eq!(ids(&records), ["flagged", "never", "stale", "recent", "odd"]);
    }

    #[test]
    fn fellow_last_engaged_uses_check_in() {
        let mut records = vec![
            Fellow {
                id: "late".into(),
                last_check_in: Some("2026-01-20".into()),
                ..Fellow::default()
            },
            Fellow {
                id: "early".into(),
                last_check_in: Some("2025-12-10".into()),
                ..Fellow::default()
            },
        ];
        sort_records(&mut records, SortKey::LastEngagedOldestFirst, today());
        assert_eq!(ids(&records), ["early", "late"]);
    }
}
