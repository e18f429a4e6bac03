//! Algebraic properties of filtering and sorting over the sample roster.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use roster_core::entities::{Alumnus, Fellow};
use roster_core::person::Person;
use roster_core::sample;
use roster_query::filters::{self, RosterFilter};
use roster_query::sort::{SortKey, sort_records};
use rstest::rstest;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 1).unwrap()
}

fn ids<P: Person>(records: &[P]) -> Vec<String> {
    records.iter().map(|r| r.id().to_string()).collect()
}

#[test]
fn sentinel_filters_are_identity() {
    let filter = RosterFilter::new()
        .with_search("")
        .with_cohort("All")
        .with_fellow_type("all")
        .with_chamber("")
        .with_party("All")
        .with_sector("ALL")
        .with_status("all");
    assert!(filter.is_unconstrained());

    let fellows = sample::fellows();
    assert_eq!(filters::apply(&fellows, &filter), fellows);
    let alumni = sample::alumni();
    assert_eq!(filters::apply(&alumni, &filter), alumni);
}

/// Every record lands in exactly one bucket: one per distinct value, plus
/// the records that have no value.
fn assert_partitions<P, F>(records: &[P], field: F, select: fn(&str) -> RosterFilter)
where
    P: Person + Clone + PartialEq + std::fmt::Debug,
    F: Fn(&P) -> Option<&str>,
{
    let mut values: Vec<&str> = records.iter().filter_map(&field).collect();
    values.sort_unstable();
    values.dedup();

    let mut covered = 0;
    for value in values {
        let matched = filters::apply(records, &select(value));
        assert!(matched.iter().all(|r| field(r) == Some(value)));
        covered += matched.len();
    }
    let missing = records.iter().filter(|r| field(r).is_none()).count();
    assert_eq!(covered + missing, records.len());
}

#[test]
fn chamber_partitions_alumni() {
    assert_partitions(&sample::alumni(), Person::chamber, |v| {
        RosterFilter::new().with_chamber(v)
    });
}

#[test]
fn party_partitions_alumni() {
    assert_partitions(&sample::alumni(), Person::party, |v| {
        RosterFilter::new().with_party(v)
    });
}

#[test]
fn cohort_partitions_alumni() {
    assert_partitions(&sample::alumni(), Person::cohort, |v| {
        RosterFilter::new().with_cohort(v)
    });
}

#[test]
fn sector_partitions_alumni() {
    assert_partitions(&sample::alumni(), |a: &Alumnus| a.sector.as_deref(), |v| {
        RosterFilter::new().with_sector(v)
    });
}

#[test]
fn status_partitions_fellows() {
    assert_partitions(
        &sample::fellows(),
        |f: &Fellow| f.status.as_ref().map(|s| s.as_str()),
        |v| RosterFilter::new().with_status(v),
    );
}

#[rstest]
#[case(RosterFilter::new().with_search("sen"))]
#[case(RosterFilter::new().with_party("Democrat").with_chamber("House"))]
#[case(RosterFilter::new().with_fellow_type("Congressional Innovation Fellow"))]
#[case(RosterFilter::new().with_cohort("2024").with_sector("Government"))]
fn filtering_is_idempotent(#[case] filter: RosterFilter) {
    let alumni = sample::alumni();
    let once = filters::apply(&alumni, &filter);
    let twice = filters::apply(&once, &filter);
    assert_eq!(once, twice);

    let fellows = sample::fellows();
    let once = filters::apply(&fellows, &filter);
    assert_eq!(filters::apply(&once, &filter), once);
}

#[rstest]
#[case(SortKey::CohortNewest)]
#[case(SortKey::CohortOldest)]
#[case(SortKey::NameAz)]
#[case(SortKey::NameZa)]
#[case(SortKey::LastEngagedOldestFirst)]
#[case(SortKey::StatusPriority)]
fn sorting_is_stable(#[case] key: SortKey) {
    // Every fellow shares cohort 2025, so cohort sorts must leave the input
    // order alone; the other keys must agree with a stable reference sort.
    let mut fellows = sample::fellows();
    let mut reference: Vec<(usize, Fellow)> = fellows.iter().cloned().enumerate().collect();
    reference.sort_by(|(ia, a), (ib, b)| {
        roster_query::sort::compare(key, a, b, today()).then(ia.cmp(ib))
    });
    sort_records(&mut fellows, key, today());
    let expected: Vec<Fellow> = reference.into_iter().map(|(_, f)| f).collect();
    assert_eq!(ids(&fellows), ids(&expected));
}

#[test]
fn sorting_is_a_permutation() {
    let mut alumni = sample::alumni();
    sort_records(&mut alumni, SortKey::NameAz, today());
    let mut sorted = ids(&alumni);
    let mut original = ids(&sample::alumni());
    sorted.sort();
    original.sort();
    assert_eq!(sorted, original);
}
