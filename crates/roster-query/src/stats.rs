//! Aggregate statistics over an unfiltered collection.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use roster_core::entities::{Alumnus, Fellow};
use roster_core::enums::FellowStatus;
use roster_core::person::Person;
use serde::Serialize;

use crate::derive::{Thresholds, needs_check_in};

/// Counts per present value of one dimension, plus how many records had no
/// value at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GroupCounts {
    pub counts: BTreeMap<String, usize>,
    pub missing: usize,
}

impl GroupCounts {
    /// Tally one optional value.
    pub fn tally(&mut self, value: Option<&str>) {
        match value {
            Some(value) => *self.counts.entry(value.to_string()).or_default() += 1,
            None => self.missing += 1,
        }
    }

    /// Count records in a dimension that may hold several values per record.
    /// A record with an empty list counts once as missing.
    pub fn tally_all(&mut self, values: &[String]) {
        if values.is_empty() {
            self.missing += 1;
        }
        for value in values {
            self.tally(Some(value));
        }
    }

    #[must_use]
    pub fn get(&self, value: &str) -> usize {
        self.counts.get(value).copied().unwrap_or(0)
    }

    /// Number of distinct present values.
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Present values, highest count first, ties by value.
    #[must_use]
    pub fn ranked(&self) -> Vec<(&str, usize)> {
        let mut ranked: Vec<_> = self
            .counts
            .iter()
            .map(|(value, count)| (value.as_str(), *count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked
    }
}

/// Dimensions shared by both record variants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Breakdown {
    pub by_cohort: GroupCounts,
    pub by_fellow_type: GroupCounts,
    pub by_party: GroupCounts,
    pub by_chamber: GroupCounts,
}

impl Breakdown {
    fn tally<P: Person>(&mut self, record: &P) {
        self.by_cohort.tally(record.cohort());
        self.by_fellow_type.tally_all(record.fellow_types());
        self.by_party.tally(record.party());
        self.by_chamber.tally(record.chamber());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FellowStats {
    pub total: usize,
    pub on_track: usize,
    pub flagged: usize,
    pub ending_soon: usize,
    /// On-track fellows whose last check-in is stale.
    pub needs_check_in: usize,
    /// Every status, including values outside the known set.
    pub by_status: GroupCounts,
    #[serde(flatten)]
    pub breakdown: Breakdown,
}

impl FellowStats {
    #[must_use]
    pub fn compute(fellows: &[Fellow], today: NaiveDate, thresholds: Thresholds) -> Self {
        let mut stats = Self {
            total: fellows.len(),
            ..Self::default()
        };
        for fellow in fellows {
            stats.by_status.tally(fellow.status.as_ref().map(FellowStatus::as_str));
            stats.breakdown.tally(fellow);
            match fellow.status {
                Some(FellowStatus::OnTrack) => {
                    stats.on_track += 1;
                    if needs_check_in(fellow.last_check_in.as_deref(), today, thresholds) {
                        stats.needs_check_in += 1;
                    }
                }
                Some(FellowStatus::Flagged) => stats.flagged += 1,
                Some(FellowStatus::EndingSoon) => stats.ending_soon += 1,
                Some(FellowStatus::Other(_)) | None => {}
            }
        }
        stats
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AlumniStats {
    pub total: usize,
    /// Distinct sectors represented.
    pub sectors: usize,
    /// Distinct cohorts represented.
    pub cohorts: usize,
    pub by_sector: GroupCounts,
    #[serde(flatten)]
    pub breakdown: Breakdown,
}

impl AlumniStats {
    #[must_use]
    pub fn compute(alumni: &[Alumnus]) -> Self {
        let mut stats = Self {
            total: alumni.len(),
            ..Self::default()
        };
        for alumnus in alumni {
            stats.by_sector.tally(alumnus.sector.as_deref());
            stats.breakdown.tally(alumnus);
        }
        stats.sectors = stats.by_sector.distinct();
        stats.cohorts = stats.breakdown.by_cohort.distinct();
        stats
    }
}
