//! The [`Person`] trait: the view of a record the query engine works with.
//!
//! Fellows and alumni are structurally similar but carry different field
//! names (`office` vs `office_served`, `last_check_in` vs `last_engaged`) and
//! a few variant-only dimensions (status, sector). The trait gives both the
//! same accessors; a dimension a variant does not have reports `None`.

use crate::entities::{Alumnus, Fellow};
use crate::enums::FellowStatus;

pub trait Person {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    /// Placement office (an alumnus's `office_served`).
    fn office(&self) -> Option<&str>;
    fn cohort(&self) -> Option<&str>;
    fn fellow_types(&self) -> &[String];
    fn chamber(&self) -> Option<&str>;
    fn party(&self) -> Option<&str>;
    /// Most recent contact date (a fellow's last check-in).
    fn last_engaged(&self) -> Option<&str>;

    fn sector(&self) -> Option<&str> {
        None
    }

    fn status(&self) -> Option<&FellowStatus> {
        None
    }
}

impl Person for Fellow {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn office(&self) -> Option<&str> {
        self.office.as_deref()
    }

    fn cohort(&self) -> Option<&str> {
        self.cohort.as_deref()
    }

    fn fellow_types(&self) -> &[String] {
        self.fellow_type.as_slice()
    }

    fn chamber(&self) -> Option<&str> {
        self.chamber.as_deref()
    }

    fn party(&self) -> Option<&str> {
        self.party.as_deref()
    }

    fn last_engaged(&self) -> Option<&str> {
        self.last_check_in.as_deref()
    }

    fn status(&self) -> Option<&FellowStatus> {
        self.status.as_ref()
    }
}

impl Person for Alumnus {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn office(&self) -> Option<&str> {
        self.office_served.as_deref()
    }

    fn cohort(&self) -> Option<&str> {
        self.cohort.as_deref()
    }

    fn fellow_types(&self) -> &[String] {
        &self.fellow_types
    }

    fn chamber(&self) -> Option<&str> {
        self.chamber.as_deref()
    }

    fn party(&self) -> Option<&str> {
        self.party.as_deref()
    }

    fn last_engaged(&self) -> Option<&str> {
        self.last_engaged.as_deref()
    }

    fn sector(&self) -> Option<&str> {
        self.sector.as_deref()
    }
}

/// Find a record by id.
#[must_use]
pub fn find_by_id<'a, P: Person>(records: &'a [P], id: &str) -> Option<&'a P> {
    records.iter().find(|record| record.id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fellow_exposes_single_fellow_type_as_slice() {
        let fellow = Fellow {
            fellow_type: Some("Congressional Innovation Fellow".into()),
            ..Fellow::default()
        };
        assert_eq!(fellow.fellow_types(), ["Congressional Innovation Fellow"]);
        assert!(Fellow::default().fellow_types().is_empty());
    }

    #[test]
    fn variant_only_dimensions_are_absent() {
        let fellow = Fellow {
            status: Some(FellowStatus::Flagged),
            ..Fellow::default()
        };
        assert_eq!(fellow.sector(), None);
        assert_eq!(Person::status(&fellow), Some(&FellowStatus::Flagged));

        let alumnus = Alumnus {
            sector: Some("Academia".into()),
            ..Alumnus::default()
        };
        assert_eq!(alumnus.sector(), Some("Academia"));
        assert_eq!(Person::status(&alumnus), None);
    }

    #[test]
    fn office_and_engagement_follow_variant_fields() {
        let alumnus = Alumnus {
            office_served: Some("Rep. Ro Khanna (D-CA)".into()),
            last_engaged: Some("2025-09-20".into()),
            ..Alumnus::default()
        };
        assert_eq!(alumnus.office(), Some("Rep. Ro Khanna (D-CA)"));
        assert_eq!(alumnus.last_engaged(), Some("2025-09-20"));
    }

    #[test]
    fn find_by_id_matches_exactly() {
        let records = vec![
            Fellow {
                id: "fel-001".into(),
                ..Fellow::default()
            },
            Fellow {
                id: "fel-002".into(),
                ..Fellow::default()
            },
        ];
        assert_eq!(find_by_id(&records, "fel-002").map(|f| f.id.as_str()), Some("fel-002"));
        assert!(find_by_id(&records, "fel-00").is_none());
    }
}
