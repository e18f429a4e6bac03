//! Bundled sample roster.
//!
//! Backs the static record source so the roster can be explored without
//! remote credentials. Dates are fixed; pair them with an explicit `today`
//! when results need to be reproducible.

use crate::entities::{Alumnus, Fellow};
use crate::enums::FellowStatus;

const CIF: &str = "Congressional Innovation Fellow";
const SENIOR_CIF: &str = "Senior Congressional Innovation Fellow";

fn text(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

struct FellowRow {
    id: &'static str,
    name: &'static str,
    email: &'static str,
    phone: &'static str,
    fellow_type: &'static str,
    party: &'static str,
    office: &'static str,
    chamber: &'static str,
    start: &'static str,
    end: &'static str,
    status: FellowStatus,
    last_check_in: &'static str,
    prior_role: &'static str,
    education: &'static str,
    notes: &'static str,
}

impl FellowRow {
    fn into_fellow(self) -> Fellow {
        let handle = self.name.to_ascii_lowercase().replace(' ', "");
        Fellow {
            id: self.id.to_string(),
            name: self.name.to_string(),
            email: text(self.email),
            phone: text(self.phone),
            fellow_type: text(self.fellow_type),
            party: text(self.party),
            office: text(self.office),
            chamber: text(self.chamber),
            linkedin: Some(format!("https://linkedin.com/in/{handle}")),
            start_date: text(self.start),
            end_date: text(self.end),
            cohort: Some("2025".to_string()),
            status: Some(self.status),
            last_check_in: text(self.last_check_in),
            prior_role: text(self.prior_role),
            education: text(self.education),
            notes: text(self.notes),
            ..Fellow::default()
        }
    }
}

/// The sample set of current fellows.
#[must_use]
pub fn fellows() -> Vec<Fellow> {
    vec![
        FellowRow {
            id: "fel-001",
            name: "Sarah Chen",
            email: "schen@techcongress.io",
            phone: "(415) 555-0101",
            fellow_type: CIF,
            party: "Democrat",
            office: "Sen. Maria Cantwell (D-WA)",
            chamber: "Senate",
            start: "2025-09-01",
            end: "2026-08-31",
            status: FellowStatus::OnTrack,
            last_check_in: "2026-01-15",
            prior_role: "ML Engineer at Google",
            education: "PhD Computer Science, Stanford",
            notes: "",
        },
        FellowRow {
            id: "fel-002",
            name: "Marcus Johnson",
            email: "mjohnson@techcongress.io",
            phone: "(202) 555-0102",
            fellow_type: CIF,
            party: "Democrat",
            office: "Rep. Ro Khanna (D-CA)",
            chamber: "House",
            start: "2025-09-01",
            end: "2026-08-31",
            status: FellowStatus::OnTrack,
            last_check_in: "2025-12-01",
            prior_role: "Security Researcher at MITRE",
            education: "MS Cybersecurity, Georgia Tech",
            notes: "",
        },
        FellowRow {
            id: "fel-003",
            name: "Emily Rodriguez",
            email: "erodriguez@techcongress.io",
            phone: "(650) 555-0103",
            fellow_type: SENIOR_CIF,
            party: "Democrat",
            office: "Senate Commerce Committee",
            chamber: "Senate",
            start: "2025-09-01",
            end: "2026-08-31",
            status: FellowStatus::Flagged,
            last_check_in: "2026-01-20",
            prior_role: "Policy Analyst at Meta",
            education: "JD/MBA, Harvard",
            notes: "Requested placement change discussion",
        },
        FellowRow {
            id: "fel-004",
            name: "David Park",
            email: "dpark@techcongress.io",
            phone: "(510) 555-0104",
            fellow_type: CIF,
            party: "Republican",
            office: "Rep. Jay Obernolte (R-CA)",
            chamber: "House",
            start: "2025-01-01",
            end: "2026-06-30",
            status: FellowStatus::EndingSoon,
            last_check_in: "2026-01-25",
            prior_role: "Quantum Computing Researcher at IBM",
            education: "PhD Physics, Caltech",
            notes: "Exploring extension options",
        },
        FellowRow {
            id: "fel-005",
            name: "Aisha Patel",
            email: "apatel@techcongress.io",
            phone: "(312) 555-0105",
            fellow_type: CIF,
            party: "Democrat",
            office: "House Energy & Commerce Committee",
            chamber: "House",
            start: "2025-09-01",
            end: "2026-08-31",
            status: FellowStatus::OnTrack,
            last_check_in: "2026-01-28",
            prior_role: "Product Manager at Apple",
            education: "MS HCI, Carnegie Mellon",
            notes: "",
        },
        FellowRow {
            id: "fel-006",
            name: "James Wilson",
            email: "jwilson@techcongress.io",
            phone: "(703) 555-0106",
            fellow_type: SENIOR_CIF,
            party: "Republican",
            office: "Sen. Todd Young (R-IN)",
            chamber: "Senate",
            start: "2025-09-01",
            end: "2026-08-31",
            status: FellowStatus::OnTrack,
            last_check_in: "2026-01-22",
            prior_role: "NSA Cybersecurity Analyst",
            education: "MS Computer Science, MIT",
            notes: "",
        },
        FellowRow {
            id: "fel-007",
            name: "Michael Torres",
            email: "mtorres@techcongress.io",
            phone: "(206) 555-0108",
            fellow_type: CIF,
            party: "Democrat",
            office: "Rep. Suzan DelBene (D-WA)",
            chamber: "House",
            start: "2025-09-01",
            end: "2026-08-31",
            status: FellowStatus::OnTrack,
            last_check_in: "2025-12-10",
            prior_role: "Trade Policy Analyst at USTR",
            education: "MPP, Georgetown",
            notes: "",
        },
        FellowRow {
            id: "fel-008",
            name: "Rachel Kim",
            email: "rkim@techcongress.io",
            phone: "(617) 555-0109",
            fellow_type: CIF,
            party: "Democrat",
            office: "House Science Committee",
            chamber: "House",
            start: "2025-09-01",
            end: "2026-08-31",
            status: FellowStatus::OnTrack,
            last_check_in: "2026-01-30",
            prior_role: "Research Scientist at OpenAI",
            education: "PhD AI, UC Berkeley",
            notes: "",
        },
    ]
    .into_iter()
    .map(FellowRow::into_fellow)
    .collect()
}

struct AlumnusRow {
    id: &'static str,
    name: &'static str,
    cohort: &'static str,
    fellow_type: &'static str,
    office_served: &'static str,
    chamber: &'static str,
    party: &'static str,
    current_role: &'static str,
    current_org: &'static str,
    sector: &'static str,
    location: &'static str,
    email: &'static str,
    phone: &'static str,
    last_engaged: &'static str,
    engagement_notes: &'static str,
    notes: &'static str,
}

impl AlumnusRow {
    fn into_alumnus(self) -> Alumnus {
        let handle = self.name.to_ascii_lowercase().replace(' ', "");
        Alumnus {
            id: self.id.to_string(),
            name: self.name.to_string(),
            email: text(self.email),
            phone: text(self.phone),
            cohort: text(self.cohort),
            fellow_types: text(self.fellow_type).into_iter().collect(),
            office_served: text(self.office_served),
            chamber: text(self.chamber),
            party: text(self.party),
            current_role: text(self.current_role),
            current_org: text(self.current_org),
            sector: text(self.sector),
            location: text(self.location),
            linkedin: Some(format!("https://linkedin.com/in/{handle}")),
            last_engaged: text(self.last_engaged),
            engagement_notes: text(self.engagement_notes),
            notes: text(self.notes),
            ..Alumnus::default()
        }
    }
}

/// The sample set of alumni.
#[must_use]
pub fn alumni() -> Vec<Alumnus> {
    vec![
        AlumnusRow {
            id: "alm-001",
            name: "Jordan Rivera",
            cohort: "2025",
            fellow_type: CIF,
            office_served: "Sen. Maria Cantwell (D-WA)",
            chamber: "Senate",
            party: "Democrat",
            current_role: "Senior Policy Advisor",
            current_org: "White House OSTP",
            sector: "Government",
            location: "Washington, DC",
            email: "jordan.rivera@email.com",
            phone: "(202) 555-0142",
            last_engaged: "2026-01-15",
            engagement_notes: "Spoke at Jan 2026 cohort orientation. Mentoring two current fellows.",
            notes: "Strong interest in AI policy. Open to future advisory roles.",
        },
        AlumnusRow {
            id: "alm-002",
            name: "Priya Sharma",
            cohort: "2024",
            fellow_type: SENIOR_CIF,
            office_served: "Rep. Ro Khanna (D-CA)",
            chamber: "House",
            party: "Democrat",
            current_role: "Director of Technology Policy",
            current_org: "Brookings Institution",
            sector: "Policy/Think Tank",
            location: "Washington, DC",
            email: "priya.sharma@email.com",
            phone: "(202) 555-0198",
            last_engaged: "2025-09-20",
            engagement_notes: "Participated in alumni panel at 2025 annual event.",
            notes: "",
        },
        AlumnusRow {
            id: "alm-003",
            name: "Marcus Thompson",
            cohort: "2023",
            fellow_type: CIF,
            office_served: "Sen. Todd Young (R-IN)",
            chamber: "Senate",
            party: "Republican",
            current_role: "Product Manager",
            current_org: "Google",
            sector: "Private",
            location: "San Francisco, CA",
            email: "marcus.t@email.com",
            phone: "(415) 555-0167",
            last_engaged: "2025-03-10",
            engagement_notes: "Helped review fellowship job postings.",
            notes: "Relocated to SF after fellowship.",
        },
        AlumnusRow {
            id: "alm-004",
            name: "Elena Vasquez",
            cohort: "2022",
            fellow_type: "Congressional Innovation Scholar",
            office_served: "Rep. Will Hurd (R-TX)",
            chamber: "House",
            party: "Republican",
            current_role: "Assistant Professor of Computer Science",
            current_org: "Georgetown University",
            sector: "Academia",
            location: "Washington, DC",
            email: "elena.v@email.com",
            phone: "(202) 555-0234",
            last_engaged: "2024-11-05",
            engagement_notes: "Guest lectured at Georgetown event co-hosted with TechCongress.",
            notes: "Researches tech policy and governance.",
        },
        AlumnusRow {
            id: "alm-005",
            name: "David Kim",
            cohort: "2024",
            fellow_type: CIF,
            office_served: "Sen. Ben Sasse (R-NE)",
            chamber: "Senate",
            party: "Republican",
            current_role: "Policy Director",
            current_org: "Electronic Frontier Foundation",
            sector: "Nonprofit",
            location: "San Francisco, CA",
            email: "david.kim@email.com",
            phone: "(415) 555-0189",
            last_engaged: "2026-02-01",
            engagement_notes: "Referred a candidate for the 2027 cohort. Active in alumni Slack.",
            notes: "",
        },
        AlumnusRow {
            id: "alm-006",
            name: "Sarah Chen",
            cohort: "2023",
            fellow_type: SENIOR_CIF,
            office_served: "Sen. Mark Warner (D-VA)",
            chamber: "Senate",
            party: "Democrat",
            current_role: "VP of Public Policy",
            current_org: "Stripe",
            sector: "Private",
            location: "New York, NY",
            email: "sarah.chen@email.com",
            phone: "(212) 555-0156",
            last_engaged: "2025-06-12",
            engagement_notes: "Hosted a TechCongress networking event in NYC.",
            notes: "Well-connected in fintech policy circles.",
        },
        AlumnusRow {
            id: "alm-007",
            name: "Amara Osei",
            cohort: "2024",
            fellow_type: "Congressional Digital Service Fellow",
            office_served: "Rep. Derek Kilmer (D-WA)",
            chamber: "House",
            party: "Democrat",
            current_role: "Engineering Manager",
            current_org: "US Digital Service",
            sector: "Government",
            location: "Washington, DC",
            email: "amara.osei@email.com",
            phone: "(202) 555-0271",
            last_engaged: "2026-01-20",
            engagement_notes: "Helped review digital service curriculum for 2026 cohort.",
            notes: "Background in civic tech and open source.",
        },
        AlumnusRow {
            id: "alm-008",
            name: "Raj Mehta",
            cohort: "",
            fellow_type: "AI Security Fellow",
            office_served: "National Institute of Standards and Technology",
            chamber: "Executive Branch",
            party: "",
            current_role: "Research Scientist",
            current_org: "Center for AI Safety",
            sector: "Nonprofit",
            location: "San Francisco, CA",
            email: "raj.mehta@email.com",
            phone: "(415) 555-0312",
            last_engaged: "2026-02-05",
            engagement_notes: "Provided briefing materials on AI safety for current fellows.",
            notes: "Published researcher in AI alignment.",
        },
    ]
    .into_iter()
    .map(AlumnusRow::into_alumnus)
    .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn sample_ids_are_unique() {
        let fellows = fellows();
        let ids: HashSet<_> = fellows.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids.len(), fellows.len());

        let alumni = alumni();
        let ids: HashSet<_> = alumni.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids.len(), alumni.len());
    }

    #[test]
    fn empty_sample_values_are_absent() {
        let fellows = fellows();
        assert!(fellows[0].notes.is_none());
        assert_eq!(fellows[2].notes.as_deref(), Some("Requested placement change discussion"));

        let raj = alumni().into_iter().find(|a| a.name == "Raj Mehta").unwrap();
        assert!(raj.cohort.is_none());
        assert!(raj.party.is_none());
    }

    #[test]
    fn sample_status_mix() {
        let fellows = fellows();
        let count = |status: FellowStatus| {
            fellows
                .iter()
                .filter(|f| f.status.as_ref() == Some(&status))
                .count()
        };
        assert_eq!(count(FellowStatus::OnTrack), 6);
        assert_eq!(count(FellowStatus::Flagged), 1);
        assert_eq!(count(FellowStatus::EndingSoon), 1);
    }
}
