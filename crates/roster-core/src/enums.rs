//! Status and kind enums for roster records.
//!
//! [`FellowStatus`] serializes as its kebab-case string (`on-track`,
//! `flagged`, `ending-soon`). Values outside the known set are kept verbatim
//! in [`FellowStatus::Other`] so they survive a load/serialize cycle.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// FellowStatus
// ---------------------------------------------------------------------------

/// Authoritative lifecycle flag of a current fellow.
///
/// Never derived from dates: an `on-track` fellow whose end date is close
/// stays `on-track` until someone changes it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FellowStatus {
    OnTrack,
    Flagged,
    EndingSoon,
    /// A status string the roster does not know about.
    Other(String),
}

impl FellowStatus {
    /// Sort rank of a status that is not one of the known three.
    pub const UNKNOWN_PRIORITY: u8 = 99;

    /// Interpret a raw status value.
    ///
    /// Recognizes the canonical kebab-case values and the labels used by the
    /// remote table (`Active`, `On Track`, `Flagged`, `Ending Soon`),
    /// ignoring case and `_`/space separators. Anything else is kept as
    /// [`FellowStatus::Other`].
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "on-track" | "active" => Self::OnTrack,
            "flagged" => Self::Flagged,
            "ending-soon" => Self::EndingSoon,
            _ => Self::Other(raw.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::OnTrack => "on-track",
            Self::Flagged => "flagged",
            Self::EndingSoon => "ending-soon",
            Self::Other(raw) => raw,
        }
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::OnTrack => "On Track",
            Self::Flagged => "Flagged",
            Self::EndingSoon => "Ending Soon",
            Self::Other(raw) => raw,
        }
    }

    /// Urgency rank, lower is more urgent.
    ///
    /// ```text
    /// flagged (0) → ending-soon (1) → on-track (2) → anything else (99)
    /// ```
    #[must_use]
    pub const fn priority(&self) -> u8 {
        match self {
            Self::Flagged => 0,
            Self::EndingSoon => 1,
            Self::OnTrack => 2,
            Self::Other(_) => Self::UNKNOWN_PRIORITY,
        }
    }
}

impl From<String> for FellowStatus {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<FellowStatus> for String {
    fn from(status: FellowStatus) -> Self {
        match status {
            FellowStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for FellowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_serde_roundtrip {
        ($name:ident, $variant:expr, $expected_str:expr) => {
            #[test]
            fn $name() {
                let val = $variant;
                let json = serde_json::to_string(&val).unwrap();
                assert_eq!(json, format!("\"{}\"", $expected_str));
                let recovered: FellowStatus = serde_json::from_str(&json).unwrap();
                assert_eq!(recovered, val);
            }
        };
    }

    test_serde_roundtrip!(status_on_track, FellowStatus::OnTrack, "on-track");
    test_serde_roundtrip!(status_flagged, FellowStatus::Flagged, "flagged");
    test_serde_roundtrip!(status_ending_soon, FellowStatus::EndingSoon, "ending-soon");
    test_serde_roundtrip!(
        status_unknown_passthrough,
        FellowStatus::Other("On Leave".into()),
        "On Leave"
    );

    #[test]
    fn remote_labels_map_to_known_statuses() {
        assert_eq!(FellowStatus::parse("Active"), FellowStatus::OnTrack);
        assert_eq!(FellowStatus::parse("On Track"), FellowStatus::OnTrack);
        assert_eq!(FellowStatus::parse("Ending Soon"), FellowStatus::EndingSoon);
        assert_eq!(FellowStatus::parse("FLAGGED"), FellowStatus::Flagged);
        assert_eq!(FellowStatus::parse("ending_soon"), FellowStatus::EndingSoon);
    }

    #[test]
    fn unknown_status_keeps_raw_text() {
        let status = FellowStatus::parse("Paused ");
        assert_eq!(status, FellowStatus::Other("Paused ".into()));
        assert_eq!(status.as_str(), "Paused ");
    }

    #[test]
    fn priority_orders_most_urgent_first() {
        assert!(FellowStatus::Flagged.priority() < FellowStatus::EndingSoon.priority());
        assert!(FellowStatus::EndingSoon.priority() < FellowStatus::OnTrack.priority());
        assert_eq!(
            FellowStatus::Other("x".into()).priority(),
            FellowStatus::UNKNOWN_PRIORITY
        );
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(format!("{}", FellowStatus::EndingSoon), "ending-soon");
        assert_eq!(FellowStatus::Flagged.label(), "Flagged");
    }
}
