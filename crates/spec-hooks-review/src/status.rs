//! Review status markers.
//!
//! A marker is an HTML comment placed under a phase heading:
//!
//! ```text
//! <!-- REVIEW STATUS: APPROVED -->
//! <!-- REVIEW STATUS: approved - 2026-01-05T10:00:00.000Z - alice -->
//! ```
//!
//! Only the four statuses below are recognized; anything else is not a
//! marker at all.

use regex::Regex;
use serde::Serialize;
use spec_hooks_core::{LineIndex, Location};
use std::str::FromStr;
use std::sync::LazyLock;

static STATUS_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)<!--[ \t]*REVIEW[ \t]+STATUS:[ \t]*(APPROVED|DRAFT|REVIEWING|REJECTED)\b[ \t]*(?:-[ \t]*([^\n]*?))?[ \t]*-->",
    )
    .expect("valid regex")
});

/// Review state of a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReviewStatus {
    /// Being written.
    Draft,
    /// Under review.
    Reviewing,
    /// Passed review.
    Approved,
    /// Sent back.
    Rejected,
}

impl ReviewStatus {
    /// Canonical uppercase spelling.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Reviewing => "REVIEWING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        }
    }
}

impl std::fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognized status word.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown review status '{0}'")]
pub struct UnknownStatus(pub String);

impl FromStr for ReviewStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "DRAFT" => Ok(Self::Draft),
            "REVIEWING" => Ok(Self::Reviewing),
            "APPROVED" => Ok(Self::Approved),
            "REJECTED" => Ok(Self::Rejected),
            _ => Err(UnknownStatus(s.to_owned())),
        }
    }
}

/// One status marker found in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusMarker {
    /// Normalized status.
    pub status: ReviewStatus,
    /// Free text after the status (timestamp, reviewer), if any.
    pub context: Option<String>,
    /// Where the marker starts.
    pub location: Location,
}

impl StatusMarker {
    /// Extracts every marker from `content`, in document order.
    #[must_use]
    pub fn extract_all(content: &str, lines: &LineIndex) -> Vec<Self> {
        STATUS_MARKER_RE
            .captures_iter(content)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let status = caps.get(1)?.as_str().parse().ok()?;
                let context = caps
                    .get(2)
                    .map(|m| m.as_str().trim().to_owned())
                    .filter(|c| !c.is_empty());
                Some(Self {
                    status,
                    context,
                    location: lines.location(whole.start()),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn markers(content: &str) -> Vec<StatusMarker> {
        StatusMarker::extract_all(content, &LineIndex::new(content))
    }

    #[test]
    fn bare_marker() {
        let m = markers("<!-- REVIEW STATUS: APPROVED -->");
        assert_eq!(m.len(), 1);
        assert_eq!(m[0].status, ReviewStatus::Approved);
        assert_eq!(m[0].context, None);
    }

    #[test]
    fn marker_with_timestamp_and_reviewer() {
        let m = markers("x\n<!-- REVIEW STATUS: APPROVED - 2026-01-05T10:00:00.000Z - alice -->\n");
        assert_eq!(m.len(), 1);
        assert_eq!(
            m[0].context.as_deref(),
            Some("2026-01-05T10:00:00.000Z - alice")
        );
        assert_eq!(m[0].location.line, 2);
    }

    #[test]
    fn status_is_case_insensitive_and_normalized() {
        let m = markers("<!--review status: reviewing-->");
        assert_eq!(m[0].status, ReviewStatus::Reviewing);
        assert_eq!(m[0].status.to_string(), "REVIEWING");
    }

    #[test]
    fn unknown_status_is_not_a_marker() {
        assert!(markers("<!-- REVIEW STATUS: PENDING -->").is_empty());
        assert!(markers("<!-- REVIEW STATUS: APPROVEDISH -->").is_empty());
    }

    #[test]
    fn all_statuses_in_order() {
        let doc = "<!-- REVIEW STATUS: DRAFT -->\n<!-- REVIEW STATUS: REJECTED - needs work -->\n";
        let m = markers(doc);
        assert_eq!(
            m.iter().map(|x| x.status).collect::<Vec<_>>(),
            [ReviewStatus::Draft, ReviewStatus::Rejected]
        );
        assert_eq!(m[1].context.as_deref(), Some("needs work"));
    }

    #[test]
    fn parse_round_trips_canonical_names() {
        for s in ["DRAFT", "REVIEWING", "APPROVED", "REJECTED"] {
            assert_eq!(s.parse::<ReviewStatus>().unwrap().as_str(), s);
        }
        assert!("done".parse::<ReviewStatus>().is_err());
    }
}
