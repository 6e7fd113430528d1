//! The sequential phase approval gate.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::config::{ConfigError, DocumentMatcher, ReviewConfig};
use crate::document::ReviewDocument;
use crate::status::ReviewStatus;

/// Status every earlier phase must carry.
pub const REQUIRED_STATUS: ReviewStatus = ReviewStatus::Approved;

/// Where in the document the edit happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditHint {
    /// 1-indexed line number. Lines past the end belong to the last phase.
    Line(usize),
    /// Byte offset into the content.
    Offset(usize),
}

impl EditHint {
    fn offset(self, doc: &ReviewDocument) -> usize {
        match self {
            Self::Line(line) => doc.lines().line_start(line.max(1)).unwrap_or(usize::MAX),
            Self::Offset(offset) => offset,
        }
    }
}

/// Why an edit was allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AllowReason {
    /// The file is not a gated document.
    NotGated,
    /// The document has no phase headings.
    NoPhases,
    /// The edit position precedes every phase heading.
    OutsidePhases,
    /// Phase 1 (or lower) needs no prior approval.
    FirstPhase,
    /// Every earlier phase is approved.
    PriorPhasesApproved,
}

/// A refused edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Blocked {
    /// Phase being edited.
    pub editing_phase: u32,
    /// Lowest earlier phase without approval.
    pub blocking_phase: u32,
    /// Its current status; `None` when it has no marker.
    pub status: Option<ReviewStatus>,
}

impl Blocked {
    /// Denial message with an approval-marker template stamped at `now`.
    #[must_use]
    pub fn message(&self, now: DateTime<Utc>) -> String {
        let status = self.status.map_or("unmarked", ReviewStatus::as_str);
        let timestamp = now.to_rfc3339_opts(SecondsFormat::Millis, true);
        format!(
            "⚠️ Phase review gate: Phase {blocking} must pass human review before Phase {editing} can be edited\n\
             \n\
             Current Phase {blocking} status: {status}\n\
             Required status: {REQUIRED_STATUS}\n\
             \n\
             Add the approval marker under the Phase {blocking} heading:\n\
             <!-- REVIEW STATUS: {REQUIRED_STATUS} - {timestamp} - {{reviewer}} -->\n\
             Review comments: {{review_comments}}",
            blocking = self.blocking_phase,
            editing = self.editing_phase,
        )
    }
}

/// Outcome of the gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "kebab-case")]
pub enum GateDecision {
    /// The edit may proceed.
    Allow {
        /// Why.
        reason: AllowReason,
    },
    /// The edit must not proceed.
    Deny(Blocked),
}

impl GateDecision {
    /// Returns true if the edit may proceed.
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow { .. })
    }

    fn allow(reason: AllowReason) -> Self {
        Self::Allow { reason }
    }
}

/// Blocks edits to phase N until phases 1..N-1 are approved.
#[derive(Debug, Clone)]
pub struct PhaseGate {
    documents: DocumentMatcher,
}

impl PhaseGate {
    /// Create a gate from config.
    ///
    /// # Errors
    ///
    /// Returns error if a document pattern is invalid.
    pub fn new(config: &ReviewConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            documents: config.matcher()?,
        })
    }

    /// Whether edits to this path are gated at all.
    #[must_use]
    pub fn applies_to(&self, file_path: &str) -> bool {
        self.documents.matches(file_path)
    }

    /// Decide on an edit to `file_path` whose full new content is `content`.
    #[must_use]
    pub fn evaluate(&self, file_path: &str, content: &str, hint: Option<EditHint>) -> GateDecision {
        if !self.applies_to(file_path) {
            return GateDecision::allow(AllowReason::NotGated);
        }
        let doc = ReviewDocument::parse(content);
        let decision = Self::decide(&doc, hint);
        tracing::debug!(file = file_path, ?decision, "phase gate evaluated");
        decision
    }

    /// Decide on an edit to an already parsed document.
    ///
    /// Without a hint the edited phase is the highest-numbered one; with a
    /// hint it is the phase owning that position.
    #[must_use]
    pub fn decide(doc: &ReviewDocument, hint: Option<EditHint>) -> GateDecision {
        let phases = doc.phases();
        if phases.is_empty() {
            return GateDecision::allow(AllowReason::NoPhases);
        }

        let editing = match hint {
            Some(h) => phases.owner_at(h.offset(doc)),
            None => phases.highest(),
        };
        let Some(editing) = editing.map(|p| p.number) else {
            return GateDecision::allow(AllowReason::OutsidePhases);
        };
        if editing <= 1 {
            return GateDecision::allow(AllowReason::FirstPhase);
        }

        for number in 1..editing {
            let status = doc.status_of(number);
            if status != Some(REQUIRED_STATUS) {
                return GateDecision::Deny(Blocked {
                    editing_phase: editing,
                    blocking_phase: number,
                    status,
                });
            }
        }

        GateDecision::allow(AllowReason::PriorPhasesApproved)
    }
}
