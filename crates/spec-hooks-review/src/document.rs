//! A parsed specification document: phases plus their current statuses.

use spec_hooks_core::LineIndex;
use std::collections::BTreeMap;

use crate::phase::PhaseIndex;
use crate::status::{ReviewStatus, StatusMarker};

/// Phase structure and review state of one document.
#[derive(Debug, Clone)]
pub struct ReviewDocument {
    lines: LineIndex,
    phases: PhaseIndex,
    /// phase number -> most recent marker under that phase.
    statuses: BTreeMap<u32, StatusMarker>,
}

impl ReviewDocument {
    /// Parses phases and status markers in one pass over each pattern.
    ///
    /// Each marker belongs to the nearest phase heading at or before it.
    /// Markers before the first heading are dropped, and a later marker for
    /// the same phase replaces an earlier one.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let lines = LineIndex::new(content);
        let phases = PhaseIndex::extract(content, &lines);

        let mut statuses = BTreeMap::new();
        for marker in StatusMarker::extract_all(content, &lines) {
            match phases.owner_at(marker.location.offset) {
                Some(phase) => {
                    statuses.insert(phase.number, marker);
                }
                None => tracing::debug!(
                    line = marker.location.line,
                    "status marker outside any phase, ignored"
                ),
            }
        }

        Self {
            lines,
            phases,
            statuses,
        }
    }

    /// Line table of the document.
    #[must_use]
    pub fn lines(&self) -> &LineIndex {
        &self.lines
    }

    /// Phase headings.
    #[must_use]
    pub fn phases(&self) -> &PhaseIndex {
        &self.phases
    }

    /// Current status of a phase, if it has a marker.
    #[must_use]
    pub fn status_of(&self, phase: u32) -> Option<ReviewStatus> {
        self.statuses.get(&phase).map(|m| m.status)
    }
}
