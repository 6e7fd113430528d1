//! Phase heading extraction.

use regex::Regex;
use serde::Serialize;
use spec_hooks_core::{LineIndex, Location};
use std::sync::LazyLock;

/// `## Phase 2: Design`, `# phase 3`, `### Phase 4：…`
static PHASE_HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^#+[ \t]*Phase[ \t]+(\d+)(?:[:：\s]|$)").expect("valid regex")
});

/// A numbered section of a specification document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Phase {
    /// Phase number from the heading.
    pub number: u32,
    /// Heading text without the leading `#`s.
    pub title: String,
    /// Where the heading line starts.
    pub location: Location,
}

/// Phase headings sorted by position.
#[derive(Debug, Clone, Default)]
pub struct PhaseIndex {
    phases: Vec<Phase>,
}

impl PhaseIndex {
    /// Extracts every phase heading from `content`.
    #[must_use]
    pub fn extract(content: &str, lines: &LineIndex) -> Self {
        let phases = PHASE_HEADING_RE
            .captures_iter(content)
            .filter_map(|caps| {
                let heading = caps.get(0)?;
                let number = caps.get(1)?.as_str().parse().ok()?;
                let line_end = content[heading.start()..]
                    .find('\n')
                    .map_or(content.len(), |i| heading.start() + i);
                let title = content[heading.start()..line_end]
                    .trim_start_matches('#')
                    .trim()
                    .to_owned();
                Some(Phase {
                    number,
                    title,
                    location: lines.location(heading.start()),
                })
            })
            .collect();
        Self { phases }
    }

    /// All phases in document order.
    #[must_use]
    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    /// Returns true if the document has no phase structure.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    /// The phase whose heading is the last one at or before `offset`.
    #[must_use]
    pub fn owner_at(&self, offset: usize) -> Option<&Phase> {
        let after = self.phases.partition_point(|p| p.location.offset <= offset);
        after.checked_sub(1).map(|i| &self.phases[i])
    }

    /// The highest-numbered phase.
    #[must_use]
    pub fn highest(&self) -> Option<&Phase> {
        self.phases.iter().max_by_key(|p| p.number)
    }
}
