//! Byte offset to line/column mapping.

use serde::{Deserialize, Serialize};

/// Position of a match inside a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed, in bytes).
    pub column: usize,
    /// Byte offset from the start of the document.
    pub offset: usize,
}

impl Location {
    /// Creates a new location with explicit values.
    #[must_use]
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Line-start table for a single document.
///
/// Built once per document; lookups are a binary search over the
/// sorted line-start offsets.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Byte offset of the first character of every line, ascending.
    starts: Vec<usize>,
    len: usize,
}

impl LineIndex {
    /// Indexes the line starts of `text`.
    #[must_use]
    pub fn new(text: &str) -> Self {
        let mut starts = vec![0];
        starts.extend(
            text.bytes()
                .enumerate()
                .filter(|(_, b)| *b == b'\n')
                .map(|(i, _)| i + 1),
        );
        Self {
            starts,
            len: text.len(),
        }
    }

    /// Resolves a byte offset. Offsets past the end clamp to the end.
    #[must_use]
    pub fn location(&self, offset: usize) -> Location {
        let offset = offset.min(self.len);
        // Index of the last line start <= offset.
        let line_idx = self.starts.partition_point(|&s| s <= offset) - 1;
        Location::new(line_idx + 1, offset - self.starts[line_idx] + 1, offset)
    }

    /// Byte offset where the given 1-indexed line starts.
    ///
    /// Returns `None` for line `0` or lines past the end of the document.
    #[must_use]
    pub fn line_start(&self, line: usize) -> Option<usize> {
        line.checked_sub(1).and_then(|i| self.starts.get(i)).copied()
    }
}
