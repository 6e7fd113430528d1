//! Which documents the review gate applies to.

use glob::{MatchOptions, Pattern};
use serde::Deserialize;

/// Review gate configuration (`[review]` table).
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewConfig {
    /// Glob patterns matched case-insensitively against the file's base name.
    #[serde(default = "default_documents")]
    pub documents: Vec<String>,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            documents: default_documents(),
        }
    }
}

fn default_documents() -> Vec<String> {
    vec!["*.spec.md".into(), "*.prd.md".into(), "prd.md".into()]
}

/// Errors in the review configuration.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ConfigError {
    /// A document pattern is not a valid glob.
    #[error("invalid document pattern '{pattern}': {message}")]
    #[diagnostic(
        code(spec_hooks::review::pattern),
        help("patterns are matched against the base name, e.g. \"*.spec.md\"")
    )]
    Pattern {
        /// The offending pattern.
        pattern: String,
        /// Glob error detail.
        message: String,
    },
}

impl ReviewConfig {
    /// Compile the document patterns.
    ///
    /// # Errors
    ///
    /// Returns error for the first invalid glob pattern.
    pub fn matcher(&self) -> Result<DocumentMatcher, ConfigError> {
        let patterns = self
            .documents
            .iter()
            .map(|p| {
                Pattern::new(p).map_err(|e| ConfigError::Pattern {
                    pattern: p.clone(),
                    message: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(DocumentMatcher { patterns })
    }
}

/// Compiled document patterns.
#[derive(Debug, Clone)]
pub struct DocumentMatcher {
    patterns: Vec<Pattern>,
}

impl DocumentMatcher {
    const OPTIONS: MatchOptions = MatchOptions {
        case_sensitive: false,
        require_literal_separator: false,
        require_literal_leading_dot: false,
    };

    /// Whether the file at `file_path` is a gated specification document.
    #[must_use]
    pub fn matches(&self, file_path: &str) -> bool {
        let base = file_path.rsplit(['/', '\\']).next().unwrap_or(file_path);
        self.patterns
            .iter()
            .any(|p| p.matches_with(base, Self::OPTIONS))
    }
}
