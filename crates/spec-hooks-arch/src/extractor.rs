//! Language-agnostic import extraction types and trait.
//!
//! `ImportExtractor` is the extension point for adding new import syntaxes.
//! Extraction is lexical and best-effort: extractors do not understand
//! comments, string literals that look like imports, or conditional and
//! dynamic imports, so they can both over- and under-report.

use spec_hooks_core::Location;

use crate::config::ImportSyntax;
use crate::syntax::{EsModuleImports, JavaImports, SwiftImports};

/// A single dependency reference found in source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRef {
    /// Referenced module, package or class (e.g., `com.example.domain.Order`).
    pub token: String,
    /// Where the import statement starts.
    pub location: Location,
}

/// Trait for syntax-specific import extraction.
///
/// Implement this to add support for a new import syntax. Results keep
/// duplicates and are ordered by position in the source.
pub trait ImportExtractor: Send + Sync {
    /// Syntax this extractor handles.
    fn syntax(&self) -> ImportSyntax;

    /// Extract every import reference from source code.
    fn extract(&self, source: &str) -> Vec<ImportRef>;
}

static JAVA: JavaImports = JavaImports;
static SWIFT: SwiftImports = SwiftImports;
static ES_MODULE: EsModuleImports = EsModuleImports;

/// The extractor registered for a syntax.
#[must_use]
pub fn extractor_for(syntax: ImportSyntax) -> &'static dyn ImportExtractor {
    match syntax {
        ImportSyntax::Java => &JAVA,
        ImportSyntax::Swift => &SWIFT,
        ImportSyntax::EsModule => &ES_MODULE,
    }
}
