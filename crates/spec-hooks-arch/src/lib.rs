//! # spec-hooks-arch
//!
//! Layered-architecture checker for single file edits.
//!
//! Given a file path and its content, the checker classifies the file into
//! an ecosystem and layer, extracts its imports lexically, infers each
//! import's layer and reports the ones outside the layer's allow-list.
//! Findings are advisory: callers forward the edit regardless.
//!
//! - [`ArchConfig`] for TOML rulesets, including the built-in Java (DDD),
//!   Swift (MVVM), Vue 3 and TypeScript rulesets
//! - [`LayerResolver`] for path and import-token to layer mapping
//! - [`ImportExtractor`] trait with regex-based implementations
//! - [`ArchRuleEngine`] for producing a [`LayerReport`]

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod engine;
pub mod extractor;
pub mod layer;
mod report;
pub mod syntax;

pub use config::{ArchConfig, ConfigError, EcosystemDef, ImportSyntax};
pub use engine::{ArchRuleEngine, LayerReport, Violation};
pub use extractor::{extractor_for, ImportExtractor, ImportRef};
pub use layer::{Classification, LayerResolver};
