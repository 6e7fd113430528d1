//! Check command: runs both checkers on files from disk.
//!
//! Useful for trying rulesets out without a host editor. Layer violations
//! are reported as warnings; a blocked document fails the command.

use anyhow::{Context, Result};
use serde::Serialize;
use spec_hooks_arch::{ArchRuleEngine, LayerReport};
use spec_hooks_review::{GateDecision, PhaseGate};
use std::path::{Path, PathBuf};

use crate::settings::Settings;
use crate::OutputFormat;

/// Findings for one file.
#[derive(Debug, Serialize)]
pub struct FileResult {
    /// Path as given on the command line.
    pub path: PathBuf,
    /// Layer check report, when the file classified into a layer.
    pub architecture: Option<LayerReport>,
    /// Gate decision for editing the document's last phase, when gated.
    pub review: Option<GateDecision>,
}

impl FileResult {
    /// Returns true if the review gate refused this document.
    #[must_use]
    pub fn is_blocked(&self) -> bool {
        self.review.as_ref().is_some_and(|d| !d.is_allowed())
    }

    /// Number of layer violations.
    #[must_use]
    pub fn violation_count(&self) -> usize {
        self.architecture.as_ref().map_or(0, |r| r.violations.len())
    }
}

/// Runs the check command. Returns the process exit code.
pub fn run(paths: &[PathBuf], format: OutputFormat, settings: &Settings) -> Result<i32> {
    let engine = ArchRuleEngine::new(settings.architecture.clone());
    let gate = PhaseGate::new(&settings.review).context("Review config validation failed")?;

    let results = paths
        .iter()
        .map(|p| check_file(p, &engine, &gate))
        .collect::<Result<Vec<_>>>()?;

    super::output::print(&results, format)?;

    Ok(i32::from(results.iter().any(FileResult::is_blocked)))
}

fn check_file(path: &Path, engine: &ArchRuleEngine, gate: &PhaseGate) -> Result<FileResult> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let display = path.to_string_lossy();

    let architecture = engine.check(&display, &content);
    let review = gate
        .applies_to(&display)
        .then(|| gate.evaluate(&display, &content, None));

    Ok(FileResult {
        path: path.to_path_buf(),
        architecture,
        review,
    })
}
