//! Output formatting for the check command.

use anyhow::Result;
use spec_hooks_review::{AllowReason, GateDecision};

use super::check::FileResult;
use crate::OutputFormat;

/// Print check results in the specified format.
pub fn print(results: &[FileResult], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(results),
        OutputFormat::Json => print_json(results)?,
        OutputFormat::Compact => print_compact(results),
    }
    Ok(())
}

fn print_text(results: &[FileResult]) {
    for result in results {
        if result.architecture.is_none() && result.review.is_none() {
            continue;
        }
        println!("{}", result.path.display());

        if let Some(report) = &result.architecture {
            println!(
                "  layer {} ({}), {} import(s) checked",
                report.layer, report.ecosystem, report.imports_checked
            );
            for v in &report.violations {
                println!(
                    "  \x1b[33mwarning\x1b[0m: {} ({}) at {}, {} may depend on: {}",
                    v.dependency,
                    v.dependency_layer,
                    v.location,
                    v.layer,
                    if report.allowed.is_empty() {
                        "nothing".to_owned()
                    } else {
                        report.allowed.join(", ")
                    }
                );
            }
        }

        match &result.review {
            Some(GateDecision::Deny(b)) => println!(
                "  \x1b[31merror\x1b[0m: Phase {} is {}, Phase {} cannot be edited yet",
                b.blocking_phase,
                b.status.map_or("unmarked", |s| s.as_str()),
                b.editing_phase
            ),
            Some(GateDecision::Allow { reason }) => {
                println!("  review gate: open ({})", describe(*reason));
            }
            None => {}
        }
        println!();
    }

    let violations: usize = results.iter().map(FileResult::violation_count).sum();
    let blocked = results.iter().filter(|r| r.is_blocked()).count();
    let summary_color = if blocked > 0 {
        "\x1b[31m"
    } else if violations > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };

    println!(
        "{}Found {} layer violation(s), {} blocked document(s) in {} file(s)\x1b[0m",
        summary_color,
        violations,
        blocked,
        results.len()
    );
}

fn describe(reason: AllowReason) -> &'static str {
    match reason {
        AllowReason::NotGated => "not a gated document",
        AllowReason::NoPhases => "no phase headings",
        AllowReason::OutsidePhases => "outside every phase",
        AllowReason::FirstPhase => "first phase",
        AllowReason::PriorPhasesApproved => "all earlier phases approved",
    }
}

fn print_json(results: &[FileResult]) -> Result<()> {
    let json = serde_json::to_string_pretty(results)?;
    println!("{json}");
    Ok(())
}

fn print_compact(results: &[FileResult]) {
    for result in results {
        if let Some(report) = &result.architecture {
            for v in &report.violations {
                println!(
                    "{}:{}: warning [layer] {} -> {} ({})",
                    result.path.display(),
                    v.location,
                    v.layer,
                    v.dependency_layer,
                    v.dependency,
                );
            }
        }
        if let Some(GateDecision::Deny(b)) = &result.review {
            println!(
                "{}: error [phase-review] Phase {} not approved, Phase {} blocked",
                result.path.display(),
                b.blocking_phase,
                b.editing_phase,
            );
        }
    }
}
