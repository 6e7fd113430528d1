//! spec-hooks CLI tool.
//!
//! Usage:
//! ```bash
//! spec-hooks architecture < payload.json
//! spec-hooks phase-review [--edit-line N] < payload.json
//! spec-hooks check [OPTIONS] <PATHS>...
//! spec-hooks list-rules
//! spec-hooks init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;
mod settings;

use settings::Settings;

/// Editor hooks for layered architecture and phased spec review
#[derive(Parser)]
#[command(name = "spec-hooks")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "SPEC_HOOKS_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Architecture layer hook (reads the edit payload on stdin, never blocks)
    Architecture,

    /// Phase review gate hook (reads the edit payload on stdin, exits 1 to deny)
    PhaseReview {
        /// 1-based line of the edit inside the new document content
        #[arg(long)]
        edit_line: Option<usize>,
    },

    /// Run both checkers on files from disk
    Check {
        /// Files to check
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// List the active layer rulesets and gated documents
    ListRules,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for check results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line-per-finding compact format.
    Compact,
}

/// Subcommands whose exit status is read by the host editor.
const HOOK_COMMANDS: &[&str] = &["architecture", "phase-review"];

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // A hook must not block the edit because of its own arguments.
        Err(e) if e.use_stderr() && invoked_as_hook() => {
            eprint!("{e}");
            std::process::exit(commands::hook::pass_through());
        }
        Err(e) => e.exit(),
    };

    // Hook stderr is shown to the user, so logging stays off unless asked for.
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("SPEC_HOOKS_LOG").unwrap_or_else(|_| EnvFilter::new("off"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let project_dir = match std::env::current_dir() {
        Ok(dir) => Some(dir),
        Err(e) => {
            tracing::warn!("working directory unavailable, skipping project config: {e}");
            None
        }
    };
    let source = config_resolver::resolve(project_dir.as_deref(), cli.config.as_deref());
    tracing::debug!("configuration: {source}");

    let code = match cli.command {
        Commands::Architecture => commands::architecture::run(source),
        Commands::PhaseReview { edit_line } => commands::phase_review::run(source, edit_line),
        Commands::Check { paths, format } => {
            let settings = Settings::load(source)?;
            commands::check::run(&paths, format, &settings)?
        }
        Commands::ListRules => {
            let settings = Settings::load(source)?;
            commands::list_rules::run(&settings);
            0
        }
        Commands::Init { force } => {
            commands::init::run(force)?;
            0
        }
    };

    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

fn invoked_as_hook() -> bool {
    std::env::args_os()
        .skip(1)
        .any(|arg| arg.to_str().is_some_and(|a| HOOK_COMMANDS.contains(&a)))
}
