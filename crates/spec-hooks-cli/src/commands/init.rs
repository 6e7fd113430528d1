//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

use crate::config_resolver::PROJECT_CONFIG_NAMES;

const CONFIG_TEMPLATE: &str = r#"# spec-hooks configuration
#
# Both sections are optional. Without [architecture] the built-in Java,
# Swift, Vue and TypeScript rulesets apply (see `spec-hooks list-rules`).

[review]
# Base-name patterns of documents guarded by the phase review gate.
documents = ["*.spec.md", "*.prd.md", "prd.md"]

# A custom [architecture] section replaces every built-in ruleset.
# `syntax` picks the import parser: java (`import a.b.C;`, the trailing `;`
# is required), swift (`import Module`) or es-module (`import x from '...'`).
#
# [architecture]
# priority = ["react"]
#
# [[architecture.ecosystems]]
# name = "react"
# title = "React layering"
# syntax = "es-module"
# rule = "pages → hooks → api"
#
# [[architecture.ecosystems.layers]]
# name = "pages"
# allows = ["hooks"]
#
# [[architecture.ecosystems.layers]]
# name = "hooks"
# allows = ["api"]
#
# [[architecture.ecosystems.layers]]
# name = "api"
#
# [[architecture.ecosystems.paths]]
# extensions = ["ts", "tsx"]
# fragments = ["/pages/"]
# layer = "pages"
#
# [[architecture.ecosystems.paths]]
# extensions = ["ts", "tsx"]
# fragments = ["/hooks/"]
# layer = "hooks"
#
# [[architecture.ecosystems.paths]]
# extensions = ["ts", "tsx"]
# fragments = ["/api/"]
# layer = "api"
#
# [[architecture.ecosystems.imports]]
# fragments = ["/hooks/"]
# layer = "hooks"
#
# [[architecture.ecosystems.imports]]
# fragments = ["/api/"]
# layer = "api"
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new(PROJECT_CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, CONFIG_TEMPLATE)?;

    println!("Created {}", config_path.display());
    println!();
    println!("Next steps:");
    println!("  1. Adjust [review] documents for your naming convention");
    println!("  2. Register the hooks with your editor:");
    println!("       spec-hooks architecture");
    println!("       spec-hooks phase-review");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config_resolver::ConfigSource;
    use crate::settings::Settings;
    use spec_hooks_arch::ArchRuleEngine;
    use tempfile::TempDir;

    /// The template with its example `[architecture]` section enabled.
    fn uncommented_template() -> String {
        let (head, example) = CONFIG_TEMPLATE.split_once("# [architecture]").unwrap();
        let body: Vec<&str> = example
            .lines()
            .map(|l| l.strip_prefix("# ").unwrap_or(l.trim_start_matches('#')))
            .collect();
        format!("{head}[architecture]{}", body.join("\n"))
    }

    #[test]
    fn template_loads_as_is() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("spec-hooks.toml");
        std::fs::write(&path, CONFIG_TEMPLATE).unwrap();

        let settings = Settings::load(ConfigSource::Project(path)).unwrap();
        assert_eq!(settings.architecture.ecosystems.len(), 4);
    }

    #[test]
    fn example_ruleset_detects_violations() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("spec-hooks.toml");
        std::fs::write(&path, uncommented_template()).unwrap();

        let settings = Settings::load(ConfigSource::Project(path)).unwrap();
        let engine = ArchRuleEngine::new(settings.architecture);

        let report = engine
            .check(
                "src/pages/Home.tsx",
                "import { useUser } from '../hooks/useUser'\nimport { getUser } from '../api/user'\n",
            )
            .unwrap();
        assert_eq!(report.layer, "pages");
        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].dependency_layer, "api");
    }
}
