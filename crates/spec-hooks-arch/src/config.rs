//! TOML configuration for layered-architecture rulesets.
//!
//! One `[[ecosystems]]` table per ruleset, each with `[[ecosystems.layers]]`
//! (allow-lists), `[[ecosystems.paths]]` (file path → layer) and
//! `[[ecosystems.imports]]` (import token → layer). A top-level `priority`
//! list fixes the order in which ecosystems claim a file.

use serde::Deserialize;
use std::collections::HashSet;

/// Rulesets shipped with the crate.
const BUILTIN_RULES: &str = include_str!("../rules/builtin.toml");

/// Top-level architecture configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ArchConfig {
    /// Ecosystem names in classification order.
    ///
    /// Ecosystems not listed here are tried afterwards, in declaration order.
    #[serde(default)]
    pub priority: Vec<String>,

    /// Ruleset definitions.
    #[serde(rename = "ecosystems", default)]
    pub ecosystems: Vec<EcosystemDef>,
}

/// Lexical import syntax used to extract dependencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImportSyntax {
    /// `import com.example.Foo;`
    Java,
    /// `import Module`
    Swift,
    /// `import x from 'path'` (TypeScript, Vue single-file components)
    EsModule,
}

impl std::fmt::Display for ImportSyntax {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Java => write!(f, "java"),
            Self::Swift => write!(f, "swift"),
            Self::EsModule => write!(f, "es-module"),
        }
    }
}

/// One layered-architecture ruleset.
#[derive(Debug, Clone, Deserialize)]
pub struct EcosystemDef {
    /// Ecosystem key (e.g., `"java"`).
    pub name: String,
    /// Human-readable ruleset title.
    #[serde(default)]
    pub title: String,
    /// Textual form of the rule, shown in advisories.
    pub rule: String,
    /// How imports are extracted from files of this ecosystem.
    pub syntax: ImportSyntax,
    /// Layers and their allowed dependencies.
    #[serde(default)]
    pub layers: Vec<LayerDef>,
    /// Ordered file-path classification rules.
    #[serde(default)]
    pub paths: Vec<PathRule>,
    /// Ordered import-token classification rules.
    #[serde(default)]
    pub imports: Vec<ImportRule>,
}

impl EcosystemDef {
    /// Looks up a layer by name.
    #[must_use]
    pub fn layer(&self, name: &str) -> Option<&LayerDef> {
        self.layers.iter().find(|l| l.name == name)
    }

    /// Whether `from` may depend on `to`. Same-layer references always may.
    #[must_use]
    pub fn allows(&self, from: &str, to: &str) -> bool {
        from == to
            || self
                .layer(from)
                .is_some_and(|l| l.allows.iter().any(|a| a == to))
    }
}

/// A named architecture layer.
#[derive(Debug, Clone, Deserialize)]
pub struct LayerDef {
    /// Layer name (e.g., `"Controller"`).
    pub name: String,
    /// Layers this layer may depend on.
    #[serde(default)]
    pub allows: Vec<String>,
}

/// Maps file paths to a layer.
#[derive(Debug, Clone, Deserialize)]
pub struct PathRule {
    /// File extensions, with or without the leading dot.
    pub extensions: Vec<String>,
    /// Path fragments; any one present in the lowercased path matches.
    /// Empty means every file with a listed extension matches.
    #[serde(default)]
    pub fragments: Vec<String>,
    /// Layer assigned on match.
    pub layer: String,
}

/// Maps import tokens to a layer.
#[derive(Debug, Clone, Deserialize)]
pub struct ImportRule {
    /// Token fragments; any one present in the lowercased token matches.
    pub fragments: Vec<String>,
    /// Layer assigned on match.
    pub layer: String,
}

/// Errors when loading configuration.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ConfigError {
    /// Failed to parse TOML.
    #[error("invalid architecture config: {message}")]
    #[diagnostic(code(spec_hooks::arch::parse))]
    Parse {
        /// Parse error detail.
        message: String,
    },
    /// Config is structurally invalid.
    #[error("architecture config validation: {0}")]
    #[diagnostic(
        code(spec_hooks::arch::validation),
        help("run `spec-hooks list-rules` to see the rulesets in effect")
    )]
    Validation(String),
}

impl ArchConfig {
    /// The built-in Java, Swift, Vue and TypeScript rulesets.
    ///
    /// # Errors
    ///
    /// Returns error only if the embedded rules fail to parse.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::parse(BUILTIN_RULES)
    }

    /// Parse from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns error if TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Looks up an ecosystem by name.
    #[must_use]
    pub fn ecosystem(&self, name: &str) -> Option<&EcosystemDef> {
        self.ecosystems.iter().find(|e| e.name == name)
    }

    /// Ecosystems in classification order: `priority` first, then the rest
    /// in declaration order.
    #[must_use]
    pub fn ordered(&self) -> Vec<&EcosystemDef> {
        let mut ordered: Vec<&EcosystemDef> = self
            .priority
            .iter()
            .filter_map(|name| self.ecosystem(name))
            .collect();
        for eco in &self.ecosystems {
            if !self.priority.contains(&eco.name) {
                ordered.push(eco);
            }
        }
        ordered
    }

    /// Validate config consistency.
    ///
    /// # Errors
    ///
    /// Returns error describing the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut names = HashSet::new();
        for eco in &self.ecosystems {
            if eco.name.is_empty() {
                return Err(ConfigError::Validation("ecosystem with empty name".into()));
            }
            if !names.insert(eco.name.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "ecosystem '{}' defined twice",
                    eco.name
                )));
            }
            Self::validate_ecosystem(eco)?;
        }

        let mut seen = HashSet::new();
        for name in &self.priority {
            if !names.contains(name.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "priority: unknown ecosystem '{name}'"
                )));
            }
            if !seen.insert(name.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "priority: '{name}' listed twice"
                )));
            }
        }

        Ok(())
    }

    fn validate_ecosystem(eco: &EcosystemDef) -> Result<(), ConfigError> {
        let eco_name = &eco.name;
        let mut layer_names = HashSet::new();
        for l in &eco.layers {
            if !layer_names.insert(l.name.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "{eco_name}: layer '{}' defined twice",
                    l.name
                )));
            }
        }

        for l in &eco.layers {
            for dep in &l.allows {
                if !layer_names.contains(dep.as_str()) {
                    return Err(ConfigError::Validation(format!(
                        "{eco_name}.{}: unknown dep '{dep}'",
                        l.name
                    )));
                }
                if dep == &l.name {
                    return Err(ConfigError::Validation(format!(
                        "{eco_name}.{}: self-dependency",
                        l.name
                    )));
                }
            }
        }

        for (i, rule) in eco.paths.iter().enumerate() {
            if rule.extensions.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "{eco_name}.paths[{i}]: no extensions"
                )));
            }
            if !layer_names.contains(rule.layer.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "{eco_name}.paths[{i}]: unknown layer '{}'",
                    rule.layer
                )));
            }
        }

        for (i, rule) in eco.imports.iter().enumerate() {
            if rule.fragments.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "{eco_name}.imports[{i}]: no fragments"
                )));
            }
            if !layer_names.contains(rule.layer.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "{eco_name}.imports[{i}]: unknown layer '{}'",
                    rule.layer
                )));
            }
        }

        Ok(())
    }
}
