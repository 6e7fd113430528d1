//! Loaded configuration for both hooks.

use anyhow::{Context, Result};
use serde::Deserialize;
use spec_hooks_arch::ArchConfig;
use spec_hooks_review::ReviewConfig;

use crate::config_resolver::ConfigSource;

/// On-disk layout of `spec-hooks.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsFile {
    /// Replaces the built-in rulesets when present.
    #[serde(default)]
    architecture: Option<ArchConfig>,
    #[serde(default)]
    review: ReviewConfig,
}

/// Effective configuration.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Architecture rulesets in effect.
    pub architecture: ArchConfig,
    /// Review gate settings in effect.
    pub review: ReviewConfig,
    /// Where they came from.
    pub source: ConfigSource,
}

impl Settings {
    /// Loads and validates the configuration from `source`.
    pub fn load(source: ConfigSource) -> Result<Self> {
        let file = match source.path() {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                Self::parse(&content).with_context(|| format!("Failed to load {}", path.display()))?
            }
            None => SettingsFile::default(),
        };

        let architecture = match file.architecture {
            Some(config) => config,
            None => ArchConfig::builtin().context("built-in rulesets are invalid")?,
        };
        architecture
            .validate()
            .context("Architecture config validation failed")?;

        tracing::debug!("Using configuration from {source}");
        Ok(Self {
            architecture,
            review: file.review,
            source,
        })
    }

    fn parse(content: &str) -> Result<SettingsFile> {
        Ok(toml::from_str(content)?)
    }
}
