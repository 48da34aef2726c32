//! Optional JSON settings file.
use crate::entry::TimestampStyle;
use crate::merge::StrategyKind;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings that can be kept in a config file instead of passed as flags.
///
/// Every key is optional; command-line flags take precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MergeConfig {
    pub strategy: Option<StrategyKind>,
    pub style: Option<TimestampStyle>,
    /// A `tracing_subscriber::EnvFilter` directive, e.g. `"info,log_merge=debug"`.
    pub log_filter: Option<String>,
}

impl MergeConfig {
    /// Loads a config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON for
    /// this structure.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file '{}'", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("invalid config file '{}'", path.display()))
    }

    /// Loads `path` if given, otherwise returns the defaults.
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        path.map(Self::load).transpose().map(Option::unwrap_or_default)
    }
}
