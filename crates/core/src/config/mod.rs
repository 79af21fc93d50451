//! Filter configuration: which file to read, where to write, what to deny.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::filter::{Denylist, DEFAULT_DENY_PREFIXES};

/// Default input file, as produced by `cmake --graphviz=filtered_deps.dot`.
pub const DEFAULT_INPUT: &str = "filtered_deps.dot";

/// Default output file.
pub const DEFAULT_OUTPUT: &str = "filtered_deps2.dot";

/// Serializable configuration for one filter run.
///
/// Any field missing from a config file falls back to its default, so a file
/// containing only `deny_prefixes` is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Graph document to read.
    pub input: PathBuf,
    /// Destination for the filtered document (created or overwritten).
    pub output: PathBuf,
    /// Label prefixes whose nodes are removed.
    pub deny_prefixes: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            deny_prefixes: DEFAULT_DENY_PREFIXES.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl FilterConfig {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self { input: input.into(), output: output.into(), ..Self::default() }
    }

    pub fn with_deny_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.deny_prefixes = prefixes.into_iter().map(Into::into).collect();
        self
    }

    pub fn denylist(&self) -> Denylist {
        Denylist::new(self.deny_prefixes.iter().cloned())
    }
}

/// Load a filter config from a `.json`, `.yaml` or `.yml` file.
pub fn load_filter_config(path: &Path) -> Result<FilterConfig> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default().to_ascii_lowercase();
    if !matches!(ext.as_str(), "json" | "yaml" | "yml") {
        return Err(anyhow!(
            "Unsupported filter config format for {} (expected .json, .yaml or .yml)",
            path.display()
        ));
    }

    let body = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read filter config at {}", path.display()))?;

    let config = if ext == "json" {
        serde_json::from_str(&body)
            .with_context(|| format!("Failed to parse filter config JSON at {}", path.display()))?
    } else {
        serde_yaml::from_str(&body)
            .with_context(|| format!("Failed to parse filter config YAML at {}", path.display()))?
    };
    Ok(config)
}
