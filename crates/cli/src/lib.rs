use std::env;
use std::path::PathBuf;

use anyhow::Result;
use depfilter_core::config::{load_filter_config, FilterConfig};
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

pub mod commands;

/// Environment variable holding the log filter (`EnvFilter` syntax).
pub const LOG_ENV: &str = "DEP_FILTER_LOG";

/// Command-line overrides layered on top of a config file (or the defaults).
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Optional JSON/YAML config file.
    pub config: Option<PathBuf>,
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    /// Extra denylist prefixes.
    pub deny: Vec<String>,
    /// Use only `deny` instead of extending the configured prefixes.
    pub replace_denylist: bool,
}

/// Build the effective filter config: file (or defaults), then CLI overrides.
pub fn resolve_config(overrides: &ConfigOverrides) -> Result<FilterConfig> {
    let mut config = match &overrides.config {
        Some(path) => load_filter_config(path)?,
        None => FilterConfig::default(),
    };

    if let Some(input) = &overrides.input {
        config.input = input.clone();
    }
    if let Some(output) = &overrides.output {
        config.output = output.clone();
    }

    if overrides.replace_denylist {
        config.deny_prefixes = overrides.deny.clone();
    } else {
        for prefix in &overrides.deny {
            if !config.deny_prefixes.contains(prefix) {
                config.deny_prefixes.push(prefix.clone());
            }
        }
    }

    debug!(?config, "resolved filter config");
    Ok(config)
}

/// Install the stderr log subscriber. Defaults to warnings only.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(if env::var("DEBUG").is_ok() { "depfilter_core=debug,info" } else { "warn" })
    });

    fmt().with_env_filter(filter).with_writer(std::io::stderr).compact().init();
}
