use anyhow::{Context, Result};
use clap::ValueEnum;

use crate::{resolve_config, ConfigOverrides};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

/// Render the effective configuration (config file plus overrides).
pub fn show_config_command(overrides: &ConfigOverrides, format: ConfigFormat) -> Result<String> {
    let config = resolve_config(overrides)?;

    let rendered = match format {
        ConfigFormat::Json => serde_json::to_string_pretty(&config)
            .context("Failed to serialize filter config to JSON")?,
        ConfigFormat::Yaml => {
            serde_yaml::to_string(&config).context("Failed to serialize filter config to YAML")?
        }
    };
    println!("{}", rendered.trim_end());

    Ok(rendered)
}
