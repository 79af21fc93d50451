use anyhow::{Context, Result};
use depfilter_core::filter::FilterSummary;
use depfilter_core::pipeline::filter_file;

use crate::{resolve_config, ConfigOverrides};

/// Filter the configured input graph and write the result.
pub fn filter_command(overrides: &ConfigOverrides, json: bool) -> Result<FilterSummary> {
    let config = resolve_config(overrides)?;
    let summary = filter_file(&config)?;

    if json {
        let serialized =
            serde_json::to_string_pretty(&summary).context("Failed to serialize summary to JSON")?;
        println!("{}", serialized);
    } else {
        println!("Filtered dependency graph:");
        println!("  Input: {}", config.input.display());
        println!("  Output: {}", config.output.display());
        println!(
            "  Nodes: {} kept, {} denied (of {})",
            summary.nodes_kept,
            summary.nodes_denied(),
            summary.nodes_total
        );
        println!(
            "  Edges: {} kept, {} touching denied nodes, {} with undeclared endpoints (of {})",
            summary.edges_kept,
            summary.edges_dropped_denied,
            summary.edges_dropped_undeclared,
            summary.edges_total
        );
    }

    Ok(summary)
}
