use anyhow::{Context, Result};
use depfilter_core::filter::FilterSummary;
use depfilter_core::pipeline::inspect_file;
use serde::Serialize;

use crate::{resolve_config, ConfigOverrides};

#[derive(Serialize)]
pub struct InspectReport {
    pub input: String,
    pub deny_prefixes: Vec<String>,
    pub header_lines: usize,
    pub summary: FilterSummary,
}

/// Dry run: parse and filter the input, report what would be dropped.
pub fn inspect_command(overrides: &ConfigOverrides, json: bool) -> Result<InspectReport> {
    let config = resolve_config(overrides)?;
    let outcome = inspect_file(&config)?;

    let report = InspectReport {
        input: config.input.display().to_string(),
        deny_prefixes: config.deny_prefixes.clone(),
        header_lines: outcome.document.header.lines().count(),
        summary: outcome.summary,
    };

    if json {
        let serialized =
            serde_json::to_string_pretty(&report).context("Failed to serialize report to JSON")?;
        println!("{}", serialized);
        return Ok(report);
    }

    let summary = &report.summary;
    println!("Graph: {}", report.input);
    println!("Header lines: {}", report.header_lines);
    println!("Denylist: {}", report.deny_prefixes.join(", "));
    println!("Nodes: {} total, {} would be kept", summary.nodes_total, summary.nodes_kept);
    println!("Edges: {} total, {} would be kept", summary.edges_total, summary.edges_kept);

    println!("\nDenied nodes ({}):", summary.nodes_denied());
    if summary.denied.is_empty() {
        println!("  (none)");
    }
    for node in &summary.denied {
        println!("  - {} \"{}\" [{}]", node.id, node.label, node.prefix);
    }

    Ok(report)
}
