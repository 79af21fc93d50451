use std::fs;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::FilterConfig;
use crate::dot::{parse_document, ParseError};
use crate::filter::{filter_document, Denylist, FilterOutcome, FilterSummary};

/// Parse `text` and filter it against `denylist`.
pub fn filter_text(text: &str, denylist: &Denylist) -> Result<FilterOutcome, ParseError> {
    let document = parse_document(text)?;
    Ok(filter_document(&document, denylist))
}

/// Read the configured input graph without writing anything.
pub fn inspect_file(config: &FilterConfig) -> Result<FilterOutcome> {
    let text = fs::read_to_string(&config.input).with_context(|| {
        format!("Failed to read input graph at {}", config.input.display())
    })?;
    filter_text(&text, &config.denylist())
        .with_context(|| format!("Failed to parse graph document {}", config.input.display()))
}

/// Read, filter and write a graph document as described by `config`.
///
/// The output file is fully overwritten. Nothing is written if the input
/// cannot be read or parsed.
pub fn filter_file(config: &FilterConfig) -> Result<FilterSummary> {
    let outcome = inspect_file(config)?;

    fs::write(&config.output, outcome.document.render()).with_context(|| {
        format!("Failed to write filtered graph to {}", config.output.display())
    })?;

    let summary = outcome.summary;
    info!(
        input = %config.input.display(),
        output = %config.output.display(),
        nodes_kept = summary.nodes_kept,
        nodes_denied = summary.nodes_denied(),
        edges_kept = summary.edges_kept,
        "filtered dependency graph"
    );
    Ok(summary)
}
