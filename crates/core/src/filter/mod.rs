//! Denylist filtering of graph documents.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::{GraphDocument, NodeId};

/// Label prefixes excluded by default: SDK and driver libraries that drown out
/// the application's own dependency structure.
pub const DEFAULT_DENY_PREFIXES: [&str; 6] =
    ["pico_", "hardware_", "cyw43_", "tinyusb_", "blockdevice_", "filesystem_"];

/// Ordered set of label prefixes. A label is denied if it starts with any of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Denylist {
    prefixes: Vec<String>,
}

impl Denylist {
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { prefixes: prefixes.into_iter().map(Into::into).collect() }
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// First configured prefix that `label` starts with.
    pub fn matching_prefix(&self, label: &str) -> Option<&str> {
        self.prefixes.iter().map(String::as_str).find(|prefix| label.starts_with(prefix))
    }

    pub fn is_denied(&self, label: &str) -> bool {
        self.matching_prefix(label).is_some()
    }
}

impl Default for Denylist {
    fn default() -> Self {
        Self::new(DEFAULT_DENY_PREFIXES)
    }
}

/// A node removed because its label matched the denylist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeniedNode {
    pub id: NodeId,
    pub label: String,
    pub prefix: String,
}

/// Counts describing one filtering pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSummary {
    pub nodes_total: usize,
    pub nodes_kept: usize,
    pub edges_total: usize,
    pub edges_kept: usize,
    /// Edges dropped because at least one endpoint was denied.
    pub edges_dropped_denied: usize,
    /// Edges dropped because an endpoint was never declared as a node.
    pub edges_dropped_undeclared: usize,
    pub denied: Vec<DeniedNode>,
}

impl FilterSummary {
    pub fn nodes_denied(&self) -> usize {
        self.denied.len()
    }
}

/// Filtered document plus what happened to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    pub document: GraphDocument,
    pub summary: FilterSummary,
}

/// Drop denied nodes and every edge that does not connect two retained nodes.
///
/// The header is carried over unchanged and the relative order of surviving
/// node and edge lines is preserved.
pub fn filter_document(document: &GraphDocument, denylist: &Denylist) -> FilterOutcome {
    let mut kept: HashSet<&NodeId> = HashSet::new();
    let mut denied_ids: HashSet<&NodeId> = HashSet::new();
    let mut denied = Vec::new();

    for node in &document.nodes {
        match denylist.matching_prefix(&node.label) {
            Some(prefix) => {
                debug!(id = %node.id, label = %node.label, prefix, "denying node");
                denied_ids.insert(&node.id);
                denied.push(DeniedNode {
                    id: node.id.clone(),
                    label: node.label.clone(),
                    prefix: prefix.to_string(),
                });
            }
            None => {
                kept.insert(&node.id);
            }
        }
    }

    let nodes: Vec<_> =
        document.nodes.iter().filter(|n| kept.contains(&n.id)).cloned().collect();

    let mut edges = Vec::new();
    let mut edges_dropped_denied = 0;
    let mut edges_dropped_undeclared = 0;
    for edge in &document.edges {
        if kept.contains(&edge.source) && kept.contains(&edge.target) {
            edges.push(edge.clone());
        } else if denied_ids.contains(&edge.source) || denied_ids.contains(&edge.target) {
            edges_dropped_denied += 1;
        } else {
            debug!(
                source = %edge.source,
                target = %edge.target,
                line = edge.line_number,
                "dropping edge with undeclared endpoint"
            );
            edges_dropped_undeclared += 1;
        }
    }

    let summary = FilterSummary {
        nodes_total: document.nodes.len(),
        nodes_kept: nodes.len(),
        edges_total: document.edges.len(),
        edges_kept: edges.len(),
        edges_dropped_denied,
        edges_dropped_undeclared,
        denied,
    };

    FilterOutcome {
        document: GraphDocument { header: document.header.clone(), nodes, edges },
        summary,
    }
}
