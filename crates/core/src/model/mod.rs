//! Core data model for dependency-graph documents.
//!
//! A document is kept close to its source text: every declaration remembers
//! the exact line it came from, so filtering can write surviving lines back
//! out untouched.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a graph vertex, always of the form `node<digits>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Accept `raw` only if it is `node` followed by one or more ASCII digits.
    pub fn parse(raw: &str) -> Option<Self> {
        let digits = raw.strip_prefix("node")?;
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            Some(Self(raw.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A node declaration line, e.g. `"node3" [ label = "app_main", shape = egg ];`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeDecl {
    pub id: NodeId,
    /// Label text as written between the quotes (escapes are not processed).
    pub label: String,
    /// Original line text, without its line terminator.
    pub line: String,
    /// 1-based line number in the source document.
    pub line_number: usize,
}

/// An edge declaration line, e.g. `"node3" -> "node7" // app_main -> app_utils`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeDecl {
    pub source: NodeId,
    pub target: NodeId,
    pub line: String,
    pub line_number: usize,
}

/// Parsed graph document: verbatim header plus node and edge declarations in
/// source order. The closing `}` is implicit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GraphDocument {
    pub header: String,
    pub nodes: Vec<NodeDecl>,
    pub edges: Vec<EdgeDecl>,
}

impl GraphDocument {
    /// Serialize the document: header, node lines, edge lines, closing brace.
    pub fn render(&self) -> String {
        let nodes: Vec<&str> = self.nodes.iter().map(|n| n.line.as_str()).collect();
        let edges: Vec<&str> = self.edges.iter().map(|e| e.line.as_str()).collect();

        let mut out = String::with_capacity(
            self.header.len()
                + nodes.iter().map(|l| l.len() + 1).sum::<usize>()
                + edges.iter().map(|l| l.len() + 1).sum::<usize>()
                + 4,
        );
        out.push_str(&self.header);
        out.push('\n');
        out.push_str(&nodes.join("\n"));
        out.push('\n');
        out.push_str(&edges.join("\n"));
        out.push_str("\n}");
        out
    }
}
