//! Line-oriented parser for the DOT subset emitted by CMake's `--graphviz`.
//!
//! The parser understands just enough of DOT to split a document into:
//! - a header (everything before the first declaration, kept verbatim),
//! - node declarations: `"node<N>" [ label = "...", ... ];`
//! - edge declarations: `"node<A>" -> "node<B>" [ ... ] // comment`
//!
//! Brace depth is tracked from real `{` / `}` tokens, so braces inside quoted
//! labels or comments never affect where the header ends. Only statements
//! sitting directly inside the outer graph block can be declarations; nested
//! blocks such as CMake's legend cluster are never inspected for nodes.

mod lexer;

use std::collections::HashMap;

use thiserror::Error;
use tracing::{debug, warn};

use crate::model::{EdgeDecl, GraphDocument, NodeDecl, NodeId};

pub use lexer::{tokenize, Token};

/// Error type for graph document parsing. Line numbers are 1-based.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: unterminated quoted string")]
    UnterminatedString { line: usize },

    #[error("line {line}: closing brace without a matching opening brace")]
    UnbalancedBrace { line: usize },

    #[error("no graph block found (expected a line opening `{{`)")]
    MissingGraphBlock,

    #[error("graph block opened on line {opened_at} is never closed")]
    UnterminatedGraphBlock { opened_at: usize },

    #[error("line {line}: graph block must open and close on separate lines")]
    InlineGraphBlock { line: usize },

    #[error("line {line}: the line closing the graph block must not carry a statement")]
    StatementOnClosingLine { line: usize },

    #[error("line {line}: node declaration has no quoted `node<digits>` identifier")]
    MissingNodeId { line: usize },

    #[error("line {line}: node declaration has no non-empty quoted label after `label =`")]
    MissingLabel { line: usize },

    #[error("line {line}: edge declaration needs exactly two node identifiers, found {found}")]
    MalformedEdge { line: usize, found: usize },

    #[error("line {line}: node `{id}` already declared on line {first_line}")]
    DuplicateNode { id: String, line: usize, first_line: usize },
}

/// What a single statement line declares.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Declaration<'a> {
    Node { id: NodeId, label: &'a str },
    Edge { source: NodeId, target: NodeId },
}

/// Keywords introducing default-attribute statements (`node [shape=box];`).
const ATTRIBUTE_KEYWORDS: [&str; 3] = ["node", "edge", "graph"];

/// Classify a statement sitting directly inside the outer block.
///
/// Once the body has started, a bare `label = "..."` statement is a node
/// declaration missing its identifier rather than a graph attribute.
fn classify<'a>(
    tokens: &[Token<'a>],
    line_number: usize,
    in_body: bool,
) -> Result<Option<Declaration<'a>>, ParseError> {
    let attr_start = tokens.iter().position(|t| *t == Token::LBracket).unwrap_or(tokens.len());
    let (statement, attrs) = tokens.split_at(attr_start);

    if statement.contains(&Token::Arrow) {
        let ids: Vec<NodeId> = statement
            .iter()
            .filter_map(|t| match t {
                Token::Quoted(raw) => NodeId::parse(raw),
                _ => None,
            })
            .collect();
        let found = ids.len();
        return match <[NodeId; 2]>::try_from(ids) {
            Ok([source, target]) => Ok(Some(Declaration::Edge { source, target })),
            Err(_) => Err(ParseError::MalformedEdge { line: line_number, found }),
        };
    }

    if let Some(Token::Word(keyword)) = statement.first() {
        if ATTRIBUTE_KEYWORDS.contains(&keyword.to_ascii_lowercase().as_str()) {
            return Ok(None);
        }
    }

    if in_body
        && statement.windows(3).any(|w| {
            matches!(w, [Token::Word("label"), Token::Equals, Token::Quoted(_)])
        })
    {
        return Err(ParseError::MissingNodeId { line: line_number });
    }

    let Some(label_pos) = attrs.iter().position(|t| *t == Token::Word("label")) else {
        return Ok(None);
    };

    let id = match statement.first() {
        Some(Token::Quoted(raw)) => NodeId::parse(raw),
        _ => None,
    }
    .ok_or(ParseError::MissingNodeId { line: line_number })?;

    match (attrs.get(label_pos + 1), attrs.get(label_pos + 2)) {
        (Some(Token::Equals), Some(&Token::Quoted(label))) if !label.is_empty() => {
            Ok(Some(Declaration::Node { id, label }))
        }
        _ => Err(ParseError::MissingLabel { line: line_number }),
    }
}

/// Parse a whole graph document.
pub fn parse_document(text: &str) -> Result<GraphDocument, ParseError> {
    let mut depth = 0usize;
    let mut opened_at: Option<usize> = None;
    let mut closed = false;

    // Byte offset just past the last non-blank header line seen so far.
    let mut header_end = 0usize;
    let mut body_started = false;

    let mut nodes: Vec<NodeDecl> = Vec::new();
    let mut edges: Vec<EdgeDecl> = Vec::new();
    let mut declared: HashMap<NodeId, usize> = HashMap::new();

    let mut offset = 0usize;
    for (idx, raw) in text.split('\n').enumerate() {
        let line_number = idx + 1;
        let line_end = offset + raw.len();
        offset = line_end + 1;

        let line = raw.strip_suffix('\r').unwrap_or(raw);
        let blank = line.trim().is_empty();

        if closed {
            if !blank {
                warn!(line = line_number, "ignoring text after the end of the graph block");
            }
            continue;
        }

        let tokens = tokenize(line, line_number)?;
        let depth_before = depth;
        let mut closes_here = false;
        for token in &tokens {
            match token {
                Token::LBrace => {
                    depth += 1;
                    if opened_at.is_none() {
                        opened_at = Some(line_number);
                    }
                }
                Token::RBrace => {
                    depth = depth
                        .checked_sub(1)
                        .ok_or(ParseError::UnbalancedBrace { line: line_number })?;
                    if depth == 0 {
                        closes_here = true;
                    }
                }
                _ => {}
            }
        }

        if depth_before == 0 {
            if closes_here {
                return Err(ParseError::InlineGraphBlock { line: line_number });
            }
            // Text before the block, or the opening line itself.
            if !blank {
                header_end = line_end;
            }
            continue;
        }

        if closes_here {
            if tokens.first() != Some(&Token::RBrace) {
                return Err(ParseError::StatementOnClosingLine { line: line_number });
            }
            closed = true;
            continue;
        }

        let declaration =
            if depth_before == 1 { classify(&tokens, line_number, body_started)? } else { None };

        match declaration {
            None if !body_started => {
                if !blank {
                    header_end = line_end;
                }
            }
            None => {
                if !blank {
                    debug!(line = line_number, text = line, "dropping non-declaration body line");
                }
            }
            Some(Declaration::Node { id, label }) => {
                body_started = true;
                if let Some(&first_line) = declared.get(&id) {
                    return Err(ParseError::DuplicateNode {
                        id: id.to_string(),
                        line: line_number,
                        first_line,
                    });
                }
                declared.insert(id.clone(), line_number);
                nodes.push(NodeDecl {
                    id,
                    label: label.to_string(),
                    line: line.to_string(),
                    line_number,
                });
            }
            Some(Declaration::Edge { source, target }) => {
                body_started = true;
                edges.push(EdgeDecl { source, target, line: line.to_string(), line_number });
            }
        }
    }

    match opened_at {
        None => return Err(ParseError::MissingGraphBlock),
        Some(opened_at) if !closed => {
            return Err(ParseError::UnterminatedGraphBlock { opened_at });
        }
        Some(_) => {}
    }

    Ok(GraphDocument { header: text[..header_end].to_string(), nodes, edges })
}
