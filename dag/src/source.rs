//! Parsing of the line-based graph description format.
//!
//! The format has two sections:
//! - line 1: vertex count
//! - line 2: vertex names, separated by spaces, colons or tabs
//! - line 3: edge-count header, read and ignored
//! - remaining lines: `fromName : toName1 toName2 ...`, one source vertex
//!   per line with edges to every listed target

use std::fs;
use std::path::Path;
use tracing::debug;

use crate::errors::GraphError;

fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || c == ':'
}

/// Parsed form of a graph description: the vertex names and the raw edge
/// pairs, in file order.
///
/// The text is parsed once and cached here; both the forward graph and its
/// transpose are built from the same `GraphSource` without going back to
/// the file.
#[derive(Debug, Clone)]
pub struct GraphSource {
    pub vertex_names: Vec<String>,
    pub edges: Vec<(String, String)>,
}

impl GraphSource {
    /// Read and parse a graph description file.
    pub fn from_file(path: &Path) -> Result<Self, GraphError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Parse a graph description from text.
    ///
    /// Fails when the count line is not an integer or the names line holds
    /// fewer than `vertex_count` names. Surplus name tokens are ignored.
    pub fn parse(text: &str) -> Result<Self, GraphError> {
        let mut lines = text.lines();

        let count_line = lines.next().ok_or(GraphError::MissingVertexCount)?;
        let vertex_count: usize = count_line
            .trim()
            .parse()
            .map_err(|_| GraphError::InvalidVertexCount(count_line.trim().to_string()))?;

        let names_line = lines.next().unwrap_or("");
        let vertex_names: Vec<String> = names_line
            .split(is_delimiter)
            .filter(|token| !token.is_empty())
            .take(vertex_count)
            .map(str::to_string)
            .collect();

        if vertex_names.len() < vertex_count {
            return Err(GraphError::TooFewVertexNames {
                expected: vertex_count,
                found: vertex_names.len(),
            });
        }

        // Edge-count header; not needed, tolerated when absent.
        let _ = lines.next();

        let mut edges = Vec::new();
        for line in lines {
            let mut tokens = line.split(is_delimiter).filter(|token| !token.is_empty());
            let Some(from) = tokens.next() else { continue };
            for to in tokens {
                edges.push((from.to_string(), to.to_string()));
            }
        }

        debug!(
            vertices = vertex_names.len(),
            edges = edges.len(),
            "parsed graph source"
        );

        Ok(Self { vertex_names, edges })
    }
}
