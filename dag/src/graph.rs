//! Adjacency-list graph over named vertices.
//!
//! Edge-direction convention: an out-edge points from a child block to one
//! of its parents. Genesis therefore has no out-edges, and a tip is a
//! vertex no other block points at (in-degree zero).

use std::collections::HashMap;
use std::fmt;

use crate::source::GraphSource;

pub struct Graph {
    names: Vec<String>,
    index: HashMap<String, usize>,
    adj: Vec<Vec<usize>>,
}

impl Graph {
    /// Build the index map and adjacency lists from a parsed source,
    /// inserting edges in parse order.
    pub fn from_source(source: &GraphSource) -> Self {
        let mut graph = Self::with_vertices(&source.vertex_names);
        for (from, to) in &source.edges {
            graph.add_edge(from, to);
        }
        graph
    }

    fn with_vertices(names: &[String]) -> Self {
        let mut index = HashMap::with_capacity(names.len());
        for (i, name) in names.iter().enumerate() {
            // First occurrence wins when a name repeats.
            index.entry(name.clone()).or_insert(i);
        }
        Self {
            names: names.to_vec(),
            index,
            adj: vec![Vec::new(); names.len()],
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.names.len()
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn name_of(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Insert an edge by endpoint names. Edges naming an unknown vertex on
    /// either side are dropped.
    pub fn add_edge(&mut self, from: &str, to: &str) {
        let (Some(u), Some(v)) = (self.index_of(from), self.index_of(to)) else {
            return;
        };
        self.adj[u].push(v);
    }

    pub fn out_edges(&self, index: usize) -> &[usize] {
        &self.adj[index]
    }

    /// New graph over the same vertex set and index mapping with every
    /// edge reversed.
    pub fn transpose(&self) -> Graph {
        let mut transposed = Self::with_vertices(&self.names);
        for u in 0..self.vertex_count() {
            for &v in &self.adj[u] {
                transposed.adj[v].push(u);
            }
        }
        transposed
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for u in 0..self.vertex_count() {
            write!(f, "Node [{}] : ", self.names[u])?;
            for &v in &self.adj[u] {
                write!(f, "({}) -> ", self.names[v])?;
            }
            writeln!(f, "(null)")?;
        }
        Ok(())
    }
}
