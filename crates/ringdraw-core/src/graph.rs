//! Read-only graph boundary: a square 0/1 adjacency matrix plus a directedness flag.

use crate::error::{Error, Result};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    directed: bool,
    adjacency: Vec<Vec<bool>>,
}

#[derive(Debug, Deserialize)]
struct GraphDocument {
    #[serde(default)]
    directed: bool,
    adjacency: Vec<Vec<u64>>,
}

impl Graph {
    pub fn new(directed: bool, adjacency: Vec<Vec<bool>>) -> Result<Self> {
        let expected = adjacency.len();
        for (row, entries) in adjacency.iter().enumerate() {
            if entries.len() != expected {
                return Err(Error::NonSquareMatrix {
                    row,
                    len: entries.len(),
                    expected,
                });
            }
        }
        Ok(Self {
            directed,
            adjacency,
        })
    }

    /// Builds a graph from numeric rows where `1` marks an edge and `0` its absence.
    pub fn from_matrix<R, E>(directed: bool, rows: R) -> Result<Self>
    where
        R: IntoIterator<Item = E>,
        E: IntoIterator<Item = u64>,
    {
        let mut adjacency = Vec::new();
        for (row, entries) in rows.into_iter().enumerate() {
            let mut out = Vec::new();
            for (col, value) in entries.into_iter().enumerate() {
                match value {
                    0 => out.push(false),
                    1 => out.push(true),
                    value => return Err(Error::InvalidAdjacencyEntry { row, col, value }),
                }
            }
            adjacency.push(out);
        }
        Self::new(directed, adjacency)
    }

    /// Parses `{ "directed": bool, "adjacency": [[0, 1], [1, 0]] }`.
    ///
    /// `directed` defaults to `false` when omitted.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let doc: GraphDocument = serde_json::from_str(text)?;
        Self::from_matrix(doc.directed, doc.adjacency)
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Out-of-range indices have no edges.
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.adjacency
            .get(from)
            .and_then(|row| row.get(to))
            .copied()
            .unwrap_or(false)
    }

    /// Both `from -> to` and `to -> from` are present in a directed graph.
    pub fn is_bidirectional(&self, from: usize, to: usize) -> bool {
        self.directed && from != to && self.has_edge(from, to) && self.has_edge(to, from)
    }

    /// Edges the orchestrator visits when drawing the first `vertex_count` vertices, in draw order.
    ///
    /// Directed graphs visit every ordered pair; undirected graphs only the lower triangle
    /// (diagonal included), so each unordered pair is drawn once.
    pub fn draw_order(&self, vertex_count: usize) -> Vec<(usize, usize)> {
        let n = vertex_count.min(self.vertex_count());
        let mut out = Vec::new();
        for i in 0..n {
            let upper = if self.directed { n } else { i + 1 };
            for j in 0..upper {
                if self.adjacency[i][j] {
                    out.push((i, j));
                }
            }
        }
        out
    }
}
