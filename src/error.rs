use thiserror::Error;

use crate::Node;

/// Failure reasons of graph queries and algorithms.
///
/// None of these are bugs: they describe inputs an algorithm cannot produce a meaningful answer
/// for (an unknown vertex, an unreachable destination, a disconnected graph, ...).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// No vertex carries the requested identifier
    #[error("vertex {0} not found")]
    VertexNotFound(String),

    /// A node handle outside of `0..n`
    #[error("node {0} is not a valid handle")]
    InvalidNode(Node),

    /// No edge `src -> dst` exists
    #[error("no edge from node {src} to node {dst}")]
    EdgeNotFound { src: Node, dst: Node },

    /// The destination cannot be reached from the source
    #[error("node {dst} is unreachable from node {src}")]
    Unreachable { src: Node, dst: Node },

    /// A spanning tree was requested, but only `reached` of `total` nodes are connected
    #[error("graph is disconnected: spanning tree covers {reached} of {total} nodes")]
    Disconnected { reached: usize, total: usize },

    /// A negative-weight cycle is reachable, so shortest distances are undefined
    #[error("negative-weight cycle reachable from the source")]
    NegativeCycle,

    /// The algorithm requires non-negative weights
    #[error("negative weight on edge from node {src} to node {dst}")]
    NegativeWeight { src: Node, dst: Node },

    /// A dense weight matrix whose rows are not all of the same length as the matrix is high
    #[error("row {row} has {len} entries, expected {expected}")]
    MalformedMatrix {
        row: usize,
        len: usize,
        expected: usize,
    },
}

pub type Result<T> = std::result::Result<T, GraphError>;

impl GraphError {
    /// Shorthand for [`GraphError::VertexNotFound`] of any printable identifier
    pub fn vertex_not_found<V: std::fmt::Debug>(v: &V) -> Self {
        GraphError::VertexNotFound(format!("{v:?}"))
    }
}
