use std::fmt::{Debug, Display};

use crate::{Node, Weight};

/// An edge is defined by two nodes/endpoints.
/// It is up to the graph whether an Edge is directed or not.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

/// An entry of an adjacency list: the arc `src -> dst` with its weight.
///
/// In an undirected graph, every edge `{u, v}` is stored as two entries `(u, v, w)` and `(v, u, w)`.
/// The derived `PartialEq` compares all three fields; use [`WeightedEdge::equal_directed`] or
/// [`WeightedEdge::equal_undirected`] to compare endpoints only.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct WeightedEdge<W> {
    pub src: Node,
    pub dst: Node,
    pub weight: W,
}

impl<W: Weight> WeightedEdge<W> {
    pub fn new(src: Node, dst: Node, weight: W) -> Self {
        Self { src, dst, weight }
    }

    /// Creates an edge of weight one
    pub fn unit(src: Node, dst: Node) -> Self {
        Self::new(src, dst, W::one())
    }

    /// Returns the unweighted endpoints
    pub fn edge(&self) -> Edge {
        Edge(self.src, self.dst)
    }

    /// Returns the same edge pointing in the opposite direction
    pub fn reverse(&self) -> Self {
        Self::new(self.dst, self.src, self.weight)
    }

    /// Returns *true* if both edges connect the same endpoints in the same order
    pub fn equal_directed(&self, other: &Self) -> bool {
        self.src == other.src && self.dst == other.dst
    }

    /// Returns *true* if both edges connect the same endpoints in any order
    pub fn equal_undirected(&self, other: &Self) -> bool {
        self.equal_directed(other) || (self.src == other.dst && self.dst == other.src)
    }
}

impl<W: Display> Display for WeightedEdge<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}, {}, {}}}", self.src, self.dst, self.weight)
    }
}

impl<W: Debug> Debug for WeightedEdge<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}, {}, {:?}}}", self.src, self.dst, self.weight)
    }
}

impl<W: Weight> From<(Node, Node, W)> for WeightedEdge<W> {
    fn from(value: (Node, Node, W)) -> Self {
        WeightedEdge::new(value.0, value.1, value.2)
    }
}
