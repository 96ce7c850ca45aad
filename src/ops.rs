use std::ops::Range;

use crate::{node::node_bitset, *};

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> Range<Node> {
        self.vertices_range()
    }

    /// Returns a range of all node handles.
    /// In contrast to self.vertices(), the range does not borrow self
    /// and hence may be used where additional mutable references of self are needed.
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        node_bitset(self.number_of_nodes())
    }

    /// Returns *true* if `u` is a valid node handle
    fn has_vertex(&self, u: Node) -> bool {
        u < self.number_of_nodes()
    }

    /// Returns `Ok(u)` if `u` is a valid node handle
    fn check_node(&self, u: Node) -> Result<Node> {
        if self.has_vertex(u) {
            Ok(u)
        } else {
            Err(GraphError::InvalidNode(u))
        }
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph.
    /// An undirected edge `{u, v}` is counted once.
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Orientation of a graph, known at runtime
pub trait GraphType {
    /// Returns *true* if edges have an orientation
    fn is_directed(&self) -> bool;

    /// Returns *true* if `Edge(u, v)` and `Edge(v, u)` are the same edge
    fn is_undirected(&self) -> bool {
        !self.is_directed()
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the (outgoing) neighbors of a given vertex in adjacency order.
    /// Parallel edges yield the same neighbor multiple times.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of (outgoing) adjacency entries of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns the number of adjacency entries pointing to each vertex.
    /// For undirected graphs this equals the degree.
    fn in_degrees(&self) -> Vec<NumNodes> {
        let mut in_degs = vec![0; self.len()];
        for u in self.vertices() {
            for v in self.neighbors_of(u) {
                in_degs[v as usize] += 1;
            }
        }
        in_degs
    }

    /// Returns an iterator over outgoing edges of a given vertex.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u)
            .map(move |v| Edge(u, v))
            .filter(move |e| !only_normalized || e.is_normalized())
    }

    /// Returns an iterator over all edges in the graph.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices_range()
            .flat_map(move |u| self.edges_of(u, only_normalized))
    }
}

/// Implemented by structures (mostly iterators) that operate on a borrowed graph
pub trait WithGraphRef<G> {
    /// Returns the graph the structure operates on
    fn graph_ref(&self) -> &G;
}

/// Adjacency access including edge weights
pub trait WeightedAdjacencyList: AdjacencyList + GraphType {
    type Weight: Weight;

    /// Returns an iterator over the outgoing weighted edges of a given vertex in adjacency order.
    /// ** Panics if `u >= n` **
    fn weighted_edges_of(
        &self,
        u: Node,
    ) -> impl Iterator<Item = WeightedEdge<Self::Weight>> + '_;

    /// Returns an iterator over all weighted adjacency entries.
    /// For undirected graphs, every edge appears in both directions.
    fn weighted_edges(&self) -> impl Iterator<Item = WeightedEdge<Self::Weight>> + '_ {
        self.vertices_range()
            .flat_map(move |u| self.weighted_edges_of(u))
    }

    /// Returns every edge exactly once: all arcs of a directed graph, and only the entries
    /// with `src <= dst` of an undirected graph.
    fn unique_weighted_edges(&self) -> impl Iterator<Item = WeightedEdge<Self::Weight>> + '_ {
        let directed = self.is_directed();
        self.weighted_edges()
            .filter(move |e| directed || e.src <= e.dst)
    }

    /// Returns the first edge with negative weight, if any
    fn find_negative_edge(&self) -> Option<WeightedEdge<Self::Weight>> {
        self.weighted_edges().find(|e| e.weight.is_negative())
    }
}
