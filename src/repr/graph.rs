use std::{
    fmt::{Debug, Display},
    hash::Hash,
};

use itertools::Itertools;
use tracing::{debug, trace, warn};

use super::*;

/// A graph over labelled vertices with weighted adjacency lists.
///
/// Vertices are identified externally by `V` and internally by dense [`Node`] handles
/// (their insertion position). Edges are stored as [`WeightedEdge`]s in per-vertex lists.
/// An undirected edge `{s, d}` is stored as the two entries `(s, d, w)` and `(d, s, w)`.
///
/// # Examples
/// ```
/// use wgraphs::prelude::*;
///
/// let mut g: Graph<char, i64> = Graph::new(false, true);
/// g.add_weighted_edge('A', 'B', 3);
/// g.add_weighted_edge('B', 'C', 4);
///
/// assert_eq!(g.number_of_nodes(), 3);
/// assert_eq!(g.number_of_edges(), 2);
/// assert_eq!(g.index_of(&'C'), Ok(2));
/// ```
#[derive(Clone, Debug)]
pub struct Graph<V, W = i64> {
    directed: bool,
    weighted: bool,
    index: VertexIndex<V>,
    adjacency: AdjacencyStore<W>,
}

/// An undirected, unweighted graph
impl<V, W> Default for Graph<V, W> {
    fn default() -> Self {
        Self {
            directed: false,
            weighted: false,
            index: VertexIndex::default(),
            adjacency: AdjacencyStore::default(),
        }
    }
}

impl<V, W> Graph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Weight,
{
    /// Creates an empty graph
    pub fn new(directed: bool, weighted: bool) -> Self {
        Self {
            directed,
            weighted,
            ..Default::default()
        }
    }

    /// Returns *true* if edges carry user-supplied weights.
    /// Edges of unweighted graphs all have weight one.
    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    /// Appends vertex `v` and returns its handle.
    ///
    /// No uniqueness check is performed: adding an identifier twice creates a second vertex,
    /// while lookups by identifier keep resolving to the first one.
    pub fn add_vertex(&mut self, v: V) -> Node {
        self.adjacency.push_vertex();
        self.index.add_vertex(v)
    }

    /// Returns the handle of the first vertex carrying `v`
    pub fn index_of(&self, v: &V) -> Result<Node> {
        self.index
            .index_of(v)
            .ok_or_else(|| GraphError::vertex_not_found(v))
    }

    /// Returns the identifier of vertex `u`
    pub fn vertex(&self, u: Node) -> Result<&V> {
        self.index.vertex(u).ok_or(GraphError::InvalidNode(u))
    }

    /// Returns *true* if a vertex carries `v`
    pub fn contains_vertex(&self, v: &V) -> bool {
        self.index.contains(v)
    }

    /// Maps a sequence of handles (e.g. a path or an ordering) back to identifiers
    pub fn labels_of<I>(&self, nodes: I) -> Result<Vec<&V>>
    where
        I: IntoIterator<Item = Node>,
    {
        nodes.into_iter().map(|u| self.vertex(u)).collect()
    }

    /// Returns an iterator over all identifiers in handle order
    pub fn identifiers(&self) -> impl Iterator<Item = &V> + '_ {
        self.index.iter()
    }

    /// Deletes vertex `u` together with every edge incident to it.
    /// Handles above `u` shift down by one, so previously obtained handles may be stale afterwards.
    pub fn delete_node(&mut self, u: Node) -> Result<V> {
        self.check_node(u)?;

        let removed_arcs = self.adjacency.remove_vertex(u);
        let v = self.index.remove(u).ok_or(GraphError::InvalidNode(u))?;
        debug!(node = u, vertex = ?v, removed_arcs, "deleted vertex");

        Ok(v)
    }

    /// Deletes the first vertex carrying `v` together with every edge incident to it.
    /// See [`Graph::delete_node`].
    pub fn delete_vertex(&mut self, v: &V) -> Result<V> {
        let u = self.index_of(v)?;
        self.delete_node(u)
    }

    /// Returns the handle of `v`, creating the vertex if it is unknown
    fn index_or_insert(&mut self, v: V) -> Node {
        match self.index.index_of(&v) {
            Some(u) => u,
            None => self.add_vertex(v),
        }
    }

    /// Adds the edge `s -> d` of weight one. See [`Graph::add_weighted_edge`].
    pub fn add_edge(&mut self, s: V, d: V) -> Edge {
        self.add_weighted_edge(s, d, W::one())
    }

    /// Adds the edge `s -> d` of weight `w` and returns its endpoints as handles.
    ///
    /// Unknown endpoints are created first (source before destination). For undirected graphs,
    /// the mirrored entry `d -> s` is appended to the list of `d` as well.
    /// Self-loops and parallel edges are permitted.
    /// On unweighted graphs, `w` is replaced by one.
    pub fn add_weighted_edge(&mut self, s: V, d: V, w: W) -> Edge {
        let w = self.effective_weight(w);
        let u = self.index_or_insert(s);
        let v = self.index_or_insert(d);
        self.add_arcs(u, v, w);

        Edge(u, v)
    }

    /// Adds the edge `u -> v` between existing vertices.
    /// On unweighted graphs, `w` is replaced by one.
    pub fn add_weighted_edge_between(&mut self, u: Node, v: Node, w: W) -> Result<Edge> {
        self.check_node(u)?;
        self.check_node(v)?;

        let w = self.effective_weight(w);
        self.add_arcs(u, v, w);
        Ok(Edge(u, v))
    }

    /// Adds all edges `(s, d)` of weight one
    pub fn add_edges<I>(&mut self, edges: I)
    where
        I: IntoIterator<Item = (V, V)>,
    {
        for (s, d) in edges {
            self.add_edge(s, d);
        }
    }

    /// Adds all edges `(s, d, w)`
    pub fn add_weighted_edges<I>(&mut self, edges: I)
    where
        I: IntoIterator<Item = (V, V, W)>,
    {
        for (s, d, w) in edges {
            self.add_weighted_edge(s, d, w);
        }
    }

    /// Weight actually stored for an edge of requested weight `w`
    fn effective_weight(&self, w: W) -> W {
        if self.weighted || w == W::one() {
            w
        } else {
            warn!(weight = %w, "ignoring weight on unweighted graph");
            W::one()
        }
    }

    fn add_arcs(&mut self, u: Node, v: Node, w: W) {
        trace!(src = u, dst = v, weight = %w, "add edge");
        self.adjacency.add_arc(u, v, w);
        if !self.directed {
            self.adjacency.add_arc(v, u, w);
        }
    }

    /// Deletes the first edge `s -> d` and returns its weight.
    /// For undirected graphs, the first mirrored entry `d -> s` is deleted as well.
    pub fn delete_edge(&mut self, s: &V, d: &V) -> Result<W> {
        let u = self.index_of(s)?;
        let v = self.index_of(d)?;
        self.remove_edge(u, v)
    }

    /// Handle-based variant of [`Graph::delete_edge`]
    pub fn remove_edge(&mut self, u: Node, v: Node) -> Result<W> {
        self.check_node(u)?;
        self.check_node(v)?;

        let edge = self
            .adjacency
            .remove_first_arc(u, v)
            .ok_or(GraphError::EdgeNotFound { src: u, dst: v })?;

        if !self.directed {
            if self.adjacency.remove_first_arc(v, u).is_none() {
                warn!(src = v, dst = u, "mirrored entry of undirected edge is missing");
            }
        }

        Ok(edge.weight)
    }

    /// Compares two edges: in order for directed graphs, in any order otherwise
    pub fn equal_edge(&self, e1: &WeightedEdge<W>, e2: &WeightedEdge<W>) -> bool {
        if self.directed {
            e1.equal_directed(e2)
        } else {
            e1.equal_undirected(e2)
        }
    }

    /// Returns *true* if there is at least one entry `u -> v`
    /// ** Panics if `u >= n` **
    pub fn has_edge(&self, u: Node, v: Node) -> bool {
        self.adjacency.edges_of(u).iter().any(|e| e.dst == v)
    }

    /// Returns the underlying adjacency storage
    pub fn adjacency(&self) -> &AdjacencyStore<W> {
        &self.adjacency
    }
}

impl<W: Weight> Graph<Node, W> {
    /// Creates an unweighted graph whose `n` vertices are labelled by their own handles `0..n`
    /// and adds all given edges
    ///
    /// # Examples
    /// ```
    /// use wgraphs::prelude::*;
    ///
    /// let g: Graph<Node> = Graph::from_edges(true, 4, [(0, 1), (1, 2)]);
    /// assert_eq!(g.number_of_nodes(), 4);
    /// assert_eq!(g.number_of_edges(), 2);
    /// ```
    pub fn from_edges<I, E>(directed: bool, n: NumNodes, edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        let mut graph = Self::new(directed, false);
        for u in 0..n {
            graph.add_vertex(u);
        }
        for e in edges {
            let Edge(u, v) = e.into();
            graph.add_edge(u, v);
        }
        graph
    }

    /// Creates a weighted graph whose `n` vertices are labelled by their own handles `0..n`
    /// and adds all given edges
    pub fn from_weighted_edges<I>(directed: bool, n: NumNodes, edges: I) -> Self
    where
        I: IntoIterator<Item = WeightedEdge<W>>,
    {
        let mut graph = Self::new(directed, true);
        for u in 0..n {
            graph.add_vertex(u);
        }
        for e in edges {
            graph.add_weighted_edge(e.src, e.dst, e.weight);
        }
        graph
    }
}

impl<V, W> GraphNodeOrder for Graph<V, W> {
    fn number_of_nodes(&self) -> NumNodes {
        self.index.len() as NumNodes
    }
}

impl<V, W> GraphEdgeOrder for Graph<V, W> {
    /// Sum of all list lengths, halved for undirected graphs
    fn number_of_edges(&self) -> NumEdges {
        let arcs = self.adjacency.number_of_arcs() as NumEdges;
        if self.directed { arcs } else { arcs / 2 }
    }
}

impl<V, W> GraphType for Graph<V, W> {
    fn is_directed(&self) -> bool {
        self.directed
    }
}

impl<V, W: Weight> AdjacencyList for Graph<V, W> {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.adjacency.edges_of(u).iter().map(|e| e.dst)
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.adjacency.degree_of(u)
    }
}

impl<V, W: Weight> WeightedAdjacencyList for Graph<V, W> {
    type Weight = W;

    fn weighted_edges_of(&self, u: Node) -> impl Iterator<Item = WeightedEdge<W>> + '_ {
        self.adjacency.edges_of(u).iter().copied()
    }

    /// An undirected self-loop is stored twice in the same list; only every other such entry is kept
    fn unique_weighted_edges(&self) -> impl Iterator<Item = WeightedEdge<W>> + '_ {
        let directed = self.directed;
        let mut loop_parity = false;
        self.weighted_edges().filter(move |e| {
            if directed {
                true
            } else if e.src == e.dst {
                loop_parity = !loop_parity;
                loop_parity
            } else {
                e.src < e.dst
            }
        })
    }
}

impl<V: Debug, W: Weight> Display for Graph<V, W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Vertices ({}): {}",
            self.number_of_nodes(),
            self.index
                .iter()
                .enumerate()
                .map(|(u, v)| format!("{v:?}({u})"))
                .join(", ")
        )?;
        writeln!(
            f,
            "Edges ({}), entries {{src, dst, weight}}:",
            self.number_of_edges()
        )?;
        for (u, list) in self.adjacency.iter().enumerate() {
            writeln!(f, "{u:>5}: {}", list.iter().join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::g1;

    #[test]
    fn build_undirected() {
        let g = g1();
        assert_eq!(g.number_of_nodes(), 7);
        assert_eq!(g.number_of_edges(), 9);

        let arcs: usize = g.adjacency().iter().map(|l| l.len()).sum();
        assert_eq!(arcs, 18);
        assert_eq!(g.number_of_edges() as usize, arcs / 2);

        // vertices are created in order of first appearance
        assert_eq!(
            g.identifiers().copied().collect_vec(),
            vec!['A', 'C', 'D', 'B', 'F', 'E', 'G']
        );

        // symmetry
        for e in g.weighted_edges() {
            assert!(
                g.weighted_edges_of(e.dst)
                    .any(|f| f.dst == e.src && f.weight == e.weight)
            );
        }
    }

    #[test]
    fn build_directed() {
        let mut g: Graph<char> = Graph::new(true, false);
        g.add_edges([('B', 'A'), ('B', 'C'), ('A', 'C')]);

        assert_eq!(g.number_of_edges(), 3);
        assert_eq!(g.degree_of(0), 2);
        assert_eq!(g.degree_of(1), 1);
        assert_eq!(g.degree_of(2), 0);
        assert!(g.weighted_edges().all(|e| e.weight == 1));
    }

    #[test]
    fn unweighted_ignores_weights() {
        let mut g: Graph<u32, i32> = Graph::default();
        g.add_weighted_edge(1, 2, 17);
        assert_eq!(g.weighted_edges_of(0).next().map(|e| e.weight), Some(1));
        assert!(!g.is_weighted());
        assert!(g.is_undirected());
    }

    #[test]
    fn add_edge_between_handles() {
        let mut g: Graph<char, i32> = Graph::new(true, true);
        let a = g.add_vertex('a');
        let b = g.add_vertex('b');

        assert_eq!(g.add_weighted_edge_between(a, b, 7), Ok(Edge(0, 1)));
        assert_eq!(g.weighted_edges().collect_vec(), vec![WeightedEdge::new(0, 1, 7)]);
        assert_eq!(
            g.add_weighted_edge_between(a, 2, 1),
            Err(GraphError::InvalidNode(2))
        );
        assert_eq!(g.number_of_edges(), 1);

        let mut h: Graph<char, i32> = Graph::new(false, false);
        h.add_vertex('a');
        h.add_vertex('b');
        assert_eq!(h.add_weighted_edge_between(1, 0, 9), Ok(Edge(1, 0)));
        assert_eq!(h.remove_edge(0, 1), Ok(1));
        assert_eq!(h.number_of_edges(), 0);
    }

    #[test]
    fn lookup() {
        let mut g: Graph<char> = Graph::default();
        assert_eq!(g.add_vertex('x'), 0);
        assert_eq!(g.add_vertex('y'), 1);

        assert_eq!(g.index_of(&'y'), Ok(1));
        assert!(matches!(
            g.index_of(&'q'),
            Err(GraphError::VertexNotFound(_))
        ));
        assert_eq!(g.vertex(0), Ok(&'x'));
        assert_eq!(g.vertex(2), Err(GraphError::InvalidNode(2)));
        assert!(g.contains_vertex(&'x'));
        assert!(!g.contains_vertex(&'*'));
        assert_eq!(g.labels_of([1, 0]), Ok(vec![&'y', &'x']));
    }

    #[test]
    fn self_loops_and_parallel_edges() {
        let mut g: Graph<u8, i32> = Graph::new(false, true);
        g.add_weighted_edge(1, 1, 5);
        g.add_weighted_edge(1, 2, 3);
        g.add_weighted_edge(1, 2, 4);

        assert_eq!(g.number_of_nodes(), 2);
        assert_eq!(g.number_of_edges(), 3);
        assert_eq!(g.degree_of(0), 4);
        assert_eq!(g.degree_of(1), 2);

        assert_eq!(
            g.unique_weighted_edges()
                .map(|e| (e.src, e.dst, e.weight))
                .collect_vec(),
            vec![(0, 0, 5), (0, 1, 3), (0, 1, 4)]
        );
    }

    #[test]
    fn delete_edge_is_symmetric() {
        let mut g = g1();
        assert_eq!(g.delete_edge(&'A', &'C'), Ok(1));
        assert_eq!(g.number_of_edges(), 8);
        assert!(!g.has_edge(0, 1));
        assert!(!g.has_edge(1, 0));

        assert_eq!(
            g.delete_edge(&'A', &'C'),
            Err(GraphError::EdgeNotFound { src: 0, dst: 1 })
        );
        assert!(g.delete_edge(&'A', &'Z').is_err());

        // delete everything
        let n = g.number_of_nodes();
        for u in 0..n {
            for v in 0..n {
                while g.remove_edge(u, v).is_ok() {}
            }
        }
        assert!(g.is_singleton_graph());
        assert!(g.adjacency().iter().all(|l| l.is_empty()));
    }

    #[test]
    fn delete_edge_directed() {
        let mut g: Graph<char> = Graph::new(true, false);
        g.add_edges([('a', 'b'), ('b', 'a'), ('a', 'b')]);

        assert_eq!(g.delete_edge(&'a', &'b'), Ok(1));
        assert_eq!(g.number_of_edges(), 2);
        assert!(g.has_edge(0, 1));
        assert!(g.has_edge(1, 0));
    }

    #[test]
    fn delete_vertex_cascades() {
        let mut g = g1();
        assert_eq!(g.delete_vertex(&'C'), Ok('C'));

        assert_eq!(g.number_of_nodes(), 6);
        // C had degree 4
        assert_eq!(g.number_of_edges(), 5);
        assert!(!g.contains_vertex(&'C'));

        // dense and consistent handles
        for u in g.vertices() {
            let label = *g.vertex(u).unwrap();
            assert_eq!(g.index_of(&label), Ok(u));
            for e in g.weighted_edges_of(u) {
                assert_eq!(e.src, u);
                assert!(g.has_vertex(e.dst));
            }
        }

        let d = g.index_of(&'D').unwrap();
        let a = g.index_of(&'A').unwrap();
        assert!(g.has_edge(a, d));
        assert!(g.has_edge(d, a));

        assert_eq!(g.delete_node(17), Err(GraphError::InvalidNode(17)));
        assert!(g.delete_vertex(&'C').is_err());
    }

    #[test]
    fn delete_all_vertices() {
        let mut g: Graph<u32> = Graph::default();
        for v in [5, 3, 9, 1] {
            g.add_vertex(v);
        }

        for u in (0..g.number_of_nodes()).rev() {
            let v = *g.vertex(u).unwrap();
            assert_eq!(g.delete_vertex(&v), Ok(v));
        }
        assert!(g.is_empty());
    }

    #[test]
    fn equal_edges() {
        let e = WeightedEdge::new(0, 1, 3);
        let f = WeightedEdge::new(1, 0, 3);

        assert!(g1().equal_edge(&e, &f));
        assert!(!Graph::<char, i64>::new(true, true).equal_edge(&e, &f));
    }

    #[test]
    fn display() {
        let mut g: Graph<char, i32> = Graph::new(true, true);
        g.add_weighted_edge('a', 'b', 4);

        let text = g.to_string();
        assert!(text.starts_with("Vertices (2): 'a'(0), 'b'(1)"));
        assert!(text.contains("{0, 1, 4}"));
    }
}
