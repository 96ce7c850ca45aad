/*!
Graph traversals and traversal-derived utilities.

This module provides:
- Lazy traversal iterators (BFS and DFS, with and without predecessor tracking) generic over
  the frontier and the visited-set.
- A classical depth-first preorder ([`DfsPreorder`]) that visits neighbors in adjacency order.
- Kahn's topological sorting ([`TopoSearch`]).
- Extension traits turning traversals into rankings ([`RankFromOrder`]) or parent and depth
  arrays ([`TraversalTree`]).
- The [`Traversal`] trait exposing all of the above as methods on graphs.

All traversals only use explicit stacks and queues, so deep graphs never overflow the call stack.
*/

use super::*;
use std::{collections::VecDeque, marker::PhantomData};

/// Read access to the set of nodes a traversal has already discovered.
pub trait TraversalState<S>
where
    S: Set<Node>,
{
    /// Returns a reference to the set of visited nodes.
    fn visited(&self) -> &S;

    /// Checks if a given node `u` has already been discovered.
    fn did_visit_node(&self, u: Node) -> bool {
        self.visited().contains(&u)
    }
}

/// Item yielded by a traversal iterator: the visited node and, optionally, the node it was
/// discovered from.
///
/// - [`Node`] stores only the node.
/// - [`PredecessorOfNode`] stores `(predecessor, node)` pairs.
pub trait SequencedItem: Clone + Copy {
    /// Constructs a new item with a predecessor.
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self;

    /// Constructs a new item without predecessor information.
    fn new_without_predecessor(item: Node) -> Self;

    /// Returns the node represented by this item.
    fn item(&self) -> Node;

    /// Returns the predecessor of this node, if any.
    fn predecessor(&self) -> Option<Node>;

    /// Returns a pair `(predecessor, item)`
    fn predecessor_with_item(&self) -> (Option<Node>, Node) {
        (self.predecessor(), self.item())
    }
}

impl SequencedItem for Node {
    fn new_with_predecessor(_: Node, item: Node) -> Self {
        item
    }
    fn new_without_predecessor(item: Node) -> Self {
        item
    }
    fn item(&self) -> Node {
        *self
    }
    fn predecessor(&self) -> Option<Node> {
        None
    }
}

/// `(predecessor, node)`; a missing predecessor is encoded by repeating the node.
pub type PredecessorOfNode = (Node, Node);

impl SequencedItem for PredecessorOfNode {
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self {
        (predecessor, item)
    }
    fn new_without_predecessor(item: Node) -> Self {
        (item, item)
    }
    fn item(&self) -> Node {
        self.1
    }
    fn predecessor(&self) -> Option<Node> {
        if self.0 == self.1 { None } else { Some(self.0) }
    }
}

/// Frontier of a traversal. The container decides the visiting order:
///
/// - [`VecDeque`] -> queue semantics -> **BFS**
/// - [`Vec`] -> stack semantics -> **DFS**
pub trait NodeSequencer<T> {
    /// Creates a new sequencer initialized with a single item.
    fn init(u: T) -> Self;

    /// Pushes an item into the frontier.
    fn push(&mut self, item: T);

    /// Removes and returns the next item of the frontier.
    fn pop(&mut self) -> Option<T>;

    /// Returns the number of items currently in the frontier.
    fn cardinality(&self) -> usize;
}

impl<T> NodeSequencer<T> for VecDeque<T> {
    fn init(u: T) -> Self {
        Self::from(vec![u])
    }
    fn push(&mut self, u: T) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl<T> NodeSequencer<T> for Vec<T> {
    fn init(u: T) -> Self {
        vec![u]
    }
    fn push(&mut self, u: T) {
        self.push(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Generic traversal iterator supporting BFS and DFS variants.
///
/// A node is marked as visited when it is pushed into the frontier, so every reachable node
/// is yielded exactly once. Note that the DFS variant therefore does not produce a classical
/// (recursive) DFS preorder; use [`DfsPreorder`] for that.
pub struct TraversalSearch<'a, G, S, I, V>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
    V: Set<Node>,
{
    graph: &'a G,
    visited: V,
    sequencer: S,
    stop_at: Option<Node>,
    _item: PhantomData<I>,
}

/// Breadth-first search with a custom visited-set.
pub type BFSWithSet<'a, G, V> = TraversalSearch<'a, G, VecDeque<Node>, Node, V>;

/// Depth-first search with a custom visited-set.
pub type DFSWithSet<'a, G, V> = TraversalSearch<'a, G, Vec<Node>, Node, V>;

/// Breadth-first search from a given start node.
pub type BFS<'a, G> = TraversalSearch<'a, G, VecDeque<Node>, Node, NodeBitSet>;

/// Stack-based search from a given start node.
pub type DFS<'a, G> = TraversalSearch<'a, G, Vec<Node>, Node, NodeBitSet>;

/// Breadth-first search that additionally yields the tree edge each node was discovered by.
pub type BFSWithPredecessor<'a, G> =
    TraversalSearch<'a, G, VecDeque<PredecessorOfNode>, PredecessorOfNode, NodeBitSet>;

/// Stack-based search that additionally yields the tree edge each node was discovered by.
pub type DFSWithPredecessor<'a, G> =
    TraversalSearch<'a, G, Vec<PredecessorOfNode>, PredecessorOfNode, NodeBitSet>;

impl<G, S, I, V> WithGraphRef<G> for TraversalSearch<'_, G, S, I, V>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
    V: Set<Node>,
{
    fn graph_ref(&self) -> &G {
        self.graph
    }
}

impl<G, S, I, V> TraversalState<V> for TraversalSearch<'_, G, S, I, V>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
    V: Set<Node>,
{
    fn visited(&self) -> &V {
        &self.visited
    }
}

impl<G, S, I, V> Iterator for TraversalSearch<'_, G, S, I, V>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
    V: Set<Node>,
{
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        let popped = self.sequencer.pop()?;
        let u = popped.item();

        if self.stop_at == Some(u) {
            while self.sequencer.pop().is_some() {} // drop all
        } else {
            for v in self.graph.neighbors_of(u) {
                if !self.visited.insert(v) {
                    self.sequencer.push(I::new_with_predecessor(u, v));
                }
            }
        }

        Some(popped)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.sequencer.cardinality(),
            Some(self.graph.len() - self.visited.len() + self.sequencer.cardinality()),
        )
    }
}

impl<'a, G, S, I, V> TraversalSearch<'a, G, S, I, V>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
    V: Set<Node> + FromCapacity,
{
    /// Creates a new traversal iterator starting from `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        assert!(graph.has_vertex(start));

        let len = graph.len();
        let mut visited = V::from_total_used_capacity(len, len);
        visited.insert(start);
        Self {
            graph,
            visited,
            sequencer: S::init(I::new_without_predecessor(start)),
            stop_at: None,
            _item: PhantomData,
        }
    }
}

impl<G, S, I, V> TraversalSearch<'_, G, S, I, V>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
    V: Set<Node>,
{
    /// Sets a stopper node. If this node is reached, the iterator returns it and afterwards only None.
    pub fn set_stop_at(&mut self, stopper: Node) {
        self.stop_at = Some(stopper);
    }

    /// Sets a stopper node. If this node is reached, the iterator returns it and afterwards only None.
    pub fn stop_at(mut self, stopper: Node) -> Self {
        self.set_stop_at(stopper);
        self
    }

    /// Excludes a node from the search: it is treated as already visited, so no edges to or
    /// from it are taken.
    ///
    /// # Warning
    /// Has no effect on nodes that are already in the frontier; call directly after construction.
    pub fn exclude_node(&mut self, u: Node) {
        self.visited.insert(u);
    }

    /// Builder variant of [`TraversalSearch::exclude_node`]
    pub fn with_node_excluded(mut self, u: Node) -> Self {
        self.exclude_node(u);
        self
    }
}

/// Computes a ranking (visiting position) of all nodes from a traversal order.
pub trait RankFromOrder<'a, G>: WithGraphRef<G> + Iterator<Item = Node> + Sized
where
    G: 'a + AdjacencyList,
{
    /// Consumes the iterator and produces `ranking` where `ranking[u]` is the position
    /// (starting at 0) at which `u` was visited.
    ///
    /// Returns `None` if the iterator did not cover every node.
    ///
    /// # Panics
    /// Panics if the iterator yields the same node more than once.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g: Graph<Node> = Graph::from_edges(true, 3, [(2, 1), (1, 0)]);
    ///
    /// let ranking = g.topo_search().ranking().unwrap();
    /// assert_eq!(ranking, vec![2, 1, 0]);
    /// ```
    fn ranking(mut self) -> Option<Vec<Node>> {
        let mut ranking = vec![INVALID_NODE; self.graph_ref().len()];
        let mut rank: Node = 0;

        for u in self.by_ref() {
            assert_eq!(ranking[u as usize], INVALID_NODE); // assert no item is repeated by iterator
            ranking[u as usize] = rank;
            rank += 1;
        }

        (rank == self.graph_ref().number_of_nodes()).then_some(ranking)
    }
}

impl<'a, G, S, V> RankFromOrder<'a, G> for TraversalSearch<'a, G, S, Node, V>
where
    G: AdjacencyList,
    S: NodeSequencer<Node>,
    V: Set<Node>,
{
}

/// Extracts the implied traversal tree of iterators yielding [`PredecessorOfNode`]s.
pub trait TraversalTree<'a, G>:
    WithGraphRef<G> + Iterator<Item = PredecessorOfNode> + Sized
where
    G: 'a + AdjacencyList,
{
    /// Consumes the iterator and writes the predecessor of each visited node into `tree`.
    /// Unvisited entries remain unchanged.
    fn parent_array_into(&mut self, tree: &mut [Node]) {
        for pred_with_item in self.by_ref() {
            if let Some(p) = pred_with_item.predecessor() {
                tree[pred_with_item.item() as usize] = p;
            }
        }
    }

    /// Returns the parent array of the traversal tree. The root and all unvisited nodes are
    /// their own parents.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g: Graph<Node> = Graph::from_edges(false, 4, [(0, 1), (1, 2)]);
    ///
    /// let parents = g.bfs_with_predecessor(0).parent_array();
    /// assert_eq!(parents, vec![0, 0, 1, 3]);
    /// ```
    fn parent_array(&mut self) -> Vec<Node> {
        let mut tree: Vec<_> = self.graph_ref().vertices_range().collect();
        self.parent_array_into(&mut tree);
        tree
    }

    /// Returns the depth of every node in the traversal tree (root depth = 0).
    /// Unvisited nodes get depth 0 as well.
    fn depths(&mut self) -> Vec<Node> {
        let mut depths: Vec<_> = vec![0; self.graph_ref().len()];
        for pred_with_item in self.by_ref() {
            depths[pred_with_item.item() as usize] = pred_with_item
                .predecessor()
                .map_or(0, |p| depths[p as usize] + 1);
        }
        depths
    }
}

impl<'a, G, S, V> TraversalTree<'a, G> for TraversalSearch<'a, G, S, PredecessorOfNode, V>
where
    G: AdjacencyList,
    S: NodeSequencer<PredecessorOfNode>,
    V: Set<Node>,
{
}

/// Classical depth-first preorder: neighbors are explored in adjacency order and a node is
/// marked visited only when it is yielded. This matches the order of a recursive DFS.
pub struct DfsPreorder<'a, G> {
    graph: &'a G,
    visited: NodeBitSet,
    stack: Vec<Node>,
}

impl<'a, G> DfsPreorder<'a, G>
where
    G: AdjacencyList,
{
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        assert!(graph.has_vertex(start));
        Self {
            graph,
            visited: graph.vertex_bitset_unset(),
            stack: vec![start],
        }
    }
}

impl<G> WithGraphRef<G> for DfsPreorder<'_, G>
where
    G: AdjacencyList,
{
    fn graph_ref(&self) -> &G {
        self.graph
    }
}

impl<G> Iterator for DfsPreorder<'_, G>
where
    G: AdjacencyList,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let u = self.stack.pop()?;
            if Set::insert(&mut self.visited, u) {
                continue;
            }

            // push in reverse so that the first neighbor is explored first
            let first = self.stack.len();
            self.stack.extend(
                self.graph
                    .neighbors_of(u)
                    .filter(|&v| !self.visited.contains(&v)),
            );
            self.stack[first..].reverse();

            return Some(u);
        }
    }
}

impl<'a, G> RankFromOrder<'a, G> for DfsPreorder<'a, G> where G: AdjacencyList {}

/// Kahn's algorithm.
///
/// - Computes the in-degree of every node from all adjacency lists.
/// - Seeds a FIFO queue with all nodes of in-degree 0 in increasing order.
/// - Repeatedly dequeues a node, decrements the in-degrees of its successors and enqueues
///   successors reaching in-degree 0.
///
/// Nodes on or behind a cycle never reach in-degree 0, so on cyclic graphs fewer than `n`
/// nodes are yielded. Meaningful for directed graphs only: in an undirected graph every
/// edge counts in both directions.
pub struct TopoSearch<'a, G> {
    graph: &'a G,
    in_degs: Vec<NumNodes>,
    queue: VecDeque<Node>,
}

impl<G> WithGraphRef<G> for TopoSearch<'_, G>
where
    G: AdjacencyList,
{
    fn graph_ref(&self) -> &G {
        self.graph
    }
}

impl<G> Iterator for TopoSearch<'_, G>
where
    G: AdjacencyList,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        for v in self.graph.neighbors_of(u) {
            self.in_degs[v as usize] -= 1;
            if self.in_degs[v as usize] == 0 {
                self.queue.push_back(v);
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.graph.len()))
    }
}

impl<'a, G> TopoSearch<'a, G>
where
    G: AdjacencyList,
{
    fn new(graph: &'a G) -> Self {
        let in_degs = graph.in_degrees();
        let queue: VecDeque<Node> = in_degs
            .iter()
            .enumerate()
            .filter_map(|(u, &d)| (d == 0).then_some(u as Node))
            .collect();

        Self {
            graph,
            in_degs,
            queue,
        }
    }
}

impl<'a, G> RankFromOrder<'a, G> for TopoSearch<'a, G> where G: AdjacencyList {}

/// Provides traversal methods (BFS, DFS, topological order, ...) directly on graphs
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator over all nodes reachable from `start` in **BFS order**.
    /// ** Panics if `start >= n` **
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g: Graph<Node> = Graph::from_edges(false, 3, [(0, 1), (1, 2)]);
    ///
    /// let order: Vec<_> = g.bfs(1).collect();
    /// assert_eq!(order, vec![1, 0, 2]);
    /// ```
    fn bfs(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start)
    }

    /// Returns an iterator over all nodes reachable from `start` using a stack as frontier.
    /// ** Panics if `start >= n` **
    fn dfs(&self, start: Node) -> DFS<'_, Self> {
        DFS::new(self, start)
    }

    /// BFS from `start` that additionally yields the predecessor of every node.
    /// ** Panics if `start >= n` **
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::{*, traversal::SequencedItem}};
    ///
    /// let g: Graph<Node> = Graph::from_edges(true, 2, [(0, 1)]);
    ///
    /// let mut it = g.bfs_with_predecessor(0);
    /// assert_eq!(it.next().unwrap().item(), 0);
    /// assert_eq!(it.next().unwrap().predecessor(), Some(0));
    /// ```
    fn bfs_with_predecessor(&self, start: Node) -> BFSWithPredecessor<'_, Self> {
        BFSWithPredecessor::new(self, start)
    }

    /// Stack-based search from `start` that additionally yields the predecessor of every node.
    /// ** Panics if `start >= n` **
    fn dfs_with_predecessor(&self, start: Node) -> DFSWithPredecessor<'_, Self> {
        DFSWithPredecessor::new(self, start)
    }

    /// Returns all nodes reachable from `start` in recursive DFS preorder.
    /// ** Panics if `start >= n` **
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g: Graph<Node> = Graph::from_edges(false, 4, [(0, 1), (0, 2), (1, 3)]);
    ///
    /// let order: Vec<_> = g.dfs_preorder(0).collect();
    /// assert_eq!(order, vec![0, 1, 3, 2]);
    /// ```
    fn dfs_preorder(&self, start: Node) -> DfsPreorder<'_, Self> {
        DfsPreorder::new(self, start)
    }

    /// Returns *true* if there is a (directed) path from `start` to `target`
    /// ** Panics if `start >= n` **
    fn is_reachable(&self, start: Node, target: Node) -> bool {
        self.bfs(start).any(|u| u == target)
    }

    /// Returns an iterator yielding nodes in **topological order** (Kahn's algorithm).
    /// Terminates early if the graph contains a cycle.
    fn topo_search(&self) -> TopoSearch<'_, Self> {
        TopoSearch::new(self)
    }

    /// Collects [`Traversal::topo_search`]. A result shorter than `n` signals a cycle.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let mut g: Graph<char> = Graph::new(true, false);
    /// g.add_edges([('B', 'A'), ('A', 'C'), ('B', 'C')]);
    ///
    /// let order = g.topological_sort();
    /// assert_eq!(g.labels_of(order).unwrap(), vec![&'B', &'A', &'C']);
    /// ```
    fn topological_sort(&self) -> Vec<Node> {
        self.topo_search().collect()
    }

    /// Returns `true` if the directed graph is **acyclic**, i.e. if the topological search
    /// outputs all nodes.
    fn is_acyclic(&self) -> bool {
        self.topo_search().count() == self.len()
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::testing::*;
    use fxhash::FxHashSet;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    //  / 2 --- \
    // 1         4 - 3
    //  \ 0 - 5 /
    fn diamond() -> Graph<Node> {
        Graph::from_edges(false, 6, [(1, 2), (1, 0), (4, 3), (0, 5), (2, 4), (5, 4)])
    }

    #[test]
    fn bfs_order() {
        let graph = diamond();

        let order: Vec<Node> = graph.bfs(1).collect();
        assert_eq!(order, vec![1, 2, 0, 4, 5, 3]);

        let directed: Graph<Node> =
            Graph::from_edges(true, 6, [(1, 2), (1, 0), (4, 3), (0, 5), (2, 4), (5, 4)]);
        assert_eq!(BFS::new(&directed, 5).collect_vec(), [5, 4, 3]);
        assert_eq!(
            BFSWithSet::<_, FxHashSet<Node>>::new(&directed, 5).collect_vec(),
            [5, 4, 3]
        );
    }

    #[test]
    fn bfs_with_predecessor() {
        let graph = diamond();

        let mut edges: Vec<_> = graph
            .bfs_with_predecessor(1)
            .map(|x| x.predecessor_with_item())
            .collect();
        edges.sort();
        assert_eq!(
            edges,
            vec![
                (None, 1),
                (Some(0), 5),
                (Some(1), 0),
                (Some(1), 2),
                (Some(2), 4),
                (Some(4), 3)
            ]
        );
    }

    #[test]
    fn stopper_and_exclusion() {
        let graph: Graph<Node> = Graph::from_edges(false, 4, [(0, 1), (1, 2), (2, 3)]);
        assert_eq!(graph.bfs(0).collect_vec(), vec![0, 1, 2, 3]);
        assert_eq!(graph.bfs(0).stop_at(1).collect_vec(), vec![0, 1]);
        assert_eq!(graph.bfs(0).with_node_excluded(2).collect_vec(), vec![0, 1]);

        let mut bfs = graph.bfs(3);
        bfs.next();
        assert!(bfs.did_visit_node(2));
        assert!(!bfs.did_visit_node(0));
    }

    #[test]
    fn bfs_tree() {
        let tree = diamond().bfs_with_predecessor(1).parent_array();
        assert_eq!(tree, vec![1, 1, 1, 4, 2, 0]);

        let depths = diamond().bfs_with_predecessor(1).depths();
        assert_eq!(depths, vec![1, 0, 1, 3, 2, 2]);
    }

    #[test]
    fn dfs_order() {
        //  / 2
        // 1         4 - 3
        //  \ 0 - 5 /
        let graph: Graph<Node> =
            Graph::from_edges(false, 6, [(1, 2), (1, 0), (4, 3), (0, 5), (5, 4)]);

        let order: Vec<Node> = DFS::new(&graph, 1).collect();
        assert_eq!(order, vec![1, 0, 5, 4, 3, 2]);

        let tree = graph.dfs_with_predecessor(1).parent_array();
        assert_eq!(tree, vec![1, 1, 1, 4, 5, 0]);

        assert_eq!(graph.dfs_preorder(1).collect_vec(), vec![1, 2, 0, 5, 4, 3]);
        assert_eq!(graph.dfs_preorder(5).collect_vec(), vec![5, 0, 1, 2, 4, 3]);
    }

    #[test]
    fn dfs_preorder_on_matrix() {
        let m = WeightMatrix::from_rows(vec![
            vec![0, 1, 1, 0, 0],
            vec![1, 0, 0, 1, 1],
            vec![1, 0, 0, 0, 0],
            vec![0, 1, 0, 0, 0],
            vec![0, 1, 0, 0, 0],
        ])
        .unwrap();

        assert_eq!(m.dfs_preorder(0).collect_vec(), vec![0, 1, 3, 4, 2]);
        assert_eq!(m.bfs(0).collect_vec(), vec![0, 1, 2, 3, 4]);
        assert_eq!(m.dfs_preorder(4).ranking(), Some(vec![2, 1, 3, 4, 0]));
    }

    #[test]
    fn traversals_visit_component_once() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for _ in 0..20 {
            let graph = random_graph(rng, 40, 0.05, false);
            for start in [0, 17, 39] {
                let reachable = graph.bfs(start).sorted().collect_vec();
                assert_eq!(graph.dfs(start).sorted().collect_vec(), reachable);
                assert_eq!(graph.dfs_preorder(start).sorted().collect_vec(), reachable);
                assert!(reachable.iter().all(|&u| graph.is_reachable(start, u)));
            }
        }
    }

    #[test]
    fn topological_order_g3() {
        let mut g = g3();
        let order = g.topological_sort();
        assert_eq!(
            g.labels_of(order).unwrap(),
            vec![&'B', &'A', &'D', &'C', &'E']
        );
        assert!(g.is_acyclic());

        // idempotent
        assert_eq!(g.topological_sort(), g.topological_sort());

        g.add_edge('E', 'D');
        let order = g.topological_sort();
        assert_eq!(g.labels_of(order).unwrap(), vec![&'B', &'A']);
        assert!(!g.is_acyclic());
    }

    #[test]
    fn topology_rank() {
        let mut graph: Graph<Node> =
            Graph::from_edges(true, 7, [(2, 0), (1, 0), (0, 3), (0, 4), (0, 5), (3, 6)]);

        {
            let ranks = graph.topo_search().ranking().unwrap();
            assert_eq!(*ranks.iter().min().unwrap(), 0);
            assert_eq!(*ranks.iter().max().unwrap(), graph.number_of_nodes() - 1);
            for Edge(u, v) in graph.edges(false) {
                assert!(ranks[u as usize] < ranks[v as usize]);
            }
        }

        graph.add_edge(6, 2); // introduce cycle
        assert!(graph.topo_search().ranking().is_none());
        assert!(!graph.is_acyclic());
    }

    #[test]
    fn random_dags() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);

        for _ in 0..20 {
            // edges only point from smaller to larger handles
            let graph = random_dag(rng, 30, 0.2);
            let order = graph.topological_sort();
            assert_eq!(order.len(), 30);

            let ranks = graph.topo_search().ranking().unwrap();
            for e in graph.weighted_edges() {
                assert!(ranks[e.src as usize] < ranks[e.dst as usize]);
            }
        }
    }
}
