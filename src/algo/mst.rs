/*!
# Minimum Spanning Trees

Two textbook algorithms, both without auxiliary heaps or union-find structures:
- **Prim** grows a single tree from a root and in every round rescans all edges leaving the tree,
  taking the lightest one (`O(n * m)`).
- **Kruskal** sorts all edges by linear insertion and joins trees by relabelling tree ids
  (`O(m^2 + n * m)`). It is mainly intended for dense [`WeightMatrix`] inputs.

Both treat edges as undirected connections; on directed inputs Prim only follows outgoing edges
while Kruskal ignores orientation altogether.
*/

use itertools::Itertools;
use tracing::{debug, trace, warn};

use super::*;

/// Edges of a spanning tree in the order they were accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningTree<W> {
    pub edges: Vec<WeightedEdge<W>>,
}

impl<W: Weight> SpanningTree<W> {
    /// Total weight of the tree, `None` on overflow
    pub fn weight(&self) -> Option<W> {
        total_weight(self.edges.iter().map(|e| e.weight))
    }

    /// Number of edges of the tree
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns *true* if the tree has no edges, i.e. spans at most one node
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns *true* if `{u, v}` is an edge of the tree
    pub fn contains(&self, u: Node, v: Node) -> bool {
        self.edges
            .iter()
            .any(|e| Edge(e.src, e.dst).normalized() == Edge(u, v).normalized())
    }
}

/// Spanning tree algorithms available on every weighted graph
pub trait MinimumSpanningTree: WeightedAdjacencyList + Sized {
    /// Computes a minimum spanning tree with Prim's algorithm starting at `root`.
    ///
    /// In each of the `n - 1` rounds, all edges from selected to unselected nodes are scanned
    /// and the lightest one is added. On ties, the edge found first (lowest source node, then
    /// adjacency order) wins.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let mut g: Graph<&str> = Graph::new(false, true);
    /// g.add_weighted_edges([("a", "b", 3), ("b", "c", 1), ("a", "c", 1)]);
    ///
    /// let tree = g.mst_prim(0).unwrap();
    /// assert_eq!(tree.weight(), Some(2));
    /// assert!(tree.contains(0, 2) && tree.contains(2, 1));
    /// ```
    ///
    /// # Errors
    /// - [`GraphError::InvalidNode`] if `root` is not in the graph
    /// - [`GraphError::Disconnected`] if not all nodes can be reached from `root`
    #[tracing::instrument(skip(self), level = "debug")]
    fn mst_prim(&self, root: Node) -> Result<SpanningTree<Self::Weight>> {
        self.check_node(root)?;
        let n = self.len();

        let mut selected = self.vertex_bitset_unset();
        selected.set(root as usize, true);
        let mut edges = Vec::with_capacity(n - 1);

        for _ in 1..n {
            let mut lightest: Option<WeightedEdge<Self::Weight>> = None;
            for u in self.vertices().filter(|&u| selected[u as usize]) {
                for e in self.weighted_edges_of(u) {
                    if !selected[e.dst as usize]
                        && lightest.is_none_or(|best| e.weight < best.weight)
                    {
                        lightest = Some(e);
                    }
                }
            }

            let Some(e) = lightest else {
                warn!(reached = edges.len() + 1, total = n, "graph is disconnected");
                return Err(GraphError::Disconnected {
                    reached: edges.len() + 1,
                    total: n,
                });
            };

            trace!(edge = %e, "accepted");
            selected.set(e.dst as usize, true);
            edges.push(e);
        }

        debug!(edges = edges.len(), "spanning tree complete");
        Ok(SpanningTree { edges })
    }

    /// Computes a minimum spanning tree with Kruskal's algorithm.
    ///
    /// Every edge is taken once (see [`WeightedAdjacencyList::unique_weighted_edges`]) and
    /// inserted into a sorted list in front of the first heavier edge, so edges of equal weight
    /// keep the order they were found in. Each node starts in its own tree; an edge joining two
    /// different trees is accepted and all nodes of the source's tree are relabelled to the
    /// destination's tree.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let m = WeightMatrix::from_rows(vec![
    ///     vec![0, 4, 1],
    ///     vec![4, 0, 2],
    ///     vec![1, 2, 0],
    /// ]).unwrap();
    ///
    /// let tree = m.mst_kruskal().unwrap();
    /// assert_eq!(tree.edges, vec![WeightedEdge::new(0, 2, 1), WeightedEdge::new(1, 2, 2)]);
    /// ```
    ///
    /// # Errors
    /// [`GraphError::Disconnected`] if the graph has more than one connected component.
    /// `reached` is the size of the largest tree found.
    #[tracing::instrument(skip(self), level = "debug")]
    fn mst_kruskal(&self) -> Result<SpanningTree<Self::Weight>> {
        let n = self.len();

        let mut sorted: Vec<WeightedEdge<Self::Weight>> = Vec::new();
        for e in self.unique_weighted_edges() {
            let pos = sorted
                .iter()
                .position(|x| x.weight > e.weight)
                .unwrap_or(sorted.len());
            sorted.insert(pos, e);
        }

        let mut tree_id: Vec<Node> = self.vertices().collect();
        let mut edges = Vec::with_capacity(n.saturating_sub(1));

        for e in sorted {
            if edges.len() + 1 >= n {
                break;
            }

            let (src_tree, dst_tree) = (tree_id[e.src as usize], tree_id[e.dst as usize]);
            if src_tree == dst_tree {
                continue;
            }

            for id in tree_id.iter_mut().filter(|id| **id == src_tree) {
                *id = dst_tree;
            }
            trace!(edge = %e, "accepted");
            edges.push(e);
        }

        if edges.len() + 1 < n {
            let reached = tree_id.iter().counts().into_values().max().unwrap_or(0);
            warn!(reached, total = n, "graph is disconnected");
            return Err(GraphError::Disconnected { reached, total: n });
        }

        debug!(edges = edges.len(), "spanning tree complete");
        Ok(SpanningTree { edges })
    }
}

impl<G> MinimumSpanningTree for G where G: WeightedAdjacencyList + Sized {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    fn classic_matrix() -> WeightMatrix<i32> {
        WeightMatrix::from_rows(vec![
            vec![0, 2, 0, 6, 0],
            vec![2, 0, 3, 8, 5],
            vec![0, 3, 0, 0, 7],
            vec![6, 8, 0, 0, 9],
            vec![0, 5, 7, 9, 0],
        ])
        .unwrap()
    }

    #[test]
    fn prim_g1() {
        let g = g1();
        let a = g.index_of(&'A').unwrap();

        let tree = g.mst_prim(a).unwrap();
        assert_eq!(tree.len(), 6);
        assert_eq!(tree.weight(), Some(8));

        // A0 C1 D2 B3 F4 E5 G6
        assert_eq!(
            tree.edges,
            vec![
                WeightedEdge::new(0, 1, 1),
                WeightedEdge::new(1, 2, 1),
                WeightedEdge::new(2, 6, 1),
                WeightedEdge::new(6, 4, 1),
                WeightedEdge::new(1, 3, 2),
                WeightedEdge::new(4, 5, 2),
            ]
        );
        assert_eq!(g.mst_kruskal().unwrap().weight(), Some(8));
    }

    #[test]
    fn kruskal_matrix() {
        let m = classic_matrix();

        let tree = m.mst_kruskal().unwrap();
        assert_eq!(
            tree.edges,
            vec![
                WeightedEdge::new(0, 1, 2),
                WeightedEdge::new(1, 2, 3),
                WeightedEdge::new(1, 4, 5),
                WeightedEdge::new(0, 3, 6),
            ]
        );
        assert_eq!(tree.weight(), Some(16));
        assert_eq!(m.mst_prim(0).unwrap().weight(), Some(16));
    }

    #[test]
    fn kruskal_ties_keep_discovery_order() {
        let m = WeightMatrix::from_rows(vec![vec![0, 1, 1], vec![1, 0, 1], vec![1, 1, 0]]).unwrap();
        let tree = m.mst_kruskal().unwrap();
        assert!(tree.contains(0, 1) && tree.contains(0, 2));
        assert!(!tree.contains(1, 2));
    }

    #[test]
    fn loops_and_parallel_edges() {
        let g: Graph<Node> = Graph::from_weighted_edges(
            false,
            3,
            [(0, 0, -5), (0, 1, 4), (0, 1, 2), (1, 2, 3), (2, 1, 1)].map(WeightedEdge::from),
        );

        let prim = g.mst_prim(2).unwrap();
        assert_eq!(prim.weight(), Some(3));
        assert!(!prim.edges.iter().any(|e| e.src == e.dst));

        assert_eq!(g.mst_kruskal().unwrap().weight(), Some(3));
    }

    #[test]
    fn disconnected() {
        let g: Graph<Node> = Graph::from_weighted_edges(
            false,
            5,
            [(0, 1, 1), (2, 3, 1), (3, 4, 2)].map(WeightedEdge::from),
        );

        assert_eq!(
            g.mst_prim(0),
            Err(GraphError::Disconnected {
                reached: 2,
                total: 5
            })
        );
        assert_eq!(
            g.mst_prim(4),
            Err(GraphError::Disconnected {
                reached: 3,
                total: 5
            })
        );
        assert_eq!(
            g.mst_kruskal(),
            Err(GraphError::Disconnected {
                reached: 3,
                total: 5
            })
        );
        assert_eq!(g.mst_prim(5), Err(GraphError::InvalidNode(5)));
    }

    #[test]
    fn trivial_graphs() {
        let single: Graph<Node> = Graph::from_weighted_edges(false, 1, []);
        assert!(single.mst_prim(0).unwrap().is_empty());
        assert_eq!(single.mst_kruskal().unwrap().weight(), Some(0));

        let empty: WeightMatrix<i64> = WeightMatrix::new(0);
        assert!(empty.mst_kruskal().unwrap().is_empty());
    }

    #[test]
    fn random_graphs_agree() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for _ in 0..50 {
            let g = random_connected_graph(rng, 30, 0.1, false);
            let n = g.len();

            let prim = g.mst_prim(0).unwrap();
            let kruskal = g.mst_kruskal().unwrap();
            let on_matrix = g.to_weight_matrix().mst_kruskal().unwrap();

            assert_eq!(prim.len(), n - 1);
            assert_eq!(kruskal.len(), n - 1);
            assert_eq!(prim.weight(), kruskal.weight());
            assert_eq!(prim.weight(), on_matrix.weight());

            let tree: Graph<Node> = Graph::from_weighted_edges(false, n as NumNodes, prim.edges);
            assert_eq!(tree.bfs(0).count(), n);
        }
    }
}
