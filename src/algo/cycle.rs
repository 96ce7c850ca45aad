/*!
# Cycle Detection

Depth-first cycle detection starting from a single node. Only the part of the graph reachable
from the start node is examined.

- **Undirected graphs**: a visited neighbor other than the tree parent closes a cycle. The edge
  back to the parent is skipped exactly once, so parallel edges and self-loops are cycles.
- **Directed graphs**: a neighbor that is still on the DFS stack closes a cycle (back edge).

The search is iterative and keeps one frame per node of the current DFS path.
*/

use tracing::debug;

use super::*;

/// A node on the current DFS path together with its unexplored neighbors
struct Frame<I> {
    node: Node,
    parent: Option<Node>,
    skipped_parent: bool,
    neighbors: I,
}

/// Configurable depth-first cycle search.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// // two parallel edges between 0 and 1
/// let g: Graph<Node> = Graph::from_edges(false, 2, [(0, 1), (1, 0)]);
///
/// assert!(CycleSearch::new(&g).detect(0).unwrap());
/// assert!(!CycleSearch::new(&g).first_branch_only(true).detect(0).unwrap());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CycleSearch<'a, G> {
    graph: &'a G,
    first_branch_only: bool,
}

impl<G> WithGraphRef<G> for CycleSearch<'_, G> {
    fn graph_ref(&self) -> &G {
        self.graph
    }
}

impl<'a, G> CycleSearch<'a, G>
where
    G: AdjacencyList + GraphType,
{
    /// Creates a search that explores all neighbors and respects edge directions
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            first_branch_only: false,
        }
    }

    /// If *true*, the search descends into the first unvisited neighbor of every node and never
    /// returns to explore its siblings. Any visited neighbor other than the parent counts as a
    /// cycle, regardless of edge directions. Cycles off this single path are missed.
    pub fn set_first_branch_only(&mut self, first_branch_only: bool) {
        self.first_branch_only = first_branch_only;
    }

    /// See [`CycleSearch::set_first_branch_only`]
    pub fn first_branch_only(mut self, first_branch_only: bool) -> Self {
        self.set_first_branch_only(first_branch_only);
        self
    }

    /// Returns *true* if a cycle is reachable from `start`.
    ///
    /// # Errors
    /// [`GraphError::InvalidNode`] if `start` is not in the graph
    #[tracing::instrument(skip(self), level = "debug")]
    pub fn detect(&self, start: Node) -> Result<bool> {
        self.graph.check_node(start)?;
        let found = self.search(start);
        debug!(found, "cycle search finished");
        Ok(found)
    }

    /// Unchecked search from `start`
    fn search(&self, start: Node) -> bool {
        if self.first_branch_only {
            self.search_first_branch(start)
        } else {
            self.search_exhaustive(start)
        }
    }

    fn search_exhaustive(&self, start: Node) -> bool {
        let directed = self.graph.is_directed();

        let mut visited = self.graph.vertex_bitset_unset();
        let mut on_stack = self.graph.vertex_bitset_unset();
        visited.set(start as usize, true);
        on_stack.set(start as usize, true);

        let mut stack = vec![Frame {
            node: start,
            parent: None,
            skipped_parent: false,
            neighbors: self.graph.neighbors_of(start),
        }];

        while let Some(frame) = stack.last_mut() {
            let Some(v) = frame.neighbors.next() else {
                on_stack.set(frame.node as usize, false);
                stack.pop();
                continue;
            };

            if directed {
                if on_stack[v as usize] {
                    return true;
                }
                if visited[v as usize] {
                    continue;
                }
            } else {
                if frame.parent == Some(v) && !frame.skipped_parent {
                    frame.skipped_parent = true;
                    continue;
                }
                if visited[v as usize] {
                    return true;
                }
            }

            let parent = frame.node;
            visited.set(v as usize, true);
            on_stack.set(v as usize, true);
            stack.push(Frame {
                node: v,
                parent: Some(parent),
                skipped_parent: false,
                neighbors: self.graph.neighbors_of(v),
            });
        }

        false
    }

    fn search_first_branch(&self, start: Node) -> bool {
        let mut visited = self.graph.vertex_bitset_unset();
        let mut parent = None;
        let mut u = start;

        loop {
            visited.set(u as usize, true);

            let mut next = None;
            for v in self.graph.neighbors_of(u) {
                if !visited[v as usize] {
                    next = Some(v);
                    break;
                } else if parent != Some(v) {
                    return true;
                }
            }

            match next {
                Some(v) => {
                    parent = Some(u);
                    u = v;
                }
                None => return false,
            }
        }
    }
}

/// Cycle detection directly on graphs
pub trait CycleDetection: AdjacencyList + GraphType + Sized {
    /// Returns *true* if a cycle is reachable from `start` (see [`CycleSearch`]).
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let mut g: Graph<char> = Graph::new(true, false);
    /// g.add_edges([('a', 'b'), ('b', 'c')]);
    /// assert!(!g.detect_cycle(0).unwrap());
    ///
    /// g.add_edge('c', 'a');
    /// assert!(g.detect_cycle(0).unwrap());
    /// ```
    ///
    /// # Errors
    /// [`GraphError::InvalidNode`] if `start` is not in the graph
    fn detect_cycle(&self, start: Node) -> Result<bool> {
        CycleSearch::new(self).detect(start)
    }

    /// Returns *true* if the graph contains any cycle
    fn has_cycle(&self) -> bool {
        let search = CycleSearch::new(self);
        self.vertices().any(|u| search.search(u))
    }
}

impl<G> CycleDetection for G where G: AdjacencyList + GraphType + Sized {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn cycle_g3() {
        let mut g = g3();
        for u in g.vertices() {
            assert!(!g.detect_cycle(u).unwrap());
        }
        assert!(!g.has_cycle());

        g.add_edge('E', 'D');
        let d = g.index_of(&'D').unwrap();
        let e = g.index_of(&'E').unwrap();
        assert!(g.detect_cycle(d).unwrap());
        assert!(g.detect_cycle(e).unwrap());
        assert!(g.detect_cycle(0).unwrap());
        assert!(g.has_cycle());

        // idempotent
        assert!(g.detect_cycle(d).unwrap());
        assert_eq!(g.detect_cycle(5), Err(GraphError::InvalidNode(5)));
    }

    #[test]
    fn directed_forward_edges_are_no_cycles() {
        // diamond 0 -> {1, 2} -> 3 plus the shortcut 0 -> 3
        let g: Graph<Node> = Graph::from_edges(true, 4, [(0, 1), (0, 2), (1, 3), (2, 3), (0, 3)]);
        assert!(!g.detect_cycle(0).unwrap());

        let h: Graph<Node> = Graph::from_edges(true, 2, [(0, 1), (1, 0)]);
        assert!(h.detect_cycle(0).unwrap());
        assert!(h.detect_cycle(1).unwrap());
        assert!(!CycleSearch::new(&h).first_branch_only(true).detect(0).unwrap());
    }

    #[test]
    fn undirected() {
        let g = g1();
        assert!(g.detect_cycle(0).unwrap());

        let path: Graph<Node> = Graph::from_edges(false, 4, [(0, 1), (1, 2), (2, 3)]);
        for u in path.vertices() {
            assert!(!path.detect_cycle(u).unwrap());
        }

        let looped: Graph<Node> = Graph::from_edges(false, 2, [(0, 1), (1, 1)]);
        assert!(looped.detect_cycle(0).unwrap());

        let parallel: Graph<Node> = Graph::from_edges(false, 3, [(0, 1), (1, 2), (2, 1)]);
        assert!(parallel.detect_cycle(0).unwrap());
    }

    #[test]
    fn first_branch_only_misses_side_cycles() {
        // 1 is a dead end, the triangle 0-2-3 is only found when exploring siblings
        let g: Graph<Node> = Graph::from_edges(false, 4, [(0, 1), (0, 2), (2, 3), (3, 0)]);

        assert!(g.detect_cycle(0).unwrap());
        assert!(!CycleSearch::new(&g).first_branch_only(true).detect(0).unwrap());
        assert!(!CycleSearch::new(&g).first_branch_only(true).detect(2).unwrap());
        // 1 -> 0 -> 2 -> 3 sees 0 again
        assert!(CycleSearch::new(&g).first_branch_only(true).detect(1).unwrap());
    }

    #[test]
    fn only_reachable_part_is_searched() {
        let g: Graph<Node> = Graph::from_edges(true, 4, [(0, 1), (2, 3), (3, 2)]);
        assert!(!g.detect_cycle(0).unwrap());
        assert!(!g.detect_cycle(1).unwrap());
        assert!(g.detect_cycle(2).unwrap());
        assert!(g.has_cycle());
    }

    #[test]
    fn random_graphs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(13);

        for _ in 0..30 {
            let dag = random_dag(rng, 25, 0.15);
            assert!(!dag.has_cycle());

            let directed = random_graph(rng, 25, 0.05, true);
            assert_eq!(directed.has_cycle(), !directed.is_acyclic());

            // an undirected component contains a cycle iff it has at least as many edges as nodes
            let undirected = random_graph(rng, 25, 0.06, false);
            for s in undirected.vertices() {
                let component: Vec<Node> = undirected.bfs(s).collect();
                let twice_edges: NumNodes = component.iter().map(|&u| undirected.degree_of(u)).sum();
                assert_eq!(
                    undirected.detect_cycle(s).unwrap(),
                    twice_edges / 2 >= component.len() as NumNodes
                );
            }
        }
    }
}
