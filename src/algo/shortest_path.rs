/*!
# Shortest Paths

Single-source shortest paths on weighted graphs:
- [`RelaxationSearch`]: label-correcting search with a FIFO queue. A vertex is re-enqueued
  whenever its distance improves while it is not queued. Handles negative weights and detects
  negative cycles.
- [`ShortestPaths::bellman_ford`]: `n - 1` full relaxation passes followed by a detection pass.
- [`ShortestPaths::dijkstra`]: `O(n^2)` array scan without a heap; rejects negative weights.

Distances are `Option<W>` where `None` means *unreachable*. Note that an undirected edge with
negative weight is a negative cycle on its own (`u -> v -> u`).
*/

use std::collections::VecDeque;

use num::Zero;
use tracing::{debug, trace, warn};

use super::*;

/// A shortest path between two nodes together with its total weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath<W> {
    /// Sum of the edge weights along `path`
    pub distance: W,
    /// Nodes of the path, starting with the source and ending with the destination
    pub path: Vec<Node>,
}

impl<W> ShortestPath<W> {
    /// Number of edges on the path
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// First node of the path
    pub fn source(&self) -> Option<Node> {
        self.path.first().copied()
    }

    /// Last node of the path
    pub fn destination(&self) -> Option<Node> {
        self.path.last().copied()
    }
}

/// Returns `distance + weight` if it is strictly smaller than `current`
fn improvement<W: Weight>(distance: W, weight: W, current: Option<W>) -> Option<W> {
    distance
        .try_add(&weight)
        .filter(|&candidate| current.is_none_or(|d| candidate < d))
}

/// Distances and predecessors computed by a relaxation search
struct Relaxation<W> {
    distances: Vec<Option<W>>,
    predecessors: Vec<Option<OptionalNode>>,
}

/// Label-correcting shortest path search over a FIFO queue.
///
/// Every node whose tentative distance was improved is appended to the queue unless it is
/// queued already. Each stored distance is the weight of a walk whose number of edges is tracked;
/// a walk with `n` edges repeats a node and hence proves a negative cycle, which guarantees
/// termination on every input.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let mut g: Graph<char> = Graph::new(true, true);
/// g.add_weighted_edges([('a', 'b', 4), ('a', 'c', 1), ('c', 'b', 2)]);
///
/// let a = g.index_of(&'a').unwrap();
/// let b = g.index_of(&'b').unwrap();
/// let sp = RelaxationSearch::new(&g).path(a, b).unwrap();
///
/// assert_eq!(sp.distance, 3);
/// assert_eq!(g.labels_of(sp.path).unwrap(), vec![&'a', &'c', &'b']);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RelaxationSearch<'a, G> {
    graph: &'a G,
    stop_at_target: bool,
}

impl<G> WithGraphRef<G> for RelaxationSearch<'_, G> {
    fn graph_ref(&self) -> &G {
        self.graph
    }
}

impl<'a, G> RelaxationSearch<'a, G>
where
    G: WeightedAdjacencyList,
{
    /// Creates a new search on `graph` that scans every adjacency list completely
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            stop_at_target: false,
        }
    }

    /// If *true*, the scan of an adjacency list stops right after the edge into the target has
    /// been considered. Later entries of the same list are then only relaxed if the node gets
    /// dequeued again, so the result is not guaranteed to be optimal.
    pub fn set_stop_at_target(&mut self, stop: bool) {
        self.stop_at_target = stop;
    }

    /// If *true*, the scan of an adjacency list stops right after the edge into the target.
    /// See [`RelaxationSearch::set_stop_at_target`].
    pub fn stop_at_target(mut self, stop: bool) -> Self {
        self.set_stop_at_target(stop);
        self
    }

    /// Computes a shortest path from `source` to `target`.
    ///
    /// Returns `[source]` with distance zero if `source == target`.
    ///
    /// # Errors
    /// - [`GraphError::InvalidNode`] if either node is not in the graph
    /// - [`GraphError::Unreachable`] if there is no path
    /// - [`GraphError::NegativeCycle`] if a negative cycle is reachable from `source`
    #[tracing::instrument(skip(self), level = "debug")]
    pub fn path(&self, source: Node, target: Node) -> Result<ShortestPath<G::Weight>> {
        self.graph.check_node(source)?;
        self.graph.check_node(target)?;

        let Relaxation {
            distances,
            predecessors,
        } = self.relax(source, Some(target))?;

        let distance = distances[target as usize].ok_or(GraphError::Unreachable {
            src: source,
            dst: target,
        })?;

        let mut path = vec![target];
        let mut u = target;
        while u != source {
            u = predecessors[u as usize]
                .ok_or(GraphError::Unreachable {
                    src: source,
                    dst: target,
                })?
                .get();
            path.push(u);
        }
        path.reverse();

        debug!(distance = %distance, hops = path.len() - 1, "shortest path found");
        Ok(ShortestPath { distance, path })
    }

    /// Computes the distances of all nodes from `source` (`None` if unreachable).
    ///
    /// # Errors
    /// - [`GraphError::InvalidNode`] if `source` is not in the graph
    /// - [`GraphError::NegativeCycle`] if a negative cycle is reachable from `source`
    #[tracing::instrument(skip(self), level = "debug")]
    pub fn distances(&self, source: Node) -> Result<Vec<Option<G::Weight>>> {
        self.graph.check_node(source)?;
        Ok(self.relax(source, None)?.distances)
    }

    fn relax(&self, source: Node, target: Option<Node>) -> Result<Relaxation<G::Weight>> {
        let n = self.graph.len();

        let mut distances = vec![None; n];
        let mut predecessors = vec![None; n];
        let mut hops: Vec<NumNodes> = vec![0; n];
        let mut queued = self.graph.vertex_bitset_unset();
        let mut queue = VecDeque::from([source]);

        distances[source as usize] = Some(G::Weight::zero());
        queued.set(source as usize, true);

        let mut relaxations = 0usize;
        while let Some(v) = queue.pop_front() {
            queued.set(v as usize, false);
            let Some(dist_v) = distances[v as usize] else {
                continue;
            };
            let hops_v = hops[v as usize];

            for e in self.graph.weighted_edges_of(v) {
                let u = e.dst as usize;
                if let Some(candidate) = improvement(dist_v, e.weight, distances[u]) {
                    distances[u] = Some(candidate);
                    predecessors[u] = OptionalNode::new(v);
                    hops[u] = hops_v + 1;
                    relaxations += 1;
                    trace!(src = v, dst = e.dst, distance = %candidate, "relaxed");

                    if hops[u] as usize >= n {
                        warn!(source, node = e.dst, "negative cycle detected");
                        return Err(GraphError::NegativeCycle);
                    }

                    if !queued[u] {
                        queued.set(u, true);
                        queue.push_back(e.dst);
                    }
                }

                if self.stop_at_target && target == Some(e.dst) {
                    break;
                }
            }
        }

        debug!(relaxations, "relaxation finished");
        Ok(Relaxation {
            distances,
            predecessors,
        })
    }
}

/// Shortest path algorithms available on every weighted graph
pub trait ShortestPaths: WeightedAdjacencyList + Sized {
    /// Computes a shortest path from `source` to `target` with a [`RelaxationSearch`].
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g: Graph<Node> = Graph::from_weighted_edges(
    ///     false,
    ///     4,
    ///     [(0, 1, 5), (1, 2, 1), (0, 3, 1), (3, 2, 1)].map(WeightedEdge::from),
    /// );
    ///
    /// let sp = g.shortest_path(0, 2).unwrap();
    /// assert_eq!(sp.distance, 2);
    /// assert_eq!(sp.path, vec![0, 3, 2]);
    ///
    /// assert_eq!(g.shortest_path(1, 1).unwrap().path, vec![1]);
    /// ```
    ///
    /// # Errors
    /// See [`RelaxationSearch::path`].
    fn shortest_path(&self, source: Node, target: Node) -> Result<ShortestPath<Self::Weight>> {
        RelaxationSearch::new(self).path(source, target)
    }

    /// Distances of all nodes from `source` computed by a [`RelaxationSearch`].
    ///
    /// # Errors
    /// See [`RelaxationSearch::distances`].
    fn relaxation_distances(&self, source: Node) -> Result<Vec<Option<Self::Weight>>> {
        RelaxationSearch::new(self).distances(source)
    }

    /// Bellman-Ford from `source`: `n - 1` passes over all nodes, each pass starting at `source`
    /// and wrapping around, relaxing all outgoing edges of every node. A final pass that still
    /// improves a distance reports a negative cycle.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g: Graph<Node> = Graph::from_weighted_edges(
    ///     true,
    ///     3,
    ///     [(0, 1, 4), (0, 2, 1), (2, 1, -2)].map(WeightedEdge::from),
    /// );
    /// assert_eq!(g.bellman_ford(0).unwrap(), vec![Some(0), Some(-1), Some(1)]);
    /// assert_eq!(g.bellman_ford(1).unwrap(), vec![None, Some(0), None]);
    /// ```
    ///
    /// # Errors
    /// - [`GraphError::InvalidNode`] if `source` is not in the graph
    /// - [`GraphError::NegativeCycle`] if a negative cycle is reachable from `source`
    #[tracing::instrument(skip(self), level = "debug")]
    fn bellman_ford(&self, source: Node) -> Result<Vec<Option<Self::Weight>>> {
        self.check_node(source)?;
        let n = self.number_of_nodes();

        let mut distances = vec![None; self.len()];
        distances[source as usize] = Some(Self::Weight::zero());

        let relax_from = |u: Node, distances: &mut [Option<Self::Weight>]| -> bool {
            let Some(dist_u) = distances[u as usize] else {
                return false;
            };
            let mut improved = false;
            for e in self.weighted_edges_of(u) {
                if let Some(candidate) = improvement(dist_u, e.weight, distances[e.dst as usize]) {
                    distances[e.dst as usize] = Some(candidate);
                    improved = true;
                }
            }
            improved
        };

        for pass in 1..n {
            for i in 0..n {
                relax_from((source + i) % n, &mut distances);
            }
            trace!(pass, "pass finished");
        }

        for i in 0..n {
            if relax_from((source + i) % n, &mut distances) {
                warn!(source, "negative cycle detected");
                return Err(GraphError::NegativeCycle);
            }
        }

        Ok(distances)
    }

    /// Dijkstra from `source`: repeatedly selects the closest unvisited node by scanning the
    /// distance array and relaxes its outgoing edges. Runs in `O(n^2 + m)`.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let m = WeightMatrix::from_rows(vec![
    ///     vec![0, 7, 2],
    ///     vec![7, 0, 3],
    ///     vec![2, 3, 0],
    /// ]).unwrap();
    /// assert_eq!(m.dijkstra(0).unwrap(), vec![Some(0), Some(5), Some(2)]);
    /// ```
    ///
    /// # Errors
    /// - [`GraphError::InvalidNode`] if `source` is not in the graph
    /// - [`GraphError::NegativeWeight`] if any edge has a negative weight
    #[tracing::instrument(skip(self), level = "debug")]
    fn dijkstra(&self, source: Node) -> Result<Vec<Option<Self::Weight>>> {
        self.check_node(source)?;
        if let Some(e) = self.find_negative_edge() {
            return Err(GraphError::NegativeWeight {
                src: e.src,
                dst: e.dst,
            });
        }

        let mut distances = vec![None; self.len()];
        let mut visited = self.vertex_bitset_unset();
        distances[source as usize] = Some(Self::Weight::zero());

        loop {
            let closest = self
                .vertices()
                .filter(|&u| !visited[u as usize])
                .filter_map(|u| distances[u as usize].map(|d| (d, u)))
                .min_by_key(|&(d, _)| d);

            let Some((dist_u, u)) = closest else {
                break;
            };
            visited.set(u as usize, true);

            for e in self.weighted_edges_of(u) {
                if visited[e.dst as usize] {
                    continue;
                }
                if let Some(candidate) = improvement(dist_u, e.weight, distances[e.dst as usize]) {
                    distances[e.dst as usize] = Some(candidate);
                }
            }
        }

        Ok(distances)
    }
}

impl<G> ShortestPaths for G where G: WeightedAdjacencyList + Sized {}
