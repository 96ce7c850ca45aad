/*!
# Random Spanning Trees

Generators for random spanning trees, used to guarantee connectivity of random instances
(see [`Gnp::connected`]) and as inputs for spanning-tree algorithms.

- The tree is connected and contains exactly `n-1` edges for `n` nodes.
- Every edge is oriented away from a designated root (default `0`).

The generator grows the tree with random walks: a walk starts at an unconnected node, never
revisits a node of its own path, and stops once it hits the tree. All nodes of the walk are then
attached to the tree along the walk.

# Examples

```
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use wgraphs::gens::*;

let rng = &mut Pcg64Mcg::seed_from_u64(2);
let edges = Mst::new().nodes(5).root(0).weights(1..=9).generate(rng);

assert_eq!(edges.len(), 4); // Always n-1 edges
```
*/

use std::ops::RangeInclusive;

use rand::distr::uniform::SampleUniform;

use super::*;

/// Generator for a random spanning tree with random weights.
#[derive(Debug, Clone)]
pub struct Mst<W> {
    n: NumNodes,
    root: Node,
    weights: RangeInclusive<W>,
}

impl<W: Weight> Default for Mst<W> {
    fn default() -> Self {
        Self {
            n: 0,
            root: 0,
            weights: W::one()..=W::one(),
        }
    }
}

impl<W: Weight> Mst<W> {
    /// Creates a new generator with `n = 0`, `root = 0` and unit weights
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root node of the tree.
    /// All edges are oriented away from this root.
    ///
    /// # Panics
    /// Panics if `root >= n` when used in generation.
    pub fn set_root(&mut self, root: Node) {
        self.root = root;
    }

    /// Sets the root node of the tree.
    /// All edges are oriented away from this root.
    ///
    /// # Panics
    /// Panics if `root >= n` when used in generation.
    pub fn root(mut self, root: Node) -> Self {
        self.set_root(root);
        self
    }
}

impl<W> NumNodesGen for Mst<W> {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl<W> WeightRangeGen<W> for Mst<W> {
    fn set_weights(&mut self, weights: RangeInclusive<W>) {
        self.weights = weights;
    }
}

impl<W> GraphGenerator<W> for Mst<W>
where
    W: Weight + SampleUniform,
{
    fn generate<R>(&self, rng: &mut R) -> Vec<WeightedEdge<W>>
    where
        R: Rng,
    {
        let distr = weight_distribution(&self.weights);
        let tree: Vec<Edge> = MstGenerator::new(self.n, self.root, rng).collect();

        tree.into_iter()
            .map(|Edge(u, v)| WeightedEdge::new(u, v, sample_weight(&distr, rng)))
            .collect()
    }
}

/// Streaming generator for the (unweighted) edges of a random spanning tree.
///
/// Yields exactly `n-1` edges, where `n` is the number of nodes.
pub struct MstGenerator<'a, R>
where
    R: Rng,
{
    rng: &'a mut R,
    node_gen: Uniform<Node>,
    connected: NodeBitSet,
    num_connected: NumNodes,
    on_path: NodeBitSet,
    path: Vec<Node>,
    path_skip: usize,
}

impl<'a, R> MstGenerator<'a, R>
where
    R: Rng,
{
    /// Creates a new [`MstGenerator`] for a tree of `n` nodes rooted at `root`.
    ///
    /// # Panics
    /// Panics if `root >= n`.
    pub fn new(n: NumNodes, root: Node, rng: &'a mut R) -> Self {
        assert!(root < n, "Root must be a node of the tree!");

        let mut connected = NodeBitSet::from_elem(n as usize, false);
        connected.set(root as usize, true);

        Self {
            rng,
            node_gen: Uniform::new(0, n).expect("tree has at least one node"),
            connected,
            num_connected: 1,
            on_path: NodeBitSet::from_elem(n as usize, false),
            path: Vec::new(),
            path_skip: usize::MAX - 1,
        }
    }
}

impl<R> Iterator for MstGenerator<'_, R>
where
    R: Rng,
{
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        if self.path_skip + 1 < self.path.len() {
            self.path_skip += 1;
            return Some(Edge(
                self.path[self.path_skip - 1],
                self.path[self.path_skip],
            ));
        }

        if self.num_connected as usize == self.connected.len() {
            return None;
        }

        self.path_skip = usize::MAX - 1;
        for &u in &self.path {
            self.on_path.set(u as usize, false);
        }
        self.path.clear();

        loop {
            let u = self.node_gen.sample(self.rng);

            if self.path.is_empty() && self.connected[u as usize] {
                continue;
            }

            if self.on_path[u as usize] {
                // avoid loops
                continue;
            }
            self.on_path.set(u as usize, true);
            self.path.push(u);

            if self.connected[u as usize] {
                // the walk hit the tree: attach the path in reverse order
                self.path.reverse();
                self.path_skip = 1;
                return Some(Edge(self.path[0], self.path[1]));
            }

            self.connected.set(u as usize, true);
            self.num_connected += 1;
        }
    }
}
