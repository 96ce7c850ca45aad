use std::ops::RangeInclusive;

use rand::distr::uniform::SampleUniform;
use tracing::debug;

use super::*;
use crate::utils::*;

/// `G(n,p)` graphs contain every possible edge of a graph with `n` nodes with probability `p`
/// independent from each other. Weights are drawn uniformly from an inclusive range.
///
/// For undirected graphs, only pairs `u <= v` are considered, so no edge is generated twice.
/// Self-loops are excluded unless enabled with [`Gnp::loops`].
/// With [`Gnp::connected`], the edges of a random spanning tree (see [`Mst`]) are added on top,
/// which guarantees a connected graph.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand_pcg::Pcg64Mcg;
/// use wgraphs::gens::*;
///
/// let rng = &mut Pcg64Mcg::seed_from_u64(1);
/// let edges = Gnp::new().nodes(10).prob(1.0).weights(1..=5).generate(rng);
///
/// assert_eq!(edges.len(), 45);
/// assert!(edges.iter().all(|e| e.src < e.dst && (1..=5).contains(&e.weight)));
/// ```
#[derive(Debug, Clone)]
pub struct Gnp<W> {
    n: NumNodes,
    p: f64,
    directed: bool,
    loops: bool,
    connected: bool,
    weights: RangeInclusive<W>,
}

impl<W: Weight> Default for Gnp<W> {
    fn default() -> Self {
        Self {
            n: 0,
            p: 0.0,
            directed: false,
            loops: false,
            connected: false,
            weights: W::one()..=W::one(),
        }
    }
}

impl<W: Weight> Gnp<W> {
    /// Creates a new empty `G(n,p)` generator with unit weights
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p` directly
    /// ** Panics if `p` is not a probability **
    pub fn set_prob(&mut self, prob: f64) {
        assert!(prob.is_valid_probility());
        self.p = prob;
    }

    /// Updates `p` directly
    /// ** Panics if `p` is not a probability **
    pub fn prob(mut self, prob: f64) -> Self {
        self.set_prob(prob);
        self
    }

    /// Updates `p` such that `p = d/n`.
    /// ** Panics if the result is not a probability **
    pub fn avg_deg(self, deg: f64) -> Self {
        assert!(self.n > 0, "Set the number of nodes first!");
        let p = deg / self.n as f64;
        self.prob(p)
    }

    /// Generate ordered pairs instead of unordered ones
    pub fn set_directed(&mut self, directed: bool) {
        self.directed = directed;
    }

    /// Generate ordered pairs instead of unordered ones
    pub fn directed(mut self, directed: bool) -> Self {
        self.set_directed(directed);
        self
    }

    /// Allow self-loops
    pub fn set_loops(&mut self, loops: bool) {
        self.loops = loops;
    }

    /// Allow self-loops
    pub fn loops(mut self, loops: bool) -> Self {
        self.set_loops(loops);
        self
    }

    /// Add a random spanning tree to guarantee connectivity
    pub fn set_connected(&mut self, connected: bool) {
        self.connected = connected;
    }

    /// Add a random spanning tree to guarantee connectivity
    pub fn connected(mut self, connected: bool) -> Self {
        self.set_connected(connected);
        self
    }
}

impl<W> NumNodesGen for Gnp<W> {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl<W> WeightRangeGen<W> for Gnp<W> {
    fn set_weights(&mut self, weights: RangeInclusive<W>) {
        self.weights = weights;
    }
}

impl<W> GraphGenerator<W> for Gnp<W>
where
    W: Weight + SampleUniform,
{
    fn generate<R>(&self, rng: &mut R) -> Vec<WeightedEdge<W>>
    where
        R: Rng,
    {
        let distr = weight_distribution(&self.weights);
        let mut edges = Vec::new();

        for u in 0..self.n {
            let first = if self.directed { 0 } else { u };
            for v in first..self.n {
                if (u == v && !self.loops) || !rng.random_bool(self.p) {
                    continue;
                }
                edges.push(WeightedEdge::new(u, v, sample_weight(&distr, rng)));
            }
        }

        if self.connected && self.n > 0 {
            edges.extend(
                Mst::new()
                    .nodes(self.n)
                    .weights(self.weights.clone())
                    .generate(rng),
            );
        }

        debug!(n = self.n, p = self.p, m = edges.len(), "generated G(n,p)");
        edges
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn extreme_probabilities() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        assert!(Gnp::<i32>::new().nodes(20).prob(0.0).generate(rng).is_empty());

        let complete = Gnp::<i32>::new().nodes(20).prob(1.0).generate(rng);
        assert_eq!(complete.len(), 20 * 19 / 2);
        assert!(complete.iter().all(|e| e.weight == 1));

        let complete = Gnp::<i32>::new()
            .nodes(20)
            .prob(1.0)
            .directed(true)
            .loops(true)
            .generate(rng);
        assert_eq!(complete.len(), 20 * 20);
    }

    #[test]
    fn weights_in_range() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);

        let edges = Gnp::new()
            .nodes(30)
            .prob(0.3)
            .weights(-4i64..=9)
            .generate(rng);

        assert!(!edges.is_empty());
        assert!(
            edges
                .iter()
                .all(|e| e.weight != 0 && (-4..=9).contains(&e.weight))
        );
        assert!(edges.iter().all(|e| e.src < e.dst));
        assert!(edges.iter().map(|e| e.weight).unique().count() > 1);
    }

    #[test]
    fn average_degree() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);

        // expected m = 4 / 1000 * (1000 * 999 / 2) = 1998
        let m = Gnp::<i32>::new()
            .nodes(1000)
            .avg_deg(4.0)
            .generate(rng)
            .len();
        assert!((1700..2300).contains(&m), "m = {m}");
    }

    #[test]
    #[should_panic]
    fn average_degree_requires_nodes() {
        let _ = Gnp::<i32>::new().avg_deg(2.0);
    }

    #[test]
    fn connected_contains_tree() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for n in [1, 2, 10, 50] {
            let edges = Gnp::<i32>::new()
                .nodes(n)
                .prob(0.0)
                .connected(true)
                .generate(rng);
            assert_eq!(edges.len() as NumNodes, n - 1);
        }
    }
}
