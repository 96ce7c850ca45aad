/*!
# Graph Generators

This module provides random generators for weighted graphs, mainly used to obtain test instances
and benchmark inputs for the algorithms of this crate.

Generators are configured with a builder-style pattern:

1. Create a generator instance (e.g., `Gnp::new()`).
2. Set parameters using setter/builder methods (e.g., `.nodes(n).prob(p).weights(1..=10)`).
3. Generate weighted edges via `generate(rng)`.

In addition, the `RandomGraph` trait builds complete [`Graph`]s whose vertices are labelled
by their own handles.

Supported models:
- G(n,p): every pair of nodes is connected independently with probability `p`
- Mst: a uniformly random spanning tree, grown by random walks
*/

use std::ops::RangeInclusive;

use rand::{Rng, distr::uniform::SampleUniform};
use rand_distr::{Distribution, Uniform};

use crate::prelude::*;

mod gnp;
mod mst;

pub use gnp::*;
pub use mst::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen: Sized {
    /// Sets the number of nodes in the graph generator.
    fn set_nodes(&mut self, n: NumNodes);

    /// Sets the number of nodes in the graph generator.
    fn nodes(mut self, n: NumNodes) -> Self {
        self.set_nodes(n);
        self
    }
}

/// Trait for generators that draw edge weights uniformly from an inclusive range.
pub trait WeightRangeGen<W>: Sized {
    /// Sets the range edge weights are drawn from.
    fn set_weights(&mut self, weights: RangeInclusive<W>);

    /// Sets the range edge weights are drawn from.
    fn weights(mut self, weights: RangeInclusive<W>) -> Self {
        self.set_weights(weights);
        self
    }
}

/// General trait for a configurable random weighted edge generator.
pub trait GraphGenerator<W> {
    /// Generates a list of random weighted edges.
    fn generate<R>(&self, rng: &mut R) -> Vec<WeightedEdge<W>>
    where
        R: Rng;
}

/// Uniform weight distribution over `range`
/// ** Panics if the range is empty **
pub(crate) fn weight_distribution<W>(range: &RangeInclusive<W>) -> Uniform<W>
where
    W: Weight + SampleUniform,
{
    assert!(range.start() <= range.end(), "Weight range is empty!");
    Uniform::new_inclusive(*range.start(), *range.end()).expect("weight range was checked")
}

/// Draws a weight from `distr`; zero weights are replaced by one as a zero entry of a
/// [`WeightMatrix`] encodes a missing edge.
pub(crate) fn sample_weight<W, R>(distr: &Uniform<W>, rng: &mut R) -> W
where
    W: Weight + SampleUniform,
    R: Rng,
{
    let w = distr.sample(rng);
    if w.is_zero() { W::one() } else { w }
}

/// Trait for building full graph instances from common random models.
pub trait RandomGraph<W>: Sized {
    /// Creates a random `G(n,p)` graph without self-loops with weights drawn from `weights`.
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64, directed: bool, weights: RangeInclusive<W>) -> Self
    where
        R: Rng;

    /// Creates a random `G(n,p)` graph without self-loops that additionally contains a random
    /// spanning tree and is thus connected.
    fn connected_gnp<R>(
        rng: &mut R,
        n: NumNodes,
        p: f64,
        directed: bool,
        weights: RangeInclusive<W>,
    ) -> Self
    where
        R: Rng;

    /// Creates a random spanning tree with `n` nodes and root node `0`
    fn mst<R>(rng: &mut R, n: NumNodes, directed: bool, weights: RangeInclusive<W>) -> Self
    where
        R: Rng;
}

impl<W> RandomGraph<W> for Graph<Node, W>
where
    W: Weight + SampleUniform,
{
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64, directed: bool, weights: RangeInclusive<W>) -> Self
    where
        R: Rng,
    {
        let edges = Gnp::new()
            .nodes(n)
            .prob(p)
            .directed(directed)
            .weights(weights)
            .generate(rng);
        Graph::from_weighted_edges(directed, n, edges)
    }

    fn connected_gnp<R>(
        rng: &mut R,
        n: NumNodes,
        p: f64,
        directed: bool,
        weights: RangeInclusive<W>,
    ) -> Self
    where
        R: Rng,
    {
        let edges = Gnp::new()
            .nodes(n)
            .prob(p)
            .directed(directed)
            .connected(true)
            .weights(weights)
            .generate(rng);
        Graph::from_weighted_edges(directed, n, edges)
    }

    fn mst<R>(rng: &mut R, n: NumNodes, directed: bool, weights: RangeInclusive<W>) -> Self
    where
        R: Rng,
    {
        let edges = Mst::new().nodes(n).weights(weights).generate(rng);
        Graph::from_weighted_edges(directed, n, edges)
    }
}
