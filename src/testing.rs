//! Fixtures and random instances shared by the unit tests

use rand::Rng;

use crate::{gens::*, prelude::*};

/// The weighted, undirected graph
/// ```text
///     1       2
///   A---C-------B
///   |  /|       |
///  2| /1|3      |3
///   |/  |   2   |
///   D   E-------F
///    \         /
///   1 \       / 1
///       \   /
///         G
/// ```
/// Vertices are created in order of first appearance: A0 C1 D2 B3 F4 E5 G6.
pub(crate) fn g1() -> Graph<char> {
    let mut g = Graph::new(false, true);
    g.add_weighted_edges([
        ('A', 'C', 1),
        ('A', 'D', 2),
        ('B', 'C', 2),
        ('B', 'F', 3),
        ('C', 'D', 1),
        ('C', 'E', 3),
        ('D', 'G', 1),
        ('E', 'F', 2),
        ('F', 'G', 1),
    ]);
    g
}

/// The directed acyclic graph `B->A, B->C, A->C, A->D, D->C, C->E, D->E` (unweighted).
/// Vertices are created in order of first appearance: B0 A1 C2 D3 E4.
pub(crate) fn g3() -> Graph<char> {
    let mut g = Graph::new(true, false);
    g.add_edges([
        ('B', 'A'),
        ('B', 'C'),
        ('A', 'C'),
        ('A', 'D'),
        ('D', 'C'),
        ('C', 'E'),
        ('D', 'E'),
    ]);
    g
}

/// Random `G(n,p)` graph with weights in `1..=20`
pub(crate) fn random_graph<R: Rng>(rng: &mut R, n: NumNodes, p: f64, directed: bool) -> Graph<Node> {
    Graph::gnp(rng, n, p, directed, 1..=20)
}

/// Random connected `G(n,p)` graph with weights in `1..=20`
pub(crate) fn random_connected_graph<R: Rng>(
    rng: &mut R,
    n: NumNodes,
    p: f64,
    directed: bool,
) -> Graph<Node> {
    Graph::connected_gnp(rng, n, p, directed, 1..=20)
}

/// Random directed acyclic graph whose edges point from smaller to larger handles
pub(crate) fn random_dag<R: Rng>(rng: &mut R, n: NumNodes, p: f64) -> Graph<Node> {
    let edges = Gnp::new().nodes(n).prob(p).weights(1..=20).generate(rng);
    Graph::from_weighted_edges(true, n, edges)
}

/// Sum of the lightest edge weights along `path`, `None` if some step is not an edge
pub(crate) fn path_weight<G>(graph: &G, path: &[Node]) -> Option<G::Weight>
where
    G: WeightedAdjacencyList,
{
    let steps: Option<Vec<G::Weight>> = path
        .windows(2)
        .map(|step| {
            graph
                .weighted_edges_of(step[0])
                .filter(|e| e.dst == step[1])
                .map(|e| e.weight)
                .min()
        })
        .collect();
    total_weight(steps?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures() {
        let g = g1();
        assert_eq!(g.number_of_nodes(), 7);
        assert_eq!(g.number_of_edges(), 9);
        assert_eq!(path_weight(&g, &[0, 2, 6]), Some(3));
        assert_eq!(path_weight(&g, &[0, 6]), None);
        assert_eq!(path_weight(&g, &[4]), Some(0));

        let g = g3();
        assert!(g.is_directed());
        assert_eq!(g.number_of_edges(), 7);
    }
}
