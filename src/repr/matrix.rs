use std::{fmt::Debug, hash::Hash};

use super::*;

/// Dense `n x n` weight matrix where a zero entry means "no edge".
///
/// The matrix is considered directed iff it is not symmetric. Kruskal's algorithm and the
/// fixed-table traversals operate on this representation, but as it implements the same
/// graph traits as [`Graph`], every algorithm of this crate accepts it.
///
/// # Examples
/// ```
/// use wgraphs::prelude::*;
///
/// let m = WeightMatrix::from_rows(vec![
///     vec![0, 2, 0],
///     vec![2, 0, 5],
///     vec![0, 5, 0],
/// ]).unwrap();
///
/// assert!(m.is_undirected());
/// assert_eq!(m.number_of_edges(), 2);
/// assert_eq!(m.get(1, 2), Some(5));
/// assert_eq!(m.get(0, 2), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeightMatrix<W> {
    n: NumNodes,
    entries: Vec<W>,
    /// Number of pairs `u < v` with `m[u][v] != m[v][u]`
    asymmetric_pairs: usize,
}

impl<W: Weight> WeightMatrix<W> {
    /// Creates a matrix of `n` nodes without any edges
    pub fn new(n: NumNodes) -> Self {
        Self {
            n,
            entries: vec![W::zero(); (n as usize) * (n as usize)],
            asymmetric_pairs: 0,
        }
    }

    /// Creates a matrix from its rows. Every row needs exactly as many entries as there are rows.
    pub fn from_rows<R>(rows: Vec<R>) -> Result<Self>
    where
        R: AsRef<[W]>,
    {
        let n = rows.len();
        let mut matrix = Self::new(n as NumNodes);

        for (u, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != n {
                return Err(GraphError::MalformedMatrix {
                    row: u,
                    len: row.len(),
                    expected: n,
                });
            }
            matrix.entries[u * n..(u + 1) * n].copy_from_slice(row);
        }

        matrix.asymmetric_pairs = (0..matrix.n)
            .flat_map(|u| (u + 1..matrix.n).map(move |v| (u, v)))
            .filter(|&(u, v)| matrix.entry(u, v) != matrix.entry(v, u))
            .count();

        Ok(matrix)
    }

    fn entry(&self, u: Node, v: Node) -> W {
        self.entries[(u as usize) * (self.n as usize) + v as usize]
    }

    /// Returns the weight of edge `u -> v`, or `None` if the entry is zero
    /// ** Panics if `u >= n` or `v >= n` **
    pub fn get(&self, u: Node, v: Node) -> Option<W> {
        let w = self.entry(u, v);
        (!w.is_zero()).then_some(w)
    }

    /// Sets the entry `u -> v`; a weight of zero removes the edge.
    /// ** Panics if `u >= n` or `v >= n` **
    pub fn set(&mut self, u: Node, v: Node, weight: W) {
        let before = self.entry(u, v) != self.entry(v, u);
        self.entries[(u as usize) * (self.n as usize) + v as usize] = weight;
        let after = self.entry(u, v) != self.entry(v, u);

        match (before, after) {
            (false, true) => self.asymmetric_pairs += 1,
            (true, false) => self.asymmetric_pairs -= 1,
            _ => {}
        }
    }

    /// Sets both `u -> v` and `v -> u`
    /// ** Panics if `u >= n` or `v >= n` **
    pub fn set_symmetric(&mut self, u: Node, v: Node, weight: W) {
        self.set(u, v, weight);
        self.set(v, u, weight);
    }

    /// Returns *true* if `m[u][v] == m[v][u]` for all pairs
    pub fn is_symmetric(&self) -> bool {
        self.asymmetric_pairs == 0
    }

    /// Returns row `u`
    /// ** Panics if `u >= n` **
    pub fn row(&self, u: Node) -> &[W] {
        let n = self.n as usize;
        &self.entries[(u as usize) * n..(u as usize + 1) * n]
    }
}

impl<W> GraphNodeOrder for WeightMatrix<W> {
    fn number_of_nodes(&self) -> NumNodes {
        self.n
    }
}

impl<W: Weight> GraphEdgeOrder for WeightMatrix<W> {
    /// Non-zero entries; for symmetric matrices only those with `u <= v`
    fn number_of_edges(&self) -> NumEdges {
        let directed = self.is_directed();
        self.vertices()
            .map(|u| {
                self.vertices()
                    .filter(|&v| (directed || u <= v) && self.get(u, v).is_some())
                    .count() as NumEdges
            })
            .sum()
    }
}

impl<W: Weight> GraphType for WeightMatrix<W> {
    fn is_directed(&self) -> bool {
        !self.is_symmetric()
    }
}

impl<W: Weight> AdjacencyList for WeightMatrix<W> {
    /// Non-zero columns of row `u` in increasing order
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.row(u)
            .iter()
            .enumerate()
            .filter(|(_, w)| !w.is_zero())
            .map(|(v, _)| v as Node)
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.row(u).iter().filter(|w| !w.is_zero()).count() as NumNodes
    }
}

impl<W: Weight> WeightedAdjacencyList for WeightMatrix<W> {
    type Weight = W;

    fn weighted_edges_of(&self, u: Node) -> impl Iterator<Item = WeightedEdge<W>> + '_ {
        self.row(u)
            .iter()
            .enumerate()
            .filter(|(_, w)| !w.is_zero())
            .map(move |(v, &w)| WeightedEdge::new(u, v as Node, w))
    }
}

impl<V, W> Graph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Weight,
{
    /// Converts the graph into a dense [`WeightMatrix`] over the same node handles.
    /// Of parallel edges only the lightest survives; zero-weight edges vanish.
    pub fn to_weight_matrix(&self) -> WeightMatrix<W> {
        let mut matrix = WeightMatrix::new(self.number_of_nodes());
        for e in self.weighted_edges() {
            match matrix.get(e.src, e.dst) {
                Some(w) if w <= e.weight => {}
                _ => matrix.set(e.src, e.dst, e.weight),
            }
        }
        matrix
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn malformed_rows() {
        let res = WeightMatrix::from_rows(vec![vec![0, 1, 2], vec![1, 0], vec![2, 0, 0]]);
        assert_eq!(
            res,
            Err(GraphError::MalformedMatrix {
                row: 1,
                len: 2,
                expected: 3
            })
        );

        assert!(WeightMatrix::<i32>::from_rows(Vec::<Vec<i32>>::new()).is_ok());
    }

    #[test]
    fn symmetry_tracking() {
        let mut m = WeightMatrix::<i32>::new(3);
        assert!(m.is_symmetric());

        m.set(0, 1, 4);
        assert!(m.is_directed());
        assert_eq!(m.number_of_edges(), 1);

        m.set(1, 0, 4);
        assert!(m.is_undirected());
        assert_eq!(m.number_of_edges(), 1);

        m.set(1, 0, 3);
        assert!(m.is_directed());
        assert_eq!(m.number_of_edges(), 2);

        m.set(1, 0, 0);
        m.set(0, 1, 0);
        assert!(m.is_symmetric());
        assert!(m.is_singleton_graph());
    }

    #[test]
    fn symmetric_updates() {
        let mut m = WeightMatrix::<i32>::new(3);
        m.set(2, 0, 5);
        assert!(m.is_directed());

        m.set_symmetric(0, 2, 6);
        assert!(m.is_symmetric());
        assert_eq!(m.get(0, 2), Some(6));
        assert_eq!(m.get(2, 0), Some(6));

        m.set_symmetric(1, 1, 2);
        assert_eq!(m.row(1), &[0, 2, 0]);
        assert_eq!(m.number_of_edges(), 2);

        m.set_symmetric(2, 0, 0);
        assert_eq!(m.get(0, 2), None);
        assert!(m.is_symmetric());
    }

    #[test]
    fn adjacency() {
        let m = WeightMatrix::from_rows(vec![
            vec![0, 7, 0, 1],
            vec![7, 0, 2, 0],
            vec![0, 2, 0, 0],
            vec![1, 0, 0, 3],
        ])
        .unwrap();

        assert_eq!(m.neighbors_of(0).collect_vec(), vec![1, 3]);
        assert_eq!(m.neighbors_of(3).collect_vec(), vec![0, 3]);
        assert_eq!(m.degree_of(2), 1);
        assert_eq!(m.number_of_edges(), 4);
        assert_eq!(
            m.unique_weighted_edges()
                .map(|e| (e.src, e.dst, e.weight))
                .collect_vec(),
            vec![(0, 1, 7), (0, 3, 1), (1, 2, 2), (3, 3, 3)]
        );
    }

    #[test]
    fn from_graph_keeps_lightest() {
        let mut g: Graph<&str, i32> = Graph::new(false, true);
        g.add_weighted_edge("x", "y", 5);
        g.add_weighted_edge("y", "x", 2);
        g.add_weighted_edge("y", "z", 9);

        let m = g.to_weight_matrix();
        assert!(m.is_symmetric());
        assert_eq!(m.get(0, 1), Some(2));
        assert_eq!(m.get(1, 0), Some(2));
        assert_eq!(m.get(2, 1), Some(9));
        assert_eq!(m.get(0, 2), None);
    }
}
