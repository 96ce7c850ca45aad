use smallvec::SmallVec;

use super::*;

/// Ordered adjacency entries of a single vertex.
///
/// Uses a `SmallVec` with inline space for a few edges as most vertices of the graphs we
/// deal with have a small degree.
#[derive(Clone, Debug)]
pub struct EdgeList<W>(SmallVec<[WeightedEdge<W>; 4]>);

impl<W> Default for EdgeList<W> {
    fn default() -> Self {
        Self(SmallVec::new())
    }
}

impl<W> EdgeList<W> {
    /// Returns the number of entries
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over all entries in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, WeightedEdge<W>> {
        self.0.iter()
    }

    /// Appends an entry (parallel edges and self-loops are kept)
    pub fn push(&mut self, edge: WeightedEdge<W>) {
        self.0.push(edge);
    }

    /// Removes the first entry pointing to `dst` and returns it
    pub fn remove_first_to(&mut self, dst: Node) -> Option<WeightedEdge<W>> {
        let pos = self.0.iter().position(|e| e.dst == dst)?;
        Some(self.0.remove(pos))
    }

    /// Removes all entries pointing to `dst` and returns the number of removed entries
    pub fn remove_all_to(&mut self, dst: Node) -> usize {
        let before = self.0.len();
        self.0.retain(|e| e.dst != dst);
        before - self.0.len()
    }

    /// Decrements every endpoint larger than `removed`
    fn shift_above(&mut self, removed: Node) {
        for e in self.0.iter_mut() {
            if e.src > removed {
                e.src -= 1;
            }
            if e.dst > removed {
                e.dst -= 1;
            }
        }
    }
}

/// Canonical graph storage: one ordered [`EdgeList`] per node handle.
///
/// The store knows nothing about orientation; mirroring undirected edges is the
/// responsibility of [`Graph`].
#[derive(Clone, Debug)]
pub struct AdjacencyStore<W> {
    lists: Vec<EdgeList<W>>,
    num_arcs: usize,
}

impl<W> Default for AdjacencyStore<W> {
    fn default() -> Self {
        Self {
            lists: Vec::new(),
            num_arcs: 0,
        }
    }
}

impl<W> AdjacencyStore<W> {
    /// Returns the number of vertices
    pub fn number_of_nodes(&self) -> NumNodes {
        self.lists.len() as NumNodes
    }

    /// Returns the number of stored adjacency entries
    pub fn number_of_arcs(&self) -> usize {
        self.num_arcs
    }

    /// Returns the edge list of `u`
    /// ** Panics if `u >= n` **
    pub fn edges_of(&self, u: Node) -> &EdgeList<W> {
        &self.lists[u as usize]
    }

    /// Returns the number of entries of `u`
    /// ** Panics if `u >= n` **
    pub fn degree_of(&self, u: Node) -> NumNodes {
        self.lists[u as usize].len() as NumNodes
    }

    /// Returns an iterator over all edge lists in handle order
    pub fn iter(&self) -> std::slice::Iter<'_, EdgeList<W>> {
        self.lists.iter()
    }
}

impl<W: Weight> AdjacencyStore<W> {
    /// Creates a store with `n` vertices without any edges
    pub fn with_nodes(n: NumNodes) -> Self {
        Self {
            lists: vec![EdgeList::default(); n as usize],
            num_arcs: 0,
        }
    }

    /// Appends a vertex with an empty edge list and returns its handle
    pub fn push_vertex(&mut self) -> Node {
        self.lists.push(EdgeList::default());
        (self.lists.len() - 1) as Node
    }

    /// Removes vertex `u`, its edge list and every entry pointing to it.
    /// All handles above `u` shift down by one.
    /// Returns the number of removed entries.
    /// ** Panics if `u >= n` **
    pub fn remove_vertex(&mut self, u: Node) -> usize {
        let mut removed = self.lists.remove(u as usize).len();
        for list in self.lists.iter_mut() {
            removed += list.remove_all_to(u);
            list.shift_above(u);
        }
        self.num_arcs -= removed;
        removed
    }

    /// Appends the entry `(src, dst, weight)` to the list of `src`
    /// ** Panics if `src >= n` **
    pub fn add_arc(&mut self, src: Node, dst: Node, weight: W) {
        self.lists[src as usize].push(WeightedEdge::new(src, dst, weight));
        self.num_arcs += 1;
    }

    /// Removes the first entry `src -> dst` and returns it
    /// ** Panics if `src >= n` **
    pub fn remove_first_arc(&mut self, src: Node, dst: Node) -> Option<WeightedEdge<W>> {
        let edge = self.lists[src as usize].remove_first_to(dst)?;
        self.num_arcs -= 1;
        Some(edge)
    }
}
