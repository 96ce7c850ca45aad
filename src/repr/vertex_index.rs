use std::hash::Hash;

use fxhash::FxHashMap;

use super::*;

/// Maps externally supplied vertex identifiers to dense node handles.
///
/// Identifiers are stored in insertion order; the position of an identifier is its handle.
/// Uniqueness is **not** enforced: inserting an identifier twice yields two handles, and
/// [`VertexIndex::index_of`] resolves to the first of them.
#[derive(Clone, Debug)]
pub struct VertexIndex<V> {
    vertices: Vec<V>,
    positions: FxHashMap<V, Node>,
}

impl<V> Default for VertexIndex<V> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            positions: FxHashMap::default(),
        }
    }
}

impl<V> VertexIndex<V> {
    /// Returns the identifier stored at handle `u`
    pub fn vertex(&self, u: Node) -> Option<&V> {
        self.vertices.get(u as usize)
    }

    /// Returns the number of stored identifiers (duplicates included)
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns an iterator over all identifiers in handle order
    pub fn iter(&self) -> std::slice::Iter<'_, V> {
        self.vertices.iter()
    }
}

impl<V> VertexIndex<V>
where
    V: Eq + Hash + Clone,
{
    /// Creates an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `v` and returns its (maximal) handle
    pub fn add_vertex(&mut self, v: V) -> Node {
        let u = self.vertices.len() as Node;
        self.positions.entry(v.clone()).or_insert(u);
        self.vertices.push(v);
        u
    }

    /// Returns the first handle carrying `v`
    pub fn index_of(&self, v: &V) -> Option<Node> {
        self.positions.get(v).copied()
    }

    /// Returns *true* if some handle carries `v`
    pub fn contains(&self, v: &V) -> bool {
        self.positions.contains_key(v)
    }

    /// Removes the identifier at handle `u`. All handles above `u` shift down by one.
    pub fn remove(&mut self, u: Node) -> Option<V> {
        if u as usize >= self.vertices.len() {
            return None;
        }

        let v = self.vertices.remove(u as usize);
        self.rebuild_positions();
        Some(v)
    }

    fn rebuild_positions(&mut self) {
        self.positions.clear();
        for (u, v) in self.vertices.iter().enumerate() {
            self.positions.entry(v.clone()).or_insert(u as Node);
        }
    }
}
