/*!
# Node Representation

Vertices are addressed internally by their *index*: their position in the insertion-ordered
vertex table of a graph. We choose `Node = u32` as almost all use-cases involve less than `2^32`
vertices. Node handles are dense, i.e. a graph with `n` vertices uses exactly `0..n`.
*/

use std::num::NonZero;

use bit_vec::BitVec;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is never a valid handle
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes, indexed by `u as usize`
pub type NodeBitSet = BitVec;

/// As `Option<Node>` uses additional bytes for padding, it can be inefficient
/// since we often need to use `Vec<Option<Node>>` (e.g. predecessor arrays). This instead uses the
/// `NonZero`-Wrapper to assign a constant value as the `None`-niche.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct OptionalNodeImpl<const N: Node>(NonZero<Node>);

/// Often, `INVALID_NODE` is safe to pick as the `None`-Value
pub type OptionalNode = OptionalNodeImpl<INVALID_NODE>;

impl<const N: Node> OptionalNodeImpl<N> {
    /// Returns `Some(OptionalNodeImpl)` if `n != N` and `None` otherwise
    pub const fn new(n: Node) -> Option<Self> {
        match NonZero::new(n ^ N) {
            Some(inner) => Some(OptionalNodeImpl(inner)),
            None => None,
        }
    }

    /// Gets the underlying Node-Value
    pub const fn get(&self) -> Node {
        self.0.get() ^ N
    }
}

/// Creates an empty NodeBitSet with one entry per node
pub(crate) fn node_bitset(n: NumNodes) -> NodeBitSet {
    BitVec::from_elem(n as usize, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_node() {
        assert_eq!(std::mem::size_of::<Option<OptionalNode>>(), 4);

        assert!(OptionalNode::new(INVALID_NODE).is_none());
        for u in [0, 1, 17, INVALID_NODE - 1] {
            assert_eq!(OptionalNode::new(u).map(|x| x.get()), Some(u));
        }
    }
}
