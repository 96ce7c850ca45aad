/*!
# Generalized Sets

Abstractions over `Set` data structures, allowing traversals to choose the most efficient
visited-set based on context:
- Sparse sets -> `HashSet` / `FxHashSet`
- Dense sets -> [`NodeBitSet`]
*/

use std::{
    collections::{HashSet, hash_set::Iter},
    hash::{BuildHasher, Hash},
    iter::{Cloned, Enumerate, FilterMap},
};

use bit_vec::BitVec;

use crate::node::*;

/// Minimalist trait for a set-like collection.
///
/// Supports insertion, removal, membership queries, iteration, and bulk operations.
pub trait Set<T> {
    /// Inserts `value` into the set.
    /// Returns `true` if the element was already present.
    fn insert(&mut self, value: T) -> bool;

    /// Inserts multiple elements from an iterator.
    fn insert_multiple<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.insert(value);
        }
    }

    /// Removes `value` from the set.
    /// Returns `true` if the element was present.
    fn remove(&mut self, value: &T) -> bool;

    /// Iterator over elements in set.
    ///
    /// Returned by [`Set::iter`].
    type SetIter<'a>: Iterator<Item = T>
    where
        Self: 'a,
        T: Clone;

    /// Returns an iterator over all elements in the set.
    /// May clone elements depending on the underlying data structure.
    fn iter(&self) -> Self::SetIter<'_>
    where
        T: Clone;

    /// Returns `true` if the set contains `value`.
    fn contains(&self, value: &T) -> bool;

    /// Clears all elements from the set.
    fn clear(&mut self);

    /// Returns the number of elements in the set.
    fn len(&self) -> usize;

    /// Returns `true` if the set is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T, S> Set<T> for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn insert(&mut self, value: T) -> bool {
        !HashSet::insert(self, value)
    }

    fn remove(&mut self, value: &T) -> bool {
        HashSet::remove(self, value)
    }

    type SetIter<'a>
        = Cloned<Iter<'a, T>>
    where
        Self: 'a,
        T: Clone;

    fn iter(&self) -> Self::SetIter<'_>
    where
        T: Clone,
    {
        HashSet::iter(self).cloned()
    }

    fn contains(&self, value: &T) -> bool {
        HashSet::contains(self, value)
    }

    fn clear(&mut self) {
        HashSet::clear(self);
    }

    fn len(&self) -> usize {
        HashSet::len(self)
    }
}

fn set_bit_index((i, bit): (usize, bool)) -> Option<Node> {
    bit.then_some(i as Node)
}

/// Bitset over node handles; the bitset has to be large enough for every inserted node.
impl Set<Node> for BitVec {
    /// ** Panics if `value >= self.len()` **
    fn insert(&mut self, value: Node) -> bool {
        let was_set = self[value as usize];
        self.set(value as usize, true);
        was_set
    }

    fn remove(&mut self, value: &Node) -> bool {
        let was_set = self.get(*value as usize).unwrap_or(false);
        if was_set {
            self.set(*value as usize, false);
        }
        was_set
    }

    type SetIter<'a>
        = FilterMap<Enumerate<bit_vec::Iter<'a>>, fn((usize, bool)) -> Option<Node>>
    where
        Self: 'a,
        Node: Clone;

    fn iter(&self) -> Self::SetIter<'_> {
        BitVec::iter(self)
            .enumerate()
            .filter_map(set_bit_index as fn((usize, bool)) -> Option<Node>)
    }

    fn contains(&self, value: &Node) -> bool {
        self.get(*value as usize).unwrap_or(false)
    }

    fn clear(&mut self) {
        *self = BitVec::from_elem(BitVec::len(self), false);
    }

    fn len(&self) -> usize {
        BitVec::iter(self).filter(|&bit| bit).count()
    }
}
