/*!
# Utilities

Provides helper traits used by algorithms and generators:
- abstractions over [`Set`] so traversals can pick their visited-set implementation,
- [`FromCapacity`] for constructing such sets without knowing their concrete type,
- [`Probability`] for validating generator parameters.

You probably do not need to interact with this module directly.
*/

use std::{collections::HashSet, hash::RandomState};

use bit_vec::BitVec;
use fxhash::{FxBuildHasher, FxHashSet};
use num::{One, Zero};

pub mod set;

pub use set::Set;

/// Helper trait for probalities
pub trait Probability {
    /// Returns *true* if the probality is valid (ie. between `0` and `1`)
    fn is_valid_probility(&self) -> bool;
}

impl<P> Probability for P
where
    P: Zero + One + PartialOrd,
{
    fn is_valid_probility(&self) -> bool {
        Self::zero().le(self) && Self::one().ge(self)
    }
}

/// Helper trait for datastructure that can be initialized with capacity.
/// Can be interpreted as reserved space or guaranteed used space.
pub trait FromCapacity: Sized {
    /// Create a new instance with a given capacity
    fn from_capacity(capacity: usize) -> Self {
        Self::from_total_used_capacity(capacity, capacity)
    }

    /// Creates a new instance from the total capacity (ie. max-value for example) and the actual
    /// capacity that will be used (space-wise).
    fn from_total_used_capacity(total: usize, used: usize) -> Self;
}

impl FromCapacity for BitVec {
    fn from_total_used_capacity(total: usize, _used: usize) -> Self {
        // Using a bitset as a Set requires intializing to the maximum element
        BitVec::from_elem(total, false)
    }
}

impl<T> FromCapacity for HashSet<T, RandomState> {
    fn from_total_used_capacity(_total: usize, used: usize) -> Self {
        // Using `HashSet<T>` as a Set only requires intializing to the number of elements
        Self::with_capacity(used)
    }
}

impl<T> FromCapacity for FxHashSet<T> {
    fn from_total_used_capacity(_total: usize, used: usize) -> Self {
        Self::with_capacity_and_hasher(used, FxBuildHasher::default())
    }
}
