/*!
# Edge Weights

Weights are plain integers. Every primitive integer type satisfies [`Weight`]; signed types are
required whenever negative weights should be expressible (e.g. for Bellman-Ford).

*Infinite* distances are never encoded as a large sentinel value: algorithms return
`Option<W>` (or a [`GraphError`](crate::GraphError)) instead, and additions are checked so that
an overflow never produces a bogus shorter distance.
*/

use std::fmt::{Debug, Display};

use num::{CheckedAdd, One, Zero};

/// Numeric edge weight
pub trait Weight: Copy + Ord + Debug + Display + Zero + One + CheckedAdd {
    /// Returns *true* if the weight is strictly smaller than zero
    fn is_negative(&self) -> bool {
        *self < Self::zero()
    }

    /// `self + other` or `None` on overflow
    fn try_add(&self, other: &Self) -> Option<Self> {
        self.checked_add(other)
    }
}

impl<W> Weight for W where W: Copy + Ord + Debug + Display + Zero + One + CheckedAdd {}

/// Sums up weights; `None` on overflow
pub fn total_weight<W, I>(weights: I) -> Option<W>
where
    W: Weight,
    I: IntoIterator<Item = W>,
{
    weights
        .into_iter()
        .try_fold(W::zero(), |acc, w| acc.try_add(&w))
}
