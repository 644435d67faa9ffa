//! Concrete orderings
//!
//! | Type          | Root holds                  |
//! |---------------|-----------------------------|
//! | [`MinOrder`]  | the smallest element        |
//! | [`MaxOrder`]  | the largest element         |
//! | [`FnOrder`]   | whatever the closure ranks first |
//! | [`QueueKind`] | min or max, chosen at runtime |
//!
//! All of them only need `PartialOrd`, so floating point priorities work.
//! Incomparable values (NaN) never outrank anything; where they end up in the
//! heap is unspecified.

use std::fmt;

use crate::traits::Compare;

/// Smallest element first
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MinOrder;

impl<T: PartialOrd + ?Sized> Compare<T> for MinOrder {
    #[inline]
    fn higher_priority(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Largest element first
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MaxOrder;

impl<T: PartialOrd + ?Sized> Compare<T> for MaxOrder {
    #[inline]
    fn higher_priority(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

/// Adapts a closure `Fn(&T, &T) -> bool` into a [`Compare`]
///
/// The closure gets the same contract as [`Compare::higher_priority`].
///
/// ```rust
/// use rust_dary_heaps::order::FnOrder;
/// use rust_dary_heaps::DaryHeap;
///
/// // Shortest string first
/// let by_len = FnOrder(|a: &&str, b: &&str| a.len() < b.len());
/// let mut heap: DaryHeap<&str, _> = DaryHeap::with_comparator(3, by_len).unwrap();
/// heap.push("Bellman-Ford");
/// heap.push("A-star");
/// assert_eq!(heap.top(), Ok(&"A-star"));
/// ```
#[derive(Clone, Copy, Default)]
pub struct FnOrder<F>(pub F);

impl<T: ?Sized, F> Compare<T> for FnOrder<F>
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn higher_priority(&self, a: &T, b: &T) -> bool {
        (self.0)(a, b)
    }
}

impl<F> fmt::Debug for FnOrder<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnOrder(..)")
    }
}

/// Runtime choice between min and max ordering
///
/// Used by [`IndexedPriorityQueue`](crate::indexed::IndexedPriorityQueue), whose
/// key-update rule depends on the direction: a min-queue accepts only
/// decrease-key, a max-queue only increase-key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueueKind {
    /// Smallest priority first
    Min,
    /// Largest priority first
    Max,
}

impl<T: PartialOrd + ?Sized> Compare<T> for QueueKind {
    #[inline]
    fn higher_priority(&self, a: &T, b: &T) -> bool {
        match self {
            QueueKind::Min => MinOrder.higher_priority(a, b),
            QueueKind::Max => MaxOrder.higher_priority(a, b),
        }
    }
}
