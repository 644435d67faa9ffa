//! Common traits and the error type shared by the heap containers
//!
//! This module provides:
//!
//! - [`Compare`]: the ordering predicate a heap is parameterized by
//! - [`HeapError`]: the error type returned by every fallible operation
//! - [`ErrorKind`]: the coarse classification of a [`HeapError`]
//!
//! Min and max ordering are not separate code paths: both containers take a
//! single [`Compare`] implementation and the concrete orderings in
//! [`order`](crate::order) simply flip the predicate.

use thiserror::Error;

/// Coarse classification of a [`HeapError`]
///
/// Callers that only care about *why* an operation was refused (bad
/// construction arguments, an empty container, a missing element, or a
/// violated usage rule) can match on this instead of on the individual
/// variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Construction was attempted with arguments that can never form a heap
    InvalidArgument,
    /// The operation needs at least one element
    EmptyContainer,
    /// The element is not present in the queue
    NotFound,
    /// The call breaks a usage rule of the container
    LogicError,
}

/// Error type for heap operations
///
/// Every failure is detected before the container is modified, so a caller
/// that receives an error observes the container exactly as it was before
/// the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// The branching factor is smaller than 2
    #[error("branching factor must be at least 2, got {0}")]
    InvalidArity(usize),
    /// Bulk construction was given a different number of elements and priorities
    #[error("got {elements} elements but {priorities} priorities")]
    LengthMismatch {
        /// Number of elements supplied
        elements: usize,
        /// Number of priorities supplied
        priorities: usize,
    },
    /// The container holds no elements
    #[error("the container is empty")]
    Empty,
    /// The element is not in the queue
    #[error("no such element is present in the queue")]
    NotFound,
    /// The element is already in the queue
    #[error("element is already present in the queue")]
    DuplicateElement,
    /// The new priority does not strictly outrank the current one
    ///
    /// A min-queue only accepts strictly smaller priorities (decrease-key),
    /// a max-queue only strictly larger ones (increase-key).
    #[error("new priority does not strictly improve on the current priority")]
    PriorityNotImproved,
}

impl HeapError {
    /// Returns the classification of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            HeapError::InvalidArity(_) | HeapError::LengthMismatch { .. } => {
                ErrorKind::InvalidArgument
            }
            HeapError::Empty => ErrorKind::EmptyContainer,
            HeapError::NotFound => ErrorKind::NotFound,
            HeapError::DuplicateElement | HeapError::PriorityNotImproved => ErrorKind::LogicError,
        }
    }
}

/// Ordering predicate for heap containers
///
/// `higher_priority(a, b)` returns `true` iff `a` must sit closer to the root
/// than `b`. The predicate has to be a strict weak ordering: irreflexive,
/// transitive, and with incomparability transitive. Ties (neither argument
/// outranks the other) are left wherever the heap happens to put them.
///
/// # Example
///
/// ```rust
/// use rust_dary_heaps::traits::Compare;
/// use rust_dary_heaps::order::{MaxOrder, MinOrder};
///
/// assert!(MinOrder.higher_priority(&1, &2));
/// assert!(MaxOrder.higher_priority(&2, &1));
/// assert!(!MinOrder.higher_priority(&1, &1));
/// ```
pub trait Compare<T: ?Sized> {
    /// Returns true if `a` outranks `b`
    fn higher_priority(&self, a: &T, b: &T) -> bool;
}

impl<T: ?Sized, C: Compare<T> + ?Sized> Compare<T> for &C {
    fn higher_priority(&self, a: &T, b: &T) -> bool {
        (**self).higher_priority(a, b)
    }
}
