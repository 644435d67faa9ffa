//! D-ary Heap implementation
//!
//! An array-backed heap where every internal node has up to `d` children.
//! The ordering is a [`Compare`] type parameter, so the same code serves as a
//! min-heap ([`MinOrder`], the default), a max-heap ([`MaxOrder`]) or any
//! caller-defined order ([`FnOrder`]).
//!
//! Larger arities make the tree shallower: pushes get cheaper (fewer levels to
//! climb) while pops get more expensive (more children to scan per level).
//!
//! # Time Complexity
//!
//! | Operation   | Complexity     |
//! |-------------|----------------|
//! | `push`      | O(log_d n)     |
//! | `pop`       | O(d·log_d n)   |
//! | `top`       | O(1)           |
//! | build       | O(n)           |
//!
//! # Example
//!
//! ```rust
//! use rust_dary_heaps::DaryHeap;
//!
//! let mut heap = DaryHeap::build_min(2, vec!["Dijkstra", "Bellman-Ford", "A-star"]).unwrap();
//! assert_eq!(heap.top(), Ok(&"A-star"));
//!
//! heap.push("Floyd");
//! assert_eq!(heap.pop_and_return(), Ok("A-star"));
//! assert_eq!(heap.pop_and_return(), Ok("Bellman-Ford"));
//! assert_eq!(heap.len(), 2);
//! ```

use std::iter::FusedIterator;

use crate::order::{FnOrder, MaxOrder, MinOrder};
use crate::sift::{self, HeapSlots};
use crate::traits::{Compare, HeapError};

/// Branching factor used when none is given
pub const DEFAULT_ARITY: usize = 2;

/// A d-ary heap ordered by `C`
///
/// The root (position 0) always holds an element that no other element
/// outranks under `C`.
#[derive(Debug, Clone)]
pub struct DaryHeap<T, C = MinOrder> {
    /// Elements in heap order, root first
    data: Vec<T>,
    /// Maximum number of children per node, at least 2
    arity: usize,
    cmp: C,
}

impl<T, C: Compare<T>> HeapSlots for DaryHeap<T, C> {
    fn slot_count(&self) -> usize {
        self.data.len()
    }

    fn outranks(&self, a: usize, b: usize) -> bool {
        self.cmp.higher_priority(&self.data[a], &self.data[b])
    }

    fn swap_slots(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
    }
}

impl<T: PartialOrd> DaryHeap<T, MinOrder> {
    /// Creates an empty min-heap
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidArity`] if `arity < 2`.
    pub fn new(arity: usize) -> Result<Self, HeapError> {
        Self::with_comparator(arity, MinOrder)
    }

    /// Creates an empty min-heap, same as [`new`](Self::new)
    pub fn min(arity: usize) -> Result<Self, HeapError> {
        Self::new(arity)
    }

    /// Builds a min-heap from a batch of elements in O(n)
    pub fn build_min<I>(arity: usize, items: I) -> Result<Self, HeapError>
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_vec_with(arity, MinOrder, items.into_iter().collect())
    }
}

impl<T: PartialOrd> DaryHeap<T, MaxOrder> {
    /// Creates an empty max-heap
    pub fn max(arity: usize) -> Result<Self, HeapError> {
        Self::with_comparator(arity, MaxOrder)
    }

    /// Builds a max-heap from a batch of elements in O(n)
    pub fn build_max<I>(arity: usize, items: I) -> Result<Self, HeapError>
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_vec_with(arity, MaxOrder, items.into_iter().collect())
    }
}

impl<T, F> DaryHeap<T, FnOrder<F>>
where
    F: Fn(&T, &T) -> bool,
{
    /// Creates an empty heap ordered by a closure
    ///
    /// `higher(a, b)` must return true iff `a` belongs closer to the root.
    pub fn from_fn(arity: usize, higher: F) -> Result<Self, HeapError> {
        Self::with_comparator(arity, FnOrder(higher))
    }
}

impl<T, C: Compare<T>> DaryHeap<T, C> {
    /// Creates an empty heap with the given ordering
    pub fn with_comparator(arity: usize, cmp: C) -> Result<Self, HeapError> {
        Self::from_vec_with(arity, cmp, Vec::new())
    }

    /// Creates an empty heap that can hold `capacity` elements without reallocating
    pub fn with_capacity(arity: usize, cmp: C, capacity: usize) -> Result<Self, HeapError> {
        Self::from_vec_with(arity, cmp, Vec::with_capacity(capacity))
    }

    /// Turns an arbitrary vector into a heap in O(n)
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidArity`] if `arity < 2`; the vector is dropped.
    pub fn from_vec_with(arity: usize, cmp: C, data: Vec<T>) -> Result<Self, HeapError> {
        sift::check_arity(arity)?;
        let mut heap = DaryHeap { data, arity, cmp };
        sift::heapify(&mut heap, arity);
        Ok(heap)
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the branching factor
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Returns the ordering
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log_d n) comparisons.
    pub fn push(&mut self, item: T) {
        self.data.push(item);
        let (last, arity) = (self.data.len() - 1, self.arity);
        sift::sift_up(self, arity, last);
    }

    /// Returns the root element
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap is empty.
    pub fn top(&self) -> Result<&T, HeapError> {
        self.data.first().ok_or(HeapError::Empty)
    }

    /// Returns the root element, or `None` if the heap is empty
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Removes the root element
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap is empty.
    pub fn pop(&mut self) -> Result<(), HeapError> {
        self.pop_and_return().map(drop)
    }

    /// Removes the root element and returns it
    ///
    /// The last element takes the root's place and is bubbled down.
    ///
    /// # Time Complexity
    /// O(d·log_d n) comparisons.
    pub fn pop_and_return(&mut self) -> Result<T, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::Empty);
        }

        let root = self.data.swap_remove(0);
        if !self.data.is_empty() {
            let arity = self.arity;
            sift::sift_down(self, arity, 0);
        }

        Ok(root)
    }

    /// Returns the elements in heap order (root first, otherwise unspecified)
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterates over the elements in heap order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Removes every element, keeping the allocation
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Consumes the heap, returning its elements in heap order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the heap, returning its elements in pop order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        self.drain_sorted().collect()
    }

    /// Removes elements in pop order as they are iterated
    ///
    /// Elements not yielded stay in the heap.
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T, C> {
        DrainSorted { heap: self }
    }

    /// Checks that no element outranks its parent
    ///
    /// This is O(n) and intended for tests and debugging.
    pub fn verify_heap_order(&self) -> bool {
        sift::is_heap(self, self.arity)
    }
}

/// Draining iterator returned by [`DaryHeap::drain_sorted`]
#[derive(Debug)]
pub struct DrainSorted<'a, T, C: Compare<T>> {
    heap: &'a mut DaryHeap<T, C>,
}

impl<T, C: Compare<T>> Iterator for DrainSorted<'_, T, C> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.pop_and_return().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<T, C: Compare<T>> ExactSizeIterator for DrainSorted<'_, T, C> {}

impl<T, C: Compare<T>> FusedIterator for DrainSorted<'_, T, C> {}
