//! Indexed priority queue with in-place key updates
//!
//! [`IndexedPriorityQueue`] stores `(element, priority)` pairs in a d-ary heap
//! and keeps a hash map from each element to its current array position. The
//! map is what makes [`contains`](IndexedPriorityQueue::contains) and
//! [`priority_of`](IndexedPriorityQueue::priority_of) O(1) and lets
//! [`update_key`](IndexedPriorityQueue::update_key) start its repair at the
//! element's slot instead of searching for it.
//!
//! # Design
//!
//! Elements are identified by value (`Hash + Eq`), so an element can be queued
//! at most once. The position map is rewritten inside the same slot swap that
//! moves the pairs, so every push, pop and key update leaves the map coherent
//! with the array.
//!
//! Key updates are monotonic: a min-queue only accepts a strictly smaller
//! priority (decrease-key) and a max-queue only a strictly larger one
//! (increase-key). An accepted update can only move the element toward the
//! root, so one bubble-up restores the heap.
//!
//! # Time Complexity
//!
//! | Operation       | Complexity            |
//! |-----------------|-----------------------|
//! | `push`          | O(log_d n) expected   |
//! | `pop`           | O(d·log_d n) expected |
//! | `update_key`    | O(log_d n) expected   |
//! | `contains`      | O(1) expected         |
//! | `priority_of`   | O(1) expected         |
//! | `top`           | O(1)                  |
//! | build           | O(n) expected         |
//!
//! # Example
//!
//! ```rust
//! use rust_dary_heaps::IndexedPriorityQueue;
//!
//! let mut queue = IndexedPriorityQueue::build_min(2, vec!["x", "y", "z"], vec![5, 1, 3]).unwrap();
//! assert_eq!(queue.top(), Ok(&"y"));
//! assert_eq!(queue.priority_of("y"), Ok(&1));
//!
//! queue.update_key("z", 0).unwrap();
//! assert_eq!(queue.top_with_priority(), Ok((&"z", &0)));
//!
//! // Raising a priority is not a decrease-key
//! assert!(queue.update_key("z", 10).is_err());
//! assert_eq!(queue.top(), Ok(&"z"));
//! ```

use std::borrow::Borrow;
use std::collections::hash_map::{Entry, HashMap};
use std::hash::{BuildHasher, BuildHasherDefault, Hash};

use rustc_hash::FxHasher;

use crate::order::QueueKind;
use crate::sift::{self, HeapSlots};
use crate::traits::{Compare, HeapError};

/// Default hasher for the position map
pub type FxBuildHasher = BuildHasherDefault<FxHasher>;

/// A d-ary heap of `(element, priority)` pairs with an element-to-position index
///
/// `T` is the element, used as the lookup key; `P` is its priority, compared
/// according to the queue's [`QueueKind`].
#[derive(Debug, Clone)]
pub struct IndexedPriorityQueue<T, P, S = FxBuildHasher> {
    /// Pairs in heap order, root first
    nodes: Vec<(T, P)>,
    /// Maps each queued element to its index in `nodes`
    positions: HashMap<T, usize, S>,
    arity: usize,
    kind: QueueKind,
}

impl<T, P, S> HeapSlots for IndexedPriorityQueue<T, P, S>
where
    T: Hash + Eq,
    P: PartialOrd,
    S: BuildHasher,
{
    fn slot_count(&self) -> usize {
        self.nodes.len()
    }

    fn outranks(&self, a: usize, b: usize) -> bool {
        self.kind.higher_priority(&self.nodes[a].1, &self.nodes[b].1)
    }

    fn swap_slots(&mut self, a: usize, b: usize) {
        self.nodes.swap(a, b);
        self.record_position(a);
        self.record_position(b);
    }
}

impl<T, P> IndexedPriorityQueue<T, P>
where
    T: Hash + Eq + Clone,
    P: PartialOrd,
{
    /// Creates an empty queue
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidArity`] if `arity < 2`.
    pub fn new(arity: usize, kind: QueueKind) -> Result<Self, HeapError> {
        Self::with_hasher(arity, kind, FxBuildHasher::default())
    }

    /// Creates an empty queue that can hold `capacity` elements without reallocating
    pub fn with_capacity(
        arity: usize,
        kind: QueueKind,
        capacity: usize,
    ) -> Result<Self, HeapError> {
        Self::with_capacity_and_hasher(arity, kind, capacity, FxBuildHasher::default())
    }

    /// Creates an empty min-queue
    pub fn min(arity: usize) -> Result<Self, HeapError> {
        Self::new(arity, QueueKind::Min)
    }

    /// Creates an empty max-queue
    pub fn max(arity: usize) -> Result<Self, HeapError> {
        Self::new(arity, QueueKind::Max)
    }

    /// Builds a queue from parallel batches of elements and priorities in O(n)
    ///
    /// `priorities[i]` is the priority of `elements[i]`.
    ///
    /// # Errors
    /// - [`HeapError::InvalidArity`] if `arity < 2`
    /// - [`HeapError::LengthMismatch`] if the batches differ in length
    /// - [`HeapError::DuplicateElement`] if an element appears twice
    pub fn from_batch(
        arity: usize,
        kind: QueueKind,
        elements: Vec<T>,
        priorities: Vec<P>,
    ) -> Result<Self, HeapError> {
        Self::from_batch_with_hasher(arity, kind, elements, priorities, FxBuildHasher::default())
    }

    /// Builds a min-queue, see [`from_batch`](Self::from_batch)
    pub fn build_min(
        arity: usize,
        elements: Vec<T>,
        priorities: Vec<P>,
    ) -> Result<Self, HeapError> {
        Self::from_batch(arity, QueueKind::Min, elements, priorities)
    }

    /// Builds a max-queue, see [`from_batch`](Self::from_batch)
    pub fn build_max(
        arity: usize,
        elements: Vec<T>,
        priorities: Vec<P>,
    ) -> Result<Self, HeapError> {
        Self::from_batch(arity, QueueKind::Max, elements, priorities)
    }
}

impl<T, P, S> IndexedPriorityQueue<T, P, S>
where
    T: Hash + Eq + Clone,
    P: PartialOrd,
    S: BuildHasher,
{
    /// Creates an empty queue whose position map uses `hasher`
    pub fn with_hasher(arity: usize, kind: QueueKind, hasher: S) -> Result<Self, HeapError> {
        Self::with_capacity_and_hasher(arity, kind, 0, hasher)
    }

    /// Creates an empty queue that can hold `capacity` elements without reallocating
    pub fn with_capacity_and_hasher(
        arity: usize,
        kind: QueueKind,
        capacity: usize,
        hasher: S,
    ) -> Result<Self, HeapError> {
        sift::check_arity(arity)?;
        Ok(IndexedPriorityQueue {
            nodes: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity_and_hasher(capacity, hasher),
            arity,
            kind,
        })
    }

    /// Builds a queue from parallel batches using a custom hasher
    pub fn from_batch_with_hasher(
        arity: usize,
        kind: QueueKind,
        elements: Vec<T>,
        priorities: Vec<P>,
        hasher: S,
    ) -> Result<Self, HeapError> {
        sift::check_arity(arity)?;
        if elements.len() != priorities.len() {
            return Err(HeapError::LengthMismatch {
                elements: elements.len(),
                priorities: priorities.len(),
            });
        }

        let mut positions = HashMap::with_capacity_and_hasher(elements.len(), hasher);
        for (pos, element) in elements.iter().enumerate() {
            if positions.insert(element.clone(), pos).is_some() {
                return Err(HeapError::DuplicateElement);
            }
        }

        let mut queue = IndexedPriorityQueue {
            nodes: elements.into_iter().zip(priorities).collect(),
            positions,
            arity,
            kind,
        };
        sift::heapify(&mut queue, arity);
        Ok(queue)
    }

    /// Returns the number of queued elements
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the branching factor
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Returns whether this is a min- or max-queue
    pub fn kind(&self) -> QueueKind {
        self.kind
    }

    /// Returns true if `element` is queued
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions.contains_key(element)
    }

    /// Queues `element` with `priority`
    ///
    /// # Errors
    /// Returns [`HeapError::DuplicateElement`] if the element is already
    /// queued; the queue is left unchanged.
    pub fn push(&mut self, element: T, priority: P) -> Result<(), HeapError> {
        let pos = self.nodes.len();
        match self.positions.entry(element) {
            Entry::Occupied(_) => return Err(HeapError::DuplicateElement),
            Entry::Vacant(slot) => {
                self.nodes.push((slot.key().clone(), priority));
                slot.insert(pos);
            }
        }

        let arity = self.arity;
        sift::sift_up(self, arity, pos);
        Ok(())
    }

    /// Queues `element` without checking whether it is already present
    ///
    /// The caller must guarantee that `element` is not queued. Pushing a
    /// present element breaks the queue's index: later calls may return wrong
    /// answers or panic. Debug builds assert the precondition.
    pub fn push_unchecked(&mut self, element: T, priority: P) {
        let pos = self.nodes.len();
        let previous = self.positions.insert(element.clone(), pos);
        debug_assert!(previous.is_none(), "push_unchecked on an element already in the queue");
        self.nodes.push((element, priority));

        let arity = self.arity;
        sift::sift_up(self, arity, pos);
    }

    /// Changes the priority of a queued element
    ///
    /// A min-queue accepts only a strictly smaller priority, a max-queue only
    /// a strictly larger one.
    ///
    /// # Errors
    /// - [`HeapError::NotFound`] if `element` is not queued
    /// - [`HeapError::PriorityNotImproved`] if `priority` does not strictly
    ///   outrank the current one (equal priorities included)
    ///
    /// Either way the queue is left unchanged.
    pub fn update_key<Q>(&mut self, element: &Q, priority: P) -> Result<(), HeapError>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let pos = *self.positions.get(element).ok_or(HeapError::NotFound)?;
        if !self.kind.higher_priority(&priority, &self.nodes[pos].1) {
            return Err(HeapError::PriorityNotImproved);
        }

        self.nodes[pos].1 = priority;
        let arity = self.arity;
        sift::sift_up(self, arity, pos);
        Ok(())
    }

    /// Returns the priority of a queued element
    ///
    /// # Errors
    /// Returns [`HeapError::NotFound`] if `element` is not queued.
    pub fn priority_of<Q>(&self, element: &Q) -> Result<&P, HeapError>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let &pos = self.positions.get(element).ok_or(HeapError::NotFound)?;
        Ok(&self.nodes[pos].1)
    }

    /// Returns the element at the root
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the queue is empty.
    pub fn top(&self) -> Result<&T, HeapError> {
        self.nodes.first().map(|(element, _)| element).ok_or(HeapError::Empty)
    }

    /// Returns the element at the root together with its priority
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the queue is empty.
    pub fn top_with_priority(&self) -> Result<(&T, &P), HeapError> {
        self.peek().ok_or(HeapError::Empty)
    }

    /// Returns the root pair, or `None` if the queue is empty
    pub fn peek(&self) -> Option<(&T, &P)> {
        self.nodes.first().map(|(element, priority)| (element, priority))
    }

    /// Removes the root element
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the queue is empty.
    pub fn pop(&mut self) -> Result<(), HeapError> {
        self.pop_and_return().map(drop)
    }

    /// Removes the root element and returns it with its priority
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the queue is empty.
    pub fn pop_and_return(&mut self) -> Result<(T, P), HeapError> {
        if self.nodes.is_empty() {
            return Err(HeapError::Empty);
        }

        let (element, priority) = self.nodes.swap_remove(0);
        self.positions.remove(&element);

        if !self.nodes.is_empty() {
            // The former last pair now sits at the root.
            self.record_position(0);
            let arity = self.arity;
            sift::sift_down(self, arity, 0);
        }

        Ok((element, priority))
    }

    /// Queues every pair from `iter`, stopping at the first duplicate
    ///
    /// # Errors
    /// Returns [`HeapError::DuplicateElement`] for the first pair whose
    /// element is already queued. Pairs before it stay queued; the rest of
    /// the iterator is not consumed.
    pub fn try_extend<I>(&mut self, iter: I) -> Result<(), HeapError>
    where
        I: IntoIterator<Item = (T, P)>,
    {
        for (element, priority) in iter {
            self.push(element, priority)?;
        }
        Ok(())
    }

    /// Iterates over the pairs in heap order
    pub fn iter(&self) -> impl Iterator<Item = (&T, &P)> + '_ {
        self.nodes.iter().map(|(element, priority)| (element, priority))
    }

    /// Removes every element, keeping both allocations
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.positions.clear();
    }

    /// Consumes the queue, returning its pairs in pop order
    pub fn into_sorted_vec(mut self) -> Vec<(T, P)> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Ok(pair) = self.pop_and_return() {
            sorted.push(pair);
        }
        sorted
    }

    /// Checks heap order and index coherence by brute force
    ///
    /// Returns true iff no pair outranks its parent, the map and the array
    /// have the same size, and every element's recorded position is its
    /// actual slot. This is O(n) and intended for tests and debugging.
    pub fn verify_invariants(&self) -> bool {
        self.positions.len() == self.nodes.len()
            && self
                .nodes
                .iter()
                .enumerate()
                .all(|(pos, (element, _))| self.positions.get(element) == Some(&pos))
            && sift::is_heap(self, self.arity)
    }
}

impl<T, P, S> IndexedPriorityQueue<T, P, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    /// Rewrites the map entry of the element now stored in slot `pos`
    fn record_position(&mut self, pos: usize) {
        if let Some(slot) = self.positions.get_mut(&self.nodes[pos].0) {
            *slot = pos;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_min_queue() -> IndexedPriorityQueue<&'static str, i32> {
        IndexedPriorityQueue::build_min(2, vec!["x", "y", "z"], vec![5, 1, 3]).unwrap()
    }

    #[test]
    fn test_build_min_queue() {
        let queue = sample_min_queue();
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.top(), Ok(&"y"));
        assert_eq!(queue.priority_of("y"), Ok(&1));
        assert!(queue.verify_invariants());
    }

    #[test]
    fn test_decrease_key_then_wrong_direction() {
        let mut queue = sample_min_queue();

        queue.update_key("z", 0).unwrap();
        assert_eq!(queue.top(), Ok(&"z"));
        assert!(queue.verify_invariants());

        assert_eq!(queue.update_key("z", 10), Err(HeapError::PriorityNotImproved));
        assert_eq!(queue.top(), Ok(&"z"));
        assert_eq!(queue.priority_of("z"), Ok(&0));
    }

    #[test]
    fn test_equal_priority_update_rejected() {
        let mut queue = sample_min_queue();
        assert_eq!(queue.update_key("x", 5), Err(HeapError::PriorityNotImproved));
        assert_eq!(queue.priority_of("x"), Ok(&5));
    }

    #[test]
    fn test_update_missing_element() {
        let mut queue = sample_min_queue();
        assert_eq!(queue.update_key("w", 0), Err(HeapError::NotFound));
        assert_eq!(queue.priority_of("w"), Err(HeapError::NotFound));
    }

    #[test]
    fn test_duplicate_push_rejected() {
        let mut queue = sample_min_queue();
        assert_eq!(queue.push("x", 99), Err(HeapError::DuplicateElement));
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.priority_of("x"), Ok(&5));
        assert!(queue.verify_invariants());
    }

    #[test]
    fn test_pop_until_empty() {
        let mut queue = sample_min_queue();
        let n = queue.len();
        for _ in 0..n {
            assert!(queue.pop().is_ok());
            assert!(queue.verify_invariants());
        }
        assert_eq!(queue.pop(), Err(HeapError::Empty));
        assert_eq!(queue.top(), Err(HeapError::Empty));
        assert_eq!(queue.top_with_priority(), Err(HeapError::Empty));
    }

    #[test]
    fn test_max_queue_increase_key_reaches_root() {
        let elements = vec!["a", "b", "c", "d"];
        let mut queue = IndexedPriorityQueue::build_max(2, elements, vec![10, 8, 6, 1]).unwrap();
        assert_eq!(queue.top(), Ok(&"a"));

        queue.update_key("d", 20).unwrap();
        assert_eq!(queue.top_with_priority(), Ok((&"d", &20)));
        assert!(queue.verify_invariants());

        assert_eq!(queue.update_key("b", 3), Err(HeapError::PriorityNotImproved));
    }

    #[test]
    fn test_batch_errors() {
        assert_eq!(
            IndexedPriorityQueue::build_min(2, vec!["a", "b"], vec![1]).unwrap_err(),
            HeapError::LengthMismatch {
                elements: 2,
                priorities: 1
            }
        );
        assert_eq!(
            IndexedPriorityQueue::build_min(1, vec!["a"], vec![1]).unwrap_err(),
            HeapError::InvalidArity(1)
        );
        assert_eq!(
            IndexedPriorityQueue::build_max(3, vec!["a", "b", "a"], vec![1, 2, 3]).unwrap_err(),
            HeapError::DuplicateElement
        );
    }

    #[test]
    fn test_borrowed_lookup() {
        let mut queue = IndexedPriorityQueue::<String, f64>::min(3).unwrap();
        queue.push("Dijkstra".to_string(), 2.5).unwrap();
        queue.push("A-star".to_string(), 1.5).unwrap();

        assert!(queue.contains("A-star"));
        assert!(!queue.contains("Prim"));
        queue.update_key("Dijkstra", 0.5).unwrap();
        assert_eq!(queue.top().map(String::as_str), Ok("Dijkstra"));
    }

    #[test]
    fn test_push_unchecked_keeps_index() {
        let mut queue = IndexedPriorityQueue::max(4).unwrap();
        for i in 0..50u32 {
            queue.push_unchecked(i, (i * 37) % 50);
        }
        assert!(queue.verify_invariants());
        assert_eq!(queue.top_with_priority(), Ok((&27, &49)));
    }

    #[test]
    fn test_try_extend_stops_at_duplicate() {
        let mut queue = IndexedPriorityQueue::min(2).unwrap();
        let result = queue.try_extend(vec![('a', 3), ('b', 2), ('a', 1), ('c', 0)]);
        assert_eq!(result, Err(HeapError::DuplicateElement));
        assert_eq!(queue.len(), 2);
        assert!(!queue.contains(&'c'));
        assert!(queue.verify_invariants());
    }

    #[test]
    fn test_clear_resets_index() {
        let mut queue = sample_min_queue();
        queue.clear();
        assert!(queue.is_empty());
        assert!(!queue.contains("x"));
        queue.push("x", 1).unwrap();
        assert!(queue.verify_invariants());
    }
}
