//! D-ary heaps and an updatable priority queue for Rust
//!
//! This crate provides array-backed d-ary heaps, where the branching factor
//! `d >= 2` is chosen at construction, plus an indexed variant that supports
//! changing the priority of a queued element in place.
//!
//! # Features
//!
//! - **D-ary Heap** ([`DaryHeap`]): O(log_d n) push, O(d·log_d n) pop, O(1) top, O(n) build.
//!   Min-ordered by default; max-ordered or closure-ordered on request.
//! - **Indexed Priority Queue** ([`IndexedPriorityQueue`]): `(element, priority)` pairs with
//!   O(1) membership and priority lookup and O(log_d n) decrease-key (min-queue) or
//!   increase-key (max-queue).
//! - **Pathfinding** ([`pathfinding`]): Dijkstra and A* over the indexed queue.
//!
//! # Example
//!
//! ```rust
//! use rust_dary_heaps::{DaryHeap, IndexedPriorityQueue};
//!
//! let mut heap = DaryHeap::max(4).unwrap();
//! for x in [3, 9, 4] {
//!     heap.push(x);
//! }
//! assert_eq!(heap.top(), Ok(&9));
//!
//! let mut queue = IndexedPriorityQueue::min(2).unwrap();
//! queue.push("a", 10).unwrap();
//! queue.push("b", 7).unwrap();
//! queue.update_key("a", 1).unwrap();
//! assert_eq!(queue.top_with_priority(), Ok((&"a", &1)));
//! ```

pub mod dary;
pub mod indexed;
pub mod order;
pub mod pathfinding;
mod sift;
pub mod stdlib_compat;
pub mod traits;

pub use dary::{DaryHeap, DEFAULT_ARITY};
pub use indexed::IndexedPriorityQueue;
pub use order::{FnOrder, MaxOrder, MinOrder, QueueKind};
pub use traits::{Compare, ErrorKind, HeapError};
