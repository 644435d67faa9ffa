//! Standard library compatibility layer
//!
//! Collection trait impls that let [`DaryHeap`] stand in for
//! `std::collections::BinaryHeap` in code that builds heaps with
//! `collect()`, `extend()`, `Default` or `From<Vec<T>>`.
//!
//! These impls use [`DEFAULT_ARITY`] and exist for the two built-in
//! orderings only, since a closure comparator has no default value.
//!
//! # Differences from BinaryHeap
//!
//! - **Min-heap by default**: `DaryHeap<T>` pops the smallest element, while
//!   `BinaryHeap` is a max-heap. Use `DaryHeap<T, MaxOrder>` for max-heap behavior.
//! - **Fallible access**: `top` and `pop` return `Result`; `peek` is the
//!   `Option`-returning form.
//!
//! # Example
//!
//! ```rust
//! use rust_dary_heaps::order::MaxOrder;
//! use rust_dary_heaps::DaryHeap;
//!
//! let mut heap: DaryHeap<i32, MaxOrder> = vec![5, 3, 7].into_iter().collect();
//! heap.extend([9, 1]);
//! assert_eq!(heap.peek(), Some(&9));
//! assert_eq!(heap.into_sorted_vec(), vec![9, 7, 5, 3, 1]);
//! ```

use crate::dary::{DaryHeap, DEFAULT_ARITY};
use crate::order::{MaxOrder, MinOrder};
use crate::traits::Compare;

macro_rules! impl_std_traits {
    ($order:ident) => {
        impl<T: PartialOrd> Default for DaryHeap<T, $order> {
            fn default() -> Self {
                Self::from(Vec::new())
            }
        }

        impl<T: PartialOrd> From<Vec<T>> for DaryHeap<T, $order> {
            /// Heapifies the vector in O(n) with the default arity
            fn from(data: Vec<T>) -> Self {
                match DaryHeap::from_vec_with(DEFAULT_ARITY, $order, data) {
                    Ok(heap) => heap,
                    Err(_) => unreachable!("DEFAULT_ARITY is a valid arity"),
                }
            }
        }

        impl<T: PartialOrd> FromIterator<T> for DaryHeap<T, $order> {
            fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
                Self::from(iter.into_iter().collect::<Vec<T>>())
            }
        }
    };
}

impl_std_traits!(MinOrder);
impl_std_traits!(MaxOrder);

impl<T, C: Compare<T>> Extend<T> for DaryHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T, C: Compare<T>> IntoIterator for DaryHeap<T, C> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    /// Yields the elements in heap order, not in pop order
    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a, T, C: Compare<T>> IntoIterator for &'a DaryHeap<T, C> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
