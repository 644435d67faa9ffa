//! Array-backed d-ary heap mechanics
//!
//! Both containers store their entries in a contiguous array with the root at
//! position 0. For arity `d`, the children of position `p` are
//! `d*p + 1 ..= d*p + d` and the parent of `p > 0` is `(p - 1) / d`.
//!
//! The repair routines here are written once against [`HeapSlots`], so the
//! plain heap and the indexed queue share the exact same bubble-up,
//! bubble-down and bottom-up build. A container that tracks positions does its
//! bookkeeping inside [`HeapSlots::swap_slots`].

use crate::traits::HeapError;

/// Array view the sift routines operate on
pub(crate) trait HeapSlots {
    /// Number of occupied slots
    fn slot_count(&self) -> usize;

    /// Returns true if the entry in slot `a` must sit above the one in slot `b`
    fn outranks(&self, a: usize, b: usize) -> bool;

    /// Exchanges the entries of two slots
    fn swap_slots(&mut self, a: usize, b: usize);
}

/// Rejects branching factors below 2
pub(crate) fn check_arity(arity: usize) -> Result<(), HeapError> {
    if arity < 2 {
        Err(HeapError::InvalidArity(arity))
    } else {
        Ok(())
    }
}

#[inline]
pub(crate) fn parent(pos: usize, arity: usize) -> usize {
    debug_assert!(pos > 0);
    (pos - 1) / arity
}

/// Position of the first child, or `None` if it would not fit in `usize`
#[inline]
pub(crate) fn first_child(pos: usize, arity: usize) -> Option<usize> {
    arity.checked_mul(pos)?.checked_add(1)
}

/// Moves the entry at `pos` toward the root until its parent outranks it or
/// ties with it. Returns the final position.
///
/// O(log_d n) comparisons.
pub(crate) fn sift_up<S: HeapSlots + ?Sized>(slots: &mut S, arity: usize, mut pos: usize) -> usize {
    while pos > 0 {
        let up = parent(pos, arity);
        if !slots.outranks(pos, up) {
            break;
        }
        slots.swap_slots(pos, up);
        pos = up;
    }
    pos
}

/// Moves the entry at `pos` away from the root until no child outranks it.
/// Returns the final position.
///
/// At most `d` comparisons per level, O(d·log_d n) in total.
pub(crate) fn sift_down<S: HeapSlots + ?Sized>(
    slots: &mut S,
    arity: usize,
    mut pos: usize,
) -> usize {
    let len = slots.slot_count();
    loop {
        let first = match first_child(pos, arity) {
            Some(first) if first < len => first,
            _ => break,
        };
        let end = first.saturating_add(arity).min(len);

        let mut best = pos;
        for child in first..end {
            if slots.outranks(child, best) {
                best = child;
            }
        }

        if best == pos {
            break;
        }
        slots.swap_slots(pos, best);
        pos = best;
    }
    pos
}

/// Bottom-up heap construction, O(n) regardless of arity
pub(crate) fn heapify<S: HeapSlots + ?Sized>(slots: &mut S, arity: usize) {
    let len = slots.slot_count();
    if len < 2 {
        return;
    }
    let last_internal = parent(len - 1, arity);
    for pos in (0..=last_internal).rev() {
        sift_down(slots, arity, pos);
    }
}

/// Checks that no entry outranks its parent
pub(crate) fn is_heap<S: HeapSlots + ?Sized>(slots: &S, arity: usize) -> bool {
    (1..slots.slot_count()).all(|pos| !slots.outranks(pos, parent(pos, arity)))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Min-ordered slots that count swaps
    struct Slots {
        data: Vec<i32>,
        swaps: usize,
    }

    impl Slots {
        fn new(data: Vec<i32>) -> Self {
            Slots { data, swaps: 0 }
        }
    }

    impl HeapSlots for Slots {
        fn slot_count(&self) -> usize {
            self.data.len()
        }

        fn outranks(&self, a: usize, b: usize) -> bool {
            self.data[a] < self.data[b]
        }

        fn swap_slots(&mut self, a: usize, b: usize) {
            self.data.swap(a, b);
            self.swaps += 1;
        }
    }

    #[test]
    fn test_child_parent_arithmetic() {
        for arity in 2..6 {
            for pos in 0..50 {
                let first = first_child(pos, arity).unwrap();
                for child in first..first + arity {
                    assert_eq!(parent(child, arity), pos);
                }
            }
        }
        assert_eq!(first_child(usize::MAX / 2, 3), None);
    }

    #[test]
    fn test_check_arity() {
        assert_eq!(check_arity(0), Err(HeapError::InvalidArity(0)));
        assert_eq!(check_arity(1), Err(HeapError::InvalidArity(1)));
        assert_eq!(check_arity(2), Ok(()));
        assert_eq!(check_arity(usize::MAX), Ok(()));
    }

    #[test]
    fn test_heapify_all_arities() {
        let data: Vec<i32> = (0..200).map(|i| (i * 7919) % 211).collect();
        for arity in 2..9 {
            let mut slots = Slots::new(data.clone());
            heapify(&mut slots, arity);
            assert!(is_heap(&slots, arity), "arity {}", arity);
            assert_eq!(slots.data[0], *data.iter().min().unwrap());
        }
    }

    #[test]
    fn test_heapify_sorted_input_needs_no_swaps() {
        let mut slots = Slots::new((0..64).collect());
        heapify(&mut slots, 4);
        assert_eq!(slots.swaps, 0);
    }

    #[test]
    fn test_sift_up_stops_on_tie() {
        let mut slots = Slots::new(vec![1, 5, 5, 5, 1]);
        let pos = sift_up(&mut slots, 2, 4);
        assert_eq!(pos, 1);
        assert_eq!(slots.data, vec![1, 1, 5, 5, 5]);
    }

    #[test]
    fn test_sift_down_picks_best_child() {
        let mut slots = Slots::new(vec![9, 4, 2, 3]);
        let pos = sift_down(&mut slots, 3, 0);
        assert_eq!(pos, 2);
        assert_eq!(slots.data, vec![2, 4, 9, 3]);
    }

    #[test]
    fn test_huge_arity_is_flat() {
        let mut slots = Slots::new(vec![5, 3, 8, 1]);
        heapify(&mut slots, usize::MAX);
        assert_eq!(slots.data[0], 1);
        assert!(is_heap(&slots, usize::MAX));
    }
}
