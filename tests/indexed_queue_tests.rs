//! Integration tests for `IndexedPriorityQueue`

use std::collections::hash_map::RandomState;

use rust_dary_heaps::{ErrorKind, HeapError, IndexedPriorityQueue, QueueKind};

fn xyz_queue() -> IndexedPriorityQueue<&'static str, i32> {
    IndexedPriorityQueue::build_min(2, vec!["x", "y", "z"], vec![5, 1, 3]).unwrap()
}

#[test]
fn test_build_and_lookup() {
    let queue = xyz_queue();
    assert_eq!(queue.top(), Ok(&"y"));
    assert_eq!(queue.priority_of("y"), Ok(&1));
    assert_eq!(queue.kind(), QueueKind::Min);
    assert_eq!(queue.arity(), 2);
}

#[test]
fn test_decrease_key_then_rejected_increase() {
    let mut queue = xyz_queue();
    queue.update_key("z", 0).unwrap();
    assert_eq!(queue.top(), Ok(&"z"));

    let err = queue.update_key("z", 10).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::LogicError);
    assert_eq!(queue.top(), Ok(&"z"));
    assert_eq!(queue.priority_of("z"), Ok(&0));
    assert!(queue.verify_invariants());
}

#[test]
fn test_duplicate_push_leaves_size() {
    let mut queue = xyz_queue();
    let err = queue.push("x", 99).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::LogicError);
    assert_eq!(queue.len(), 3);
}

#[test]
fn test_nth_pop_succeeds_then_empty() {
    let mut queue = xyz_queue();
    let n = queue.len();
    let mut order = Vec::new();
    for _ in 0..n {
        let (element, _) = queue.pop_and_return().unwrap();
        assert!(!queue.contains(element));
        order.push(element);
    }
    assert_eq!(order, vec!["y", "z", "x"]);
    assert_eq!(queue.pop().unwrap_err().kind(), ErrorKind::EmptyContainer);
    assert!(queue.is_empty());
}

#[test]
fn test_not_found_kind() {
    let mut queue = xyz_queue();
    assert_eq!(queue.update_key("q", 0).unwrap_err().kind(), ErrorKind::NotFound);
    assert_eq!(queue.priority_of("q").unwrap_err().kind(), ErrorKind::NotFound);
}

#[test]
fn test_length_mismatch_is_invalid_argument() {
    let err = IndexedPriorityQueue::build_max(4, vec![1, 2, 3], vec![1.0, 2.0]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(err.to_string(), "got 3 elements but 2 priorities");
}

#[test]
fn test_max_queue_increase_key() {
    let mut queue = IndexedPriorityQueue::max(3).unwrap();
    for (i, p) in [4, 17, 9, 12, 1, 8, 3].into_iter().enumerate() {
        queue.push(i, p).unwrap();
    }
    assert_eq!(queue.top_with_priority(), Ok((&1, &17)));

    // Element 4 sits at a leaf with the lowest priority
    queue.update_key(&4, 30).unwrap();
    assert_eq!(queue.top_with_priority(), Ok((&4, &30)));
    assert!(queue.verify_invariants());

    assert_eq!(queue.update_key(&0, 4), Err(HeapError::PriorityNotImproved));
    assert_eq!(queue.update_key(&0, 2), Err(HeapError::PriorityNotImproved));
    queue.update_key(&0, 5).unwrap();
    assert_eq!(queue.priority_of(&0), Ok(&5));
}

#[test]
fn test_custom_hasher() {
    let mut queue =
        IndexedPriorityQueue::with_hasher(2, QueueKind::Min, RandomState::new()).unwrap();
    queue.push('a', 3u8).unwrap();
    queue.push('b', 2u8).unwrap();
    queue.update_key(&'a', 1).unwrap();
    assert_eq!(queue.top(), Ok(&'a'));
    assert!(queue.verify_invariants());
}

#[test]
fn test_iter_and_sorted_vec() {
    let queue = xyz_queue();
    let mut seen: Vec<_> = queue.iter().map(|(e, p)| (*e, *p)).collect();
    seen.sort();
    assert_eq!(seen, vec![("x", 5), ("y", 1), ("z", 3)]);
    assert_eq!(queue.into_sorted_vec(), vec![("y", 1), ("z", 3), ("x", 5)]);
}

#[test]
fn test_reinsert_after_pop() {
    let mut queue = xyz_queue();
    let (top, _) = queue.pop_and_return().unwrap();
    queue.push(top, 100).unwrap();
    assert_eq!(queue.priority_of("y"), Ok(&100));
    assert_eq!(queue.top(), Ok(&"z"));
    assert!(queue.verify_invariants());
}
