//! Generic scenario tests for the PriorityQueue trait
//!
//! These tests work with any PriorityQueue implementation and exercise the
//! trait interface with concrete scenarios: running minimums, sorted
//! drains, arbitrary-element removal, and every error path.

use implicit_heap::{BinaryMinHeap, HeapError, PriorityQueue};

/// Test that an empty queue reports every failure it should
fn test_empty_queue<Q: PriorityQueue<i32>>() {
    let mut queue = Q::new();
    assert!(queue.is_empty());
    assert_eq!(queue.len(), 0);
    assert_eq!(queue.peek(), Err(HeapError::Empty));
    assert_eq!(queue.dequeue(), Err(HeapError::Empty));
    assert_eq!(queue.remove(&7), Err(HeapError::Empty));
}

/// Test that peek tracks the running minimum during insertion
fn test_running_minimum<Q: PriorityQueue<i32>>() {
    let mut queue = Q::new();
    let values = [6, 3, 7, 2, 9, 8, 1];
    let expected = [6, 3, 3, 2, 2, 2, 1];

    for (v, min) in values.into_iter().zip(expected) {
        queue.enqueue(v);
        assert_eq!(queue.peek(), Ok(&min));
    }
    assert_eq!(queue.len(), values.len());
}

/// Test that dequeueing until empty yields non-decreasing order
fn test_sorted_drain<Q: PriorityQueue<i32>>() {
    let mut queue = Q::new();
    for v in [6, 3, 7, 2, 9, 8, 1] {
        queue.enqueue(v);
    }

    let mut drained = Vec::new();
    while let Ok(v) = queue.dequeue() {
        drained.push(v);
    }
    assert_eq!(drained, vec![1, 2, 3, 6, 7, 8, 9]);
    assert!(queue.is_empty());
}

/// Test that k enqueues followed by k dequeues leave the queue empty
fn test_round_trip_count<Q: PriorityQueue<i32>>() {
    let mut queue = Q::new();
    for i in 0..50 {
        queue.enqueue(i * 7 % 13);
    }
    assert_eq!(queue.len(), 50);
    for _ in 0..50 {
        assert!(queue.dequeue().is_ok());
    }
    assert!(queue.is_empty());
    assert_eq!(queue.dequeue(), Err(HeapError::Empty));
}

/// Test that removing the root is observably a discarded dequeue
fn test_remove_at_root<Q: PriorityQueue<i32>>() {
    let mut via_remove = Q::new();
    let mut via_dequeue = Q::new();
    for v in [6, 3, 12, 5, 1, 7] {
        via_remove.enqueue(v);
        via_dequeue.enqueue(v);
    }

    let root = *via_remove.peek().unwrap();
    assert_eq!(via_remove.remove(&root), Ok(()));
    via_dequeue.dequeue().unwrap();

    assert_eq!(via_remove.peek(), Ok(&3));
    loop {
        let a = via_remove.dequeue();
        let b = via_dequeue.dequeue();
        assert_eq!(a, b);
        if a.is_err() {
            break;
        }
    }
}

/// Test removal of interior elements followed by a full drain
fn test_remove_interior_then_drain<Q: PriorityQueue<i32>>() {
    let mut queue = Q::new();
    for v in [6, 3, 12, 5, 1, 7] {
        queue.enqueue(v);
    }

    assert_eq!(queue.remove(&6), Ok(()));
    assert_eq!(queue.remove(&12), Ok(()));
    assert_eq!(queue.remove(&1), Ok(()));

    let mut drained = Vec::new();
    while let Ok(v) = queue.dequeue() {
        drained.push(v);
    }
    assert_eq!(drained, vec![3, 5, 7]);
}

/// Test that removing an absent value fails and changes nothing
fn test_remove_absent_value<Q: PriorityQueue<i32>>() {
    let mut queue = Q::new();
    for v in [4, 8, 2, 3, 3, 9] {
        queue.enqueue(v);
    }

    assert_eq!(queue.remove(&5), Err(HeapError::NotFound));
    assert_eq!(queue.len(), 6);

    let mut drained = Vec::new();
    while let Ok(v) = queue.dequeue() {
        drained.push(v);
    }
    assert_eq!(drained, vec![2, 3, 3, 4, 8, 9]);
}

/// Test that remove preserves the remaining multiset exactly
fn test_remove_preserves_multiset<Q: PriorityQueue<i32>>() {
    let values = [5, 17, 5, 2, 11, 5, 8];
    let mut queue = Q::new();
    for v in values {
        queue.enqueue(v);
    }

    assert_eq!(queue.remove(&5), Ok(()));

    let mut expected: Vec<i32> = values.to_vec();
    let first_five = expected.iter().position(|&v| v == 5).unwrap();
    expected.remove(first_five);
    expected.sort_unstable();

    let mut drained = Vec::new();
    while let Ok(v) = queue.dequeue() {
        drained.push(v);
    }
    assert_eq!(drained, expected);
}

/// Test queues over a non-integer ordered element type
fn test_string_elements<Q: PriorityQueue<String>>() {
    let mut queue = Q::new();
    for word in ["pear", "apple", "quince", "banana"] {
        queue.enqueue(word.to_string());
    }

    assert_eq!(queue.peek().map(String::as_str), Ok("apple"));
    assert_eq!(queue.remove(&"quince".to_string()), Ok(()));

    let mut drained = Vec::new();
    while let Ok(v) = queue.dequeue() {
        drained.push(v);
    }
    assert_eq!(drained, vec!["apple", "banana", "pear"]);
}

#[test]
fn test_binary_empty_queue() {
    test_empty_queue::<BinaryMinHeap<i32>>();
}

#[test]
fn test_binary_running_minimum() {
    test_running_minimum::<BinaryMinHeap<i32>>();
}

#[test]
fn test_binary_sorted_drain() {
    test_sorted_drain::<BinaryMinHeap<i32>>();
}

#[test]
fn test_binary_round_trip_count() {
    test_round_trip_count::<BinaryMinHeap<i32>>();
}

#[test]
fn test_binary_remove_at_root() {
    test_remove_at_root::<BinaryMinHeap<i32>>();
}

#[test]
fn test_binary_remove_interior_then_drain() {
    test_remove_interior_then_drain::<BinaryMinHeap<i32>>();
}

#[test]
fn test_binary_remove_absent_value() {
    test_remove_absent_value::<BinaryMinHeap<i32>>();
}

#[test]
fn test_binary_remove_preserves_multiset() {
    test_remove_preserves_multiset::<BinaryMinHeap<i32>>();
}

#[test]
fn test_binary_string_elements() {
    test_string_elements::<BinaryMinHeap<String>>();
}
