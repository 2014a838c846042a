//! Common trait and error taxonomy for priority queues
//!
//! This module defines [`PriorityQueue`], the operation set every queue in
//! this crate implements, and [`HeapError`], the typed failures those
//! operations report.
//!
//! The queue is a min-queue: the element itself is its priority, and a
//! lower value means higher priority. There is no separate (priority, item)
//! pair and no custom comparator; `T: Ord` supplies the total order.

use std::fmt;

/// Error type for queue operations
///
/// Every failure is reported synchronously to the immediate caller; no
/// operation is retried internally and none fails silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The operation requires at least one element
    Empty,
    /// The value does not occur anywhere in the queue
    NotFound,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::Empty => write!(f, "operation requires a non-empty heap"),
            HeapError::NotFound => write!(f, "value not found in heap"),
        }
    }
}

impl std::error::Error for HeapError {}

/// A min-priority queue over a totally ordered element type
///
/// Elements are their own priorities. Besides the classic `enqueue` /
/// `dequeue` / `peek` triple, the trait requires [`remove`](Self::remove),
/// which deletes one occurrence of an arbitrary value from the middle of
/// the queue.
///
/// Dropping a queue releases its underlying storage; there is no separate
/// teardown operation.
///
/// # Example
///
/// ```rust
/// use implicit_heap::{BinaryMinHeap, PriorityQueue};
///
/// let mut heap: BinaryMinHeap<i32> = BinaryMinHeap::new();
/// heap.enqueue(3);
/// heap.enqueue(1);
/// heap.enqueue(2);
///
/// assert_eq!(heap.peek(), Ok(&1));
/// assert_eq!(heap.dequeue(), Ok(1));
/// assert_eq!(heap.dequeue(), Ok(2));
/// ```
pub trait PriorityQueue<T: Ord> {
    /// Creates a new empty queue
    fn new() -> Self;

    /// Returns true if the queue is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the queue
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n)
    fn enqueue(&mut self, value: T);

    /// Returns the minimum element without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] on an empty queue.
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Result<&T, HeapError>;

    /// Removes and returns the minimum element
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] on an empty queue.
    ///
    /// # Time Complexity
    /// O(log n)
    fn dequeue(&mut self) -> Result<T, HeapError>;

    /// Removes one occurrence of `value` from anywhere in the queue
    ///
    /// When `value` is the current minimum this behaves exactly like
    /// [`dequeue`](Self::dequeue) with the result discarded. Duplicate
    /// values are allowed; only the first occurrence found is removed.
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] on an empty queue and
    /// [`HeapError::NotFound`] if `value` is absent, leaving the queue
    /// unchanged.
    ///
    /// # Time Complexity
    /// O(n) for the scan, plus O(log n) to restore order.
    fn remove(&mut self, value: &T) -> Result<(), HeapError>;
}
