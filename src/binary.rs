//! Array-backed binary min-heap with arbitrary-element removal
//!
//! The heap owns one [`BackingStore`] and treats its contents as the
//! level-order encoding of a complete binary tree: index 0 is the root,
//! the children of index `i` are `2i + 1` and `2i + 2`, and the parent of
//! index `i > 0` is `(i - 1) / 2`. Completeness is automatic — the store is
//! one contiguous sequence, so every level is full except possibly the
//! last, which fills left to right.
//!
//! Heap-order invariant: for every index `i` with a child at index
//! `c < len`, `store[i] <= store[c]`. Every mutation first delegates the
//! storage change to the store and then restores this invariant with an
//! index-based traversal: bubble-up toward the root after an append,
//! bubble-down toward the leaves after a slot is overwritten from the
//! structurally last position.
//!
//! Comparisons in the restoring traversals are strict; equal values never
//! trigger a swap. This matches the invariant's `<=` and means the relative
//! order of equal values is unspecified.
//!
//! # Time Complexity
//!
//! | Operation | Complexity |
//! |-----------|---------------------|
//! | `enqueue` | O(log n)            |
//! | `dequeue` | O(log n)            |
//! | `peek`    | O(1)                |
//! | `remove`  | O(n) scan + O(log n) restore |
//!
//! # Example
//!
//! ```rust
//! use implicit_heap::{BinaryMinHeap, HeapError, PriorityQueue};
//!
//! let mut heap: BinaryMinHeap<i32> = BinaryMinHeap::new();
//! for v in [6, 3, 7, 2] {
//!     heap.enqueue(v);
//! }
//!
//! heap.remove(&7)?;
//! assert_eq!(heap.dequeue(), Ok(2));
//! assert_eq!(heap.dequeue(), Ok(3));
//! assert_eq!(heap.dequeue(), Ok(6));
//! assert_eq!(heap.dequeue(), Err(HeapError::Empty));
//! # Ok::<(), HeapError>(())
//! ```

use crate::store::{BackingStore, VecStore};
use crate::traits::{HeapError, PriorityQueue};
use std::marker::PhantomData;

/// A binary min-heap over a pluggable backing store
///
/// The store is the heap's only state. The element type is its own
/// priority: any `T: Ord` works, and duplicate values are allowed.
///
/// The heap is a plain value type with no interior mutability; sharing one
/// instance across threads requires external synchronization by the caller.
#[derive(Debug)]
pub struct BinaryMinHeap<T: Ord, S: BackingStore<T> = VecStore<T>> {
    store: S,
    _marker: PhantomData<T>,
}

impl<T: Ord, S: BackingStore<T>> PriorityQueue<T> for BinaryMinHeap<T, S> {
    fn new() -> Self {
        Self {
            store: S::default(),
            _marker: PhantomData,
        }
    }

    fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    fn len(&self) -> usize {
        self.store.len()
    }

    fn enqueue(&mut self, value: T) {
        self.store.push(value);
        let last = self.store.len() - 1;
        if last > 0 {
            self.bubble_up(last);
        }
    }

    fn peek(&self) -> Result<&T, HeapError> {
        if self.store.is_empty() {
            return Err(HeapError::Empty);
        }
        Ok(self.value_at(0))
    }

    fn dequeue(&mut self) -> Result<T, HeapError> {
        let len = self.store.len();
        if len == 0 {
            return Err(HeapError::Empty);
        }
        if len == 1 {
            return Ok(self.remove_last());
        }
        // Move the structurally last element into the root slot, then
        // restore order downward from there.
        self.swap_slots(0, len - 1);
        let min = self.remove_last();
        self.bubble_down(0);
        Ok(min)
    }

    fn remove(&mut self, value: &T) -> Result<(), HeapError> {
        if self.store.is_empty() {
            return Err(HeapError::Empty);
        }
        if self.value_at(0) == value {
            // Removing the root is a dequeue with the result discarded.
            // This also covers the single-element heap.
            self.dequeue()?;
            return Ok(());
        }
        let len = self.store.len();
        let index = match (1..len).find(|&i| self.value_at(i) == value) {
            Some(i) => i,
            None => return Err(HeapError::NotFound),
        };
        let last = len - 1;
        if index == last {
            // The victim occupies the structurally last slot; deleting it
            // cannot disturb order anywhere else.
            self.remove_last();
            return Ok(());
        }
        self.swap_slots(index, last);
        self.remove_last();
        // The moved-in value came from the last slot. It can be out of
        // order with its new ancestors or its new descendants, never both,
        // so exactly one restoring direction applies. bubble_down is a
        // no-op when order already holds locally.
        let parent = (index - 1) / 2;
        if self.value_at(index) < self.value_at(parent) {
            self.bubble_up(index);
        } else {
            self.bubble_down(index);
        }
        Ok(())
    }
}

impl<T: Ord, S: BackingStore<T>> BinaryMinHeap<T, S> {
    /// Creates an empty heap over a caller-supplied store
    ///
    /// The store must start empty; seeding a heap from pre-populated
    /// storage is not supported.
    pub fn with_store(store: S) -> Self {
        debug_assert!(store.is_empty(), "backing store must start empty");
        Self {
            store,
            _marker: PhantomData,
        }
    }

    /// Returns the level-order view of the underlying store
    ///
    /// Useful for checking the heap-order invariant from the outside:
    /// `slice[(i - 1) / 2] <= slice[i]` holds for every `i > 0`.
    pub fn as_slice(&self) -> &[T] {
        match self.store.slice(0, self.store.len()) {
            Ok(slice) => slice,
            Err(_) => unreachable!("0..len is a valid range for any store"),
        }
    }

    /// Checked read of a slot the caller has already proven in range
    ///
    /// An `OutOfBounds` here is an implementation bug, not a user error,
    /// so it is an unrecoverable invariant violation.
    fn value_at(&self, index: usize) -> &T {
        match self.store.get(index) {
            Ok(value) => value,
            Err(_) => unreachable!("index {index} in range by the caller's bounds reasoning"),
        }
    }

    fn swap_slots(&mut self, a: usize, b: usize) {
        if self.store.swap(a, b).is_err() {
            unreachable!("indices {a} and {b} in range by the caller's bounds reasoning");
        }
    }

    fn remove_last(&mut self) -> T {
        let last = self.store.len() - 1;
        match self.store.delete_at(last) {
            Ok(value) => value,
            Err(_) => unreachable!("store is non-empty here"),
        }
    }

    /// Restores the invariant upward from `index`
    ///
    /// Swaps the slot with its parent while it is strictly smaller.
    /// Terminates because `index` strictly decreases on every swap; an
    /// append can only leave the new leaf smaller than an ancestor, and
    /// each swap moves that violation one level toward the root while
    /// leaving siblings and already-ordered ancestors untouched.
    fn bubble_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.value_at(index) < self.value_at(parent) {
                self.swap_slots(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Restores the invariant downward from `index`
    ///
    /// The slot is always compared against the smaller of its children
    /// (ties toward the left): swapping with the larger child could leave
    /// the smaller one violating order against the new parent, so the
    /// minimum of the two is the only swap target that restores local
    /// order in one step.
    fn bubble_down(&mut self, mut index: usize) {
        let len = self.store.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            if left >= len {
                break;
            }
            if right >= len {
                // A node with only a left child is on the last level, so
                // no further descent is possible after this swap.
                if self.value_at(index) > self.value_at(left) {
                    self.swap_slots(index, left);
                }
                break;
            }
            let smaller = if self.value_at(right) < self.value_at(left) {
                right
            } else {
                left
            };
            if self.value_at(index) > self.value_at(smaller) {
                self.swap_slots(index, smaller);
                index = smaller;
            } else {
                break;
            }
        }
    }
}

impl<T: Ord, S: BackingStore<T>> Default for BinaryMinHeap<T, S> {
    fn default() -> Self {
        Self::new()
    }
}
