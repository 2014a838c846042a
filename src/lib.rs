//! Array-backed binary min-heap with arbitrary-element removal
//!
//! This crate provides [`BinaryMinHeap`], a min-priority queue that encodes
//! a complete binary tree in a growable, index-addressable backing store
//! and restores the heap-order invariant with index-based traversals.
//!
//! # Features
//!
//! - **Min-heap semantics**: the element is its own priority; lower value
//!   means higher priority. Any `T: Ord` works and duplicates are allowed.
//! - **Arbitrary-element removal**: [`remove`](PriorityQueue::remove)
//!   deletes one occurrence of any value, not just the minimum, picking the
//!   correct restoring direction (up or down) after the structurally last
//!   element takes the vacated slot.
//! - **Pluggable storage**: the heap delegates all storage to a
//!   [`BackingStore`]; [`VecStore`] is the default `Vec`-backed
//!   implementation.
//! - **Typed failures**: [`HeapError`] for the queue surface,
//!   [`StoreError`] for the store surface — nothing fails silently.
//!
//! # Example
//!
//! ```rust
//! use implicit_heap::{BinaryMinHeap, PriorityQueue};
//!
//! let mut heap: BinaryMinHeap<i32> = BinaryMinHeap::new();
//! for v in [6, 3, 7, 2, 9, 8, 1] {
//!     heap.enqueue(v);
//! }
//!
//! assert_eq!(heap.peek(), Ok(&1));
//! heap.remove(&7).unwrap();
//!
//! let mut drained = Vec::new();
//! while let Ok(v) = heap.dequeue() {
//!     drained.push(v);
//! }
//! assert_eq!(drained, [1, 2, 3, 6, 8, 9]);
//! ```

pub mod binary;
pub mod store;
pub mod traits;

pub use binary::BinaryMinHeap;
pub use store::{BackingStore, StoreError, VecStore};
pub use traits::{HeapError, PriorityQueue};
