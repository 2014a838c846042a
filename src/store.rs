//! Pluggable backing stores for the implicit tree encoding
//!
//! The heap never touches memory directly: it delegates all storage to a
//! [`BackingStore`], a growable, index-addressable sequence with bounds
//! checking on every access. The heap treats the store's contents as the
//! level-order encoding of a complete binary tree and does the positional
//! arithmetic itself.
//!
//! # Design
//!
//! The [`BackingStore`] trait abstracts over how slots are held, enabling
//! different storage strategies behind the same heap code:
//!
//! - [`VecStore`]: Default implementation over `Vec<T>` — doubling growth,
//!   no shrink-on-delete, amortized O(1) append.
//!
//! Every index-taking operation is checked and reports
//! [`StoreError::OutOfBounds`] rather than panicking, so a store can be
//! driven safely from code whose index reasoning is still under test.
//! Allocation failure while growing follows the global allocator's policy
//! (abort) and is not handled here.

use std::fmt;
use std::mem;

/// Error type for store operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// The index does not address an occupied slot
    OutOfBounds {
        /// The offending index
        index: usize,
        /// The store's length at the time of the access
        len: usize,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::OutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for store of length {len}")
            }
        }
    }
}

impl std::error::Error for StoreError {}

/// A growable, index-addressable sequence with checked access
///
/// `swap` is expressible as two `set`s but is part of the interface because
/// the heap's restoring traversals are swap sequences and the element type
/// is not required to be `Clone`. `set` returns the displaced value for the
/// same reason.
pub trait BackingStore<T>: Default {
    /// Returns the number of occupied slots
    fn len(&self) -> usize;

    /// Returns true if no slot is occupied
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a reference to the element at `index`
    fn get(&self, index: usize) -> Result<&T, StoreError>;

    /// Overwrites the slot at `index`, returning the displaced value
    fn set(&mut self, index: usize, value: T) -> Result<T, StoreError>;

    /// Appends an element, growing the store by one slot
    ///
    /// # Time Complexity
    /// Amortized O(1)
    fn push(&mut self, value: T);

    /// Removes the slot at `index`, shifting trailing elements left by one
    ///
    /// # Time Complexity
    /// O(n - index)
    fn delete_at(&mut self, index: usize) -> Result<T, StoreError>;

    /// Returns a contiguous view of the slots in `start..stop`
    ///
    /// Fails unless `start <= stop <= len`.
    fn slice(&self, start: usize, stop: usize) -> Result<&[T], StoreError>;

    /// Exchanges the contents of two slots
    fn swap(&mut self, a: usize, b: usize) -> Result<(), StoreError>;
}

/// The default `Vec`-backed store
///
/// Capacity management is the standard growable-array policy: capacity is
/// always >= length, growth doubles, deletes never shrink.
#[derive(Debug, Clone)]
pub struct VecStore<T> {
    data: Vec<T>,
}

impl<T> Default for VecStore<T> {
    fn default() -> Self {
        Self { data: Vec::new() }
    }
}

impl<T> VecStore<T> {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    fn out_of_bounds(&self, index: usize) -> StoreError {
        StoreError::OutOfBounds {
            index,
            len: self.data.len(),
        }
    }
}

impl<T> BackingStore<T> for VecStore<T> {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn get(&self, index: usize) -> Result<&T, StoreError> {
        let len = self.data.len();
        self.data
            .get(index)
            .ok_or(StoreError::OutOfBounds { index, len })
    }

    fn set(&mut self, index: usize, value: T) -> Result<T, StoreError> {
        let len = self.data.len();
        match self.data.get_mut(index) {
            Some(slot) => Ok(mem::replace(slot, value)),
            None => Err(StoreError::OutOfBounds { index, len }),
        }
    }

    fn push(&mut self, value: T) {
        self.data.push(value);
    }

    fn delete_at(&mut self, index: usize) -> Result<T, StoreError> {
        if index >= self.data.len() {
            return Err(self.out_of_bounds(index));
        }
        Ok(self.data.remove(index))
    }

    fn slice(&self, start: usize, stop: usize) -> Result<&[T], StoreError> {
        if start > stop {
            return Err(self.out_of_bounds(start));
        }
        if stop > self.data.len() {
            return Err(self.out_of_bounds(stop));
        }
        Ok(&self.data[start..stop])
    }

    fn swap(&mut self, a: usize, b: usize) -> Result<(), StoreError> {
        if a >= self.data.len() {
            return Err(self.out_of_bounds(a));
        }
        if b >= self.data.len() {
            return Err(self.out_of_bounds(b));
        }
        self.data.swap(a, b);
        Ok(())
    }
}
