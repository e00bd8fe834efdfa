//! Common traits for heap data structures
//!
//! - [`Heap`]: the push/peek/pop interface shared by every heap direction
//! - [`HeapError`]: the recoverable failures of that interface
//!
//! Unlike `std::collections::BinaryHeap`, which stores values directly and
//! orders them with `Ord`, these heaps store (key, priority)
//! [`Entry`] pairs and only ever compare the priority.

use thiserror::Error;

use crate::entry::Entry;

/// Error type for heap operations
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The heap holds no elements
    #[error("heap is empty")]
    EmptyHeap,
    /// A caller-supplied argument is outside its valid range
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

/// Base trait for heap/priority queue data structures
///
/// Which entry is "top" depends on the heap's ordering direction: the lowest
/// priority for a min-heap, the highest for a max-heap.
///
/// Operations on an empty heap return [`HeapError::EmptyHeap`] instead of
/// panicking.
///
/// # Example
///
/// ```rust
/// use scored_heap::{Heap, MinHeap};
///
/// let mut heap: MinHeap<&str, i32> = MinHeap::new();
/// heap.push("three", 3);
/// heap.push("one", 1);
/// heap.push("two", 2);
///
/// assert_eq!(heap.peek()?.as_pair(), (&"one", &1));
/// assert_eq!(heap.pop()?.into_pair(), ("one", 1));
/// # Ok::<(), scored_heap::HeapError>(())
/// ```
pub trait Heap<K, P: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts a key with the given priority
    ///
    /// # Time Complexity
    /// O(log n) amortized; the backing storage may reallocate.
    fn push(&mut self, key: K, priority: P);

    /// Returns the top entry without removing it
    ///
    /// # Errors
    /// Returns `HeapError::EmptyHeap` if the heap holds no elements.
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Result<&Entry<K, P>, HeapError>;

    /// Removes and returns the top entry
    ///
    /// # Errors
    /// Returns `HeapError::EmptyHeap` if the heap holds no elements.
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Result<Entry<K, P>, HeapError>;

    /// Drains the heap into a vector in priority order
    ///
    /// This is destructive: the heap is empty afterwards. The output is
    /// ascending for a min-heap and descending for a max-heap.
    ///
    /// # Time Complexity
    /// O(n log n)
    fn sort(&mut self) -> Vec<Entry<K, P>> {
        log::trace!("draining {} entries in priority order", self.len());
        let mut sorted = Vec::with_capacity(self.len());
        while let Ok(entry) = self.pop() {
            sorted.push(entry);
        }
        sorted
    }
}
