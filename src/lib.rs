//! Scored binary heaps with non-destructive top-N selection
//!
//! This crate provides an array-backed binary heap over (key, priority)
//! pairs. One engine, parameterized by an ordering direction, serves both
//! min- and max-heaps.
//!
//! # Features
//!
//! - **Insert / extract-top**: O(log n) sift-up and sift-down over an implicit tree
//! - **Bulk construction**: O(n) bottom-up heapify from unordered keys and a scoring function
//! - **Top-N**: the N best entries in O(N log N) via a small selection heap of
//!   index locators, without mutating or cloning the source
//! - **Heap-sort**: destructive [`sort`](Heap::sort), plus a non-destructive
//!   [`sorted_copy`](BinaryHeap::sorted_copy) and lazy
//!   [`iter_sorted`](BinaryHeap::iter_sorted)
//!
//! Empty-heap access and malformed arguments are reported through
//! [`HeapError`] rather than by panicking.
//!
//! # Example
//!
//! ```rust
//! use scored_heap::{Heap, MinHeap};
//!
//! let mut heap: MinHeap<&str, i32> = MinHeap::new();
//! for (key, priority) in [("e", 5), ("c", 3), ("h", 8), ("a", 1), ("i", 9), ("b", 2)] {
//!     heap.push(key, priority);
//! }
//!
//! assert_eq!(heap.peek()?.priority, 1);
//!
//! let top: Vec<i32> = heap.top_n(3)?.iter().map(|e| e.priority).collect();
//! assert_eq!(top, vec![1, 2, 3]);
//!
//! let sorted: Vec<i32> = heap.sort().into_iter().map(|e| e.priority).collect();
//! assert_eq!(sorted, vec![1, 2, 3, 5, 8, 9]);
//! assert!(heap.is_empty());
//! # Ok::<(), scored_heap::HeapError>(())
//! ```
//!
//! # Feature flags
//!
//! - `verify`: re-checks the full heap-order invariant after every mutation
//!   (debug builds only, O(n) per operation)

pub mod binary;
pub mod entry;
pub mod index;
pub mod order;
pub mod sift;
pub mod top_n;
pub mod traits;

// Re-export the main types for convenience
pub use binary::{BinaryHeap, MaxHeap, MinHeap};
pub use entry::Entry;
pub use order::{Direction, Max, Min, Order};
pub use top_n::SortedIter;
pub use traits::{Heap, HeapError};
