//! Implicit binary tree navigation over a heap array
//!
//! The heap is stored in a flat slice that is read as a complete binary tree:
//!
//! ```text
//!                           0
//!              1                         2
//!       3            4            5             6
//!   7      8      9     10    11     12     13     14
//! ```
//!
//! - Up:          `(i-1)/2`
//! - Down-left:   `2i+1`
//! - Down-right:  `2i+2`
//!
//! The last level is usually incomplete, so child lookups take the slice
//! length and return `None` past the end rather than an out-of-range index.

use crate::entry::Entry;
use crate::order::Order;

/// The parent index, or `None` for the root
///
/// ```
/// use scored_heap::index::parent;
/// assert_eq!(parent(0), None);
/// assert_eq!(parent(1), Some(0));
/// assert_eq!(parent(2), Some(0));
/// assert_eq!(parent(5), Some(2));
/// assert_eq!(parent(14), Some(6));
/// ```
#[inline]
#[must_use]
pub fn parent(i: usize) -> Option<usize> {
    i.checked_sub(1).map(|j| j / 2)
}

/// The left child index, if it lies inside a heap of `len` elements
///
/// ```
/// use scored_heap::index::left_child;
/// assert_eq!(left_child(0, 2), Some(1));
/// assert_eq!(left_child(0, 1), None);
/// assert_eq!(left_child(3, 8), Some(7));
/// assert_eq!(left_child(usize::MAX, usize::MAX), None);
/// ```
#[inline]
#[must_use]
pub fn left_child(i: usize, len: usize) -> Option<usize> {
    i.checked_mul(2)
        .and_then(|j| j.checked_add(1))
        .filter(|&c| c < len)
}

/// The right child index, if it lies inside a heap of `len` elements
///
/// ```
/// use scored_heap::index::right_child;
/// assert_eq!(right_child(0, 3), Some(2));
/// assert_eq!(right_child(0, 2), None);
/// assert_eq!(right_child(6, 15), Some(14));
/// ```
#[inline]
#[must_use]
pub fn right_child(i: usize, len: usize) -> Option<usize> {
    i.checked_mul(2)
        .and_then(|j| j.checked_add(2))
        .filter(|&c| c < len)
}

/// The child of `i` that belongs higher in the tree under ordering `O`
///
/// For a min-heap that is the child with the lower priority, for a max-heap
/// the one with the higher priority. Returns the left child when it is the
/// only child and `None` at a leaf. Equal priorities resolve to the left
/// child, but callers must not rely on that.
#[inline]
#[must_use]
pub fn preferred_child<K, P: Ord, O: Order>(entries: &[Entry<K, P>], i: usize) -> Option<usize> {
    let len = entries.len();
    let left = left_child(i, len)?;
    match right_child(i, len) {
        Some(right) if O::precedes(&entries[right].priority, &entries[left].priority) => {
            Some(right)
        }
        _ => Some(left),
    }
}
