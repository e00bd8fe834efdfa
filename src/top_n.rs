//! Non-destructive top-N selection
//!
//! A heap array is already partially ordered: every entry precedes its whole
//! subtree. The best entry not yet emitted is therefore always the root or a
//! child of something already emitted. [`SortedIter`] keeps exactly that
//! frontier in a small *selection heap* of the same direction, keyed by
//! locators (plain indices into the source slice) and ordered by borrowed
//! source priorities.
//!
//! Emitting k entries pops k locators and pushes at most 2k, so the selection
//! heap never holds more than k + 1 locators and a top-k query costs
//! O(k log k), independent of the size of the source heap. The source is only
//! ever read.

use std::iter::FusedIterator;

use crate::binary::BinaryHeap;
use crate::entry::Entry;
use crate::index;
use crate::order::Order;
use crate::traits::{Heap, HeapError};

/// Walks a heap's entries in priority order without mutating it
///
/// Created by [`BinaryHeap::iter_sorted`]. Locators are indices into the
/// borrowed source slice, so the source cannot change while the walk is live.
#[derive(Debug)]
pub struct SortedIter<'a, K, P, O> {
    source: &'a [Entry<K, P>],
    /// Selection heap of locators into `source`
    frontier: BinaryHeap<usize, &'a P, O>,
    emitted: usize,
}

impl<'a, K, P: Ord, O: Order> SortedIter<'a, K, P, O> {
    fn new(source: &'a [Entry<K, P>], capacity: usize) -> Self {
        let mut frontier = BinaryHeap::with_capacity(capacity);
        if let Some(root) = source.first() {
            frontier.push(0, &root.priority);
        }
        Self {
            source,
            frontier,
            emitted: 0,
        }
    }
}

impl<'a, K, P: Ord, O: Order> Iterator for SortedIter<'a, K, P, O> {
    type Item = &'a Entry<K, P>;

    fn next(&mut self) -> Option<Self::Item> {
        let locator = self.frontier.pop().ok()?.key;

        let len = self.source.len();
        let children = [
            index::left_child(locator, len),
            index::right_child(locator, len),
        ];
        for child in children.into_iter().flatten() {
            self.frontier.push(child, &self.source[child].priority);
        }

        self.emitted += 1;
        Some(&self.source[locator])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.source.len() - self.emitted;
        (remaining, Some(remaining))
    }
}

impl<K, P: Ord, O: Order> ExactSizeIterator for SortedIter<'_, K, P, O> {}

impl<K, P: Ord, O: Order> FusedIterator for SortedIter<'_, K, P, O> {}

impl<K, P: Ord, O: Order> BinaryHeap<K, P, O> {
    /// Lazily iterates over every entry in priority order
    ///
    /// Unlike [`sort`](Heap::sort) this leaves the heap untouched, and unlike
    /// [`sorted_copy`](Self::sorted_copy) it neither clones nor pays for
    /// entries that are never pulled.
    pub fn iter_sorted(&self) -> SortedIter<'_, K, P, O> {
        SortedIter::new(self.as_slice(), 1)
    }

    /// Returns the `n` best entries in priority order
    ///
    /// Asking for more entries than the heap holds returns all of them. The
    /// heap is not modified. `n = 0` returns an empty vector without
    /// inspecting the heap at all.
    ///
    /// # Errors
    ///
    /// - `HeapError::InvalidArgument` if `n` is negative or does not fit in
    ///   a `usize`
    /// - `HeapError::EmptyHeap` if `n > 0` and the heap holds no elements
    ///
    /// # Example
    ///
    /// ```rust
    /// use scored_heap::{HeapError, MaxHeap};
    ///
    /// let heap: MaxHeap<&str, i32> = MaxHeap::from_scored(["A", "B", "C", "D", "E"], |k| {
    ///     (k.as_bytes()[0] - b'A') as i32
    /// });
    ///
    /// let best: Vec<_> = heap.top_n(2)?.into_iter().map(|e| e.as_pair()).collect();
    /// assert_eq!(best, vec![(&"E", &4), (&"D", &3)]);
    ///
    /// assert!(matches!(heap.top_n(-1), Err(HeapError::InvalidArgument(_))));
    /// # Ok::<(), HeapError>(())
    /// ```
    pub fn top_n<N>(&self, n: N) -> Result<Vec<&Entry<K, P>>, HeapError>
    where
        N: TryInto<usize>,
    {
        let n: usize = n
            .try_into()
            .map_err(|_| HeapError::InvalidArgument("top-N count must be a non-negative usize"))?;
        if n == 0 {
            return Ok(Vec::new());
        }
        if self.is_empty() {
            return Err(HeapError::EmptyHeap);
        }

        let n = n.min(self.len());
        log::trace!(
            "selecting top {} of {} entries from {} heap",
            n,
            self.len(),
            O::DIRECTION
        );
        Ok(SortedIter::<K, P, O>::new(self.as_slice(), n + 1)
            .take(n)
            .collect())
    }
}
