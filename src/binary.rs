//! Array-backed binary heap
//!
//! A binary heap stored as a flat `Vec` of [`Entry`] values in implicit-tree
//! order. The ordering direction is a type parameter, so one implementation
//! covers both [`MinHeap`] and [`MaxHeap`].
//!
//! # Time Complexity
//!
//! | Operation        | Complexity   |
//! |------------------|--------------|
//! | `push`           | O(log n)     |
//! | `pop`            | O(log n)     |
//! | `peek`           | O(1)         |
//! | `from_scored`    | O(n)         |
//! | `top_n(k)`       | O(k log k)   |
//! | `sort`           | O(n log n)   |
//!
//! # Example
//!
//! ```rust
//! use scored_heap::{Heap, MaxHeap};
//!
//! let mut heap: MaxHeap<&str, i32> = MaxHeap::new();
//! heap.push("three", 3);
//! heap.push("one", 1);
//! heap.push("two", 2);
//!
//! assert_eq!(heap.peek()?.priority, 3);
//! assert_eq!(heap.pop()?.into_pair(), ("three", 3));
//! assert_eq!(heap.pop()?.into_pair(), ("two", 2));
//! assert_eq!(heap.pop()?.into_pair(), ("one", 1));
//! assert!(heap.pop().is_err());
//! # Ok::<(), scored_heap::HeapError>(())
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::entry::Entry;
use crate::order::{Direction, Max, Min, Order};
use crate::sift;
use crate::traits::{Heap, HeapError};

/// A binary heap with the lowest priority on top
pub type MinHeap<K, P = i64> = BinaryHeap<K, P, Min>;

/// A binary heap with the highest priority on top
pub type MaxHeap<K, P = i64> = BinaryHeap<K, P, Max>;

/// A binary heap of (key, priority) entries ordered by `O`
///
/// The heap exclusively owns its backing vector. Extraction physically moves
/// entries, so references handed out by [`peek`](Heap::peek),
/// [`as_slice`](Self::as_slice) or [`top_n`](Self::top_n) cannot outlive the
/// next mutating call.
#[derive(Debug)]
pub struct BinaryHeap<K, P, O> {
    /// Entries in implicit-tree order: children of `i` live at `2i+1` and `2i+2`
    data: Vec<Entry<K, P>>,
    _order: PhantomData<O>,
}

impl<K, P: Ord, O: Order> Heap<K, P> for BinaryHeap<K, P, O> {
    fn new() -> Self {
        Self {
            data: Vec::new(),
            _order: PhantomData,
        }
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn push(&mut self, key: K, priority: P) {
        self.data.push(Entry::new(key, priority));
        let last = self.data.len() - 1;
        sift::sift_up::<K, P, O>(&mut self.data, last);
        self.verify_heap();
    }

    fn peek(&self) -> Result<&Entry<K, P>, HeapError> {
        self.data.first().ok_or(HeapError::EmptyHeap)
    }

    fn pop(&mut self) -> Result<Entry<K, P>, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::EmptyHeap);
        }

        // Moves the last entry into the root slot
        let top = self.data.swap_remove(0);

        if !self.data.is_empty() {
            sift::sift_down::<K, P, O>(&mut self.data, 0);
        }

        self.verify_heap();
        Ok(top)
    }
}

impl<K, P: Ord, O: Order> BinaryHeap<K, P, O> {
    /// Creates an empty heap with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            _order: PhantomData,
        }
    }

    /// Builds a heap from entries in arbitrary order
    ///
    /// Runs a single bottom-up heapify pass, O(n).
    pub fn from_entries(mut entries: Vec<Entry<K, P>>) -> Self {
        log::trace!(
            "heapifying {} entries into a {} heap",
            entries.len(),
            O::DIRECTION
        );
        sift::heapify::<K, P, O>(&mut entries);
        let heap = Self {
            data: entries,
            _order: PhantomData,
        };
        heap.verify_heap();
        heap
    }

    /// Builds a heap from unscored keys
    ///
    /// `score` is called exactly once per key to obtain its priority, then the
    /// whole batch is heapified in O(n).
    ///
    /// # Example
    ///
    /// ```rust
    /// use scored_heap::{Heap, MinHeap};
    ///
    /// let heap: MinHeap<&str, usize> = MinHeap::from_scored(["ccc", "a", "bb"], |k| k.len());
    /// assert_eq!(heap.peek()?.key, "a");
    /// # Ok::<(), scored_heap::HeapError>(())
    /// ```
    pub fn from_scored<I, F>(keys: I, score: F) -> Self
    where
        I: IntoIterator<Item = K>,
        F: FnMut(&K) -> P,
    {
        Self::from_entries(score_all(keys, score).collect())
    }

    /// Replaces the heap's contents with freshly scored keys
    ///
    /// The existing allocation is reused.
    pub fn rebuild<I, F>(&mut self, keys: I, score: F)
    where
        I: IntoIterator<Item = K>,
        F: FnMut(&K) -> P,
    {
        self.data.clear();
        self.data.extend(score_all(keys, score));
        log::trace!(
            "rebuilding {} heap from {} entries",
            O::DIRECTION,
            self.data.len()
        );
        sift::heapify::<K, P, O>(&mut self.data);
        self.verify_heap();
    }

    /// Removes the top entry without returning it
    ///
    /// # Errors
    /// Returns `HeapError::EmptyHeap` if the heap holds no elements.
    pub fn delete_top(&mut self) -> Result<(), HeapError> {
        self.pop().map(drop)
    }

    /// The ordering direction of this heap
    pub fn direction(&self) -> Direction {
        O::DIRECTION
    }

    /// The entries in heap (implicit-tree) order
    pub fn as_slice(&self) -> &[Entry<K, P>] {
        &self.data
    }

    /// Iterates over the entries in arbitrary order
    pub fn iter(&self) -> std::slice::Iter<'_, Entry<K, P>> {
        self.data.iter()
    }

    /// Removes every entry, keeping the allocation
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Consumes the heap, returning its entries in heap order
    pub fn into_vec(self) -> Vec<Entry<K, P>> {
        self.data
    }

    /// Consumes the heap, returning its entries in priority order
    pub fn into_sorted_vec(mut self) -> Vec<Entry<K, P>> {
        self.sort()
    }

    /// Returns the entries in priority order, leaving the heap untouched
    ///
    /// Sorts a clone of the heap. When only the first few entries are needed,
    /// [`top_n`](Self::top_n) avoids both the clone and the full sort.
    pub fn sorted_copy(&self) -> Vec<Entry<K, P>>
    where
        K: Clone,
        P: Clone,
    {
        self.clone().into_sorted_vec()
    }

    #[inline(always)]
    #[cfg(not(feature = "verify"))]
    fn verify_heap(&self) {}

    #[inline(always)]
    #[cfg(feature = "verify")]
    fn verify_heap(&self) {
        debug_assert!(
            sift::is_heap::<K, P, O>(&self.data),
            "{} heap of len={} violates heap order",
            O::DIRECTION,
            self.data.len(),
        );
    }
}

fn score_all<K, P, I, F>(keys: I, mut score: F) -> impl Iterator<Item = Entry<K, P>>
where
    I: IntoIterator<Item = K>,
    F: FnMut(&K) -> P,
{
    keys.into_iter().map(move |key| {
        let priority = score(&key);
        Entry::new(key, priority)
    })
}

// Not derived: the direction marker needs no `Clone` bound
impl<K: Clone, P: Clone, O> Clone for BinaryHeap<K, P, O> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            _order: PhantomData,
        }
    }
}

impl<K, P: Ord, O: Order> Default for BinaryHeap<K, P, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, P: Ord, O: Order> From<Vec<Entry<K, P>>> for BinaryHeap<K, P, O> {
    fn from(entries: Vec<Entry<K, P>>) -> Self {
        Self::from_entries(entries)
    }
}

impl<K, P: Ord, O: Order> FromIterator<(K, P)> for BinaryHeap<K, P, O> {
    fn from_iter<I: IntoIterator<Item = (K, P)>>(iter: I) -> Self {
        Self::from_entries(iter.into_iter().map(Entry::from).collect())
    }
}

impl<K, P: Ord, O: Order> Extend<(K, P)> for BinaryHeap<K, P, O> {
    fn extend<I: IntoIterator<Item = (K, P)>>(&mut self, iter: I) {
        for (key, priority) in iter {
            self.push(key, priority);
        }
    }
}

impl<'a, K, P, O> IntoIterator for &'a BinaryHeap<K, P, O> {
    type Item = &'a Entry<K, P>;
    type IntoIter = std::slice::Iter<'a, Entry<K, P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<K: fmt::Display, P: fmt::Display, O: Order> fmt::Display for BinaryHeap<K, P, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} heap ({} entries)", O::DIRECTION, self.data.len())?;
        for entry in &self.data {
            writeln!(f, "  {}  {}", entry.key, entry.priority)?;
        }
        Ok(())
    }
}
