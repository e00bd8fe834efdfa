//! Heap-order restoration over a slice of entries
//!
//! These are the building blocks every [`BinaryHeap`](crate::binary::BinaryHeap)
//! operation is made of. They work on any `&mut [Entry<K, P>]`, so they can
//! also be used to heapify or repair a caller-owned buffer in place.
//!
//! | Routine     | Complexity |
//! |-------------|------------|
//! | `sift_up`   | O(log n)   |
//! | `sift_down` | O(log n)   |
//! | `heapify`   | O(n)       |
//! | `is_heap`   | O(n)       |

use crate::entry::Entry;
use crate::index;
use crate::order::Order;

/// Move the entry at `index` up until its parent no longer yields to it
///
/// Returns the entry's final index.
pub fn sift_up<K, P: Ord, O: Order>(entries: &mut [Entry<K, P>], mut index: usize) -> usize {
    while let Some(parent) = index::parent(index) {
        if O::precedes(&entries[index].priority, &entries[parent].priority) {
            entries.swap(index, parent);
            index = parent;
        } else {
            break;
        }
    }
    index
}

/// Move the entry at `index` down until no child should sit above it
///
/// Returns the entry's final index.
pub fn sift_down<K, P: Ord, O: Order>(entries: &mut [Entry<K, P>], mut index: usize) -> usize {
    while let Some(child) = index::preferred_child::<K, P, O>(entries, index) {
        if O::precedes(&entries[child].priority, &entries[index].priority) {
            entries.swap(index, child);
            index = child;
        } else {
            break;
        }
    }
    index
}

/// Arrange an arbitrary slice into heap order in place
///
/// Bottom-up construction: sifts down every index from `len / 2` to the root,
/// in descending order, which is linear in the slice length.
///
/// # Example
///
/// ```rust
/// use scored_heap::entry::Entry;
/// use scored_heap::order::Min;
/// use scored_heap::sift::{heapify, is_heap};
///
/// let mut entries: Vec<_> = [5, 3, 8, 1].iter().map(|&p| Entry::new((), p)).collect();
/// heapify::<_, _, Min>(&mut entries);
/// assert!(is_heap::<_, _, Min>(&entries));
/// assert_eq!(entries[0].priority, 1);
/// ```
pub fn heapify<K, P: Ord, O: Order>(entries: &mut [Entry<K, P>]) {
    let len = entries.len();
    if len < 2 {
        return;
    }
    for i in (0..=len / 2).rev() {
        sift_down::<K, P, O>(entries, i);
    }
}

/// Check the heap-order invariant for every non-root index
pub fn is_heap<K, P: Ord, O: Order>(entries: &[Entry<K, P>]) -> bool {
    (1..entries.len()).all(|i| match index::parent(i) {
        Some(p) => !O::precedes(&entries[i].priority, &entries[p].priority),
        None => true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::{Max, Min};

    fn entries(priorities: &[i32]) -> Vec<Entry<usize, i32>> {
        priorities
            .iter()
            .enumerate()
            .map(|(i, &p)| Entry::new(i, p))
            .collect()
    }

    fn priorities(entries: &[Entry<usize, i32>]) -> Vec<i32> {
        entries.iter().map(|e| e.priority).collect()
    }

    #[test]
    fn test_sift_up_to_root() {
        let mut data = entries(&[1, 3, 2, 4, 5, 6, 0]);
        let end = sift_up::<_, _, Min>(&mut data, 6);
        assert_eq!(end, 0);
        assert_eq!(priorities(&data), vec![0, 3, 1, 4, 5, 6, 2]);
        assert!(is_heap::<_, _, Min>(&data));
    }

    #[test]
    fn test_sift_up_stops_at_ordered_parent() {
        let mut data = entries(&[1, 3, 2, 4, 5, 6, 7]);
        assert_eq!(sift_up::<_, _, Min>(&mut data, 6), 6);
        assert_eq!(priorities(&data), vec![1, 3, 2, 4, 5, 6, 7]);
    }

    #[test]
    fn test_sift_down_from_root() {
        let mut data = entries(&[9, 3, 2, 4, 5, 6, 7]);
        let end = sift_down::<_, _, Min>(&mut data, 0);
        assert_eq!(end, 5);
        assert_eq!(priorities(&data), vec![2, 3, 6, 4, 5, 9, 7]);
        assert!(is_heap::<_, _, Min>(&data));
    }

    #[test]
    fn test_sift_down_max() {
        let mut data = entries(&[0, 8, 9, 1]);
        sift_down::<_, _, Max>(&mut data, 0);
        assert_eq!(priorities(&data), vec![9, 8, 0, 1]);
        assert!(is_heap::<_, _, Max>(&data));
    }

    #[test]
    fn test_heapify_both_directions() {
        let raw = [5, -3, 8, 1, 9, 2, 2, 0, -7, 4, 11];

        let mut min = entries(&raw);
        heapify::<_, _, Min>(&mut min);
        assert!(is_heap::<_, _, Min>(&min));
        assert_eq!(min[0].priority, -7);

        let mut max = entries(&raw);
        heapify::<_, _, Max>(&mut max);
        assert!(is_heap::<_, _, Max>(&max));
        assert_eq!(max[0].priority, 11);
    }

    #[test]
    fn test_heapify_keeps_keys_attached() {
        let raw = [4, 2, 7, 1];
        let mut data = entries(&raw);
        heapify::<_, _, Min>(&mut data);
        for entry in &data {
            assert_eq!(raw[entry.key], entry.priority);
        }
    }

    #[test]
    fn test_heapify_trivial_slices() {
        let mut empty: Vec<Entry<usize, i32>> = Vec::new();
        heapify::<_, _, Min>(&mut empty);
        assert!(is_heap::<_, _, Min>(&empty));

        let mut one = entries(&[42]);
        heapify::<_, _, Min>(&mut one);
        assert_eq!(priorities(&one), vec![42]);
    }

    #[test]
    fn test_is_heap_detects_violation() {
        assert!(!is_heap::<_, _, Min>(&entries(&[1, 0])));
        assert!(is_heap::<_, _, Max>(&entries(&[1, 0])));
        assert!(is_heap::<_, _, Min>(&entries(&[1, 1, 1])));
    }
}
