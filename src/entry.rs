//! The (key, priority) record stored in every heap slot.

/// A key paired with the priority it is ordered by
///
/// Heaps only ever compare `priority`; the key is carried along as an opaque
/// payload and is never inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Entry<K, P> {
    pub key: K,
    pub priority: P,
}

impl<K, P> Entry<K, P> {
    pub fn new(key: K, priority: P) -> Self {
        Self { key, priority }
    }

    /// Splits the entry into its `(key, priority)` pair
    pub fn into_pair(self) -> (K, P) {
        (self.key, self.priority)
    }

    pub fn as_pair(&self) -> (&K, &P) {
        (&self.key, &self.priority)
    }
}

impl<K, P> From<(K, P)> for Entry<K, P> {
    fn from((key, priority): (K, P)) -> Self {
        Self { key, priority }
    }
}

impl<K, P> From<Entry<K, P>> for (K, P) {
    fn from(entry: Entry<K, P>) -> Self {
        entry.into_pair()
    }
}

/// Splits a run of entries into parallel key and priority vectors
///
/// Useful for consuming the output of [`sort`](crate::Heap::sort) when the
/// caller wants the keys and the scores as separate sequences.
///
/// # Example
///
/// ```rust
/// use scored_heap::entry::{split, Entry};
///
/// let (keys, priorities) = split(vec![Entry::new("a", 1), Entry::new("b", 2)]);
/// assert_eq!(keys, vec!["a", "b"]);
/// assert_eq!(priorities, vec![1, 2]);
/// ```
pub fn split<K, P, I>(entries: I) -> (Vec<K>, Vec<P>)
where
    I: IntoIterator<Item = Entry<K, P>>,
{
    entries.into_iter().map(Entry::into_pair).unzip()
}
