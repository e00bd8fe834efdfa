//! Ordering directions for the heap engine
//!
//! A single binary heap implementation serves both min- and max-heaps. The
//! direction is a zero-sized type parameter implementing [`Order`], so the
//! comparison is resolved statically and costs nothing at runtime.

use std::fmt;

/// Runtime tag naming an ordering direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Smallest priority on top
    Min,
    /// Largest priority on top
    Max,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Min => write!(f, "min"),
            Direction::Max => write!(f, "max"),
        }
    }
}

/// The comparison direction of a heap
///
/// `precedes(a, b)` must be a strict weak ordering: irreflexive, and never
/// true in both directions for the same pair.
pub trait Order {
    /// The runtime tag for this direction
    const DIRECTION: Direction;

    /// Returns true when priority `a` belongs strictly closer to the root than `b`
    fn precedes<P: Ord + ?Sized>(a: &P, b: &P) -> bool;
}

/// Min-heap ordering: lower priorities come out first
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Min;

/// Max-heap ordering: higher priorities come out first
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Max;

impl Order for Min {
    const DIRECTION: Direction = Direction::Min;

    #[inline]
    fn precedes<P: Ord + ?Sized>(a: &P, b: &P) -> bool {
        a < b
    }
}

impl Order for Max {
    const DIRECTION: Direction = Direction::Max;

    #[inline]
    fn precedes<P: Ord + ?Sized>(a: &P, b: &P) -> bool {
        a > b
    }
}
