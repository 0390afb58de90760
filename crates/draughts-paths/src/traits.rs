use std::collections::{BTreeSet, HashSet};

use draughts_core::Point;

/// Read-only knowledge of where the fixed opposing men sit.
///
/// An implementation is borrowed for the duration of one query and never
/// mutated through it, so one obstacle set can back any number of
/// concurrent searches.
pub trait Occupancy {
    /// Whether a fixed man occupies `p`.
    fn occupied(&self, p: Point) -> bool;
}

impl<O: Occupancy + ?Sized> Occupancy for &O {
    fn occupied(&self, p: Point) -> bool {
        (**self).occupied(p)
    }
}

impl Occupancy for HashSet<Point> {
    fn occupied(&self, p: Point) -> bool {
        self.contains(&p)
    }
}

impl Occupancy for BTreeSet<Point> {
    fn occupied(&self, p: Point) -> bool {
        self.contains(&p)
    }
}

impl Occupancy for [Point] {
    fn occupied(&self, p: Point) -> bool {
        self.contains(&p)
    }
}

/// Occupancy backed by a predicate closure.
pub struct OccupancyFn<F: Fn(Point) -> bool>(pub F);

impl<F: Fn(Point) -> bool> Occupancy for OccupancyFn<F> {
    fn occupied(&self, p: Point) -> bool {
        (self.0)(p)
    }
}
