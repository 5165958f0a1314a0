//! Trait to define a map suitable for moving
//! around a 2D coordinate grid.
use std::fmt;

use super::{Direction, Point};

/// Defines a map of locations on a coordinate grid.
///
/// The storage of the map is left to the implementing
/// structure, this trait simply requires a map to
/// return whether a given location is traversable.
///
/// Maps assume that traversal happens one square at
/// a time in 2-D space.
pub trait Map: fmt::Debug {
    /// Can the agent step on this location?
    fn is_traversable(&self, location: Point) -> bool;

    /// Every legal single step from `location`, in [Direction::all] order.
    fn legal_moves(&self, location: Point) -> Vec<(Point, Direction)> {
        Direction::all()
            .map(|d| (location.step(d), d))
            .filter(|(p, _)| self.is_traversable(*p))
            .collect()
    }
}
