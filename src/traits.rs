//! Shared trait abstractions
//!
//! Kept separate so the tap resolver can work over anything with an optional
//! position, not only [`crate::layers::marker::Marker`].

use crate::core::geo::Coordinate;

/// Something that may sit at a point on the map
pub trait Locatable {
    /// The position, or `None` when the item was never placed
    fn coordinate(&self) -> Option<Coordinate>;

    /// Whether the item can be hit by a tap at all
    fn is_placed(&self) -> bool {
        self.coordinate().is_some()
    }
}

impl Locatable for Coordinate {
    fn coordinate(&self) -> Option<Coordinate> {
        Some(*self)
    }
}

impl Locatable for Option<Coordinate> {
    fn coordinate(&self) -> Option<Coordinate> {
        *self
    }
}

impl<T: Locatable + ?Sized> Locatable for &T {
    fn coordinate(&self) -> Option<Coordinate> {
        (**self).coordinate()
    }
}
