//! Tap-to-marker matching
//!
//! A finger covers a roughly constant area of the screen, so the ground
//! distance it covers depends on the zoom level and (through the map scale)
//! on latitude. [`TapResolver`] converts the tap radius to meters for the
//! current zoom, then [`resolve_tap`] picks the marker that was hit.
//!
//! Nothing here keeps state between taps: the caller passes the zoom and the
//! marker list on every call.

use crate::core::constants::DEFAULT_TAP_RADIUS_PX;
use crate::core::geo::{distance_meters, tap_tolerance_meters, Coordinate};
use crate::traits::Locatable;

/// Returns the first item, in the given order, within `tolerance_m` meters of `tap`.
///
/// Items without a coordinate are skipped. This is a first-match policy: when
/// several items are in range the earliest wins even if a later one is closer.
pub fn resolve_tap<'a, T: Locatable>(
    tap: &Coordinate,
    items: &'a [T],
    tolerance_m: f64,
) -> Option<&'a T> {
    items.iter().find(|item| {
        item.coordinate()
            .map_or(false, |position| distance_meters(tap, &position) <= tolerance_m)
    })
}

/// Index of the item [`resolve_tap`] would return
pub fn resolve_tap_index<T: Locatable>(
    tap: &Coordinate,
    items: &[T],
    tolerance_m: f64,
) -> Option<usize> {
    items.iter().position(|item| {
        item.coordinate()
            .map_or(false, |position| distance_meters(tap, &position) <= tolerance_m)
    })
}

/// Zoom-aware tap matching with a fixed on-screen tap radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TapResolver {
    pub radius_px: f64,
}

impl TapResolver {
    pub fn new(radius_px: f64) -> Self {
        Self { radius_px }
    }

    /// Ground radius of the tap at `zoom`, measured at the tap's latitude
    pub fn tolerance(&self, zoom: f64, tap: &Coordinate) -> f64 {
        tap_tolerance_meters(zoom, tap.latitude, self.radius_px)
    }

    /// The item hit by a tap at the given zoom
    pub fn resolve<'a, T: Locatable>(
        &self,
        tap: &Coordinate,
        zoom: f64,
        items: &'a [T],
    ) -> Option<&'a T> {
        self.resolve_index(tap, zoom, items).map(|index| &items[index])
    }

    /// Position of the item hit by a tap at the given zoom
    pub fn resolve_index<T: Locatable>(&self, tap: &Coordinate, zoom: f64, items: &[T]) -> Option<usize> {
        let tolerance = self.tolerance(zoom, tap);
        let hit = resolve_tap_index(tap, items, tolerance);
        log::debug!(
            "tap ({:.6}, {:.6}) zoom {} tolerance {:.1} m -> {:?}",
            tap.latitude,
            tap.longitude,
            zoom,
            tolerance,
            hit
        );
        hit
    }
}

impl Default for TapResolver {
    fn default() -> Self {
        Self::new(DEFAULT_TAP_RADIUS_PX)
    }
}
