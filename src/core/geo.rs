use serde::{Deserialize, Serialize};

use crate::core::constants::{DEFAULT_TAP_RADIUS_PX, EARTH_RADIUS, METERS_PER_PIXEL_AT_ZOOM_0};

/// Represents a geographical coordinate with latitude and longitude in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a new coordinate
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Validates that the coordinates are finite and within valid ranges
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Great-circle distance to another coordinate, in meters
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        distance_meters(self, other)
    }
}

impl Default for Coordinate {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Calculates the distance between two coordinates using the Haversine formula.
///
/// Works on a sphere of radius [`EARTH_RADIUS`]; no ellipsoid correction.
/// A NaN input yields NaN.
pub fn distance_meters(a: &Coordinate, b: &Coordinate) -> f64 {
    let lat1_rad = a.latitude.to_radians();
    let lat2_rad = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lng = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);

    // Rounding can push h a hair past 1.0 for antipodal points; NaN passes through
    let root = h.sqrt();
    let root = if root > 1.0 { 1.0 } else { root };
    2.0 * EARTH_RADIUS * root.asin()
}

/// Ground resolution of one screen pixel at `zoom` and `latitude` (degrees).
///
/// Standard slippy-map tile system scale: the equatorial value at zoom 0
/// divided by `2^zoom`, scaled by the cosine of the latitude.
pub fn meters_per_pixel(zoom: f64, latitude: f64) -> f64 {
    METERS_PER_PIXEL_AT_ZOOM_0 * latitude.to_radians().cos() / 2_f64.powf(zoom)
}

/// Converts a circular tap of `radius_px` screen pixels into a ground radius in meters.
///
/// The value halves with every zoom level. For a fixed zoom it follows the
/// cosine of the latitude, which is an accepted approximation of the real
/// map scale rather than a geodesically exact figure.
pub fn tap_tolerance_meters(zoom: f64, latitude: f64, radius_px: f64) -> f64 {
    radius_px * meters_per_pixel(zoom, latitude)
}

/// [`tap_tolerance_meters`] with the default 20 pixel tap radius
pub fn default_tap_tolerance_meters(zoom: f64, latitude: f64) -> f64 {
    tap_tolerance_meters(zoom, latitude, DEFAULT_TAP_RADIUS_PX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_creation() {
        let coord = Coordinate::new(50.049683, 19.944544);
        assert_eq!(coord.latitude, 50.049683);
        assert_eq!(coord.longitude, 19.944544);
        assert!(coord.is_valid());
        assert!(!Coordinate::new(f64::NAN, 0.0).is_valid());
        assert!(!Coordinate::new(91.0, 0.0).is_valid());
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        for coord in [
            Coordinate::new(0.0, 0.0),
            Coordinate::new(50.049683, 19.944544),
            Coordinate::new(-33.8688, 151.2093),
            Coordinate::new(89.9, -179.9),
        ] {
            assert_eq!(distance_meters(&coord, &coord), 0.0);
        }
    }

    #[test]
    fn test_distance_is_symmetric() {
        let pairs = [
            (Coordinate::new(40.7128, -74.0060), Coordinate::new(34.0522, -118.2437)),
            (Coordinate::new(50.0, 20.0), Coordinate::new(50.0, 20.0001)),
            (Coordinate::new(-10.0, 170.0), Coordinate::new(12.5, -175.0)),
        ];
        for (a, b) in pairs {
            assert_eq!(distance_meters(&a, &b), distance_meters(&b, &a));
        }
    }

    #[test]
    fn test_distance_new_york_los_angeles() {
        let nyc = Coordinate::new(40.7128, -74.0060);
        let la = Coordinate::new(34.0522, -118.2437);
        let distance = nyc.distance_to(&la);

        // Roughly 3936 km on a 6371 km sphere
        assert!((distance - 3_935_746.0).abs() < 10.0);
    }

    #[test]
    fn test_one_degree_of_latitude() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(1.0, 0.0);
        let expected = EARTH_RADIUS * std::f64::consts::PI / 180.0;
        assert!((distance_meters(&a, &b) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_antipodal_distance_is_half_circumference() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 180.0);
        let expected = EARTH_RADIUS * std::f64::consts::PI;
        assert!((distance_meters(&a, &b) - expected).abs() < 1e-3);
    }

    #[test]
    fn test_nan_input_gives_nan_distance() {
        let bad = Coordinate::new(f64::NAN, 20.0);
        let good = Coordinate::new(50.0, 20.0);
        assert!(distance_meters(&bad, &good).is_nan());
        assert!(distance_meters(&good, &bad).is_nan());
    }

    #[test]
    fn test_tap_tolerance_at_zoom_12_latitude_50() {
        let tolerance = tap_tolerance_meters(12.0, 50.0, 20.0);
        let expected = 20.0 * (156543.03392 * 50.0_f64.to_radians().cos()) / 4096.0;

        assert!((tolerance - expected).abs() < 1e-9);
        // 491.328 m to six significant digits
        assert_eq!(format!("{:.3}", tolerance), "491.328");
    }

    #[test]
    fn test_tap_tolerance_strictly_decreasing_in_zoom() {
        for latitude in [0.0, 35.0, 50.0, -70.0] {
            let mut previous = f64::INFINITY;
            for step in 0..=40 {
                let zoom = step as f64 * 0.5;
                let tolerance = default_tap_tolerance_meters(zoom, latitude);
                assert!(tolerance < previous, "zoom {} lat {}", zoom, latitude);
                previous = tolerance;
            }
        }
    }

    #[test]
    fn test_tap_tolerance_halves_per_zoom_level() {
        let z10 = default_tap_tolerance_meters(10.0, 50.0);
        let z11 = default_tap_tolerance_meters(11.0, 50.0);
        assert!((z10 / z11 - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_tap_tolerance_follows_latitude_cosine() {
        let equator = default_tap_tolerance_meters(12.0, 0.0);
        let north = default_tap_tolerance_meters(12.0, 60.0);
        assert!((north / equator - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_tap_tolerance_scales_with_radius() {
        let small = tap_tolerance_meters(14.0, 50.0, 10.0);
        let large = tap_tolerance_meters(14.0, 50.0, 40.0);
        assert!((large / small - 4.0).abs() < 1e-12);
    }
}
