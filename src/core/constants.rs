//! Engine-wide constants: geodesy, tile-system scale, catalog and storage defaults.
//! Keeping them in a single place makes it easier to tweak the magic numbers.

/// Mean Earth radius in meters used by every distance computation.
pub const EARTH_RADIUS: f64 = 6_371_000.0;

/// Ground resolution of one pixel at the equator and zoom 0, in meters.
pub const METERS_PER_PIXEL_AT_ZOOM_0: f64 = 156_543.033_92;

/// Radius of the screen circle treated as "the finger", in pixels.
pub const DEFAULT_TAP_RADIUS_PX: f64 = 20.0;

/// Camera zoom when the map screen first opens.
pub const INITIAL_ZOOM: f64 = 12.0;

/// Camera center when the map screen first opens (Kraków main square).
pub const INITIAL_CENTER: (f64, f64) = (50.049683, 19.944544);

/// Zoom range accepted from camera-move notifications.
pub const MIN_ZOOM: f64 = 0.0;
pub const MAX_ZOOM: f64 = 22.0;

/// Public catalog API root.
pub const CATALOG_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Page sizes used by the three catalog screens.
pub const BROWSE_PAGE_SIZE: u32 = 24;
pub const MAP_PICKER_PAGE_SIZE: u32 = 6;
pub const CAROUSEL_PAGE_SIZE: u32 = 20;

/// Number of catalog detail responses kept in memory.
pub const DETAIL_CACHE_SIZE: usize = 512;

/// Storage key holding the single favorite entry.
pub const FAVORITE_KEY: &str = "@favoritePokemon";

/// Storage key holding the JSON array of placed markers.
pub const MARKERS_KEY: &str = "@pokemonsOnMap";

/// Square size marker icons are prepared at, in pixels.
pub const MARKER_ICON_SIZE: u32 = 128;
