//! Configuration system for the catalog client, the map screen and storage
//!
//! Every section has defaults matching the shipped application, and the
//! whole tree can be loaded from a JSON file where missing fields fall back
//! to those defaults. Catalog page sizes come from presets, one per screen.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::constants::{
    BROWSE_PAGE_SIZE, CAROUSEL_PAGE_SIZE, CATALOG_BASE_URL, DEFAULT_TAP_RADIUS_PX,
    DETAIL_CACHE_SIZE, FAVORITE_KEY, INITIAL_CENTER, INITIAL_ZOOM,
    MAP_PICKER_PAGE_SIZE, MARKERS_KEY, MARKER_ICON_SIZE, MAX_ZOOM, MIN_ZOOM,
};
use crate::core::geo::Coordinate;
use crate::{PokepinError, Result};

/// Which screen a catalog listing feeds
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogProfile {
    /// Two-column browse grid on the home screen
    Browse,
    /// Horizontal picker in the map bottom sheet
    MapPicker,
    /// Sticker carousel on the camera screen
    Carousel,
    Custom(CatalogConfig),
}

impl CatalogProfile {
    pub fn resolve(&self) -> CatalogConfig {
        match self {
            Self::Browse => CatalogConfig {
                page_size: BROWSE_PAGE_SIZE,
                ..CatalogConfig::default()
            },
            Self::MapPicker => CatalogConfig {
                page_size: MAP_PICKER_PAGE_SIZE,
                ..CatalogConfig::default()
            },
            Self::Carousel => CatalogConfig {
                page_size: CAROUSEL_PAGE_SIZE,
                ..CatalogConfig::default()
            },
            Self::Custom(config) => config.clone(),
        }
    }
}

impl Default for CatalogProfile {
    fn default() -> Self {
        Self::Browse
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PokepinConfig {
    pub catalog: CatalogConfig,
    pub map: MapConfig,
    pub storage: StorageConfig,
}

impl PokepinConfig {
    /// Parses a configuration from JSON, filling gaps with defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        log::debug!("loaded configuration from {}", path.display());
        Self::from_json_str(&json)
    }

    /// Catalog settings for a given screen, keeping the configured endpoint
    pub fn catalog_for(&self, profile: CatalogProfile) -> CatalogConfig {
        let preset = profile.resolve();
        CatalogConfig {
            page_size: preset.page_size,
            ..self.catalog.clone()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.catalog.page_size == 0 {
            return Err(PokepinError::Config("catalog.page_size must be positive".into()));
        }
        if self.map.min_zoom < 0.0 || self.map.min_zoom > self.map.max_zoom {
            return Err(PokepinError::Config(format!(
                "invalid zoom range {}..{}",
                self.map.min_zoom, self.map.max_zoom
            )));
        }
        if self.map.tap_radius_px.is_nan() || self.map.tap_radius_px <= 0.0 {
            return Err(PokepinError::Config("map.tap_radius_px must be positive".into()));
        }
        if !self.map.initial_center.is_valid() {
            return Err(PokepinError::InvalidCoordinates(format!(
                "initial center {:?}",
                self.map.initial_center
            )));
        }
        Ok(())
    }
}

/// Catalog service settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub base_url: String,
    pub page_size: u32,
    pub detail_cache_size: usize,
    pub user_agent: String,
    pub request_timeout_ms: u64,
}

impl CatalogConfig {
    /// URL of one list page
    pub fn list_url(&self, limit: u32, offset: u32) -> String {
        format!(
            "{}/pokemon?limit={}&offset={}",
            self.base_url.trim_end_matches('/'),
            limit,
            offset
        )
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: CATALOG_BASE_URL.to_string(),
            page_size: BROWSE_PAGE_SIZE,
            detail_cache_size: DETAIL_CACHE_SIZE,
            user_agent: concat!("pokepin/", env!("CARGO_PKG_VERSION")).to_string(),
            request_timeout_ms: 10_000,
        }
    }
}

/// Map screen settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub initial_center: Coordinate,
    pub initial_zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub tap_radius_px: f64,
    pub icon_size: u32,
}

impl MapConfig {
    pub fn clamp_zoom(&self, zoom: f64) -> f64 {
        zoom.clamp(self.min_zoom, self.max_zoom)
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            initial_center: Coordinate::new(INITIAL_CENTER.0, INITIAL_CENTER.1),
            initial_zoom: INITIAL_ZOOM,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            tap_radius_px: DEFAULT_TAP_RADIUS_PX,
            icon_size: MARKER_ICON_SIZE,
        }
    }
}

/// Local persistence settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub path: PathBuf,
    pub favorite_key: String,
    pub markers_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("pokepin-store.json"),
            favorite_key: FAVORITE_KEY.to_string(),
            markers_key: MARKERS_KEY.to_string(),
        }
    }
}
