//! Prelude module for common pokepin types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use pokepin::prelude::*;`

pub use crate::core::{
    config::{CatalogConfig, CatalogProfile, MapConfig, PokepinConfig, StorageConfig},
    geo::{distance_meters, meters_per_pixel, tap_tolerance_meters, Coordinate},
};

pub use crate::catalog::{
    fetch_page, filter_by_name, CatalogEntry, CatalogSource, HttpCatalog, Page, Pager, Stats,
};

#[cfg(feature = "tokio-runtime")]
pub use crate::catalog::SharedPager;

pub use crate::input::events::MapEvent;

pub use crate::layers::marker::{IconPreparer, Marker, MarkerIcon, PassthroughIcons};

pub use crate::session::{EventOutcome, FavoriteSession, MapSession, TapOutcome};

pub use crate::spatial::resolver::{resolve_tap, TapResolver};

pub use crate::storage::{FileStore, KeyValueStore, Keys, MemoryStore};

pub use crate::traits::Locatable;

pub use crate::{PokepinError, Result};
