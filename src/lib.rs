//! # Pokepin
//!
//! Browse a public Pokémon catalog, keep a favorite, and pin entries to a map.
//!
//! The geometric core lives in [`core::geo`] and [`spatial::resolver`]: it turns
//! a map tap plus the current zoom into "this marker was hit" or "nothing was
//! hit". Everything around it (catalog paging, persistence, screen sessions)
//! is plain state passed explicitly into that core.

pub mod catalog;
pub mod core;
pub mod input;
pub mod layers;
pub mod prelude;
pub mod session;
pub mod spatial;
pub mod storage;
pub mod traits;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    config::{CatalogProfile, PokepinConfig},
    geo::{distance_meters, tap_tolerance_meters, Coordinate},
};

pub use catalog::{
    client::{CatalogSource, HttpCatalog},
    entry::{CatalogEntry, Stats},
    pager::Pager,
};

pub use input::events::MapEvent;

pub use layers::marker::{IconPreparer, Marker, MarkerIcon};

pub use session::{favorite::FavoriteSession, map::MapSession, map::TapOutcome};

pub use spatial::resolver::{resolve_tap, TapResolver};

pub use storage::{file::FileStore, memory::MemoryStore, KeyValueStore};

pub use traits::Locatable;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, PokepinError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum PokepinError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Error type alias for convenience
pub type Error = PokepinError;

/// Installs `env_logger` as the `log` backend; safe to call more than once.
#[cfg(feature = "debug")]
pub fn init_logger() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}
