use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{catalog::entry::CatalogEntry, core::geo::Coordinate, traits::Locatable, Result};

/// A user-placed pin tying a map position to a catalog entry.
///
/// Serialized with the field names used by the persisted `@pokemonsOnMap`
/// array. The prepared icon is runtime-only and rebuilt after loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    id: String,
    coordinates: Option<Coordinate>,
    title: String,
    #[serde(rename = "PokemonData")]
    entry: CatalogEntry,
    #[serde(skip)]
    icon: Option<MarkerIcon>,
}

impl Marker {
    pub fn new(id: String, coordinates: Option<Coordinate>, entry: CatalogEntry) -> Self {
        Self {
            id,
            coordinates,
            title: entry.name.clone(),
            entry,
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: MarkerIcon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn coordinates(&self) -> Option<Coordinate> {
        self.coordinates
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn entry(&self) -> &CatalogEntry {
        &self.entry
    }

    pub fn icon(&self) -> Option<&MarkerIcon> {
        self.icon.as_ref()
    }

    pub fn set_icon(&mut self, icon: MarkerIcon) {
        self.icon = Some(icon);
    }

    /// The catalog id encoded after the `+` in the marker id
    pub fn catalog_id(&self) -> Option<&str> {
        self.id.split_once('+').map(|(_, catalog_id)| catalog_id)
    }

    /// Id for a new marker: `"{n}+{catalog id}"` where `n` starts at
    /// `existing.len() + 1` and is bumped until no existing marker uses it.
    pub fn next_id(existing: &[Marker], catalog_id: &str) -> String {
        let mut sequence = existing.len() + 1;
        loop {
            let candidate = format!("{}+{}", sequence, catalog_id);
            if existing.iter().all(|marker| marker.id != candidate) {
                return candidate;
            }
            sequence += 1;
        }
    }
}

impl Locatable for Marker {
    fn coordinate(&self) -> Option<Coordinate> {
        self.coordinates
    }
}

/// A marker image ready for the platform map view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerIcon {
    /// URI the map view loads the image from
    pub source: String,
    pub width: u32,
    pub height: u32,
}

/// Turns catalog artwork into a marker icon before the marker is created.
///
/// Decoding, resizing and caching images belong to the platform; the map
/// session only calls this seam.
#[async_trait]
pub trait IconPreparer: Send + Sync {
    async fn prepare(&self, image_url: &str) -> Result<MarkerIcon>;
}

/// Uses the artwork URL as-is and reports a fixed square size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassthroughIcons {
    pub size: u32,
}

impl Default for PassthroughIcons {
    fn default() -> Self {
        Self {
            size: crate::core::constants::MARKER_ICON_SIZE,
        }
    }
}

#[async_trait]
impl IconPreparer for PassthroughIcons {
    async fn prepare(&self, image_url: &str) -> Result<MarkerIcon> {
        Ok(MarkerIcon {
            source: image_url.to_string(),
            width: self.size,
            height: self.size,
        })
    }
}
