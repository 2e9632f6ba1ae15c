//! Local key-value persistence
//!
//! Screens store two records: the favorite entry and the array of placed
//! markers, each as a JSON string under its own key. Backends only need to
//! move strings around; the typed helpers below do the (de)serialization.

use serde::{de::DeserializeOwned, Serialize};

use crate::catalog::entry::CatalogEntry;
use crate::core::config::StorageConfig;
use crate::layers::marker::Marker;
use crate::Result;

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// String storage keyed by string
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    fn remove(&self, key: &str) -> Result<()>;
}

/// Reads and decodes a JSON value; a missing key is `None`
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Result<Option<T>> {
    match store.get(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

pub fn save_json<T: Serialize + ?Sized>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<()> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

/// Typed access to the two application records
#[derive(Debug, Clone)]
pub struct Keys {
    pub favorite: String,
    pub markers: String,
}

impl Keys {
    pub fn from_config(config: &StorageConfig) -> Self {
        Self {
            favorite: config.favorite_key.clone(),
            markers: config.markers_key.clone(),
        }
    }

    pub fn load_favorite(&self, store: &dyn KeyValueStore) -> Result<Option<CatalogEntry>> {
        load_json(store, &self.favorite)
    }

    pub fn save_favorite(&self, store: &dyn KeyValueStore, entry: &CatalogEntry) -> Result<()> {
        save_json(store, &self.favorite, entry)
    }

    pub fn remove_favorite(&self, store: &dyn KeyValueStore) -> Result<()> {
        store.remove(&self.favorite)
    }

    /// Stored markers; an absent key is an empty list
    pub fn load_markers(&self, store: &dyn KeyValueStore) -> Result<Vec<Marker>> {
        Ok(load_json(store, &self.markers)?.unwrap_or_default())
    }

    pub fn save_markers(&self, store: &dyn KeyValueStore, markers: &[Marker]) -> Result<()> {
        save_json(store, &self.markers, markers)
    }
}

impl Default for Keys {
    fn default() -> Self {
        Self::from_config(&StorageConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::entry::tests::entry;
    use crate::core::geo::Coordinate;
    use crate::PokepinError;

    #[test]
    fn test_favorite_round_trip_and_removal() {
        let store = MemoryStore::new();
        let keys = Keys::default();

        assert_eq!(keys.load_favorite(&store).unwrap(), None);

        let pikachu = entry("25", "pikachu");
        keys.save_favorite(&store, &pikachu).unwrap();
        assert_eq!(keys.load_favorite(&store).unwrap(), Some(pikachu));
        assert!(store.get("@favoritePokemon").unwrap().is_some());

        keys.remove_favorite(&store).unwrap();
        assert_eq!(keys.load_favorite(&store).unwrap(), None);
    }

    #[test]
    fn test_missing_markers_key_is_empty_list() {
        let store = MemoryStore::new();
        assert!(Keys::default().load_markers(&store).unwrap().is_empty());
    }

    #[test]
    fn test_markers_keep_order() {
        let store = MemoryStore::new();
        let keys = Keys::default();
        let markers = vec![
            Marker::new("1+4".into(), Some(Coordinate::new(50.0, 20.0)), entry("4", "charmander")),
            Marker::new("2+1".into(), None, entry("1", "bulbasaur")),
        ];

        keys.save_markers(&store, &markers).unwrap();
        assert_eq!(keys.load_markers(&store).unwrap(), markers);
    }

    #[test]
    fn test_malformed_record_is_serialization_error() {
        let store = MemoryStore::new();
        store.set("@pokemonsOnMap", "[{ not json").unwrap();
        assert!(matches!(
            Keys::default().load_markers(&store),
            Err(PokepinError::Serialization(_))
        ));
    }
}
