use crate::catalog::entry::CatalogEntry;
use crate::core::config::StorageConfig;
use crate::storage::{KeyValueStore, Keys};
use crate::Result;

/// The single favorite entry shown on the home screen
#[derive(Debug, Clone, Default)]
pub struct FavoriteSession {
    keys: Keys,
    favorite: Option<CatalogEntry>,
}

impl FavoriteSession {
    pub fn new(storage: &StorageConfig) -> Self {
        Self {
            keys: Keys::from_config(storage),
            favorite: None,
        }
    }

    pub fn favorite(&self) -> Option<&CatalogEntry> {
        self.favorite.as_ref()
    }

    pub fn load(&mut self, store: &dyn KeyValueStore) -> Result<Option<&CatalogEntry>> {
        self.favorite = self.keys.load_favorite(store)?;
        Ok(self.favorite.as_ref())
    }

    /// Makes `entry` the favorite. The in-memory value changes even if saving fails.
    pub fn set(&mut self, entry: CatalogEntry, store: &dyn KeyValueStore) -> Result<()> {
        let saved = self.keys.save_favorite(store, &entry);
        match &saved {
            Ok(()) => log::info!("favorite saved: {}", entry.name),
            Err(e) => log::error!("failed to save favorite {}: {}", entry.name, e),
        }
        self.favorite = Some(entry);
        saved
    }

    pub fn clear(&mut self, store: &dyn KeyValueStore) -> Result<()> {
        self.favorite = None;
        let removed = self.keys.remove_favorite(store);
        match &removed {
            Ok(()) => log::info!("favorite removed"),
            Err(e) => log::error!("failed to remove favorite: {}", e),
        }
        removed
    }

    /// Whether the detail sheet for `entry` should offer "set as favorite"
    pub fn offers_favorite_button(&self, entry: &CatalogEntry) -> bool {
        self.favorite
            .as_ref()
            .map_or(true, |favorite| favorite.id != entry.id)
    }
}
