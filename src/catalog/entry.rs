use serde::{Deserialize, Serialize};

/// One catalog record as shown on cards and stored with markers and favorites.
///
/// The JSON shape is camelCase so records written by earlier clients of the
/// same storage keys keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
    /// Artwork URL
    pub image: String,
    /// Category tags, in catalog order
    pub types: Vec<String>,
    pub stats: Stats,
}

impl CatalogEntry {
    /// Case-insensitive substring match on the name
    pub fn name_matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

/// The six base stats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    pub special_attack: u32,
    pub special_defense: u32,
}

impl Stats {
    pub fn total(&self) -> u32 {
        self.hp
            + self.attack
            + self.defense
            + self.speed
            + self.special_attack
            + self.special_defense
    }

    /// Label/value pairs in card display order
    pub fn labelled(&self) -> [(&'static str, u32); 6] {
        [
            ("HP", self.hp),
            ("Attack", self.attack),
            ("Defense", self.defense),
            ("Speed", self.speed),
            ("Special Attack", self.special_attack),
            ("Special Defense", self.special_defense),
        ]
    }
}
