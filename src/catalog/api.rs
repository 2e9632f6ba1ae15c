//! Wire format of the public catalog API
//!
//! Only the fields the application reads are modelled; everything else in
//! the (large) detail payload is ignored by serde.

use serde::Deserialize;

use crate::catalog::entry::{CatalogEntry, Stats};
use crate::{PokepinError, Result};

/// `GET /pokemon?limit=&offset=`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListResponse {
    #[serde(default)]
    pub count: u32,
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// `GET /pokemon/{id}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DetailResponse {
    pub id: u32,
    pub name: String,
    pub sprites: Sprites,
    pub types: Vec<TypeSlot>,
    pub stats: Vec<StatSlot>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: OtherSprites,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<Artwork>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Artwork {
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatSlot {
    pub base_stat: u32,
}

impl DetailResponse {
    /// Official artwork when present, otherwise the default front sprite
    pub fn image(&self) -> Option<&str> {
        let artwork = self
            .sprites
            .other
            .official_artwork
            .as_ref()
            .and_then(|art| art.front_default.as_deref())
            .filter(|url| !url.is_empty());

        artwork.or_else(|| {
            self.sprites
                .front_default
                .as_deref()
                .filter(|url| !url.is_empty())
        })
    }
}

impl TryFrom<DetailResponse> for CatalogEntry {
    type Error = PokepinError;

    fn try_from(detail: DetailResponse) -> Result<Self> {
        let image = detail
            .image()
            .ok_or_else(|| PokepinError::Catalog(format!("{} has no artwork", detail.name)))?
            .to_string();

        // The API lists stats as hp, attack, defense, sp. attack, sp. defense, speed
        let base: Vec<u32> = detail.stats.iter().map(|slot| slot.base_stat).collect();
        let stats = match base.as_slice() {
            [hp, attack, defense, special_attack, special_defense, speed, ..] => Stats {
                hp: *hp,
                attack: *attack,
                defense: *defense,
                speed: *speed,
                special_attack: *special_attack,
                special_defense: *special_defense,
            },
            _ => {
                return Err(PokepinError::Catalog(format!(
                    "{} has {} stats, expected 6",
                    detail.name,
                    base.len()
                )))
            }
        };

        Ok(CatalogEntry {
            id: detail.id.to_string(),
            name: detail.name,
            image,
            types: detail.types.into_iter().map(|slot| slot.kind.name).collect(),
            stats,
        })
    }
}
