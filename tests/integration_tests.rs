use async_trait::async_trait;
use pokepin::catalog::api::{ListResponse, NamedResource};
use pokepin::prelude::*;

/// End-to-end flows across catalog paging, sessions and storage.
/// These tests mirror what the screens do, without a network.
#[cfg(test)]
mod integration_tests {
    use super::*;
    use tempfile::TempDir;

    /// Catalog of `total` entries where every name is `mon-{id}`
    struct StubCatalog {
        total: u32,
    }

    #[async_trait]
    impl CatalogSource for StubCatalog {
        async fn fetch_list(&self, limit: u32, offset: u32) -> pokepin::Result<ListResponse> {
            let end = (offset + limit).min(self.total);
            Ok(ListResponse {
                count: self.total,
                next: (end < self.total).then(|| format!("stub://list?offset={}", end)),
                previous: None,
                results: (offset + 1..=end)
                    .map(|id| NamedResource {
                        name: format!("mon-{}", id),
                        url: format!("stub://pokemon/{}", id),
                    })
                    .collect(),
            })
        }

        async fn fetch_entry(&self, url: &str) -> pokepin::Result<CatalogEntry> {
            let id = url.trim_start_matches("stub://pokemon/").to_string();
            Ok(CatalogEntry {
                name: format!("mon-{}", id),
                image: format!("https://art.example/{}.png", id),
                types: vec!["normal".to_string()],
                stats: Stats::default(),
                id,
            })
        }
    }

    fn scratch_store(dir: &TempDir) -> FileStore {
        FileStore::new(dir.path().join("store.json"))
    }

    fn init() {
        #[cfg(feature = "debug")]
        pokepin::init_logger();
    }

    #[test]
    fn test_resolver_scenarios_through_public_api() {
        init();
        let tap = Coordinate::new(50.049683, 19.944544);
        let same = vec![tap];
        assert_eq!(resolve_tap(&tap, &same, 200.0), Some(&tap));

        let far = vec![Coordinate::new(50.049683 + 0.09, 19.944544)];
        assert!(resolve_tap(&tap, &far, 200.0).is_none());

        let tolerance = tap_tolerance_meters(12.0, 50.0, 20.0);
        assert_eq!(format!("{:.3}", tolerance), "491.328");
    }

    #[tokio::test]
    async fn test_browse_search_and_favorite() {
        init();
        let catalog = StubCatalog { total: 30 };
        let store = MemoryStore::new();
        let config = PokepinConfig::default();

        let mut browse = Pager::new(config.catalog_for(CatalogProfile::Browse).page_size);
        browse.next_page(&catalog).await.unwrap();
        browse.next_page(&catalog).await.unwrap();
        assert_eq!(browse.entries().len(), 30);
        assert!(!browse.has_more());

        let hits = browse.search("mon-2");
        assert_eq!(hits.len(), 11); // mon-2 and mon-20..=29

        let mut favorites = FavoriteSession::new(&config.storage);
        let chosen = hits[0].clone();
        assert!(favorites.offers_favorite_button(&chosen));
        favorites.set(chosen.clone(), &store).unwrap();
        assert!(!favorites.offers_favorite_button(&chosen));

        let mut reopened = FavoriteSession::new(&config.storage);
        assert_eq!(reopened.load(&store).unwrap(), Some(&chosen));
    }

    #[tokio::test]
    async fn test_place_marker_from_picker_and_reopen() {
        init();
        let catalog = StubCatalog { total: 100 };
        let dir = tempfile::tempdir().unwrap();
        let store = scratch_store(&dir);
        let config = PokepinConfig::default();
        let icons = PassthroughIcons {
            size: config.map.icon_size,
        };

        let mut map = MapSession::new(config.map.clone(), &config.storage);
        let spot = Coordinate::new(50.0614, 19.9366);
        assert_eq!(
            map.handle_event(MapEvent::Click { coordinate: spot }),
            EventOutcome::Tap(TapOutcome::PlacementStarted(spot))
        );

        // Opening the picker loads its first page
        let mut picker = Pager::new(config.catalog_for(CatalogProfile::MapPicker).page_size);
        assert_eq!(picker.next_page(&catalog).await.unwrap(), Some(6));
        let choice = picker.entries()[2].clone();

        let marker_id = map
            .create_marker(choice, &icons, &store)
            .await
            .unwrap()
            .id()
            .to_string();
        assert_eq!(marker_id, "1+3");

        // A fresh screen sees the persisted marker and hits it
        let mut reopened = MapSession::new(config.map.clone(), &config.storage);
        assert_eq!(reopened.load(&store, &icons).await.unwrap(), 1);
        reopened.handle_event(MapEvent::camera_move(15.0));

        // ~22 m from the marker; zoom 15 tolerates ~61 m at this latitude
        let near = Coordinate::new(50.0616, 19.9366);
        match reopened.on_map_click(near) {
            TapOutcome::MarkerHit(marker) => {
                assert_eq!(marker.entry().name, "mon-3");
                assert_eq!(marker.icon().map(|icon| icon.width), Some(128));
            }
            other => panic!("expected marker hit, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_overlapping_markers_resolve_to_first_placed() {
        init();
        let catalog = StubCatalog { total: 10 };
        let store = MemoryStore::new();
        let icons = PassthroughIcons::default();
        let mut map = MapSession::default();

        let mut picker = Pager::new(6);
        picker.next_page(&catalog).await.unwrap();

        map.on_map_click(Coordinate::new(50.0, 20.0));
        map.create_marker(picker.entries()[0].clone(), &icons, &store)
            .await
            .unwrap();
        // Zoomed far in so the second tap misses the first marker
        map.on_camera_move(22.0);
        map.on_map_click(Coordinate::new(50.0, 20.0001));
        map.create_marker(picker.entries()[1].clone(), &icons, &store)
            .await
            .unwrap();

        // Back out to zoom 12: both within tolerance, tap closer to the second
        map.on_camera_move(12.0);
        match map.on_map_click(Coordinate::new(50.0, 20.00009)) {
            TapOutcome::MarkerHit(marker) => assert_eq!(marker.id(), "1+1"),
            other => panic!("expected marker hit, got {:?}", other),
        }
    }

    #[test]
    fn test_config_file_round_trip() {
        init();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pokepin.json");
        std::fs::write(
            &path,
            r#"{ "catalog": { "base_url": "http://localhost:9000/api" }, "map": { "initial_zoom": 9.0 } }"#,
        )
        .unwrap();

        let config = PokepinConfig::load(&path).unwrap();
        assert_eq!(config.catalog.base_url, "http://localhost:9000/api");
        assert_eq!(MapSession::new(config.map.clone(), &config.storage).zoom(), 9.0);
    }
}
