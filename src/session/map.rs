//! State behind the map screen
//!
//! The session owns the zoom reported by the camera, the placed markers and
//! the coordinate of a placement in progress. Each tap hands a snapshot of
//! zoom and markers to the stateless [`TapResolver`].

use crate::catalog::entry::CatalogEntry;
use crate::core::config::{MapConfig, StorageConfig};
use crate::core::geo::Coordinate;
use crate::input::events::MapEvent;
use crate::layers::marker::{IconPreparer, Marker};
use crate::spatial::resolver::TapResolver;
use crate::storage::{KeyValueStore, Keys};
use crate::Result;

/// What a tap on the map surface means
#[derive(Debug, Clone, PartialEq)]
pub enum TapOutcome<'a> {
    /// An existing marker was hit; show its entry
    MarkerHit(&'a Marker),
    /// Empty ground; the picker should open and place a marker here
    PlacementStarted(Coordinate),
}

/// Result of dispatching a [`MapEvent`]
#[derive(Debug, Clone, PartialEq)]
pub enum EventOutcome<'a> {
    Tap(TapOutcome<'a>),
    MarkerSelected(Option<&'a Marker>),
    ZoomChanged(f64),
}

pub struct MapSession {
    config: MapConfig,
    resolver: TapResolver,
    keys: Keys,
    zoom: f64,
    markers: Vec<Marker>,
    pending: Option<Coordinate>,
}

impl MapSession {
    pub fn new(config: MapConfig, storage: &StorageConfig) -> Self {
        Self {
            resolver: TapResolver::new(config.tap_radius_px),
            keys: Keys::from_config(storage),
            zoom: config.clamp_zoom(config.initial_zoom),
            markers: Vec::new(),
            pending: None,
            config,
        }
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn center(&self) -> Coordinate {
        self.config.initial_center
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Markers the platform map should draw
    pub fn visible_markers(&self) -> impl Iterator<Item = &Marker> {
        self.markers.iter().filter(|marker| marker.coordinates().is_some())
    }

    /// Coordinate the next created marker will be placed at
    pub fn pending_placement(&self) -> Option<Coordinate> {
        self.pending
    }

    pub fn cancel_placement(&mut self) {
        self.pending = None;
    }

    pub fn on_camera_move(&mut self, zoom: f64) {
        if !zoom.is_finite() {
            log::warn!("ignoring non-finite zoom {}", zoom);
            return;
        }
        self.zoom = self.config.clamp_zoom(zoom);
    }

    pub fn on_map_click(&mut self, tap: Coordinate) -> TapOutcome<'_> {
        match self.resolver.resolve_index(&tap, self.zoom, &self.markers) {
            Some(index) => {
                let marker = &self.markers[index];
                log::info!("clicked marker {}", marker.id());
                TapOutcome::MarkerHit(marker)
            }
            None => {
                self.pending = Some(tap);
                TapOutcome::PlacementStarted(tap)
            }
        }
    }

    pub fn on_marker_click(&self, id: &str) -> Option<&Marker> {
        self.markers.iter().find(|marker| marker.id() == id)
    }

    pub fn handle_event(&mut self, event: MapEvent) -> EventOutcome<'_> {
        match event {
            MapEvent::Click { coordinate } => EventOutcome::Tap(self.on_map_click(coordinate)),
            MapEvent::MarkerClick { id } => EventOutcome::MarkerSelected(self.on_marker_click(&id)),
            MapEvent::CameraMove { zoom } => {
                self.on_camera_move(zoom);
                EventOutcome::ZoomChanged(self.zoom)
            }
        }
    }

    /// Places `entry` at the pending coordinate and persists the marker list.
    ///
    /// Without a pending placement the marker is created unplaced. When
    /// saving fails the marker stays in memory and the error is returned.
    pub async fn create_marker(
        &mut self,
        entry: CatalogEntry,
        icons: &dyn IconPreparer,
        store: &dyn KeyValueStore,
    ) -> Result<&Marker> {
        let icon = icons.prepare(&entry.image).await?;
        let id = Marker::next_id(&self.markers, &entry.id);
        let marker = Marker::new(id, self.pending.take(), entry).with_icon(icon);
        self.markers.push(marker);

        match self.keys.save_markers(store, &self.markers) {
            Ok(()) => log::info!("markers saved ({} total)", self.markers.len()),
            Err(e) => {
                log::error!("markers not saved: {}", e);
                return Err(e);
            }
        }

        Ok(&self.markers[self.markers.len() - 1])
    }

    /// Deletes a marker and persists the remaining list
    pub fn remove_marker(&mut self, id: &str, store: &dyn KeyValueStore) -> Result<Option<Marker>> {
        let Some(index) = self.markers.iter().position(|marker| marker.id() == id) else {
            return Ok(None);
        };
        let removed = self.markers.remove(index);
        self.keys.save_markers(store, &self.markers)?;
        log::info!("removed marker {}", removed.id());
        Ok(Some(removed))
    }

    /// Replaces the markers with the stored list, preparing their icons.
    ///
    /// A marker whose icon cannot be prepared is kept without one.
    pub async fn load(&mut self, store: &dyn KeyValueStore, icons: &dyn IconPreparer) -> Result<usize> {
        let mut markers = self.keys.load_markers(store)?;
        for marker in markers.iter_mut() {
            match icons.prepare(&marker.entry().image).await {
                Ok(icon) => marker.set_icon(icon),
                Err(e) => log::warn!("no icon for marker {}: {}", marker.id(), e),
            }
        }
        log::info!("markers loaded: {}", markers.len());
        self.markers = markers;
        Ok(self.markers.len())
    }
}

impl Default for MapSession {
    fn default() -> Self {
        Self::new(MapConfig::default(), &StorageConfig::default())
    }
}
