use serde::{Deserialize, Serialize};

use crate::core::geo::Coordinate;

/// Events emitted by the platform map view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MapEvent {
    /// Tap on the map surface
    Click { coordinate: Coordinate },
    /// Tap on a marker the platform resolved itself
    MarkerClick { id: String },
    /// Camera moved; carries the new zoom
    CameraMove { zoom: f64 },
}

impl MapEvent {
    pub fn click(latitude: f64, longitude: f64) -> Self {
        Self::Click {
            coordinate: Coordinate::new(latitude, longitude),
        }
    }

    pub fn camera_move(zoom: f64) -> Self {
        Self::CameraMove { zoom }
    }

    pub fn marker_click(id: impl Into<String>) -> Self {
        Self::MarkerClick { id: id.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_from_bridge_json() {
        let click: MapEvent = serde_json::from_str(
            r#"{ "type": "click", "coordinate": { "latitude": 50.0, "longitude": 20.0 } }"#,
        )
        .unwrap();
        assert_eq!(click, MapEvent::click(50.0, 20.0));

        let camera: MapEvent = serde_json::from_str(r#"{ "type": "camera_move", "zoom": 14.5 }"#).unwrap();
        assert_eq!(camera, MapEvent::camera_move(14.5));

        let marker: MapEvent = serde_json::from_str(r#"{ "type": "marker_click", "id": "1+25" }"#).unwrap();
        assert_eq!(marker, MapEvent::marker_click("1+25"));
    }
}
