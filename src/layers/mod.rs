pub mod marker;

pub use marker::{IconPreparer, Marker, MarkerIcon, PassthroughIcons};
