pub mod resolver;

pub use resolver::{resolve_tap, resolve_tap_index, TapResolver};
