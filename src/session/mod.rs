pub mod favorite;
pub mod map;

pub use favorite::FavoriteSession;
pub use map::{EventOutcome, MapSession, TapOutcome};
