pub mod api;
pub mod client;
pub mod entry;
pub mod pager;
pub mod search;

// Re-exports for convenience
pub use client::{fetch_page, CatalogSource, HttpCatalog, Page};
pub use entry::{CatalogEntry, Stats};
pub use pager::Pager;
#[cfg(feature = "tokio-runtime")]
pub use pager::SharedPager;
pub use search::filter_by_name;
