use crate::catalog::client::{fetch_page, CatalogSource};
use crate::catalog::entry::CatalogEntry;
use crate::catalog::search::filter_by_name;
use crate::Result;

/// Infinite-scroll state for one catalog screen.
///
/// Entries accumulate across pages. A request is skipped while another one
/// is running or once the catalog reported its last page.
#[derive(Debug, Clone)]
pub struct Pager {
    page_size: u32,
    offset: u32,
    has_more: bool,
    fetching: bool,
    entries: Vec<CatalogEntry>,
}

impl Pager {
    pub fn new(page_size: u32) -> Self {
        Self {
            page_size: page_size.max(1),
            offset: 0,
            has_more: true,
            fetching: false,
            entries: Vec::new(),
        }
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn is_fetching(&self) -> bool {
        self.fetching
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Loaded entries whose name matches `query`
    pub fn search(&self, query: &str) -> Vec<&CatalogEntry> {
        filter_by_name(&self.entries, query)
    }

    /// Loads the next page.
    ///
    /// Returns `Ok(None)` without touching the source when nothing should be
    /// fetched, otherwise the number of entries appended. On error the offset
    /// and entries are left as they were so the same page can be retried.
    pub async fn next_page(&mut self, source: &dyn CatalogSource) -> Result<Option<usize>> {
        if !self.begin() {
            return Ok(None);
        }

        let result = fetch_page(source, self.page_size, self.offset).await;
        self.fetching = false;

        match result {
            Ok(page) => {
                let added = page.entries.len();
                self.entries.extend(page.entries);
                self.offset += self.page_size;
                self.has_more = page.has_more;
                log::info!(
                    "loaded {} catalog entries (offset now {}, more: {})",
                    added,
                    self.offset,
                    self.has_more
                );
                Ok(Some(added))
            }
            Err(e) => {
                log::error!("failed to fetch catalog page at offset {}: {}", self.offset, e);
                Err(e)
            }
        }
    }

    /// Claims the fetch slot; false when a fetch is running or pages ran out
    fn begin(&mut self) -> bool {
        if self.fetching || !self.has_more {
            return false;
        }
        self.fetching = true;
        true
    }
}

/// A [`Pager`] shared between tasks.
///
/// `try_next_page` skips instead of queueing when another task is already
/// loading, which mirrors a list that fires "end reached" repeatedly while
/// scrolling.
#[cfg(feature = "tokio-runtime")]
pub struct SharedPager {
    inner: tokio::sync::Mutex<Pager>,
}

#[cfg(feature = "tokio-runtime")]
impl SharedPager {
    pub fn new(pager: Pager) -> Self {
        Self {
            inner: tokio::sync::Mutex::new(pager),
        }
    }

    pub async fn try_next_page(&self, source: &dyn CatalogSource) -> Result<Option<usize>> {
        match self.inner.try_lock() {
            Ok(mut pager) => pager.next_page(source).await,
            Err(_) => {
                log::debug!("catalog page request skipped, another fetch is running");
                Ok(None)
            }
        }
    }

    pub async fn entries(&self) -> Vec<CatalogEntry> {
        self.inner.lock().await.entries().to_vec()
    }
}
