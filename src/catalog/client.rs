use std::num::NonZeroUsize;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use futures::future::try_join_all;
use lru::LruCache;
use once_cell::sync::Lazy;
use reqwest::Client;

use crate::catalog::api::{DetailResponse, ListResponse};
use crate::catalog::entry::CatalogEntry;
use crate::core::config::CatalogConfig;
use crate::Result;

/// Shared HTTP client for catalogs built with the default configuration.
/// Building the client once avoids TLS and connection pool setup per screen.
pub(crate) static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    let defaults = CatalogConfig::default();
    Client::builder()
        .user_agent(defaults.user_agent)
        .timeout(Duration::from_millis(defaults.request_timeout_ms))
        .build()
        .unwrap_or_else(|_| Client::new())
});

/// Anything that can serve catalog list pages and entry details.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// One page of `(name, detail url)` pairs
    async fn fetch_list(&self, limit: u32, offset: u32) -> Result<ListResponse>;

    /// The entry behind a detail url taken from a list page
    async fn fetch_entry(&self, url: &str) -> Result<CatalogEntry>;
}

/// A page of fully resolved entries
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub offset: u32,
    pub entries: Vec<CatalogEntry>,
    pub has_more: bool,
}

/// Fetches one list page and resolves every entry on it concurrently.
///
/// Entries keep list order. A single failing detail fails the whole page.
pub async fn fetch_page(source: &dyn CatalogSource, limit: u32, offset: u32) -> Result<Page> {
    let list = source.fetch_list(limit, offset).await?;
    log::debug!(
        "catalog list offset={} returned {} results",
        offset,
        list.results.len()
    );

    let entries = try_join_all(list.results.iter().map(|item| source.fetch_entry(&item.url))).await?;

    Ok(Page {
        offset,
        entries,
        has_more: list.next.is_some(),
    })
}

/// Catalog backed by the public REST API, with an LRU cache of details.
pub struct HttpCatalog {
    config: CatalogConfig,
    client: Client,
    details: Mutex<LruCache<String, CatalogEntry>>,
}

impl HttpCatalog {
    /// Creates a catalog with its own HTTP client built from `config`
    pub fn new(config: CatalogConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()?;
        Ok(Self::with_client(config, client))
    }

    /// Creates a catalog reusing an existing HTTP client
    pub fn with_client(config: CatalogConfig, client: Client) -> Self {
        let capacity = NonZeroUsize::new(config.detail_cache_size).unwrap_or(NonZeroUsize::MIN);
        Self {
            config,
            client,
            details: Mutex::new(LruCache::new(capacity)),
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Number of cached detail responses
    pub fn cached_details(&self) -> usize {
        self.details.lock().map(|cache| cache.len()).unwrap_or(0)
    }

    fn cached(&self, url: &str) -> Option<CatalogEntry> {
        self.details.lock().ok()?.get(url).cloned()
    }

    fn remember(&self, url: &str, entry: &CatalogEntry) {
        if let Ok(mut cache) = self.details.lock() {
            cache.put(url.to_string(), entry.clone());
        }
    }
}

impl Default for HttpCatalog {
    fn default() -> Self {
        Self::with_client(CatalogConfig::default(), HTTP_CLIENT.clone())
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn fetch_list(&self, limit: u32, offset: u32) -> Result<ListResponse> {
        let url = self.config.list_url(limit, offset);
        log::debug!("GET {}", url);

        let list = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<ListResponse>()
            .await?;
        Ok(list)
    }

    async fn fetch_entry(&self, url: &str) -> Result<CatalogEntry> {
        if let Some(entry) = self.cached(url) {
            return Ok(entry);
        }

        log::debug!("GET {}", url);
        let detail = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<DetailResponse>()
            .await?;

        let entry = CatalogEntry::try_from(detail)?;
        self.remember(url, &entry);
        Ok(entry)
    }
}
