//! Catalog API façade.
//!
//! Frontends depend on the [`CatalogApi`] trait only. [`HttpCatalog`] is the
//! real source (one `GET` of the whole catalog); [`MockApi`] serves canned
//! data for tests.

#![forbid(unsafe_code)]

use std::time::{Duration, Instant};

use catalog_core::{Catalog, Record};
use metrics::{counter, histogram};
use tracing::{info, warn};

pub const DEFAULT_URL: &str = "https://dummyjson.com/products";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Where and how to fetch the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    pub url: String,
    pub timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { url: DEFAULT_URL.to_string(), timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS) }
    }
}

impl FetchConfig {
    /// Read `CATALOG_URL` and `CATALOG_FETCH_TIMEOUT_SECS`, falling back to defaults.
    pub fn from_env() -> Self {
        let url = std::env::var("CATALOG_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_URL.to_string());
        let timeout = std::env::var("CATALOG_FETCH_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|s| *s > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Self { url, timeout: Duration::from_secs(timeout) }
    }
}

/// API errors.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("config: {0}")]
    Config(String),
    #[error("http: {0}")]
    Http(String),
    #[error("status: {0}")]
    Status(u16),
    #[error("decode: {0}")]
    Decode(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Source of the product list.
#[async_trait::async_trait]
pub trait CatalogApi: Send + Sync {
    /// Fetch the full catalog in source order.
    async fn fetch(&self) -> CatalogResult<Vec<Record>>;

    /// Human-readable origin for the status bar.
    fn source(&self) -> String;
}

// ----------------- HTTP implementation -----------------

pub struct HttpCatalog {
    client: reqwest::Client,
    url: reqwest::Url,
}

impl HttpCatalog {
    pub fn new(cfg: &FetchConfig) -> CatalogResult<Self> {
        let url = reqwest::Url::parse(&cfg.url)
            .map_err(|e| CatalogError::Config(format!("invalid url {:?}: {}", cfg.url, e)))?;
        let client = reqwest::Client::builder()
            .timeout(cfg.timeout)
            .build()
            .map_err(|e| CatalogError::Config(e.to_string()))?;
        Ok(Self { client, url })
    }
}

#[async_trait::async_trait]
impl CatalogApi for HttpCatalog {
    async fn fetch(&self) -> CatalogResult<Vec<Record>> {
        let t0 = Instant::now();
        info!(url = %self.url, "api: fetch start");
        counter!("catalog_fetch_total", 1);
        let res = fetch_catalog(&self.client, self.url.clone()).await;
        histogram!("catalog_fetch_ms", t0.elapsed().as_secs_f64() * 1000.0);
        match &res {
            Ok(items) => info!(items = items.len(), took_ms = %t0.elapsed().as_millis(), "api: fetch ok"),
            Err(e) => {
                counter!("catalog_fetch_errors_total", 1);
                warn!(error = %e, took_ms = %t0.elapsed().as_millis(), "api: fetch failed")
            }
        }
        res
    }

    fn source(&self) -> String {
        self.url.to_string()
    }
}

async fn fetch_catalog(client: &reqwest::Client, url: reqwest::Url) -> CatalogResult<Vec<Record>> {
    let resp = client
        .get(url)
        .header(reqwest::header::ACCEPT, "application/json")
        .send()
        .await
        .map_err(|e| CatalogError::Http(e.to_string()))?;
    let status = resp.status();
    if !status.is_success() {
        return Err(CatalogError::Status(status.as_u16()));
    }
    let body = resp.bytes().await.map_err(|e| CatalogError::Http(e.to_string()))?;
    decode_catalog(&body)
}

/// Parse a catalog document into its records.
pub fn decode_catalog(body: &[u8]) -> CatalogResult<Vec<Record>> {
    let cat: Catalog = serde_json::from_slice(body).map_err(|e| CatalogError::Decode(e.to_string()))?;
    Ok(cat.products)
}

// ----------------- Mock implementation -----------------

/// In-memory source for tests: serves `records`, or `error` when set.
#[derive(Default)]
pub struct MockApi {
    pub records: Vec<Record>,
    pub error: Option<CatalogError>,
}

impl MockApi {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records, error: None }
    }

    pub fn failing(error: CatalogError) -> Self {
        Self { records: Vec::new(), error: Some(error) }
    }
}

#[async_trait::async_trait]
impl CatalogApi for MockApi {
    async fn fetch(&self) -> CatalogResult<Vec<Record>> {
        match &self.error {
            Some(e) => Err(e.clone()),
            None => Ok(self.records.clone()),
        }
    }

    fn source(&self) -> String {
        "mock".to_string()
    }
}
