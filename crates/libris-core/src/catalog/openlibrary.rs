//! Open Library catalog client
//!
//! API docs: https://openlibrary.org/dev/docs/api/search
//! Search: `/search.json?{title|author|subject}=...&limit=N`
//! Detail: `/works/OL...W.json`

use super::traits::Catalog;
use crate::config::CatalogConfig;
use crate::domain::{CatalogItem, SearchField};
use crate::error::{CatalogError, EnrichmentUnavailable};
use crate::http::HttpClient;
use serde::Deserialize;
use serde_json::Value;

/// Results requested per search; the service is never paged past this
pub const PAGE_SIZE: u32 = 24;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    docs: Option<Vec<Value>>,
    #[serde(rename = "numFound", default)]
    num_found: Option<u64>,
}

pub struct OpenLibraryClient {
    client: HttpClient,
    config: CatalogConfig,
}

impl OpenLibraryClient {
    pub fn new(config: CatalogConfig) -> Result<Self, CatalogError> {
        let client = HttpClient::new(&config.user_agent, config.timeout())?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Search endpoint URL for a query
    pub fn search_url(&self, query: &str, field: SearchField) -> String {
        format!(
            "{}/search.json?{}={}&limit={}",
            self.config.base_url.trim_end_matches('/'),
            field.as_param(),
            urlencoding::encode(query),
            PAGE_SIZE
        )
    }

    /// JSON resource for a work key
    pub fn detail_url(&self, key: &str) -> String {
        format!("{}.json", self.work_url(key))
    }

    /// Human-facing page for a work key
    pub fn work_url(&self, key: &str) -> String {
        work_url(&self.config.base_url, key)
    }

    /// Parse a search response body
    ///
    /// A body without `docs` is an empty result. Records that cannot be read
    /// as a [`CatalogItem`] are skipped.
    pub fn parse_search_response(json: &str) -> Result<Vec<CatalogItem>, CatalogError> {
        let response: SearchResponse =
            serde_json::from_str(json).map_err(|e| CatalogError::Decode {
                message: format!("Invalid search JSON: {}", e),
            })?;

        let docs = response.docs.unwrap_or_default();
        let total = docs.len();
        let items: Vec<CatalogItem> = docs
            .into_iter()
            .filter_map(|doc| match serde_json::from_value::<CatalogItem>(doc) {
                Ok(item) => Some(item),
                Err(e) => {
                    tracing::warn!("Skipping malformed search record: {}", e);
                    None
                }
            })
            .collect();

        if items.len() < total {
            tracing::debug!("Kept {} of {} search records", items.len(), total);
        }
        if let Some(found) = response.num_found {
            tracing::debug!("Catalog reports {} matches in total", found);
        }

        Ok(items)
    }

    /// Fetch the raw detail payload, reporting why it is unavailable
    pub async fn try_fetch_detail(&self, key: &str) -> Result<Value, EnrichmentUnavailable> {
        let response = self.client.get(&self.detail_url(key)).await?;

        if !response.is_success() {
            return Err(EnrichmentUnavailable::Status(response.status));
        }

        let value: Value = serde_json::from_str(&response.body)
            .map_err(|e| EnrichmentUnavailable::Malformed(e.to_string()))?;

        if !value.is_object() {
            return Err(EnrichmentUnavailable::Malformed(
                "expected a JSON object".to_string(),
            ));
        }

        Ok(value)
    }
}

impl Catalog for OpenLibraryClient {
    async fn search(
        &self,
        query: &str,
        field: SearchField,
    ) -> Result<Vec<CatalogItem>, CatalogError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(CatalogError::InvalidQuery);
        }

        let response = self.client.get(&self.search_url(query, field)).await?;

        if !response.is_success() {
            tracing::warn!("Search {}={:?} failed with status {}", field, query, response.status);
            return Err(CatalogError::Service {
                status: response.status,
            });
        }

        let items = Self::parse_search_response(&response.body)?;
        tracing::info!("Search {}={:?} returned {} records", field, query, items.len());
        Ok(items)
    }

    async fn fetch_detail(&self, key: &str) -> Option<Value> {
        match self.try_fetch_detail(key).await {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Detail for {} unavailable: {}", key, e);
                None
            }
        }
    }
}

/// Join a catalog root and a work key (`/works/OL1W` or `works/OL1W`)
pub fn work_url(base_url: &str, key: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        key.trim_start_matches('/')
    )
}
