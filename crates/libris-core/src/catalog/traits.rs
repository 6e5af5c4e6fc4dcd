//! The catalog interface the orchestrators are driven through

use crate::domain::{CatalogItem, SearchField};
use crate::error::CatalogError;
use serde_json::Value;

/// Read-only access to a bibliographic catalog
///
/// Implemented over HTTP by [`super::OpenLibraryClient`]; tests substitute
/// canned implementations.
#[allow(async_fn_in_trait)]
pub trait Catalog {
    /// Run a search. The caller guarantees `query` is non-empty after trimming.
    async fn search(&self, query: &str, field: SearchField)
        -> Result<Vec<CatalogItem>, CatalogError>;

    /// Fetch the raw detail payload for a work key. Failures are absorbed and
    /// reported as `None`.
    async fn fetch_detail(&self, key: &str) -> Option<Value>;
}
