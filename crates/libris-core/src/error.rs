//! Error types for libris-core

use crate::http::HttpError;
use thiserror::Error;

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Failure of a search request
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The request never produced a response (unreachable host, timeout)
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// The service answered with a non-success status
    #[error("Catalog service returned status {status}")]
    Service { status: u16 },

    /// The service answered 2xx with a body that is not JSON
    #[error("Could not decode catalog response: {message}")]
    Decode { message: String },

    #[error("Search query is empty")]
    InvalidQuery,
}

impl CatalogError {
    pub fn is_transport(&self) -> bool {
        matches!(self, CatalogError::Transport { .. })
    }

    pub fn is_service(&self) -> bool {
        matches!(self, CatalogError::Service { .. })
    }
}

impl From<HttpError> for CatalogError {
    fn from(e: HttpError) -> Self {
        CatalogError::Transport {
            message: e.to_string(),
        }
    }
}

/// Why a detail fetch produced nothing
///
/// Only ever logged; the detail view falls back to the base item fields.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnrichmentUnavailable {
    #[error("detail resource returned status {0}")]
    Status(u16),
    #[error("detail request failed: {0}")]
    Transport(String),
    #[error("detail payload unusable: {0}")]
    Malformed(String),
}

impl From<HttpError> for EnrichmentUnavailable {
    fn from(e: HttpError) -> Self {
        EnrichmentUnavailable::Transport(e.to_string())
    }
}
