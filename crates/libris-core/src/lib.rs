//! libris-core: search and detail orchestration for the Open Library catalog
//!
//! This library provides:
//! - An HTTP catalog client for the search and work endpoints
//! - Normalization of loosely shaped work detail payloads
//! - Search and detail lifecycles with stale-response guards
//! - Display models for result cards and the detail view
//!
//! Front ends drive the orchestrators and render the view models.

pub mod catalog;
pub mod config;
pub mod domain;
pub mod error;
pub mod http;
pub mod normalize;
pub mod notify;
pub mod orchestration;
pub mod view;

// Re-export main types for convenience
pub use catalog::{Catalog, OpenLibraryClient};
pub use config::{CatalogConfig, ConfigError};
pub use domain::{CatalogItem, CatalogItemDetail, CoverSize, SearchField};
pub use error::{CatalogError, EnrichmentUnavailable};
pub use normalize::{normalize, TextValue};
pub use notify::{Notice, Notifier, RecordingNotifier, Severity, TracingNotifier};
pub use orchestration::{
    DetailOrchestrator, DetailPhase, DetailTicket, SearchOrchestrator, SearchPhase, SearchTicket,
};
pub use view::{headline, BookCard, BookDetailView, EnrichmentView};
