//! Detail view lifecycle
//!
//! State transitions:
//! ```text
//! Closed → Loading → Loaded
//!             ↓
//!        Unavailable
//! open(): any state → Loading      close(): any state → Closed
//! ```
//!
//! `Unavailable` is not an error for the user: the base item fields still
//! render, only the enrichment is missing.

use serde_json::Value;

use crate::catalog::Catalog;
use crate::domain::{CatalogItem, CatalogItemDetail};
use crate::normalize::normalize;

/// Phase of the detail view
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DetailPhase {
    #[default]
    Closed,
    Loading,
    Loaded(CatalogItemDetail),
    Unavailable,
}

/// Handle for one issued detail fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailTicket {
    generation: u64,
    key: String,
}

impl DetailTicket {
    /// Work key the fetch was issued for
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Owns the selected item and its enrichment
#[derive(Debug, Default)]
pub struct DetailOrchestrator {
    selected: Option<CatalogItem>,
    phase: DetailPhase,
    generation: u64,
}

impl DetailOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select an item and enter `Loading`
    ///
    /// Any detail of a previous selection is discarded, and reopening the
    /// same item starts a fresh fetch.
    pub fn open(&mut self, item: CatalogItem) -> DetailTicket {
        self.generation += 1;
        let ticket = DetailTicket {
            generation: self.generation,
            key: item.key.clone(),
        };
        tracing::debug!("Opening detail for {}", item.key);
        self.selected = Some(item);
        self.phase = DetailPhase::Loading;
        ticket
    }

    /// Apply a fetched payload
    ///
    /// Returns `false` if the ticket no longer matches the selection.
    pub fn resolve(&mut self, ticket: DetailTicket, raw: Option<Value>) -> bool {
        let current = self
            .selected
            .as_ref()
            .is_some_and(|item| item.key == ticket.key);
        if !current || ticket.generation != self.generation || self.phase != DetailPhase::Loading
        {
            tracing::debug!("Dropping stale detail for {}", ticket.key);
            return false;
        }

        self.phase = match raw {
            Some(raw) => DetailPhase::Loaded(normalize(&raw)),
            None => DetailPhase::Unavailable,
        };
        true
    }

    /// Open `item` and fetch its detail from `catalog`
    pub async fn load<C: Catalog>(&mut self, catalog: &C, item: CatalogItem) -> &DetailPhase {
        let ticket = self.open(item);
        let raw = catalog.fetch_detail(ticket.key()).await;
        self.resolve(ticket, raw);
        &self.phase
    }

    /// Close the view and forget the selection
    pub fn close(&mut self) {
        self.generation += 1;
        self.selected = None;
        self.phase = DetailPhase::Closed;
    }

    pub fn selected(&self) -> Option<&CatalogItem> {
        self.selected.as_ref()
    }

    pub fn phase(&self) -> &DetailPhase {
        &self.phase
    }

    /// Normalized detail, once loaded
    pub fn detail(&self) -> Option<&CatalogItemDetail> {
        match &self.phase {
            DetailPhase::Loaded(detail) => Some(detail),
            _ => None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.phase == DetailPhase::Loading
    }
}
