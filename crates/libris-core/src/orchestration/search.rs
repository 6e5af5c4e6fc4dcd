//! Search lifecycle
//!
//! State transitions:
//! ```text
//! Idle → Searching → Results
//!          ↑   ↓        │
//!          │ Failed     │
//!          └────────────┘   (any new submission)
//! reset(): any state → Idle
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::domain::{CatalogItem, SearchField};
use crate::error::CatalogError;
use crate::notify::{Notice, Notifier};

/// Phase of the search list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SearchPhase {
    /// No search performed yet
    #[default]
    Idle,
    /// Request in flight
    Searching,
    /// Zero or more records loaded
    Results,
    /// Transport or service error
    Failed,
}

impl std::fmt::Display for SearchPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchPhase::Idle => write!(f, "idle"),
            SearchPhase::Searching => write!(f, "searching"),
            SearchPhase::Results => write!(f, "results"),
            SearchPhase::Failed => write!(f, "failed"),
        }
    }
}

/// Handle for one issued search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
    query: String,
    field: SearchField,
}

impl SearchTicket {
    /// Trimmed query the request was issued with
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn field(&self) -> SearchField {
        self.field
    }
}

/// Owns the result list and its loading/error state
pub struct SearchOrchestrator<N: Notifier> {
    phase: SearchPhase,
    items: Vec<CatalogItem>,
    query: Option<String>,
    field: SearchField,
    error: Option<CatalogError>,
    has_searched: bool,
    generation: u64,
    notifier: N,
}

impl<N: Notifier> SearchOrchestrator<N> {
    pub fn new(notifier: N) -> Self {
        Self {
            phase: SearchPhase::Idle,
            items: Vec::new(),
            query: None,
            field: SearchField::default(),
            error: None,
            has_searched: false,
            generation: 0,
            notifier,
        }
    }

    /// Start a search
    ///
    /// Returns `None` (and changes nothing) for an empty or whitespace-only
    /// query. Otherwise the previous results are cleared right away and the
    /// returned ticket must be handed to [`Self::complete`].
    pub fn begin(&mut self, query: &str, field: SearchField) -> Option<SearchTicket> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }

        self.generation += 1;
        self.phase = SearchPhase::Searching;
        self.items.clear();
        self.error = None;
        self.query = Some(query.to_string());
        self.field = field;
        self.has_searched = true;

        tracing::debug!("Search #{} started: {}={:?}", self.generation, field, query);

        Some(SearchTicket {
            generation: self.generation,
            query: query.to_string(),
            field,
        })
    }

    /// Apply the outcome of a search
    ///
    /// Returns `false` when the ticket belongs to a superseded request; the
    /// outcome is then dropped without touching state or notifying.
    pub fn complete(
        &mut self,
        ticket: SearchTicket,
        outcome: Result<Vec<CatalogItem>, CatalogError>,
    ) -> bool {
        if ticket.generation != self.generation || self.phase != SearchPhase::Searching {
            tracing::debug!(
                "Dropping stale search #{} (current #{})",
                ticket.generation,
                self.generation
            );
            return false;
        }

        match outcome {
            Ok(items) => {
                let notice = if items.is_empty() {
                    Notice::NoResults {
                        query: ticket.query,
                    }
                } else {
                    Notice::SearchCompleted {
                        query: ticket.query,
                        count: items.len(),
                    }
                };
                self.items = items;
                self.phase = SearchPhase::Results;
                self.notifier.notify(notice);
            }
            Err(e) => {
                tracing::warn!("Search failed: {}", e);
                self.items.clear();
                self.error = Some(e);
                self.phase = SearchPhase::Failed;
                self.notifier.notify(Notice::SearchFailed);
            }
        }

        true
    }

    /// Run a full search cycle against `catalog`
    ///
    /// Returns `false` if the query was empty and no request was made.
    pub async fn submit<C: Catalog>(
        &mut self,
        catalog: &C,
        query: &str,
        field: SearchField,
    ) -> bool {
        let Some(ticket) = self.begin(query, field) else {
            return false;
        };
        let outcome = catalog.search(ticket.query(), ticket.field()).await;
        self.complete(ticket, outcome);
        true
    }

    /// Return to the start screen
    pub fn reset(&mut self) {
        self.generation += 1;
        self.phase = SearchPhase::Idle;
        self.items.clear();
        self.query = None;
        self.error = None;
        self.has_searched = false;
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Record at a 0-based position in the current results
    pub fn item(&self, index: usize) -> Option<&CatalogItem> {
        self.items.get(index)
    }

    /// Query of the most recent search, if any
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn field(&self) -> SearchField {
        self.field
    }

    pub fn error(&self) -> Option<&CatalogError> {
        self.error.as_ref()
    }

    pub fn has_searched(&self) -> bool {
        self.has_searched
    }

    /// True while a request is in flight; front ends disable submit
    pub fn is_loading(&self) -> bool {
        self.phase == SearchPhase::Searching
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }
}

impl<N: Notifier + Default> Default for SearchOrchestrator<N> {
    fn default() -> Self {
        Self::new(N::default())
    }
}
