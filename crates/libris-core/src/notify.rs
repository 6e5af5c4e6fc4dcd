//! User-facing notifications emitted by the search lifecycle
//!
//! Notifications are observational only. The orchestrator receives a
//! [`Notifier`] at construction so front ends (and tests) decide where
//! notices go.

use serde::{Deserialize, Serialize};

/// Visual weight of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Destructive,
}

/// A toast-style notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notice {
    /// A search returned one or more records
    SearchCompleted { query: String, count: usize },
    /// A search succeeded with zero records
    NoResults { query: String },
    /// The search request failed
    SearchFailed,
}

impl Notice {
    pub fn title(&self) -> &'static str {
        match self {
            Notice::SearchCompleted { .. } => "Search completed",
            Notice::NoResults { .. } => "No books found",
            Notice::SearchFailed => "Search failed",
        }
    }

    pub fn description(&self) -> String {
        match self {
            Notice::SearchCompleted { query, count } => {
                format!("Found {} books for \"{}\"", count, query)
            }
            Notice::NoResults { query } => format!(
                "No results found for \"{}\". Try a different search term.",
                query
            ),
            Notice::SearchFailed => {
                "There was an error searching for books. Please try again.".to_string()
            }
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Notice::SearchCompleted { .. } => Severity::Info,
            Notice::NoResults { .. } | Notice::SearchFailed => Severity::Destructive,
        }
    }
}

/// Sink for notices
pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}

/// Writes notices to the tracing log
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&mut self, notice: Notice) {
        match notice.severity() {
            Severity::Info => tracing::info!("{}: {}", notice.title(), notice.description()),
            Severity::Destructive => {
                tracing::warn!("{}: {}", notice.title(), notice.description())
            }
        }
    }
}

/// Keeps every notice in order
#[derive(Debug, Default, Clone)]
pub struct RecordingNotifier {
    pub notices: Vec<Notice>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&Notice> {
        self.notices.last()
    }

    /// Drain recorded notices
    pub fn take(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}
