//! Display models for result cards and the detail view
//!
//! Front ends render these directly; every fallback string and list cap
//! lives here so different front ends show the same thing.

use serde::Serialize;

use crate::catalog::work_url;
use crate::config::CatalogConfig;
use crate::domain::{CatalogItem, CoverSize};
use crate::orchestration::DetailPhase;

const UNKNOWN_AUTHOR: &str = "Unknown Author";
const UNKNOWN_PUBLISHER: &str = "Unknown Publisher";
const UNKNOWN_LANGUAGE: &str = "Unknown";

/// Result list heading
pub fn headline(has_searched: bool, query: Option<&str>) -> String {
    match (has_searched, query) {
        (true, Some(q)) if !q.is_empty() => format!("Search Results for \"{}\"", q),
        (true, _) => "Search Results".to_string(),
        (false, _) => "Search Books".to_string(),
    }
}

fn joined_or(values: &[String], limit: usize, fallback: &str) -> String {
    if values.is_empty() {
        fallback.to_string()
    } else {
        values
            .iter()
            .take(limit)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn first_n(values: &[String], limit: usize) -> Vec<String> {
    values.iter().take(limit).cloned().collect()
}

fn cover_or_placeholder(config: &CatalogConfig, item: &CatalogItem, size: CoverSize) -> String {
    item.cover_url(&config.covers_url, size)
        .unwrap_or_else(|| config.placeholder_image.clone())
}

/// A result card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookCard {
    pub key: String,
    pub title: String,
    /// First two authors, or "Unknown Author"
    pub authors: String,
    pub first_publish_year: Option<i32>,
    /// First three subjects
    pub subjects: Vec<String>,
    pub cover_url: String,
}

impl BookCard {
    pub fn from_item(item: &CatalogItem, config: &CatalogConfig) -> Self {
        Self {
            key: item.key.clone(),
            title: item.title.clone(),
            authors: joined_or(&item.author_names, 2, UNKNOWN_AUTHOR),
            first_publish_year: item.first_publish_year,
            subjects: first_n(&item.subjects, 3),
            cover_url: cover_or_placeholder(config, item, CoverSize::Medium),
        }
    }
}

/// State of the enrichment section of the detail view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum EnrichmentView {
    Loading,
    Loaded {
        description: Option<String>,
        first_sentence: Option<String>,
        excerpt: Option<String>,
    },
    /// Nothing to show beyond the base fields
    Unavailable,
}

/// The detail overlay for one item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookDetailView {
    pub title: String,
    /// First five authors, or "Unknown Author"
    pub authors: String,
    pub first_publish_year: Option<i32>,
    /// First three publishers, or "Unknown Publisher"
    pub publishers: String,
    pub page_count: Option<u32>,
    /// First three languages, or "Unknown"
    pub languages: String,
    /// First ten subjects of the search record
    pub subjects: Vec<String>,
    /// First three ISBNs
    pub isbns: Vec<String>,
    pub cover_url: String,
    /// Page for the work on the catalog site
    pub catalog_url: String,
    pub enrichment: EnrichmentView,
}

impl BookDetailView {
    pub fn new(item: &CatalogItem, phase: &DetailPhase, config: &CatalogConfig) -> Self {
        let enrichment = match phase {
            DetailPhase::Loading => EnrichmentView::Loading,
            DetailPhase::Loaded(detail) => EnrichmentView::Loaded {
                description: detail.description.clone(),
                first_sentence: detail.first_sentence.clone(),
                excerpt: detail.excerpt.clone(),
            },
            DetailPhase::Closed | DetailPhase::Unavailable => EnrichmentView::Unavailable,
        };

        Self {
            title: item.title.clone(),
            authors: joined_or(&item.author_names, 5, UNKNOWN_AUTHOR),
            first_publish_year: item.first_publish_year,
            publishers: joined_or(&item.publishers, 3, UNKNOWN_PUBLISHER),
            page_count: item.median_page_count,
            languages: joined_or(&item.languages, 3, UNKNOWN_LANGUAGE),
            subjects: first_n(&item.subjects, 10),
            isbns: first_n(&item.isbns, 3),
            cover_url: cover_or_placeholder(config, item, CoverSize::Large),
            catalog_url: work_url(&config.base_url, &item.key),
            enrichment,
        }
    }
}
