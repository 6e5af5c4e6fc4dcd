//! Search result records as returned by the catalog search endpoint

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Field a search query is matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    #[default]
    Title,
    Author,
    Subject,
}

impl SearchField {
    /// Query parameter name used by the search endpoint
    pub fn as_param(&self) -> &'static str {
        match self {
            SearchField::Title => "title",
            SearchField::Author => "author",
            SearchField::Subject => "subject",
        }
    }

    pub fn all() -> &'static [SearchField] {
        &[SearchField::Title, SearchField::Author, SearchField::Subject]
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

impl FromStr for SearchField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(SearchField::Title),
            "author" => Ok(SearchField::Author),
            "subject" => Ok(SearchField::Subject),
            other => Err(format!("Unknown search field: {}", other)),
        }
    }
}

/// Cover image size code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoverSize {
    Small,
    /// Used for result cards
    Medium,
    /// Used for the detail view
    Large,
}

impl CoverSize {
    pub fn code(&self) -> &'static str {
        match self {
            CoverSize::Small => "S",
            CoverSize::Medium => "M",
            CoverSize::Large => "L",
        }
    }
}

/// Build a cover image URL, or `None` when the record has no cover
pub fn cover_image_url(covers_url: &str, cover_id: Option<i64>, size: CoverSize) -> Option<String> {
    cover_id.map(|id| {
        format!(
            "{}/b/id/{}-{}.jpg",
            covers_url.trim_end_matches('/'),
            id,
            size.code()
        )
    })
}

/// A single search hit
///
/// Every field except `key` and `title` is optional on the wire. Missing
/// lists come back empty rather than failing the record.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CatalogItem {
    /// Work key, e.g. `/works/OL45804W`
    pub key: String,
    pub title: String,
    #[serde(rename = "author_name", default, deserialize_with = "string_list")]
    pub author_names: Vec<String>,
    #[serde(default)]
    pub first_publish_year: Option<i32>,
    #[serde(rename = "cover_i", default)]
    pub cover_id: Option<i64>,
    #[serde(rename = "subject", default, deserialize_with = "string_list")]
    pub subjects: Vec<String>,
    #[serde(rename = "isbn", default, deserialize_with = "string_list")]
    pub isbns: Vec<String>,
    #[serde(rename = "publisher", default, deserialize_with = "string_list")]
    pub publishers: Vec<String>,
    #[serde(rename = "publish_date", default, deserialize_with = "string_list")]
    pub publish_dates: Vec<String>,
    #[serde(rename = "language", default, deserialize_with = "string_list")]
    pub languages: Vec<String>,
    #[serde(rename = "number_of_pages_median", default)]
    pub median_page_count: Option<u32>,
}

impl CatalogItem {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            author_names: Vec::new(),
            first_publish_year: None,
            cover_id: None,
            subjects: Vec::new(),
            isbns: Vec::new(),
            publishers: Vec::new(),
            publish_dates: Vec::new(),
            languages: Vec::new(),
            median_page_count: None,
        }
    }

    pub fn with_authors(mut self, authors: &[&str]) -> Self {
        self.author_names = authors.iter().map(|a| a.to_string()).collect();
        self
    }

    pub fn with_cover(mut self, cover_id: i64) -> Self {
        self.cover_id = Some(cover_id);
        self
    }

    pub fn with_subjects(mut self, subjects: &[&str]) -> Self {
        self.subjects = subjects.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_first_publish_year(mut self, year: i32) -> Self {
        self.first_publish_year = Some(year);
        self
    }

    pub fn cover_url(&self, covers_url: &str, size: CoverSize) -> Option<String> {
        cover_image_url(covers_url, self.cover_id, size)
    }
}

/// Accepts an array (keeping only string elements), `null`, or nothing
fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                serde_json::Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        Some(serde_json::Value::String(s)) => vec![s],
        _ => Vec::new(),
    })
}
