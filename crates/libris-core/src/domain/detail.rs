//! Normalized detail record for a single catalog item

use serde::{Deserialize, Serialize};

/// Supplementary data fetched when a detail view is opened
///
/// Produced by [`crate::normalize::normalize`]; every field is already
/// reduced to a single canonical shape.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItemDetail {
    pub description: Option<String>,
    /// Opening sentence of the work
    pub first_sentence: Option<String>,
    /// First excerpt only
    pub excerpt: Option<String>,
    pub subjects: Vec<String>,
}

impl CatalogItemDetail {
    /// True when nothing beyond the base item fields is available
    pub fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.first_sentence.is_none()
            && self.excerpt.is_none()
            && self.subjects.is_empty()
    }
}
