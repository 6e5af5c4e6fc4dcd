//! Test fixtures and a canned catalog

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::PathBuf;

use libris_core::{Catalog, CatalogError, CatalogItem, SearchField};
use serde_json::{json, Value};

/// Get the path to a fixture file
#[allow(dead_code)]
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_fixtures")
        .join(name)
}

/// Load a fixture file as a string
#[allow(dead_code)]
pub fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", name))
}

/// Load a mock API response fixture as JSON
#[allow(dead_code)]
pub fn load_response_fixture(name: &str) -> Value {
    let text = load_fixture(&format!("responses/{}", name));
    serde_json::from_str(&text).unwrap_or_else(|e| panic!("Bad JSON in {}: {}", name, e))
}

/// Search response body with `n` Hobbit-like records
#[allow(dead_code)]
pub fn hobbit_search_response(n: usize) -> Value {
    let docs: Vec<Value> = (0..n)
        .map(|i| {
            json!({
                "key": format!("/works/OL{}W", 27482 + i),
                "title": format!("The Hobbit ({})", i + 1),
                "author_name": ["J.R.R. Tolkien"],
                "first_publish_year": 1937,
                "cover_i": 14627509 + i as i64,
                "subject": ["Fantasy", "Dragons", "Wizards", "Dwarves"]
            })
        })
        .collect();
    json!({ "numFound": n, "start": 0, "docs": docs })
}

/// Records from [`hobbit_search_response`]
#[allow(dead_code)]
pub fn hobbit_items(n: usize) -> Vec<CatalogItem> {
    let docs = hobbit_search_response(n)["docs"].clone();
    serde_json::from_value(docs).expect("fixture records deserialize")
}

/// Catalog with canned answers that counts its calls
#[allow(dead_code)]
pub struct FakeCatalog {
    pub search_outcome: Result<Vec<CatalogItem>, CatalogError>,
    pub details: HashMap<String, Value>,
    pub search_calls: Cell<usize>,
    pub detail_calls: Cell<usize>,
    pub last_search: RefCell<Option<(String, SearchField)>>,
}

#[allow(dead_code)]
impl FakeCatalog {
    pub fn returning(items: Vec<CatalogItem>) -> Self {
        Self::with_outcome(Ok(items))
    }

    pub fn failing(error: CatalogError) -> Self {
        Self::with_outcome(Err(error))
    }

    fn with_outcome(outcome: Result<Vec<CatalogItem>, CatalogError>) -> Self {
        Self {
            search_outcome: outcome,
            details: HashMap::new(),
            search_calls: Cell::new(0),
            detail_calls: Cell::new(0),
            last_search: RefCell::new(None),
        }
    }

    pub fn with_detail(mut self, key: &str, raw: Value) -> Self {
        self.details.insert(key.to_string(), raw);
        self
    }
}

impl Catalog for FakeCatalog {
    async fn search(
        &self,
        query: &str,
        field: SearchField,
    ) -> Result<Vec<CatalogItem>, CatalogError> {
        self.search_calls.set(self.search_calls.get() + 1);
        *self.last_search.borrow_mut() = Some((query.to_string(), field));
        self.search_outcome.clone()
    }

    async fn fetch_detail(&self, key: &str) -> Option<Value> {
        self.detail_calls.set(self.detail_calls.get() + 1);
        self.details.get(key).cloned()
    }
}
