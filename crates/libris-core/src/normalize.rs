//! Detail payload normalization
//!
//! The per-work JSON resource is loosely typed: `description` and
//! `first_sentence` arrive either as a bare string or as a typed text object
//! (`{"type": "/type/text", "value": "..."}`), and `excerpts` is a list of
//! objects whose `excerpt` member may be missing. Everything here degrades to
//! "no data" instead of failing.

use crate::domain::CatalogItemDetail;
use serde_json::Value;

/// The two wire shapes of a text field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextValue<'a> {
    Plain(&'a str),
    Typed { value: Option<&'a str> },
}

impl<'a> TextValue<'a> {
    /// Classify a raw JSON value; anything that is neither a string nor an
    /// object yields `None`
    pub fn from_json(value: &'a Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(TextValue::Plain(s)),
            Value::Object(map) => Some(TextValue::Typed {
                value: map.get("value").and_then(Value::as_str),
            }),
            _ => None,
        }
    }

    pub fn text(&self) -> Option<&'a str> {
        match *self {
            TextValue::Plain(s) => Some(s),
            TextValue::Typed { value } => value,
        }
    }
}

/// Normalize a raw detail payload
pub fn normalize(raw: &Value) -> CatalogItemDetail {
    CatalogItemDetail {
        description: text_field(raw.get("description")),
        first_sentence: text_field(raw.get("first_sentence")),
        excerpt: first_excerpt(raw.get("excerpts")),
        subjects: string_items(raw.get("subjects")),
    }
}

fn text_field(value: Option<&Value>) -> Option<String> {
    value
        .and_then(TextValue::from_json)
        .and_then(|t| t.text())
        .map(String::from)
}

fn first_excerpt(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_array)
        .and_then(|excerpts| excerpts.first())
        .and_then(|first| first.get("excerpt"))
        .and_then(Value::as_str)
        .map(String::from)
}

fn string_items(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}
