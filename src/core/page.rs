//! Page envelopes and opaque catalog items.
//!
//! # Public API
//! - [`Item`]: One record of a collection, passed through untouched
//! - [`PageEnvelope`]: The JSON body SWAPI returns for one page
//! - [`Page`]: A decoded page with its page number resolved
//! - [`page_number_from_url`]: Reads the `page` query parameter

use crate::core::error::{NavigatorError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use url::Url;

/// Opaque catalog record. Only `name` is ever read by the navigator core.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Item(pub Map<String, Value>);

impl Item {
    /// Display name, empty when the record carries none
    pub fn name(&self) -> &str {
        self.0.get("name").and_then(Value::as_str).unwrap_or_default()
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Case-insensitive substring match on the name. `needle` must already be lowercase.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name().to_lowercase().contains(needle)
    }
}

impl From<Value> for Item {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Item(map),
            other => {
                let mut map = Map::new();
                map.insert("value".to_string(), other);
                Item(map)
            }
        }
    }
}

/// JSON body of one page: `{ results, next, previous, count }`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PageEnvelope {
    pub results: Vec<Item>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub count: Option<u64>,
}

impl PageEnvelope {
    pub fn from_json(url: &str, body: &str) -> Result<Self> {
        serde_json::from_str(body).map_err(|e| NavigatorError::invalid_page(url, e))
    }
}

/// One fetched page
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub url: String,
    pub items: Vec<Item>,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub count: Option<u64>,
    pub page_number: u32,
}

impl Page {
    pub fn from_envelope(url: impl Into<String>, envelope: PageEnvelope) -> Self {
        let url = url.into();
        let page_number = page_number_from_url(&url);
        Self {
            page_number,
            items: envelope.results,
            next: non_empty(envelope.next),
            previous: non_empty(envelope.previous),
            count: envelope.count,
            url,
        }
    }
}

/// Treat empty link strings like absent ones
fn non_empty(link: Option<String>) -> Option<String> {
    link.filter(|l| !l.trim().is_empty())
}

/// Page number from the `page` query parameter, defaulting to 1 when it is
/// absent, unparseable or zero.
pub fn page_number_from_url(url: &str) -> u32 {
    Url::parse(url)
        .ok()
        .and_then(|parsed| {
            parsed
                .query_pairs()
                .find(|(key, _)| key == "page")
                .and_then(|(_, value)| value.parse::<u32>().ok())
        })
        .filter(|page| *page >= 1)
        .unwrap_or(1)
}
