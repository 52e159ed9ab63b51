//! Catalog types
//!
//! The record shape served by the catalog endpoint, the defensive decode step
//! that turns an arbitrary JSON body into records, and the collection state
//! published while loading.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use tracing::{debug, warn};

/// Shown in place of a missing or empty title
pub const UNTITLED: &str = "Untitled";

/// Shown in place of a missing page count
pub const UNKNOWN_PAGE_COUNT: &str = "Unknown";

/// Stable list key for a catalog item
///
/// The wire carries either a number or a string; both are kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Create an id from any displayable value
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the id as text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One book in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: ItemId,
    pub title: Option<String>,
    pub isbn: String,
    pub page_count: Option<u32>,
    pub authors: Vec<String>,
}

impl CatalogItem {
    /// Create an item with only the required fields set
    pub fn new(id: impl Into<String>, isbn: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(id),
            title: None,
            isbn: isbn.into(),
            page_count: None,
            authors: Vec::new(),
        }
    }

    /// Set the title
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the page count
    #[must_use]
    pub fn with_page_count(mut self, pages: u32) -> Self {
        self.page_count = Some(pages);
        self
    }

    /// Set the authors
    #[must_use]
    pub fn with_authors<I, S>(mut self, authors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.authors = authors.into_iter().map(Into::into).collect();
        self
    }

    /// Title for display, falling back to [`UNTITLED`]
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => UNTITLED,
        }
    }

    /// Page count for display; zero counts as unknown
    pub fn page_count_label(&self) -> String {
        match self.page_count {
            Some(pages) if pages > 0 => pages.to_string(),
            _ => UNKNOWN_PAGE_COUNT.to_string(),
        }
    }

    /// Authors joined for display
    pub fn authors_label(&self) -> String {
        self.authors.join(", ")
    }
}

// ============================================================================
// Wire decoding
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WireScalar {
    Number(serde_json::Number),
    Text(String),
}

impl WireScalar {
    fn into_string(self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireItem {
    id: Option<WireScalar>,
    title: Option<String>,
    isbn: Option<WireScalar>,
    page_count: Option<u32>,
    authors: Option<Vec<String>>,
}

/// Decode a catalog response body into items
///
/// Never fails. A body that is not an array yields no items; array entries
/// that cannot be read as a book, or that carry no id, are skipped. A missing
/// author list becomes an empty one.
pub fn decode_catalog(body: Value) -> Vec<CatalogItem> {
    let entries = match body {
        Value::Array(entries) => entries,
        Value::Null => {
            debug!("Catalog body was null, treating as empty");
            return Vec::new();
        }
        other => {
            warn!(
                kind = json_kind(&other),
                "Catalog body is not an array, treating as empty"
            );
            return Vec::new();
        }
    };

    let total = entries.len();
    let items: Vec<CatalogItem> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| decode_item(index, entry))
        .collect();

    if items.len() < total {
        warn!(
            kept = items.len(),
            skipped = total - items.len(),
            "Dropped malformed catalog entries"
        );
    }
    items
}

fn decode_item(index: usize, entry: Value) -> Option<CatalogItem> {
    let wire: WireItem = match serde_json::from_value(entry) {
        Ok(wire) => wire,
        Err(e) => {
            warn!(index, error = %e, "Skipping unreadable catalog entry");
            return None;
        }
    };

    let Some(id) = wire.id.map(WireScalar::into_string) else {
        warn!(index, "Skipping catalog entry without an id");
        return None;
    };

    let authors = wire.authors.unwrap_or_else(|| {
        warn!(index, id = %id, "Catalog entry has no authors, using an empty list");
        Vec::new()
    });

    let isbn = wire.isbn.map(WireScalar::into_string).unwrap_or_else(|| {
        debug!(index, id = %id, "Catalog entry has no isbn");
        String::new()
    });

    Some(CatalogItem {
        id: ItemId(id),
        title: wire.title,
        isbn,
        page_count: wire.page_count,
        authors,
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ============================================================================
// Collection state
// ============================================================================

/// Where a load currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadPhase {
    /// Nothing requested yet
    Idle,
    /// Fetch in flight
    Loading,
    /// Fetch succeeded (possibly with no items)
    Ready,
    /// Fetch failed
    Errored,
}

/// Items plus loading flags, as published by the loader
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionState {
    pub items: Vec<CatalogItem>,
    pub phase: LoadPhase,
}

impl Default for CollectionState {
    fn default() -> Self {
        Self::idle()
    }
}

impl CollectionState {
    /// Nothing requested yet
    pub fn idle() -> Self {
        Self {
            items: Vec::new(),
            phase: LoadPhase::Idle,
        }
    }

    /// Fetch in flight
    pub fn loading() -> Self {
        Self {
            items: Vec::new(),
            phase: LoadPhase::Loading,
        }
    }

    /// Fetch succeeded
    pub fn ready(items: Vec<CatalogItem>) -> Self {
        Self {
            items,
            phase: LoadPhase::Ready,
        }
    }

    /// Fetch failed; no items survive
    pub fn errored() -> Self {
        Self {
            items: Vec::new(),
            phase: LoadPhase::Errored,
        }
    }

    /// Whether a fetch is in flight
    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    /// Whether the fetch failed
    pub fn has_errored(&self) -> bool {
        self.phase == LoadPhase::Errored
    }

    /// Whether the load has finished one way or the other
    pub fn is_resolved(&self) -> bool {
        matches!(self.phase, LoadPhase::Ready | LoadPhase::Errored)
    }
}
