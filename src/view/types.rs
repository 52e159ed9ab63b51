//! Render model for the home screen

use crate::catalog::CatalogItem;
use serde::Serialize;

/// Scroll position (fraction of the rendered slice still below the
/// viewport) at or under which the list asks for more
pub const END_REACHED_THRESHOLD: f32 = 0.5;

/// Text shown when a resolved list has nothing to show
pub const NO_RESULTS_MESSAGE: &str = "No books found";

/// What the list shows in place of items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListPlaceholder {
    /// Items are visible
    Hidden,
    /// Spinner while the fetch is in flight
    Loading,
    /// Empty-state message
    NoResults,
}

/// Everything the host needs to draw the home screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeSnapshot {
    pub greeting: String,
    pub visible_items: Vec<CatalogItem>,
    pub is_loading: bool,
    pub has_errored: bool,
    pub page_index: usize,
    pub total_pages: usize,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    pub placeholder: ListPlaceholder,
    pub tap_count: u64,
}

impl HomeSnapshot {
    /// "current / total" label for the pagination bar
    pub fn page_label(&self) -> String {
        format!("{} / {}", self.page_index, self.total_pages)
    }
}

/// Greeting line for a signed-in user
pub fn greeting(username: &str) -> String {
    format!("Welcome, {username}!")
}
