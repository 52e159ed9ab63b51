//! Catalog module
//!
//! Loads the remote book catalog in a single request.
//!
//! # Overview
//!
//! - [`CatalogItem`] - one book, decoded defensively from the wire
//! - [`CollectionState`] - items plus the load phase
//! - [`CatalogLoader`] - one-shot fetch with cancellation
//! - [`CatalogSource`] - the fetch seam; [`HttpCatalogSource`] in production

mod loader;
mod types;

pub use loader::{CatalogLoader, CatalogSource, HttpCatalogSource, LoadOutcome};
pub use types::{
    decode_catalog, CatalogItem, CollectionState, ItemId, LoadPhase, UNKNOWN_PAGE_COUNT,
    UNTITLED,
};
