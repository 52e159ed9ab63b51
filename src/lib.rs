//! # BookStack
//!
//! Catalog loading and client-side paging for the BookStack reading list.
//!
//! ## Features
//!
//! - **One-shot catalog load**: the whole collection is fetched in a single request
//! - **Defensive decoding**: malformed records are skipped or defaulted, never fatal
//! - **Page window**: next/previous/jump plus infinite-scroll advance, clamped to bounds
//! - **Cancellable mounts**: an abandoned screen cannot be updated by a late fetch
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bookstack::catalog::{CatalogLoader, HttpCatalogSource};
//! use bookstack::alert::TracingAlertSink;
//! use bookstack::session::StaticSession;
//! use bookstack::view::{HomeScreen, TapCounter};
//! use bookstack::{ClientConfig, Result};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ClientConfig::default();
//!     let source = HttpCatalogSource::from_config(&config)?;
//!     let loader = CatalogLoader::new(Arc::new(source), Arc::new(TracingAlertSink));
//!
//!     let session = Arc::new(StaticSession::new("ada"));
//!     let mut screen = HomeScreen::mount(loader, session, TapCounter::new(), config.page_size)?;
//!     screen.loaded().await?;
//!
//!     loop {
//!         let page = screen.snapshot();
//!         println!("{} items on page {}", page.visible_items.len(), page.page_label());
//!         if !screen.on_next() {
//!             break;
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                       HomeScreen                         │
//! │  snapshot()  on_next()  on_previous()  on_scroll()       │
//! └──────────────────────────────────────────────────────────┘
//!                │                             │
//! ┌──────────────┴──────────────┐ ┌────────────┴─────────────┐
//! │        CatalogLoader        │ │        PageWindow        │
//! ├─────────────────────────────┤ ├──────────────────────────┤
//! │ CatalogSource (HTTP)        │ │ current_slice            │
//! │ AlertSink                   │ │ load_more / go_to_page   │
//! │ CancellationToken           │ │ next / previous          │
//! └─────────────────────────────┘ └──────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// User-visible alerts
pub mod alert;

/// Single-shot HTTP client
pub mod http;

/// Catalog records and the one-shot loader
pub mod catalog;

/// Client-side page window
pub mod pagination;

/// Session collaborator
pub mod session;

/// Home screen model
pub mod view;

/// Client configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use catalog::{CatalogItem, CatalogLoader, CollectionState, LoadPhase};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use pagination::PageWindow;
pub use view::{HomeScreen, HomeSnapshot};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
