//! Pagination module
//!
//! Client-side paging over a collection that was fetched in full.
//!
//! # Overview
//!
//! [`PageWindow`] tracks a single 1-based page index. Two kinds of intent
//! move it: explicit jumps (`go_to_page`, `next`, `previous`) and the
//! infinite-scroll advance (`load_more`). Both share the same index, and both
//! silently ignore targets outside the collection.

mod window;

pub use window::{PageWindow, DEFAULT_PAGE_SIZE};
