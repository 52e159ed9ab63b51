//! Page window controller
//!
//! Holds the 1-based page index over an in-memory collection and clamps every
//! navigation to the pages that collection actually has. The collection
//! itself is passed in on each call; the window never owns items.

use crate::error::{Error, Result};
use std::ops::Range;
use tracing::debug;

/// Default number of items per page
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Visible window over a fully loaded collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    page_index: usize,
    page_size: usize,
}

impl Default for PageWindow {
    fn default() -> Self {
        Self {
            page_index: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageWindow {
    /// Create a window on page 1
    ///
    /// A zero page size is rejected.
    pub fn new(page_size: usize) -> Result<Self> {
        if page_size == 0 {
            return Err(Error::invalid_value("page_size", "must be at least 1"));
        }
        Ok(Self {
            page_index: 1,
            page_size,
        })
    }

    /// Current 1-based page index
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Items per page
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages needed for `total_items`
    pub fn total_pages(&self, total_items: usize) -> usize {
        total_items.div_ceil(self.page_size)
    }

    /// Index range of the current page, clipped to `total_items`
    pub fn range(&self, total_items: usize) -> Range<usize> {
        let start = ((self.page_index - 1) * self.page_size).min(total_items);
        let end = (self.page_index * self.page_size).min(total_items);
        start..end
    }

    /// Items on the current page
    pub fn current_slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.range(items.len())]
    }

    /// Advance one page if items remain past the current one
    ///
    /// Returns whether the page index changed. Once the last page is reached
    /// this is a no-op however often it is called.
    pub fn load_more<T>(&mut self, items: &[T]) -> bool {
        if self.page_index * self.page_size < items.len() {
            self.page_index += 1;
            debug!(page = self.page_index, "load more advanced window");
            true
        } else {
            false
        }
    }

    /// Jump to page `page` if it exists
    ///
    /// Out-of-range targets (including 0) leave the window untouched.
    pub fn go_to_page<T>(&mut self, page: usize, items: &[T]) -> bool {
        if page >= 1 && page <= self.total_pages(items.len()) {
            let changed = page != self.page_index;
            self.page_index = page;
            if changed {
                debug!(page, "moved to page");
            }
            changed
        } else {
            false
        }
    }

    /// Move to the following page
    pub fn next<T>(&mut self, items: &[T]) -> bool {
        self.go_to_page(self.page_index + 1, items)
    }

    /// Move to the preceding page
    pub fn previous<T>(&mut self, items: &[T]) -> bool {
        match self.page_index.checked_sub(1) {
            Some(page) => self.go_to_page(page, items),
            None => false,
        }
    }

    /// Whether a following page exists
    pub fn has_next(&self, total_items: usize) -> bool {
        self.page_index < self.total_pages(total_items)
    }

    /// Whether a preceding page exists
    pub fn has_previous(&self) -> bool {
        self.page_index > 1
    }
}
