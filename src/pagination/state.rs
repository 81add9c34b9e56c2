//! Pagination state manager.
//!
//! [`PaginationState`] owns the `(page, page_size, total_items)` triple of a
//! single list view. Every mutator sanitizes its input by flooring or
//! clamping, so no invalid state is ever observable and nothing here can fail.
//!
//! Mutators return `Some(view)` when the state changed and `None` when the
//! call was a no-op. Callers use the `Some` case as their cue to refetch or
//! re-render.

use super::view::{total_pages, PaginationView};

/// Page a fresh list view starts on.
pub const DEFAULT_PAGE: u64 = 1;

/// Items per page a fresh list view requests.
pub const DEFAULT_PAGE_SIZE: u64 = 5;

/// Page sizes offered by the page-size selector.
pub const PAGE_SIZE_OPTIONS: [u64; 4] = [5, 10, 20, 50];

/// Floor a signed request to `min`.
fn at_least(n: i64, min: u64) -> u64 {
    if n < min as i64 {
        min
    } else {
        n as u64
    }
}

/// Pagination state for one list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState {
    page: u64,
    page_size: u64,
    total_items: u64,
    initial_page: u64,
    initial_page_size: u64,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE as i64, DEFAULT_PAGE_SIZE as i64)
    }
}

impl PaginationState {
    /// Create a state with `total_items = 0`.
    ///
    /// Values below 1 are floored to 1.
    pub fn new(initial_page: i64, initial_page_size: i64) -> Self {
        let initial_page = at_least(initial_page, 1);
        let initial_page_size = at_least(initial_page_size, 1);
        Self {
            page: initial_page,
            page_size: initial_page_size,
            total_items: 0,
            initial_page,
            initial_page_size,
        }
    }

    /// Create a state on page 1 with the given page size.
    pub fn with_page_size(page_size: i64) -> Self {
        Self::new(DEFAULT_PAGE as i64, page_size)
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    pub fn total_pages(&self) -> u64 {
        total_pages(self.total_items, self.page_size)
    }

    /// Zero-based index of the first item on the current page.
    pub fn offset(&self) -> u64 {
        self.view().offset()
    }

    /// Snapshot of the current state and everything derived from it.
    pub fn view(&self) -> PaginationView {
        PaginationView::compute(self.page, self.page_size, self.total_items)
    }

    /// Jump to page `n`.
    ///
    /// The page is floored at 1. It is clamped to `total_pages` only once the
    /// data source has reported a non-zero total; before that the page may
    /// grow freely.
    pub fn set_page(&mut self, n: i64) -> Option<PaginationView> {
        let mut page = at_least(n, 1);
        if self.total_items > 0 {
            page = page.min(self.total_pages());
        }
        if page == self.page {
            return None;
        }
        self.page = page;
        self.changed("set_page")
    }

    /// Change the page size and return to page 1.
    pub fn set_page_size(&mut self, n: i64) -> Option<PaginationView> {
        let page_size = at_least(n, 1);
        if page_size == self.page_size && self.page == 1 {
            return None;
        }
        self.page_size = page_size;
        self.page = 1;
        self.changed("set_page_size")
    }

    /// Record the total reported by the data source after a fetch.
    ///
    /// A zero total forces page 1; otherwise the page is clamped into the new
    /// range without jumping back to the start.
    pub fn set_total_items(&mut self, n: i64) -> Option<PaginationView> {
        let total_items = at_least(n, 0);
        let page = if total_items == 0 {
            1
        } else {
            self.page.min(total_pages(total_items, self.page_size))
        };
        if total_items == self.total_items && page == self.page {
            return None;
        }
        self.total_items = total_items;
        self.page = page;
        self.changed("set_total_items")
    }

    /// Advance one page. No-op on the last page.
    pub fn next_page(&mut self) -> Option<PaginationView> {
        if self.page >= self.total_pages() {
            return None;
        }
        self.page += 1;
        self.changed("next_page")
    }

    /// Go back one page. No-op on the first page.
    pub fn previous_page(&mut self) -> Option<PaginationView> {
        if self.page <= 1 {
            return None;
        }
        self.page -= 1;
        self.changed("previous_page")
    }

    pub fn first_page(&mut self) -> Option<PaginationView> {
        self.set_page(1)
    }

    pub fn last_page(&mut self) -> Option<PaginationView> {
        let last = self.total_pages();
        self.set_page(i64::try_from(last).unwrap_or(i64::MAX))
    }

    /// Return to the initial page and page size with no known total.
    pub fn reset(&mut self) -> Option<PaginationView> {
        if self.page == self.initial_page
            && self.page_size == self.initial_page_size
            && self.total_items == 0
        {
            return None;
        }
        self.page = self.initial_page;
        self.page_size = self.initial_page_size;
        self.total_items = 0;
        self.changed("reset")
    }

    fn changed(&self, operation: &'static str) -> Option<PaginationView> {
        let view = self.view();
        tracing::trace!(
            operation,
            page = view.page,
            page_size = view.page_size,
            total_items = view.total_items,
            "pagination changed"
        );
        Some(view)
    }
}
