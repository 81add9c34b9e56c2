//! Read-only pagination snapshot.
//!
//! [`PaginationView`] is what table renderers consume: the stored
//! `(page, page_size, total_items)` triple plus every value derived from it.

use std::ops::RangeInclusive;

/// Derived pagination values for one moment in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaginationView {
    /// Current page, 1-based
    pub page: u64,
    /// Items requested per page
    pub page_size: u64,
    /// Total items reported by the data source
    pub total_items: u64,
    /// `max(1, ceil(total_items / page_size))`
    pub total_pages: u64,
    /// 1-based index of the first item on this page (0 when empty)
    pub start_item: u64,
    /// 1-based index of the last item on this page (0 when empty)
    pub end_item: u64,
    /// A later page exists
    pub has_next: bool,
    /// An earlier page exists
    pub has_previous: bool,
}

impl PaginationView {
    /// Compute the view for a raw triple.
    ///
    /// `page_size` must already be at least 1.
    pub fn compute(page: u64, page_size: u64, total_items: u64) -> Self {
        let total_pages = total_pages(total_items, page_size);

        let (start_item, end_item) = if total_items == 0 {
            (0, 0)
        } else {
            let end = page.saturating_mul(page_size).min(total_items);
            let start = page
                .saturating_sub(1)
                .saturating_mul(page_size)
                .saturating_add(1)
                .min(end);
            (start, end)
        };

        Self {
            page,
            page_size,
            total_items,
            total_pages,
            start_item,
            end_item,
            has_next: page < total_pages,
            has_previous: page > 1,
        }
    }

    /// Zero-based index of the first item on the current page.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }

    /// Check whether the data source reported no items.
    pub fn is_empty(&self) -> bool {
        self.total_items == 0
    }

    /// Number of items shown on the current page.
    pub fn items_on_page(&self) -> u64 {
        if self.end_item == 0 {
            0
        } else {
            self.end_item - self.start_item + 1
        }
    }

    /// Page-number buttons to show, centred on the current page.
    ///
    /// The window holds `min(max_buttons, total_pages)` pages and never leaves
    /// `[1, total_pages]`. An empty range is returned for `max_buttons == 0`.
    #[allow(clippy::reversed_empty_ranges)]
    pub fn page_window(&self, max_buttons: u64) -> RangeInclusive<u64> {
        let len = max_buttons.min(self.total_pages);
        if len == 0 {
            return 1..=0;
        }

        let current = self.page.min(self.total_pages);
        let mut start = current.saturating_sub(len / 2).max(1);
        let mut end = start + len - 1;
        if end > self.total_pages {
            end = self.total_pages;
            start = end + 1 - len;
        }
        start..=end
    }
}

/// `max(1, ceil(total_items / page_size))`.
pub(crate) fn total_pages(total_items: u64, page_size: u64) -> u64 {
    total_items.div_ceil(page_size.max(1)).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_view() {
        let view = PaginationView::compute(1, 10, 0);
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.start_item, 0);
        assert_eq!(view.end_item, 0);
        assert!(!view.has_next);
        assert!(!view.has_previous);
        assert!(view.is_empty());
        assert_eq!(view.items_on_page(), 0);
    }

    #[test]
    fn test_partial_last_page() {
        let view = PaginationView::compute(3, 5, 12);
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.start_item, 11);
        assert_eq!(view.end_item, 12);
        assert_eq!(view.items_on_page(), 2);
        assert_eq!(view.offset(), 10);
    }

    #[test]
    fn test_exact_multiple() {
        let view = PaginationView::compute(2, 5, 10);
        assert_eq!(view.total_pages, 2);
        assert_eq!(view.start_item, 6);
        assert_eq!(view.end_item, 10);
        assert!(!view.has_next);
    }

    #[test]
    fn test_total_pages_helper() {
        assert_eq!(total_pages(0, 5), 1);
        assert_eq!(total_pages(1, 5), 1);
        assert_eq!(total_pages(5, 5), 1);
        assert_eq!(total_pages(6, 5), 2);
        assert_eq!(total_pages(25, 10), 3);
    }

    #[test]
    fn test_page_window_centred() {
        let view = PaginationView::compute(5, 10, 100);
        assert_eq!(view.page_window(5), 3..=7);
    }

    #[test]
    fn test_page_window_at_edges() {
        let first = PaginationView::compute(1, 10, 100);
        assert_eq!(first.page_window(5), 1..=5);

        let last = PaginationView::compute(10, 10, 100);
        assert_eq!(last.page_window(5), 6..=10);
    }

    #[test]
    fn test_page_window_fewer_pages_than_buttons() {
        let view = PaginationView::compute(2, 10, 25);
        assert_eq!(view.page_window(7), 1..=3);
    }

    #[test]
    fn test_page_window_zero_buttons() {
        let view = PaginationView::compute(2, 10, 25);
        assert!(view.page_window(0).is_empty());
    }

    #[test]
    fn test_page_window_invariants() {
        for total in [0u64, 1, 9, 10, 11, 57, 100] {
            for size in [1u64, 3, 10] {
                let pages = total_pages(total, size);
                for page in 1..=pages {
                    for buttons in 1..=8u64 {
                        let view = PaginationView::compute(page, size, total);
                        let window = view.page_window(buttons);
                        assert!(*window.start() >= 1);
                        assert!(*window.end() <= pages);
                        assert!(window.contains(&page));
                        assert_eq!(window.count() as u64, buttons.min(pages));
                    }
                }
            }
        }
    }
}
