//! Pagination for list and table views.
//!
//! - [`PaginationState`] - the owned `(page, page_size, total_items)` triple
//!   with clamping mutators
//! - [`PaginationView`] - the derived snapshot renderers read
//!
//! # Example
//!
//! ```
//! use campusboard::pagination::PaginationState;
//!
//! let mut state = PaginationState::new(1, 5);
//! state.set_total_items(12);
//! state.next_page();
//!
//! let view = state.view();
//! assert_eq!(view.page, 2);
//! assert_eq!((view.start_item, view.end_item), (6, 10));
//! ```

mod state;
mod view;

pub use state::{PaginationState, DEFAULT_PAGE, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
pub use view::PaginationView;
