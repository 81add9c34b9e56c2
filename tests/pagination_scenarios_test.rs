//! Pagination behaviour as seen by a table view.

use campusboard::pagination::{PaginationState, PaginationView, PAGE_SIZE_OPTIONS};

fn assert_view(view: PaginationView, page: u64, pages: u64, start: u64, end: u64) {
    assert_eq!(view.page, page, "page");
    assert_eq!(view.total_pages, pages, "total_pages");
    assert_eq!(view.start_item, start, "start_item");
    assert_eq!(view.end_item, end, "end_item");
    assert_eq!(view.has_next, page < pages, "has_next");
    assert_eq!(view.has_previous, page > 1, "has_previous");
}

#[test]
fn test_twelve_items_walkthrough() {
    let mut state = PaginationState::new(1, 5);

    let view = state.set_total_items(12).expect("total changed");
    assert_view(view, 1, 3, 1, 5);

    state.next_page();
    let view = state.next_page().expect("moved to page 3");
    assert_view(view, 3, 3, 11, 12);

    assert!(state.next_page().is_none());
    assert_view(state.view(), 3, 3, 11, 12);
}

#[test]
fn test_empty_result_set() {
    let mut state = PaginationState::new(1, 10);
    state.set_total_items(0);
    assert_view(state.view(), 1, 1, 0, 0);
}

#[test]
fn test_page_size_change_returns_to_first_page() {
    let mut state = PaginationState::new(1, 10);
    state.set_total_items(25);
    state.set_page(3);

    let view = state.set_page_size(20).expect("page size changed");
    assert_view(view, 1, 2, 1, 20);
}

#[test]
fn test_page_size_selector_options() {
    for size in PAGE_SIZE_OPTIONS {
        let mut state = PaginationState::default();
        state.set_total_items(57);
        state.set_page_size(size as i64);
        state.last_page();

        let view = state.view();
        assert_eq!(view.total_pages, 57u64.div_ceil(size));
        assert_eq!(view.end_item, 57);
        assert_eq!(view.offset(), (view.page - 1) * size);
    }
}

#[test]
fn test_deleting_last_item_on_last_page_moves_back() {
    let mut state = PaginationState::new(1, 5);
    state.set_total_items(11);
    state.last_page();
    assert_eq!(state.page(), 3);

    let view = state.set_total_items(10).expect("clamped");
    assert_view(view, 2, 2, 6, 10);
}

#[test]
fn test_hostile_inputs_are_normalized() {
    let mut state = PaginationState::new(-4, 0);
    assert_eq!((state.page(), state.page_size()), (1, 1));

    state.set_total_items(-20);
    assert_eq!(state.total_items(), 0);

    state.set_page(i64::MIN);
    state.set_page_size(i64::MIN);
    assert_view(state.view(), 1, 1, 0, 0);

    state.set_total_items(i64::MAX);
    state.set_page_size(i64::MAX);
    state.last_page();
    let view = state.view();
    assert!(view.page >= 1 && view.page <= view.total_pages);
    assert!(view.start_item <= view.end_item);
}

#[test]
fn test_reset_returns_to_initial_values() {
    let mut state = PaginationState::new(2, 10);
    state.set_total_items(100);
    state.set_page_size(50);
    state.next_page();

    let view = state.reset().expect("state changed");
    assert_eq!((view.page, view.page_size, view.total_items), (2, 10, 0));
    assert!(state.reset().is_none());
}
