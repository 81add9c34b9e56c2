//! Plain-text rendering of a fetched page.

use crate::pagination::PaginationView;

/// `Showing <start>-<end> of <total> (page <p>/<n>)`.
pub fn format_footer(view: &PaginationView) -> String {
    format!(
        "Showing {}-{} of {} (page {}/{})",
        view.start_item, view.end_item, view.total_items, view.page, view.total_pages
    )
}

/// One line per item, then the footer.
pub fn format_listing<I>(name: &str, lines: I, view: &PaginationView) -> String
where
    I: IntoIterator<Item = String>,
{
    let mut out: Vec<String> = lines.into_iter().collect();
    if out.is_empty() {
        out.push(format!("No {} found.", name));
    }
    out.push(format_footer(view));
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer() {
        let view = PaginationView::compute(3, 5, 12);
        assert_eq!(format_footer(&view), "Showing 11-12 of 12 (page 3/3)");
    }

    #[test]
    fn test_footer_empty() {
        let view = PaginationView::compute(1, 5, 0);
        assert_eq!(format_footer(&view), "Showing 0-0 of 0 (page 1/1)");
    }

    #[test]
    fn test_listing() {
        let view = PaginationView::compute(1, 5, 2);
        let out = format_listing(
            "tasks",
            vec!["#1 Draft".to_string(), "#2 Review".to_string()],
            &view,
        );
        assert_eq!(out, "#1 Draft\n#2 Review\nShowing 1-2 of 2 (page 1/1)");
    }

    #[test]
    fn test_listing_empty() {
        let view = PaginationView::compute(1, 5, 0);
        let out = format_listing("scores", Vec::new(), &view);
        assert_eq!(out, "No scores found.\nShowing 0-0 of 0 (page 1/1)");
    }
}
