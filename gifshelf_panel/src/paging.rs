//! Pagination arithmetic and the visible-page window.

use gifshelf_api::types::Pagination;

/// One slot in the rendered page selector: a page button or a collapsed
/// run of hidden pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageSlot {
    /// Zero-based page index; rendered with a 1-based label.
    Page(i64),
    /// A maximal run of hidden pages, rendered as a single separator.
    Gap,
}

/// Number of selectable pages, `floor(total_count / count)`.
pub fn max_pages(paging: &Pagination) -> i64 {
    if paging.count <= 0 {
        0
    } else {
        paging.total_count / paging.count
    }
}

/// Zero-based index of the page the current offset sits on.
pub fn current_page(paging: &Pagination) -> i64 {
    if paging.count <= 0 {
        0
    } else {
        paging.offset / paging.count
    }
}

/// The "Results: X - Y of Z" summary line.
pub fn summary(paging: &Pagination) -> String {
    format!(
        "Results: {} - {} of {}",
        paging.offset,
        paging.offset + paging.count,
        paging.total_count
    )
}

/// Whether page `page` gets a button: the first three, a window of two
/// around the current page, and the trailing pages always stay visible.
fn visible(page: i64, current_page: i64, max_pages: i64) -> bool {
    page < 3
        || (page > current_page - 3 && page < current_page + 3)
        || page >= max_pages - 4
}

/// Page selector slots for `page in [0, max_pages)`, with every maximal
/// hidden run collapsed into one [`PageSlot::Gap`].
pub fn page_slots(max_pages: i64, current_page: i64) -> Vec<PageSlot> {
    let mut slots = Vec::new();
    let mut gap_open = false;
    for page in 0..max_pages {
        if visible(page, current_page, max_pages) {
            slots.push(PageSlot::Page(page));
            gap_open = false;
        } else if !gap_open {
            slots.push(PageSlot::Gap);
            gap_open = true;
        }
    }
    slots
}
