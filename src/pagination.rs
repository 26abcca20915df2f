//! Pagination window computation for search results.
//!
//! OMDb serves results in fixed pages of ten. The control row shows at most
//! five consecutive pages centered on the current one, plus the first and
//! last page with ellipsis markers for skipped ranges, so the row stays
//! bounded no matter how many results a query has: at most seven clickable
//! targets and two ellipses.

/// Upstream page size; OMDb always returns ten summaries per page
pub const PAGE_SIZE: u32 = 10;

/// One entry in the pagination control row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEntry {
    /// A clickable page number
    Page { number: u32, is_current: bool },
    /// A skipped range between the window and a boundary page
    Ellipsis,
}

impl PageEntry {
    fn page(number: u32, current: u32) -> Self {
        PageEntry::Page {
            number,
            is_current: number == current,
        }
    }
}

/// Total page count for a result total, never less than one
pub fn total_pages(total_results: u32) -> u32 {
    total_results.div_ceil(PAGE_SIZE).max(1)
}

/// Computes the ordered window of page controls for `current_page` out of
/// `total_pages`.
///
/// The window is the five pages centered on the current one, clamped to
/// `[1, total_pages]` and pinned at the boundaries so it never shrinks below
/// five while that many pages exist. Page 1 and the last page are always
/// reachable, with an ellipsis whenever pages are skipped in between.
///
/// Pure function of its inputs; out-of-range `current_page` values are
/// clamped first.
pub fn page_window(current_page: u32, total_pages: u32) -> Vec<PageEntry> {
    let total = total_pages.max(1);
    let current = current_page.clamp(1, total);

    let mut start = current.saturating_sub(2).max(1);
    let mut end = current.saturating_add(2).min(total);

    if current <= 3 {
        start = 1;
        end = total.min(5);
    }
    if current.saturating_add(2) >= total {
        end = total;
        start = total.saturating_sub(4).max(1);
    }

    let mut window = Vec::new();

    if start > 1 {
        window.push(PageEntry::page(1, current));
        if start > 2 {
            window.push(PageEntry::Ellipsis);
        }
    }

    for number in start..=end {
        window.push(PageEntry::page(number, current));
    }

    if end < total {
        if end + 1 < total {
            window.push(PageEntry::Ellipsis);
        }
        window.push(PageEntry::page(total, current));
    }

    window
}
