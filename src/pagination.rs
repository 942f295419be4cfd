//! Page navigation data for list templates.

use serde::Serialize;

/// Page sizes offered by the list screen.
pub const PAGE_SIZES: [usize; 4] = [10, 25, 50, 100];
pub const DEFAULT_PER_PAGE: usize = PAGE_SIZES[0];

/// Returns `per_page` if it is one of [`PAGE_SIZES`], the default otherwise.
pub fn normalize_per_page(per_page: Option<usize>) -> usize {
    per_page
        .filter(|size| PAGE_SIZES.contains(size))
        .unwrap_or(DEFAULT_PER_PAGE)
}

/// Page numbers to render, `None` marking an ellipsis gap.
///
/// Keeps `edge` pages at both ends and `around` pages on each side of the
/// current one.
fn page_links(
    total_pages: usize,
    current: usize,
    edge: usize,
    around: usize,
) -> Vec<Option<usize>> {
    if total_pages == 0 {
        return Vec::new();
    }

    let window_start = current.saturating_sub(around).max(1);
    let window_end = (current + around).min(total_pages);

    let mut links = Vec::new();
    let mut last_shown = 0;
    for page in 1..=total_pages {
        let shown = page <= edge
            || page > total_pages.saturating_sub(edge)
            || (window_start..=window_end).contains(&page);
        if !shown {
            continue;
        }
        if page > last_shown + 1 {
            links.push(None);
        }
        links.push(Some(page));
        last_shown = page;
    }

    links
}

#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    pub page: usize,
    pub per_page: usize,
    /// Size of the full matching set as reported by the API.
    pub total: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, per_page: usize, total: usize) -> Self {
        let current_page = current_page.max(1);
        let total_pages = total.div_ceil(per_page.max(1));

        Self {
            items,
            pages: page_links(total_pages, current_page, 2, 2),
            page: current_page,
            per_page,
            total,
        }
    }
}
