//! Pagination of resource listings.

/// One page of a listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],

    /// Zero based index of the page.
    pub index: usize,
    pub total_pages: usize,
}

impl<'a, T> Page<'a, T> {
    pub fn has_previous(&self) -> bool {
        self.index > 0 && self.total_pages > 0
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.total_pages
    }
}

/// Returns page `index` of `items` with `per_page` items per page.
/// An out of range page has no items. A `per_page` of zero is treated as one.
pub fn paginate<T>(items: &[T], index: usize, per_page: usize) -> Page<'_, T> {
    let per_page = per_page.max(1);
    let total_pages = items.len().div_ceil(per_page);
    let start = index.saturating_mul(per_page).min(items.len());
    let end = start.saturating_add(per_page).min(items.len());

    Page {
        items: &items[start..end],
        index,
        total_pages,
    }
}

#[cfg(test)]
#[path = "./page_test.rs"]
mod page_test;
