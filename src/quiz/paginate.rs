//! Pagination arithmetic.

/// Fixed page size for all question listings.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Slice out the 1-based `page` of `items` at `per_page` items per page.
///
/// Returns the range `[(page-1)*per_page, (page-1)*per_page + per_page)`
/// clipped to the available length; empty once the start passes the end.
/// There is no bound check here: callers that want out-of-range pages to
/// fail must compare `page` against [`page_count`] themselves.
pub fn paginate<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(per_page);
    let end = start.saturating_add(per_page).min(items.len());
    if start >= items.len() {
        return &[];
    }
    &items[start..end]
}

/// Number of pages needed to hold `total` items, i.e. `ceil(total / per_page)`.
pub fn page_count(total: usize, per_page: usize) -> usize {
    total.div_ceil(per_page)
}
