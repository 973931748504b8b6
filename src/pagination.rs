/// Items shown per page unless the caller picks another size
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Number of pages for a view of `len` items. An empty view still has one
/// (empty) page.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    debug_assert!(page_size > 0, "page size must be positive");
    len.div_ceil(page_size).max(1)
}

/// Contiguous page of a view.
///
/// `page_number` is 1-based; the caller clamps it to `[1, total_pages]`
/// before asking. The requested window is intersected with the available
/// range, so an out-of-range page yields an empty slice rather than a panic.
pub fn slice<T>(items: &[T], page_size: usize, page_number: usize) -> (&[T], usize) {
    let pages = total_pages(items.len(), page_size);
    let start = (page_number.saturating_sub(1) * page_size).min(items.len());
    let end = (start + page_size).min(items.len());
    (&items[start..end], pages)
}
