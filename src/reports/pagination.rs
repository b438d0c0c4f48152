//! Page-at-a-time listing

/// Default number of items per page
pub const DEFAULT_PAGE_SIZE: usize = 15;

/// One page of a listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub has_more: bool,
}

/// Slice out 1-based page `page` of `items`.
///
/// Page 0 is treated as page 1; a page past the end is empty. A page size
/// of 0 falls back to [`DEFAULT_PAGE_SIZE`].
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: usize) -> Page<T> {
    let page = page.max(1);
    let page_size = if page_size == 0 { DEFAULT_PAGE_SIZE } else { page_size };
    let total_items = items.len();
    let total_pages = total_items.div_ceil(page_size);

    let start = (page - 1).saturating_mul(page_size).min(total_items);
    let items: Vec<T> = items.into_iter().skip(start).take(page_size).collect();

    Page {
        has_more: start + items.len() < total_items,
        items,
        page,
        total_pages,
        total_items,
    }
}
