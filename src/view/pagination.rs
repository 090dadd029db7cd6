//! Pagination arithmetic for the listing.

use crate::utils::config::DEFAULT_PAGE_SIZE;

/// One page of rows
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],

    /// 1-based page number after clamping
    pub number: usize,

    /// Always at least 1, even for an empty listing
    pub total_pages: usize,

    pub total_items: usize,
}

impl<T> Page<'_, T> {
    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }
}

/// Fixed page size paginator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_size: usize,
}

impl Pagination {
    /// A zero page size is bumped to 1
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self, total_items: usize) -> usize {
        total_items.div_ceil(self.page_size).max(1)
    }

    /// Clamp a requested 1-based page into range
    pub fn clamp(&self, page: usize, total_items: usize) -> usize {
        page.clamp(1, self.total_pages(total_items))
    }

    pub fn next(&self, page: usize, total_items: usize) -> usize {
        self.clamp(page.saturating_add(1), total_items)
    }

    pub fn previous(&self, page: usize, total_items: usize) -> usize {
        self.clamp(page.saturating_sub(1), total_items)
    }

    /// Slice out page `page` (clamped)
    pub fn page<'a, T>(&self, items: &'a [T], page: usize) -> Page<'a, T> {
        let total_items = items.len();
        let number = self.clamp(page, total_items);
        let start = (number - 1) * self.page_size;
        let end = (start + self.page_size).min(total_items);

        Page {
            items: &items[start.min(total_items)..end],
            number,
            total_pages: self.total_pages(total_items),
            total_items,
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        let pagination = Pagination::default();
        assert_eq!(pagination.total_pages(0), 1);
        assert_eq!(pagination.total_pages(10), 1);
        assert_eq!(pagination.total_pages(11), 2);
        assert_eq!(pagination.total_pages(60), 6);
    }

    #[test]
    fn test_page_slices() {
        let items: Vec<u32> = (1..=25).collect();
        let pagination = Pagination::new(10);

        let first = pagination.page(&items, 1);
        assert_eq!(first.items, &items[0..10]);
        assert!(!first.has_previous());
        assert!(first.has_next());

        let last = pagination.page(&items, 3);
        assert_eq!(last.items, &[21, 22, 23, 24, 25]);
        assert_eq!(last.total_pages, 3);
        assert!(!last.has_next());
    }

    #[test]
    fn test_page_is_clamped() {
        let items: Vec<u32> = (1..=25).collect();
        let pagination = Pagination::new(10);

        assert_eq!(pagination.page(&items, 0).number, 1);
        assert_eq!(pagination.page(&items, 99).number, 3);
        assert_eq!(pagination.next(3, items.len()), 3);
        assert_eq!(pagination.previous(1, items.len()), 1);
    }

    #[test]
    fn test_empty_listing() {
        let items: Vec<u32> = Vec::new();
        let page = Pagination::default().page(&items, 4);

        assert!(page.items.is_empty());
        assert_eq!(page.number, 1);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_zero_page_size() {
        assert_eq!(Pagination::new(0).page_size(), 1);
    }
}
