/// Offset pagination parameters
///
/// # Example
/// ```
/// use entity_core_db::repository::pagination::PageRequest;
///
/// let first = PageRequest::new(20, 0);
/// let third = PageRequest::for_page(20, 3);
/// assert_eq!(third.offset, 40);
/// assert_eq!(third.page_number(), 3);
/// assert_eq!(first.page_number(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Maximum number of items to return
    pub limit: usize,
    /// Number of items to skip
    pub offset: usize,
}

impl PageRequest {
    pub fn new(limit: usize, offset: usize) -> Self {
        Self { limit, offset }
    }

    /// Page request for a 1-based page number; page 0 is treated as page 1
    pub fn for_page(page_size: usize, page_number: usize) -> Self {
        let page_number = page_number.max(1);
        Self {
            limit: page_size,
            offset: (page_number - 1) * page_size,
        }
    }

    /// The request for the page after this one
    pub fn next(&self) -> Self {
        Self {
            limit: self.limit,
            offset: self.offset + self.limit,
        }
    }

    pub fn page_number(&self) -> usize {
        if self.limit == 0 {
            1
        } else {
            (self.offset / self.limit) + 1
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            limit: 20,
            offset: 0,
        }
    }
}

/// One page of results plus the total count across all pages
///
/// # Example
/// ```
/// use entity_core_db::repository::pagination::Page;
///
/// let page = Page::new(vec![1, 2, 3], 100, 20, 0);
///
/// assert!(page.has_more());
/// assert_eq!(page.page_number(), 1);
/// assert_eq!(page.total_pages(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Total number of items across all pages
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: usize, limit: usize, offset: usize) -> Self {
        Self {
            items,
            total,
            limit,
            offset,
        }
    }

    /// Converts the items, keeping the paging metadata
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            limit: self.limit,
            offset: self.offset,
        }
    }

    pub fn has_more(&self) -> bool {
        self.offset + self.items.len() < self.total
    }

    pub fn page_number(&self) -> usize {
        if self.limit == 0 {
            1
        } else {
            (self.offset / self.limit) + 1
        }
    }

    pub fn total_pages(&self) -> usize {
        if self.limit == 0 {
            1
        } else {
            self.total.div_ceil(self.limit)
        }
    }

    pub fn is_first_page(&self) -> bool {
        self.offset == 0
    }

    pub fn is_last_page(&self) -> bool {
        !self.has_more()
    }
}
