//! Page/limit arithmetic shared by the repository and the list handler.

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;
pub const MAX_ITEMS_PER_PAGE: usize = 100;

/// One-based page selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

impl Pagination {
    /// Number of rows to skip before the requested page.
    ///
    /// Saturates at `usize::MAX`; such a page is past any real table.
    pub fn offset(&self) -> usize {
        (self.page.max(1) - 1).saturating_mul(self.per_page)
    }
}

/// `ceil(total / per_page)`; zero when there is nothing to show.
pub fn total_pages(total: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    total.div_ceil(per_page)
}
