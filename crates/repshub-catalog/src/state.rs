//! Pagination state for a catalog listing.
//!
//! Owned by whoever drives the listing (the CLI, a UI loop) and passed
//! explicitly; a failed load leaves it untouched so the previous page stays
//! valid.

use std::ops::RangeInclusive;

use crate::client::CatalogClient;
use crate::error::CatalogError;
use crate::filters::CatalogFilters;
use crate::page::ProductPage;

const MAX_VISIBLE_PAGES: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogState {
    current_page: u32,
    total_pages: u32,
    total_count: u64,
    filters: CatalogFilters,
    page_size: u32,
}

/// Page numbers to render around the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub start: u32,
    pub end: u32,
    /// Render a separate button for page 1.
    pub show_first: bool,
    pub show_first_ellipsis: bool,
    /// Render a separate button for the last page.
    pub show_last: bool,
    pub show_last_ellipsis: bool,
}

impl PageWindow {
    #[must_use]
    pub fn pages(&self) -> RangeInclusive<u32> {
        self.start..=self.end
    }
}

impl CatalogState {
    #[must_use]
    pub fn new(page_size: u32) -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            total_count: 0,
            filters: CatalogFilters::default(),
            page_size,
        }
    }

    #[must_use]
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    #[must_use]
    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    #[must_use]
    pub fn filters(&self) -> &CatalogFilters {
        &self.filters
    }

    #[must_use]
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Fetches `page` with `filters` and, on success, makes it current.
    ///
    /// # Errors
    ///
    /// Propagates [`CatalogClient::fetch_page`] errors; the state is left as
    /// it was.
    pub async fn load_page(
        &mut self,
        client: &CatalogClient,
        page: u32,
        filters: CatalogFilters,
    ) -> Result<ProductPage, CatalogError> {
        let result = client.fetch_page(page, self.page_size, &filters).await?;
        self.current_page = result.current_page;
        self.total_pages = result.total_pages;
        self.total_count = result.total_count;
        self.filters = filters;
        Ok(result)
    }

    /// Re-fetches the current page with the current filters.
    ///
    /// # Errors
    ///
    /// Same as [`CatalogState::load_page`].
    pub async fn reload(&mut self, client: &CatalogClient) -> Result<ProductPage, CatalogError> {
        let filters = self.filters.clone();
        self.load_page(client, self.current_page, filters).await
    }

    #[must_use]
    pub fn next_page(&self) -> Option<u32> {
        (self.current_page < self.total_pages).then(|| self.current_page + 1)
    }

    #[must_use]
    pub fn previous_page(&self) -> Option<u32> {
        (self.current_page > 1).then(|| self.current_page - 1)
    }

    /// Whether pagination controls are shown at all.
    #[must_use]
    pub fn has_multiple_pages(&self) -> bool {
        self.total_pages > 1
    }

    /// Up to five page numbers centred on the current page, shifted to stay
    /// within `1..=total_pages`.
    #[must_use]
    pub fn visible_pages(&self) -> PageWindow {
        let total = self.total_pages.max(1);
        let mut start = self
            .current_page
            .saturating_sub(MAX_VISIBLE_PAGES / 2)
            .max(1);
        let end = (start + MAX_VISIBLE_PAGES - 1).min(total);
        if end - start < MAX_VISIBLE_PAGES - 1 {
            start = (end + 1).saturating_sub(MAX_VISIBLE_PAGES).max(1);
        }

        PageWindow {
            start,
            end,
            show_first: start > 1,
            show_first_ellipsis: start > 2,
            show_last: end < total,
            show_last_ellipsis: end + 1 < total,
        }
    }
}
