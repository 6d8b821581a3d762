//! Page bookkeeping for catalog responses.
//!
//! `PostgREST` reports the exact row count in `Content-Range` when the
//! request carries `Prefer: count=exact`:
//!
//! ```text
//! Content-Range: 0-35/120
//! Content-Range: */0
//! ```

use repshub_core::Product;
use serde::Serialize;

/// One page of catalog results.
#[derive(Debug, Clone, Serialize)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub total_count: u64,
    pub total_pages: u32,
    pub current_page: u32,
}

/// Total row count from a `Content-Range` header value. A missing header or
/// an unknown total (`*`) counts as zero.
#[must_use]
pub fn parse_total_count(content_range: Option<&str>) -> u64 {
    content_range
        .and_then(|value| value.split('/').nth(1))
        .and_then(|total| total.trim().parse::<u64>().ok())
        .unwrap_or(0)
}

/// Number of pages needed for `total_count` rows; never less than one.
#[must_use]
pub fn total_pages(total_count: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 1;
    }
    let pages = total_count.div_ceil(u64::from(page_size));
    u32::try_from(pages).unwrap_or(u32::MAX).max(1)
}

/// Zero-based index of the first row on `page` (pages are one-based).
#[must_use]
pub(crate) fn page_offset(page: u32, page_size: u32) -> u64 {
    u64::from(page.saturating_sub(1)) * u64::from(page_size)
}

/// Slices one page out of a fully fetched result set.
pub(crate) fn paginate(products: Vec<Product>, page: u32, page_size: u32) -> Vec<Product> {
    let start = usize::try_from(page_offset(page, page_size)).unwrap_or(usize::MAX);
    let len = usize::try_from(page_size).unwrap_or(usize::MAX);
    products.into_iter().skip(start).take(len).collect()
}
