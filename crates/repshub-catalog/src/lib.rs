//! Client for the hosted product catalog (a `PostgREST` view named
//! `products_clean`) plus the pagination state the storefront keeps.

pub mod client;
pub mod error;
pub mod filters;
pub mod page;
pub mod state;

pub use client::CatalogClient;
pub use error::CatalogError;
pub use filters::{parse_category_filter, CatalogFilters, SortKey};
pub use page::{parse_total_count, total_pages, ProductPage};
pub use state::{CatalogState, PageWindow};
