//! HTTP client for the catalog's `PostgREST` endpoint.

mod featured;

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_RANGE};
use reqwest::{Client, RequestBuilder, Url};

use repshub_core::{default_brand_table, AppConfig, BrandsFile, Product};

use crate::error::CatalogError;
use crate::filters::CatalogFilters;
use crate::page::{page_offset, paginate, parse_total_count, total_pages, ProductPage};

const PRODUCTS_PATH: &str = "rest/v1/products_clean";

/// Server-side range used when categories are filtered locally.
const CLIENT_FILTER_RANGE: &str = "0-999";

const DEFAULT_FEATURED_TIMEOUT_SECS: u64 = 10;

/// Client for the `products_clean` view.
///
/// Every request carries the anonymous API key both as `apikey` and as a
/// bearer token, and asks for an exact row count. There is no retry; a
/// failed request is surfaced to the caller, who offers a manual reload.
pub struct CatalogClient {
    client: Client,
    products_url: Url,
    anon_key: String,
    brands: BrandsFile,
    featured_timeout: Duration,
}

impl CatalogClient {
    /// Creates a client for the catalog at `base_url`.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Http`] if the underlying `reqwest::Client` cannot be
    ///   constructed.
    /// - [`CatalogError::InvalidBaseUrl`] if `base_url` is not an absolute URL.
    pub fn new(
        base_url: &str,
        anon_key: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash so the REST path is appended, not
        // substituted for the last segment.
        let normalised = format!("{}/", base_url.trim().trim_end_matches('/'));
        let products_url = Url::parse(&normalised)
            .and_then(|base| base.join(PRODUCTS_PATH))
            .map_err(|e| CatalogError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            products_url,
            anon_key: anon_key.to_owned(),
            brands: default_brand_table(),
            featured_timeout: Duration::from_secs(DEFAULT_FEATURED_TIMEOUT_SECS),
        })
    }

    /// Creates a client from application config.
    ///
    /// # Errors
    ///
    /// Same as [`CatalogClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, CatalogError> {
        Ok(Self::new(
            &config.catalog_url,
            &config.catalog_anon_key,
            config.request_timeout_secs,
            &config.user_agent,
        )?
        .with_featured_timeout(config.featured_timeout_secs))
    }

    /// Replaces the brand table used to turn brand slugs into name searches.
    #[must_use]
    pub fn with_brands(mut self, brands: BrandsFile) -> Self {
        self.brands = brands;
        self
    }

    #[must_use]
    pub fn with_featured_timeout(mut self, timeout_secs: u64) -> Self {
        self.featured_timeout = Duration::from_secs(timeout_secs);
        self
    }

    /// Fetches one page of active products.
    ///
    /// Without a category filter the server paginates via the `Range` header
    /// and the total comes from `Content-Range`. With a category filter the
    /// first 1000 matching rows are fetched, classified locally, re-sorted
    /// and paginated here; the total is then the filtered count.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::InvalidPage`] if `page` or `page_size` is zero.
    /// - [`CatalogError::Timeout`] if the request exceeds its time budget.
    /// - [`CatalogError::Http`] on other network failures.
    /// - [`CatalogError::UnexpectedStatus`] on a non-2xx response.
    /// - [`CatalogError::Deserialize`] if the body is not a product array.
    pub async fn fetch_page(
        &self,
        page: u32,
        page_size: u32,
        filters: &CatalogFilters,
    ) -> Result<ProductPage, CatalogError> {
        if page == 0 || page_size == 0 {
            return Err(CatalogError::InvalidPage { page, page_size });
        }

        let url = self.products_url(&filters.query_pairs(&self.brands));
        let client_filtering = filters.needs_client_filtering();
        let range = if client_filtering {
            CLIENT_FILTER_RANGE.to_string()
        } else {
            let from = page_offset(page, page_size);
            format!("{from}-{}", from + u64::from(page_size) - 1)
        };

        tracing::debug!(url = %url, range = %range, page, "fetching catalog page");

        let request = self
            .request(&url)
            .header("Range", &range)
            .header("Prefer", "count=exact");
        let (products, content_range) = self.send(request, &url).await?;

        let (products, total_count) = if client_filtering {
            let mut filtered = filters.apply_category(products);
            filters.sort.sort(&mut filtered);
            let total = u64::try_from(filtered.len()).unwrap_or(u64::MAX);
            (paginate(filtered, page, page_size), total)
        } else {
            (products, parse_total_count(content_range.as_deref()))
        };

        Ok(ProductPage {
            products,
            total_count,
            total_pages: total_pages(total_count, page_size),
            current_page: page,
        })
    }

    fn products_url(&self, pairs: &[(&str, String)]) -> Url {
        let mut url = self.products_url.clone();
        {
            let mut query = url.query_pairs_mut();
            for (key, value) in pairs {
                query.append_pair(key, value);
            }
        }
        url
    }

    fn auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Ok(key) = HeaderValue::from_str(&self.anon_key) {
            headers.insert("apikey", key);
        }
        if let Ok(bearer) = HeaderValue::from_str(&format!("Bearer {}", self.anon_key)) {
            headers.insert(AUTHORIZATION, bearer);
        }
        headers
    }

    fn request(&self, url: &Url) -> RequestBuilder {
        self.client
            .get(url.clone())
            .headers(self.auth_headers())
            .header(reqwest::header::ACCEPT, "application/json")
    }

    /// Sends a prepared request and parses the product array, returning the
    /// `Content-Range` header alongside.
    async fn send(
        &self,
        request: RequestBuilder,
        url: &Url,
    ) -> Result<(Vec<Product>, Option<String>), CatalogError> {
        let response = request.send().await.map_err(|e| classify(e, url))?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(url = %url, status = status.as_u16(), "catalog request failed");
            return Err(CatalogError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        let content_range = response
            .headers()
            .get(CONTENT_RANGE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        let body = response.text().await.map_err(|e| classify(e, url))?;
        let products =
            serde_json::from_str::<Vec<Product>>(&body).map_err(|e| CatalogError::Deserialize {
                context: format!("products from {}", url.path()),
                source: e,
            })?;

        Ok((products, content_range))
    }
}

fn classify(err: reqwest::Error, url: &Url) -> CatalogError {
    if err.is_timeout() {
        CatalogError::Timeout {
            url: url.to_string(),
        }
    } else {
        CatalogError::Http(err)
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
