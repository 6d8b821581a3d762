//! Featured-products carousel feed.

use rand::seq::SliceRandom;
use repshub_core::Product;

use crate::error::CatalogError;

use super::CatalogClient;

/// Pool of recent products the carousel draws from.
const FEATURED_POOL_SIZE: u32 = 50;

impl CatalogClient {
    /// Picks `count` random products from the most recent active listings.
    ///
    /// Uses the featured time budget rather than the client-wide timeout.
    ///
    /// # Errors
    ///
    /// Same as [`CatalogClient::fetch_page`], minus
    /// [`CatalogError::InvalidPage`].
    pub async fn fetch_featured(&self, count: usize) -> Result<Vec<Product>, CatalogError> {
        let pairs = [
            ("select", "*".to_string()),
            ("activo", "eq.true".to_string()),
            ("limit", FEATURED_POOL_SIZE.to_string()),
            ("order", "created_at.desc".to_string()),
        ];
        let url = self.products_url(&pairs);

        tracing::debug!(url = %url, count, "fetching featured products");

        let request = self.request(&url).timeout(self.featured_timeout);
        let (mut products, _) = self.send(request, &url).await?;

        products.shuffle(&mut rand::rng());
        products.truncate(count);
        Ok(products)
    }
}
