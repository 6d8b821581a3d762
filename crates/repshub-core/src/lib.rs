pub mod app_config;
pub mod brands;
pub mod category;
pub mod config;
pub mod currency;
pub mod error;
pub mod images;
pub mod products;
pub mod tax;

pub use app_config::{AffiliateCodes, AppConfig, Environment};
pub use brands::{default_brand_table, load_brands, BrandEntry, BrandSearch, BrandsFile};
pub use category::{map_product_category, Category};
pub use config::{load_app_config, load_app_config_from_env};
pub use currency::{format_price, Currency, ExchangeRates, DEFAULT_ARS_PER_USD};
pub use error::{ConfigError, CoreError};
pub use images::{image_or_placeholder, normalize_imgur_url, PLACEHOLDER_IMAGE_URL};
pub use products::Product;
pub use tax::TaxEstimate;
