use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::category::{map_product_category, Category};

/// A row of the catalog's `products_clean` view.
///
/// Column names on the wire are Spanish; the backend stores no normalized
/// category, so [`Product::category`] is derived client-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(rename = "nombre", default, deserialize_with = "null_as_empty")]
    pub name: String,
    /// Freeform category label entered by whoever listed the product.
    #[serde(rename = "categoria", default)]
    pub category_label: Option<String>,
    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,
    /// Quality tier, e.g. `"1:1"`. No enforced schema.
    #[serde(rename = "calidad", default)]
    pub quality: Option<String>,
    /// Price in CNY, the catalog's base currency.
    #[serde(rename = "precio_cny", default)]
    pub price_cny: Option<f64>,
    #[serde(rename = "imagen_url", default)]
    pub image_url: Option<String>,
    /// Canonical marketplace link (Weidian / 1688 / Taobao), occasionally an
    /// agent link entered by hand.
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "activo", default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Product {
    /// Storefront category inferred from name, label, and description.
    #[must_use]
    pub fn category(&self) -> Category {
        map_product_category(
            &self.name,
            self.category_label.as_deref().unwrap_or_default(),
            self.description.as_deref().unwrap_or_default(),
        )
    }

    /// Price in CNY, treating a missing or non-finite price as zero.
    #[must_use]
    pub fn price_or_zero(&self) -> f64 {
        self.price_cny.filter(|p| p.is_finite()).unwrap_or(0.0)
    }
}
