//! Storefront filters and their `PostgREST` query encoding.

use std::cmp::Ordering;
use std::str::FromStr;

use repshub_core::{BrandSearch, BrandsFile, Category, CoreError, Product};

/// Product ordering offered by the storefront's sort selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Recientes,
    PrecioAsc,
    PrecioDesc,
    NombreAsc,
    NombreDesc,
}

impl SortKey {
    /// `order` query value understood by `PostgREST`.
    #[must_use]
    pub fn order_param(self) -> &'static str {
        match self {
            SortKey::Recientes => "created_at.desc",
            SortKey::PrecioAsc => "precio_cny.asc",
            SortKey::PrecioDesc => "precio_cny.desc",
            SortKey::NombreAsc => "nombre.asc",
            SortKey::NombreDesc => "nombre.desc",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Recientes => "recientes",
            SortKey::PrecioAsc => "precio-asc",
            SortKey::PrecioDesc => "precio-desc",
            SortKey::NombreAsc => "nombre-asc",
            SortKey::NombreDesc => "nombre-desc",
        }
    }

    /// Stable in-memory sort matching [`SortKey::order_param`]. Names compare
    /// case-insensitively; missing prices sort as zero.
    pub fn sort(self, products: &mut [Product]) {
        match self {
            SortKey::Recientes => products.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            SortKey::PrecioAsc => {
                products.sort_by(|a, b| a.price_or_zero().total_cmp(&b.price_or_zero()));
            }
            SortKey::PrecioDesc => {
                products.sort_by(|a, b| b.price_or_zero().total_cmp(&a.price_or_zero()));
            }
            SortKey::NombreAsc => products.sort_by(|a, b| compare_names(a, b)),
            SortKey::NombreDesc => products.sort_by(|a, b| compare_names(b, a)),
        }
    }
}

fn compare_names(a: &Product, b: &Product) -> Ordering {
    a.name.to_lowercase().cmp(&b.name.to_lowercase())
}

impl FromStr for SortKey {
    type Err = std::convert::Infallible;

    /// Unknown keys sort by recency, like the storefront's default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "precio-asc" => SortKey::PrecioAsc,
            "precio-desc" => SortKey::PrecioDesc,
            "nombre-asc" => SortKey::NombreAsc,
            "nombre-desc" => SortKey::NombreDesc,
            _ => SortKey::Recientes,
        })
    }
}

/// Parses the storefront category selector. `all` and blank mean no filter.
///
/// # Errors
///
/// Returns [`CoreError::UnknownCategory`] for any other unrecognized token.
pub fn parse_category_filter(value: &str) -> Result<Option<Category>, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
        return Ok(None);
    }
    trimmed.parse().map(Some)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilters {
    /// Exact match on the quality tier column.
    pub quality: Option<String>,
    /// Substring match on the product name.
    pub search: Option<String>,
    /// Brand slug, resolved to a name search term through the brand table.
    pub brand: Option<String>,
    /// Storefront category; applied client-side.
    pub category: Option<Category>,
    pub sort: SortKey,
}

impl CatalogFilters {
    /// Category filtering cannot be expressed server-side because categories
    /// are inferred from free text.
    #[must_use]
    pub fn needs_client_filtering(&self) -> bool {
        self.category.is_some()
    }

    /// Query parameters for the `products_clean` request, in the order the
    /// storefront sends them.
    #[must_use]
    pub fn query_pairs(&self, brands: &BrandsFile) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("select", "*".to_string()),
            ("activo", "eq.true".to_string()),
        ];

        if let Some(quality) = non_blank(self.quality.as_deref()) {
            pairs.push(("calidad", format!("eq.{quality}")));
        }

        if let Some(search) = non_blank(self.search.as_deref()) {
            pairs.push(("nombre", format!("ilike.%{search}%")));
        }

        if let Some(brand) = non_blank(self.brand.as_deref()) {
            match brands.search_for(brand) {
                BrandSearch::Term(term) => pairs.push(("nombre", format!("ilike.%{term}%"))),
                BrandSearch::NoFilter => {}
            }
        }

        pairs.push(("order", self.sort.order_param().to_string()));
        pairs
    }

    /// Keeps only products whose inferred category matches the filter.
    #[must_use]
    pub fn apply_category(&self, products: Vec<Product>) -> Vec<Product> {
        match self.category {
            Some(category) => products
                .into_iter()
                .filter(|p| p.category() == category)
                .collect(),
            None => products,
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use repshub_core::default_brand_table;

    use super::*;

    fn product(name: &str, price: Option<f64>) -> Product {
        serde_json::from_value(serde_json::json!({ "nombre": name, "precio_cny": price }))
            .expect("product fixture")
    }

    #[test]
    fn default_query_filters_active_and_orders_by_recency() {
        let pairs = CatalogFilters::default().query_pairs(&default_brand_table());
        assert_eq!(
            pairs,
            vec![
                ("select", "*".to_string()),
                ("activo", "eq.true".to_string()),
                ("order", "created_at.desc".to_string()),
            ]
        );
    }

    #[test]
    fn quality_search_and_brand_become_filters() {
        let filters = CatalogFilters {
            quality: Some("1:1".to_string()),
            search: Some("dunk".to_string()),
            brand: Some("saint-laurent".to_string()),
            sort: SortKey::PrecioAsc,
            ..CatalogFilters::default()
        };
        let pairs = filters.query_pairs(&default_brand_table());
        assert!(pairs.contains(&("calidad", "eq.1:1".to_string())));
        assert!(pairs.contains(&("nombre", "ilike.%dunk%".to_string())));
        assert!(pairs.contains(&("nombre", "ilike.%saint laurent%".to_string())));
        assert_eq!(
            pairs.last(),
            Some(&("order", "precio_cny.asc".to_string()))
        );
    }

    #[test]
    fn sin_marca_adds_no_brand_filter() {
        let filters = CatalogFilters {
            brand: Some("sin-marca".to_string()),
            ..CatalogFilters::default()
        };
        let pairs = filters.query_pairs(&default_brand_table());
        assert!(pairs.iter().all(|(k, _)| *k != "nombre"));
    }

    #[test]
    fn blank_filters_are_ignored() {
        let filters = CatalogFilters {
            quality: Some("  ".to_string()),
            search: Some(String::new()),
            ..CatalogFilters::default()
        };
        assert_eq!(filters.query_pairs(&default_brand_table()).len(), 3);
    }

    #[test]
    fn sort_key_parsing_defaults_to_recency() {
        assert_eq!("precio-desc".parse::<SortKey>(), Ok(SortKey::PrecioDesc));
        assert_eq!("popular".parse::<SortKey>(), Ok(SortKey::Recientes));
    }

    #[test]
    fn name_sort_is_case_insensitive_and_stable() {
        let mut products = vec![
            product("buzo", Some(1.0)),
            product("Anorak", Some(2.0)),
            product("Buzo", Some(3.0)),
        ];
        SortKey::NombreAsc.sort(&mut products);
        let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Anorak", "buzo", "Buzo"]);
    }

    #[test]
    fn price_sort_treats_missing_as_zero() {
        let mut products = vec![
            product("a", Some(50.0)),
            product("b", None),
            product("c", Some(10.0)),
        ];
        SortKey::PrecioAsc.sort(&mut products);
        let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["b", "c", "a"]);
    }

    #[test]
    fn category_filter_parsing() {
        assert_eq!(parse_category_filter("all"), Ok(None));
        assert_eq!(parse_category_filter(""), Ok(None));
        assert_eq!(parse_category_filter("calzado"), Ok(Some(Category::Calzado)));
        assert!(parse_category_filter("hats").is_err());
    }

    #[test]
    fn apply_category_keeps_matching_products() {
        let filters = CatalogFilters {
            category: Some(Category::Calzado),
            ..CatalogFilters::default()
        };
        let kept = filters.apply_category(vec![
            product("Zapatillas Samba", None),
            product("Buzo Nike", None),
        ]);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "Zapatillas Samba");
    }
}
