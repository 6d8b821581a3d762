use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// One row of the brand search table: a storefront brand slug and the
/// fragment searched for in product names when that brand is selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandEntry {
    pub slug: String,
    /// `None` means the brand button does not narrow the catalog (e.g.
    /// `sin-marca`).
    #[serde(default)]
    pub search: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BrandsFile {
    pub brands: Vec<BrandEntry>,
}

/// How a brand selection translates into a catalog name filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrandSearch {
    /// Case-insensitive substring searched in product names.
    Term(String),
    NoFilter,
}

impl BrandsFile {
    /// Resolves a brand value coming from the storefront into a name filter.
    ///
    /// Known slugs map through the table; anything else is searched verbatim
    /// (trimmed and lower-cased).
    #[must_use]
    pub fn search_for(&self, brand: &str) -> BrandSearch {
        let normalized = brand.trim().to_lowercase();
        if normalized.is_empty() {
            return BrandSearch::NoFilter;
        }

        match self.brands.iter().find(|b| b.slug == normalized) {
            Some(BrandEntry {
                search: Some(term), ..
            }) => BrandSearch::Term(term.clone()),
            Some(BrandEntry { search: None, .. }) => BrandSearch::NoFilter,
            None => BrandSearch::Term(normalized),
        }
    }
}

/// The brand table shipped with the storefront.
#[must_use]
pub fn default_brand_table() -> BrandsFile {
    const TABLE: &[(&str, Option<&str>)] = &[
        ("acne-studios", Some("acne")),
        ("saint-laurent", Some("saint laurent")),
        ("enfants-riches-deprimes", Some("enfants riches")),
        ("lostkidsclub2000", Some("lost kids")),
        ("martine-rose", Some("martine rose")),
        ("sin-marca", None),
        ("alo", Some("alo")),
        ("balenciaga", Some("balenciaga")),
        ("burberry", Some("burberry")),
        ("chai", Some("chai")),
        ("gymshark", Some("gymshark")),
        ("jordan", Some("jordan")),
        ("longchamp", Some("longchamp")),
        ("mowalola", Some("mowalola")),
        ("nike", Some("nike")),
        ("palace", Some("palace")),
        ("supreme", Some("supreme")),
        ("synaworld", Some("synaworld")),
        ("valley", Some("valley")),
    ];

    BrandsFile {
        brands: TABLE
            .iter()
            .map(|(slug, search)| BrandEntry {
                slug: (*slug).to_string(),
                search: search.map(str::to_string),
            })
            .collect(),
    }
}

/// Load and validate the brand search table from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_brands(path: &Path) -> Result<BrandsFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::BrandsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let mut brands_file: BrandsFile =
        serde_yaml::from_str(&content).map_err(ConfigError::BrandsFileParse)?;

    for brand in &mut brands_file.brands {
        brand.slug = brand.slug.trim().to_lowercase();
    }

    validate_brands(&brands_file)?;

    Ok(brands_file)
}

fn validate_brands(brands_file: &BrandsFile) -> Result<(), ConfigError> {
    let mut seen_slugs = HashSet::new();

    for brand in &brands_file.brands {
        if brand.slug.trim().is_empty() {
            return Err(ConfigError::Validation(
                "brand slug must be non-empty".to_string(),
            ));
        }

        if brand.search.as_deref().is_some_and(|s| s.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "brand '{}' has an empty search term; omit it to disable filtering",
                brand.slug
            )));
        }

        if !seen_slugs.insert(brand.slug.clone()) {
            return Err(ConfigError::Validation(format!(
                "duplicate brand slug: '{}'",
                brand.slug
            )));
        }
    }

    Ok(())
}
