//! Keyword-based storefront category inference.
//!
//! The catalog backend stores a freeform category label only, so the
//! storefront classifies every product itself from the concatenated name,
//! label, and description. Matching is plain substring search over the
//! lower-cased text, evaluated in priority order.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Conjuntos,
    Calzado,
    RopaSuperior,
    RopaInferior,
    Accesorios,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Conjuntos,
        Category::Calzado,
        Category::RopaSuperior,
        Category::RopaInferior,
        Category::Accesorios,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Conjuntos => "conjuntos",
            Category::Calzado => "calzado",
            Category::RopaSuperior => "ropa-superior",
            Category::RopaInferior => "ropa-inferior",
            Category::Accesorios => "accesorios",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == lower)
            .ok_or_else(|| CoreError::UnknownCategory(s.to_string()))
    }
}

const SET_KEYWORDS: &[&str] = &["conjunto", "set"];

const FOOTWEAR_KEYWORDS: &[&str] = &["zapatilla", "sneaker"];

/// Terms that co-occur with footwear vocabulary on listings that are not
/// shoes (shoe boxes, cleaners, laces, apparel bundles).
const FOOTWEAR_EXCLUSIONS: &[&str] = &[
    "box",
    "boxes",
    "caja",
    "cajas",
    "storage",
    "almacenamiento",
    "organizer",
    "organizador",
    "rack",
    "estante",
    "display",
    "case",
    "estuche",
    "bag",
    "bolso",
    "mochila",
    "backpack",
    "cleaner",
    "limpiador",
    "spray",
    "brush",
    "cepillo",
    "lace",
    "cordón",
    "cordones",
    "insole",
    "plantilla",
    "sock",
    "calcetín",
    "calcetines",
    "socks",
    "bracelet",
    "joyería",
    "joyeria",
    "jewelry",
    "remera",
    "remeras",
    "tee",
    "shirt",
    "camiseta",
    "short",
    "shorts",
    "pantalon",
    "pantalones",
    "pants",
    "sweatpants",
    "decoración",
    "decoracion",
    "decoration",
];

const UPPER_BODY_KEYWORDS: &[&str] = &[
    "campera", "buzo", "remera", "camiseta", "camisa", "suéter", "hoodie", "sweater", "jacket",
    "shirt",
];

const LOWER_BODY_KEYWORDS: &[&str] = &["pantalon", "jean", "jogger", "short", "pants", "trouser"];

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

/// Classifies a product into exactly one storefront [`Category`].
///
/// First match wins: sets, then footwear (unless an exclusion term is
/// present), then upper-body and lower-body apparel. Everything else is
/// [`Category::Accesorios`].
#[must_use]
pub fn map_product_category(name: &str, category: &str, description: &str) -> Category {
    let text = format!("{name} {category} {description}").to_lowercase();

    if contains_any(&text, SET_KEYWORDS) {
        return Category::Conjuntos;
    }

    if contains_any(&text, FOOTWEAR_KEYWORDS) && !contains_any(&text, FOOTWEAR_EXCLUSIONS) {
        return Category::Calzado;
    }

    if contains_any(&text, UPPER_BODY_KEYWORDS) {
        return Category::RopaSuperior;
    }

    if contains_any(&text, LOWER_BODY_KEYWORDS) {
        return Category::RopaInferior;
    }

    Category::Accesorios
}
