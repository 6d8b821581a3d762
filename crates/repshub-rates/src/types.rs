//! `DolarSi` response types.
//!
//! `valoresprincipales` returns an array of `{"casa": {...}}` objects. Quotes
//! are strings in Argentine notation (`"1.455,50"`) or `"No Cotiza"`.

use serde::Deserialize;
use serde_json::Value;

pub const OFFICIAL_NAME: &str = "Dolar Oficial";

/// Names the CCL (contado con liquidación) rate has been published under.
pub const CCL_NAMES: [&str; 3] = [
    "Contado con Liquidacion",
    "Dolar Contado con Liquidacion",
    "Dolar Contado con Liqui",
];

#[derive(Debug, Deserialize)]
pub struct CasaEntry {
    pub casa: Casa,
}

/// One quote house. Only the fields the storefront reads are modeled.
#[derive(Debug, Deserialize)]
pub struct Casa {
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub compra: Option<Value>,
    #[serde(default)]
    pub venta: Option<Value>,
}

impl Casa {
    /// Selling rate, falling back to the buying rate when selling is not
    /// quoted. Only positive values count.
    #[must_use]
    pub fn rate(&self) -> Option<f64> {
        quote_value(self.venta.as_ref()).or_else(|| quote_value(self.compra.as_ref()))
    }
}

fn quote_value(value: Option<&Value>) -> Option<f64> {
    let parsed = match value? {
        Value::String(s) => parse_locale_decimal(s),
        Value::Number(n) => n.as_f64(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite() && *v > 0.0)
}

/// Parses a decimal written with `,` as decimal separator. When a comma is
/// present, dots are thousands separators; otherwise a dot is the decimal
/// separator.
///
/// ```
/// use repshub_rates::parse_locale_decimal;
///
/// assert_eq!(parse_locale_decimal("1.455,50"), Some(1455.5));
/// assert_eq!(parse_locale_decimal("No Cotiza"), None);
/// ```
#[must_use]
pub fn parse_locale_decimal(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    let normalized = if trimmed.contains(',') {
        trimmed.replace('.', "").replace(',', ".")
    } else {
        trimmed.to_string()
    };
    normalized
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Dollar quotes in ARS per USD.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DollarQuotes {
    pub official: Option<f64>,
    pub ccl: Option<f64>,
}

impl DollarQuotes {
    /// Picks the official and CCL quotes out of a `valoresprincipales` list.
    #[must_use]
    pub fn from_entries(entries: &[CasaEntry]) -> Self {
        let find = |names: &[&str]| {
            entries
                .iter()
                .filter(|e| names.contains(&e.casa.nombre.trim()))
                .find_map(|e| e.casa.rate())
        };
        Self {
            official: find(&[OFFICIAL_NAME]),
            ccl: find(&CCL_NAMES),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(json: serde_json::Value) -> Vec<CasaEntry> {
        serde_json::from_value(json).expect("entries fixture")
    }

    #[test]
    fn parses_comma_decimals() {
        assert_eq!(parse_locale_decimal("1455,50"), Some(1455.5));
        assert_eq!(parse_locale_decimal("1.455,50"), Some(1455.5));
        assert_eq!(parse_locale_decimal(" 980,25 "), Some(980.25));
    }

    #[test]
    fn parses_dot_decimals_without_comma() {
        assert_eq!(parse_locale_decimal("1455.5"), Some(1455.5));
        assert_eq!(parse_locale_decimal("1455"), Some(1455.0));
    }

    #[test]
    fn rejects_non_numeric_quotes() {
        assert_eq!(parse_locale_decimal("No Cotiza"), None);
        assert_eq!(parse_locale_decimal(""), None);
        assert_eq!(parse_locale_decimal("inf"), None);
    }

    #[test]
    fn selects_official_and_ccl() {
        let list = entries(serde_json::json!([
            {"casa": {"nombre": "Dolar Blue", "compra": "1.400,00", "venta": "1.420,00"}},
            {"casa": {"nombre": "Dolar Oficial", "compra": "1.405,00", "venta": "1.455,50"}},
            {"casa": {"nombre": "Dolar Contado con Liqui", "compra": "1.500,00", "venta": "1.510,00"}}
        ]));
        let quotes = DollarQuotes::from_entries(&list);
        assert_eq!(quotes.official, Some(1455.5));
        assert_eq!(quotes.ccl, Some(1510.0));
    }

    #[test]
    fn unquoted_sell_falls_back_to_buy() {
        let list = entries(serde_json::json!([
            {"casa": {"nombre": "Dolar Oficial", "compra": "1.400,00", "venta": "No Cotiza"}}
        ]));
        assert_eq!(DollarQuotes::from_entries(&list).official, Some(1400.0));
    }

    #[test]
    fn numeric_quotes_are_accepted() {
        let list = entries(serde_json::json!([
            {"casa": {"nombre": "Contado con Liquidacion", "venta": 1499.9}}
        ]));
        let quotes = DollarQuotes::from_entries(&list);
        assert_eq!(quotes.official, None);
        assert_eq!(quotes.ccl, Some(1499.9));
    }

    #[test]
    fn zero_quotes_are_ignored() {
        let list = entries(serde_json::json!([
            {"casa": {"nombre": "Dolar Oficial", "compra": "0", "venta": "0,00"}}
        ]));
        assert_eq!(DollarQuotes::from_entries(&list).official, None);
    }
}
