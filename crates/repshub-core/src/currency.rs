//! Display currencies and CNY-based price conversion.
//!
//! Catalog prices are stored in CNY. [`ExchangeRates`] holds how many units
//! of each display currency one CNY buys; only the ARS entry is refreshed at
//! runtime (from the official ARS/USD quote), the rest are fixed estimates.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Fallback official ARS per USD rate used when the quote cannot be fetched.
pub const DEFAULT_ARS_PER_USD: f64 = 1455.0;

const DEFAULT_USD_PER_CNY: f64 = 0.155;
const DEFAULT_CLP_PER_CNY: f64 = 144.15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Cny,
    Usd,
    Ars,
    Clp,
}

impl Currency {
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Currency::Cny => "CNY",
            Currency::Usd => "USD",
            Currency::Ars => "ARS",
            Currency::Clp => "CLP",
        }
    }

    /// Parses a currency code, falling back to CNY for unknown codes the way
    /// the storefront's currency selector does.
    #[must_use]
    pub fn from_code_or_default(code: &str) -> Self {
        code.parse().unwrap_or(Currency::Cny)
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CNY" => Ok(Currency::Cny),
            "USD" => Ok(Currency::Usd),
            "ARS" => Ok(Currency::Ars),
            "CLP" => Ok(Currency::Clp),
            _ => Err(CoreError::UnknownCurrency(s.to_string())),
        }
    }
}

/// Units of each display currency per 1 CNY.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRates {
    pub usd: f64,
    pub ars: f64,
    pub clp: f64,
}

impl Default for ExchangeRates {
    fn default() -> Self {
        Self {
            usd: DEFAULT_USD_PER_CNY,
            ars: DEFAULT_USD_PER_CNY * DEFAULT_ARS_PER_USD,
            clp: DEFAULT_CLP_PER_CNY,
        }
    }
}

impl ExchangeRates {
    /// Rebuilds the ARS entry from an ARS per USD quote.
    ///
    /// Non-finite or non-positive quotes leave the table unchanged.
    #[must_use]
    pub fn with_ars_per_usd(mut self, ars_per_usd: f64) -> Self {
        if ars_per_usd.is_finite() && ars_per_usd > 0.0 {
            self.ars = self.usd * ars_per_usd;
        }
        self
    }

    /// Units of `currency` per 1 CNY.
    #[must_use]
    pub fn rate(&self, currency: Currency) -> f64 {
        match currency {
            Currency::Cny => 1.0,
            Currency::Usd => self.usd,
            Currency::Ars => self.ars,
            Currency::Clp => self.clp,
        }
    }

    #[must_use]
    pub fn convert(&self, price_cny: f64, currency: Currency) -> f64 {
        price_cny * self.rate(currency)
    }

    /// Formats a CNY price in the requested display currency.
    ///
    /// CNY and USD keep two decimals; ARS and CLP are rounded to whole units
    /// and grouped with `.` as the storefront's `es-AR` / `es-CL` locales do.
    #[must_use]
    pub fn format(&self, price_cny: f64, currency: Currency) -> String {
        let price_cny = if price_cny.is_finite() { price_cny } else { 0.0 };
        let converted = self.convert(price_cny, currency);
        match currency {
            Currency::Cny => format!("¥{converted:.2} CNY"),
            Currency::Usd => format!("${converted:.2} USD"),
            Currency::Ars => format!("${} ARS", group_thousands(converted.round(), '.')),
            Currency::Clp => format!("${} CLP", group_thousands(converted.round(), '.')),
        }
    }
}

/// Formats a catalog price with two decimals; missing or non-finite prices
/// render as `0.00`.
#[must_use]
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(p) if p.is_finite() => format!("{p:.2}"),
        _ => "0.00".to_string(),
    }
}

/// Renders the integer part of `value` with `separator` between groups of
/// three digits.
pub(crate) fn group_thousands(value: f64, separator: char) -> String {
    let negative = value < 0.0;
    let digits = format!("{:.0}", value.abs().trunc());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    if negative && grouped.chars().any(|c| c != '0' && c != separator) {
        grouped.insert(0, '-');
    }
    grouped
}
