//! Import duty estimate for purchases shipped into Argentina.
//!
//! Courier imports pay 50% of the taxable base, where the base is the
//! declared purchase plus shipping minus a USD 50 duty-free allowance
//! (franquicia). Couriers also charge a flat management fee.

use serde::Serialize;

use crate::currency::group_thousands;

/// Duty-free allowance per shipment, in USD.
pub const FRANCHISE_USD: f64 = 50.0;
/// Flat courier management fee, in USD.
pub const MANAGEMENT_FEE_USD: f64 = 4.95;
const DUTY_RATE: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TaxEstimate {
    pub total_usd: f64,
    pub taxable_base_usd: f64,
    pub taxes_usd: f64,
    pub taxes_ars: f64,
    pub ars_per_usd: f64,
    pub franchise_applied: bool,
    pub fee_applied: bool,
}

impl TaxEstimate {
    /// Computes the estimate. Negative or non-finite amounts count as zero.
    #[must_use]
    pub fn compute(
        purchase_usd: f64,
        shipping_usd: f64,
        apply_franchise: bool,
        apply_fee: bool,
        ars_per_usd: f64,
    ) -> Self {
        let total_usd = sanitize(purchase_usd) + sanitize(shipping_usd);

        let taxable_base_usd = if apply_franchise {
            (total_usd - FRANCHISE_USD).max(0.0)
        } else {
            total_usd
        };

        let mut taxes_usd = taxable_base_usd * DUTY_RATE;
        if apply_fee {
            taxes_usd += MANAGEMENT_FEE_USD;
        }

        let ars_per_usd = sanitize(ars_per_usd);

        Self {
            total_usd,
            taxable_base_usd,
            taxes_usd,
            taxes_ars: taxes_usd * ars_per_usd,
            ars_per_usd,
            franchise_applied: apply_franchise,
            fee_applied: apply_fee,
        }
    }

    #[must_use]
    pub fn format_usd(&self) -> String {
        format!("${:.2}", self.taxes_usd)
    }

    /// ARS amount in `es-AR` notation: `.` groups thousands, `,` separates
    /// two decimals.
    #[must_use]
    pub fn format_ars(&self) -> String {
        format!("${}", format_es_ar(self.taxes_ars))
    }

    /// Human summary of which components the estimate includes.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut summary = String::from("Estimación: 50% de la base imponible");
        if self.fee_applied {
            summary.push_str(" + tasa fija ($4.95 USD)");
        }
        summary
    }

    #[must_use]
    pub fn franchise_status(&self) -> &'static str {
        if self.franchise_applied {
            "Franquicia aplicada: -$50"
        } else {
            "Franquicia no aplicada"
        }
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

fn format_es_ar(value: f64) -> String {
    let cents = (value * 100.0).round();
    let whole = (cents / 100.0).trunc();
    let frac = (cents - whole * 100.0).abs();
    format!("{},{:02.0}", group_thousands(whole, '.'), frac)
}
