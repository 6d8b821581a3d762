//! `tax` command handler.

use repshub_core::TaxEstimate;

pub(crate) fn run_tax(
    purchase_usd: f64,
    shipping_usd: f64,
    apply_franchise: bool,
    apply_fee: bool,
    ars_per_usd: f64,
) {
    let estimate = TaxEstimate::compute(
        purchase_usd,
        shipping_usd,
        apply_franchise,
        apply_fee,
        ars_per_usd,
    );
    println!("{:<18}${:.2}", "Total", estimate.total_usd);
    println!("{:<18}${:.2}", "Base imponible", estimate.taxable_base_usd);
    println!("{:<18}{} USD", "Impuestos", estimate.format_usd());
    println!("{:<18}{} ARS", "Impuestos", estimate.format_ars());
    println!("{}", estimate.franchise_status());
    println!("{}", estimate.summary());
    println!("Cotización: {:.2} ARS/USD", estimate.ars_per_usd);
}
