//! `rates` command handler.

use repshub_core::{AppConfig, DEFAULT_ARS_PER_USD};
use repshub_rates::RatesClient;

const FALLBACK_TIMEOUT_SECS: u64 = 8;
const FALLBACK_USER_AGENT: &str = "repshub/0.1 (storefront-core)";

fn rates_client(config: &AppConfig) -> anyhow::Result<RatesClient> {
    Ok(RatesClient::with_base_url(
        config.request_timeout_secs,
        &config.user_agent,
        &config.rates_url,
    )?)
}

/// # Errors
///
/// Returns an error if the quotes cannot be fetched.
pub(crate) async fn run_rates(config: &AppConfig) -> anyhow::Result<()> {
    let quotes = rates_client(config)?.fetch_quotes().await?;

    let fmt = |quote: Option<f64>| quote.map_or_else(|| "n/a".to_string(), |q| format!("{q:.2}"));
    println!("{:<12}{}", "OFICIAL", fmt(quotes.official));
    println!("{:<12}{}", "CCL", fmt(quotes.ccl));
    if quotes.official.is_none() {
        println!(
            "official quote unavailable; prices use the default {:.2} ARS/USD",
            config.default_ars_per_usd
        );
    }
    Ok(())
}

/// Official ARS/USD rate for the tax estimate. Uses the configured quotes API
/// when config is available, the production API otherwise.
///
/// # Errors
///
/// Returns an error only if the HTTP client cannot be constructed.
pub(crate) async fn official_rate_or_default(config: Option<&AppConfig>) -> anyhow::Result<f64> {
    match config {
        Some(config) => Ok(rates_client(config)?
            .fetch_official_or_default(config.default_ars_per_usd)
            .await),
        None => Ok(
            RatesClient::new(FALLBACK_TIMEOUT_SECS, FALLBACK_USER_AGENT)?
                .fetch_official_or_default(DEFAULT_ARS_PER_USD)
                .await,
        ),
    }
}
