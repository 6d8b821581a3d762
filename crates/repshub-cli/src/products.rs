//! `products` and `featured` command handlers.

use anyhow::Context;
use clap::Args;
use repshub_agents::{resolve_product_link_with, NO_LINK_LABEL};
use repshub_catalog::{parse_category_filter, CatalogClient, CatalogFilters, CatalogState};
use repshub_core::{
    default_brand_table, image_or_placeholder, load_brands, AffiliateCodes, AppConfig, Currency,
    ExchangeRates, Product,
};
use repshub_rates::RatesClient;

pub(crate) const DEFAULT_AGENT: &str = "KakoBuy";

#[derive(Debug, Args)]
pub struct ProductsArgs {
    /// Page number (1-based)
    #[arg(long, default_value = "1")]
    pub page: u32,
    /// Substring to search for in product names
    #[arg(long)]
    pub search: Option<String>,
    /// Brand slug (e.g. acne-studios, sin-marca)
    #[arg(long)]
    pub brand: Option<String>,
    /// Quality tier (exact match)
    #[arg(long)]
    pub quality: Option<String>,
    /// Storefront category (conjuntos, calzado, ropa-superior, ropa-inferior,
    /// accesorios, all)
    #[arg(long)]
    pub category: Option<String>,
    /// Sort key (recientes, precio-asc, precio-desc, nombre-asc, nombre-desc)
    #[arg(long, default_value = "recientes")]
    pub sort: String,
    /// Display currency (CNY, USD, ARS, CLP)
    #[arg(long, default_value = "CNY")]
    pub currency: String,
    /// Purchasing agent for outbound links
    #[arg(long, default_value = DEFAULT_AGENT)]
    pub agent: String,
    /// Print the raw page as JSON
    #[arg(long)]
    pub json: bool,
}

impl ProductsArgs {
    fn filters(&self) -> anyhow::Result<CatalogFilters> {
        let category = match self.category.as_deref() {
            Some(raw) => parse_category_filter(raw)?,
            None => None,
        };
        Ok(CatalogFilters {
            quality: self.quality.clone(),
            search: self.search.clone(),
            brand: self.brand.clone(),
            category,
            sort: self.sort.parse().unwrap_or_default(),
        })
    }
}

fn build_catalog_client(config: &AppConfig) -> anyhow::Result<CatalogClient> {
    let brands = match &config.brands_path {
        Some(path) => load_brands(path)
            .with_context(|| format!("failed to load brands from {}", path.display()))?,
        None => default_brand_table(),
    };
    Ok(CatalogClient::from_config(config)?.with_brands(brands))
}

async fn exchange_rates(config: &AppConfig) -> ExchangeRates {
    let rate = match RatesClient::with_base_url(
        config.request_timeout_secs,
        &config.user_agent,
        &config.rates_url,
    ) {
        Ok(client) => {
            client
                .fetch_official_or_default(config.default_ars_per_usd)
                .await
        }
        Err(e) => {
            tracing::warn!(error = %e, "rates client unavailable, using default ARS/USD rate");
            config.default_ars_per_usd
        }
    };
    ExchangeRates::default().with_ars_per_usd(rate)
}

/// # Errors
///
/// Returns an error if the filters are invalid or the catalog page cannot be
/// loaded.
pub(crate) async fn run_products(config: &AppConfig, args: &ProductsArgs) -> anyhow::Result<()> {
    let filters = args.filters()?;
    let client = build_catalog_client(config)?;
    let mut state = CatalogState::new(config.page_size);

    let (rates, loaded) = tokio::join!(
        exchange_rates(config),
        state.load_page(&client, args.page, filters)
    );

    let page = match loaded {
        Ok(page) => page,
        Err(e) => {
            eprintln!("Error al cargar productos: {e}");
            eprintln!("Run the same command again to retry.");
            return Err(e.into());
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&page)?);
        return Ok(());
    }

    let currency = Currency::from_code_or_default(&args.currency);
    if page.products.is_empty() {
        println!("no products found");
    }
    for product in &page.products {
        println!(
            "{}",
            render_product_line(product, &rates, currency, &args.agent, &config.affiliate_codes)
        );
    }

    println!();
    println!(
        "page {} of {} ({} products){}",
        state.current_page(),
        state.total_pages(),
        state.total_count(),
        render_page_window(&state)
    );
    Ok(())
}

/// # Errors
///
/// Returns an error if the featured products cannot be loaded.
pub(crate) async fn run_featured(
    config: &AppConfig,
    count: usize,
    agent: &str,
) -> anyhow::Result<()> {
    let client = build_catalog_client(config)?;
    let (rates, featured) = tokio::join!(exchange_rates(config), client.fetch_featured(count));

    for product in &featured? {
        println!(
            "{}",
            render_product_line(product, &rates, Currency::Cny, agent, &config.affiliate_codes)
        );
        println!("    {}", image_or_placeholder(product.image_url.as_deref()));
    }
    Ok(())
}

/// One listing row: name, inferred category, price, and outbound link.
pub(crate) fn render_product_line(
    product: &Product,
    rates: &ExchangeRates,
    currency: Currency,
    agent: &str,
    codes: &AffiliateCodes,
) -> String {
    let link = resolve_product_link_with(product.source_url.as_deref(), agent, codes).map_or_else(
        || NO_LINK_LABEL.to_string(),
        |link| format!("{}: {}", link.agent_name, link.url),
    );
    format!(
        "{:<40} {:<14} {:>16}  {}",
        truncate(&product.name, 40),
        product.category().as_str(),
        rates.format(product.price_or_zero(), currency),
        link
    )
}

fn render_page_window(state: &CatalogState) -> String {
    if !state.has_multiple_pages() {
        return String::new();
    }
    let window = state.visible_pages();
    let mut parts = Vec::new();
    if window.show_first {
        parts.push("1".to_string());
        if window.show_first_ellipsis {
            parts.push("...".to_string());
        }
    }
    for page in window.pages() {
        if page == state.current_page() {
            parts.push(format!("[{page}]"));
        } else {
            parts.push(page.to_string());
        }
    }
    if window.show_last {
        if window.show_last_ellipsis {
            parts.push("...".to_string());
        }
        parts.push(state.total_pages().to_string());
    }
    format!("  {}", parts.join(" "))
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        text.to_string()
    }
}
