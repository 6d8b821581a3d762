mod link;
mod products;
mod rates;
mod tax;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use link::LinkCommands;
use products::{ProductsArgs, DEFAULT_AGENT};

#[derive(Debug, Parser)]
#[command(name = "repshub-cli")]
#[command(about = "Repshub storefront command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Convert between marketplace links and purchasing-agent links
    Link {
        #[command(subcommand)]
        command: LinkCommands,
    },
    /// List one page of the catalog
    Products(ProductsArgs),
    /// Show random picks from the latest listings
    Featured {
        /// Number of products to show
        #[arg(long, default_value = "5")]
        count: usize,
        /// Purchasing agent for outbound links
        #[arg(long, default_value = DEFAULT_AGENT)]
        agent: String,
    },
    /// Show the current ARS/USD dollar quotes
    Rates,
    /// Estimate Argentine import duties for a purchase
    Tax {
        /// Declared purchase value in USD
        #[arg(long)]
        purchase: f64,
        /// Shipping cost in USD
        #[arg(long, default_value = "0")]
        shipping: f64,
        /// Do not deduct the USD 50 duty-free allowance
        #[arg(long)]
        no_franchise: bool,
        /// Do not add the courier management fee
        #[arg(long)]
        no_fee: bool,
        /// ARS per USD rate; fetched from the quotes API when omitted
        #[arg(long)]
        ars_per_usd: Option<f64>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = repshub_core::load_app_config();
    init_tracing(config.as_ref().ok().map(|c| c.log_level.as_str()))?;

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("repshub-cli ready; run with --help for commands");
        return Ok(());
    };

    match command {
        Commands::Link { command } => {
            let codes = config
                .as_ref()
                .map(|c| c.affiliate_codes.clone())
                .unwrap_or_default();
            link::run_link(&command, &codes)?;
        }
        Commands::Products(args) => products::run_products(&config?, &args).await?,
        Commands::Featured { count, agent } => {
            products::run_featured(&config?, count, &agent).await?;
        }
        Commands::Rates => rates::run_rates(&config?).await?,
        Commands::Tax {
            purchase,
            shipping,
            no_franchise,
            no_fee,
            ars_per_usd,
        } => {
            let ars_per_usd = match ars_per_usd {
                Some(rate) => rate,
                None => rates::official_rate_or_default(config.as_ref().ok()).await?,
            };
            tax::run_tax(purchase, shipping, !no_franchise, !no_fee, ars_per_usd);
        }
    }

    Ok(())
}

/// `RUST_LOG` wins; otherwise the configured level, otherwise `info`.
fn init_tracing(configured_level: Option<&str>) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(configured_level.unwrap_or("info")))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    Ok(())
}
