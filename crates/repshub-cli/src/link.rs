//! `link` command handlers.

use anyhow::bail;
use clap::Subcommand;
use repshub_agents::{convert_to_agent_link_with, extract_base_url, Agent};
use repshub_core::AffiliateCodes;

#[derive(Debug, Subcommand)]
pub enum LinkCommands {
    /// Build an agent link from a marketplace or agent link
    Convert {
        /// Marketplace listing or any supported agent link
        url: String,
        /// Target agent (KakoBuy, CssBuy, Oopbuy, Hubbuy, MuleBuy)
        #[arg(long, default_value = crate::products::DEFAULT_AGENT)]
        agent: String,
        /// Print the link for every supported agent instead
        #[arg(long)]
        all: bool,
    },
    /// Recover the marketplace listing behind an agent link
    Extract {
        url: String,
    },
}

/// # Errors
///
/// Returns an error when the link cannot be resolved to a marketplace
/// listing.
pub(crate) fn run_link(command: &LinkCommands, codes: &AffiliateCodes) -> anyhow::Result<()> {
    match command {
        LinkCommands::Convert { url, agent, all } => {
            if *all {
                for agent in Agent::ALL {
                    let converted = convert_to_agent_link_with(url, agent.display_name(), codes);
                    println!(
                        "{:<9}{}",
                        agent.display_name(),
                        converted.as_deref().unwrap_or(repshub_agents::NO_LINK_LABEL)
                    );
                }
                return Ok(());
            }
            match convert_to_agent_link_with(url, agent, codes) {
                Some(converted) => println!("{converted}"),
                None => bail!("could not build a {agent} link for {url}"),
            }
        }
        LinkCommands::Extract { url } => match extract_base_url(url) {
            Some(base) => println!("{base}"),
            None => bail!("no marketplace listing found in {url}"),
        },
    }
    Ok(())
}
