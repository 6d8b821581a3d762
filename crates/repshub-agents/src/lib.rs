//! Purchasing-agent link translation.
//!
//! Product listings point at a Chinese marketplace (Weidian, 1688, Taobao).
//! Buyers outside China order through a purchasing agent, each of which wraps
//! the marketplace listing in its own URL scheme. This crate converts in both
//! directions: [`extract_base_url`] recovers the marketplace link from any
//! supported agent link, and [`convert_to_agent_link`] builds the agent link
//! for a marketplace listing.

pub mod agent;
pub mod encoding;
pub mod error;
mod formats;
pub mod platform;
pub mod translate;

pub use agent::{agent_display_name, Agent, AgentLink, NO_LINK_LABEL};
pub use error::AgentError;
pub use platform::{is_marketplace_link, MarketplaceLink, Platform};
pub use translate::{
    convert_to_agent_link, convert_to_agent_link_with, extract_base_url, resolve_product_link,
    resolve_product_link_with,
};
