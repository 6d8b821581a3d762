//! Conversion between marketplace links and agent links.

use repshub_core::AffiliateCodes;

use crate::formats::{codec_for, Decoded, CODECS};
use crate::{agent_display_name, is_marketplace_link, Agent, AgentLink, MarketplaceLink};

/// Recovers the canonical marketplace URL behind `link`.
///
/// Marketplace links are returned unchanged (trimmed). Agent links are run
/// through each agent's decoder in priority order (KakoBuy, Hubbuy, Oopbuy,
/// MuleBuy, CssBuy) and the first recognized format decides the result.
/// When the decoded value carries no product id but the raw link embeds an
/// unencoded listing, that listing's canonical URL is returned instead.
/// Returns `None` for blank input, unrecognized links, and CssBuy links,
/// which do not record the platform.
#[must_use]
pub fn extract_base_url(link: &str) -> Option<String> {
    let link = link.trim();
    if link.is_empty() {
        return None;
    }

    if is_marketplace_link(link) {
        return Some(link.to_string());
    }

    for codec in &CODECS {
        match (codec.decode)(link) {
            Decoded::NoMatch => {}
            Decoded::Found(url) => {
                tracing::debug!(link, agent = %codec.agent, "recognized agent link");
                if MarketplaceLink::parse(&url).is_none() {
                    if let Some(listing) = MarketplaceLink::parse(link) {
                        return Some(listing.canonical_url());
                    }
                }
                return Some(url);
            }
            Decoded::Unrecoverable => return None,
        }
    }

    None
}

/// Builds the `agent` link for a listing using the default affiliate codes.
///
/// See [`convert_to_agent_link_with`].
#[must_use]
pub fn convert_to_agent_link(base_url: &str, agent: &str) -> Option<String> {
    convert_to_agent_link_with(base_url, agent, &AffiliateCodes::default())
}

/// Builds the `agent` link for a listing.
///
/// `base_url` may itself be an agent link; it is resolved with
/// [`extract_base_url`] first. Returns `None` when either input is blank or
/// the listing cannot be identified. Unknown agents get the marketplace URL
/// back unchanged.
#[must_use]
pub fn convert_to_agent_link_with(
    base_url: &str,
    agent: &str,
    codes: &AffiliateCodes,
) -> Option<String> {
    if agent.trim().is_empty() {
        return None;
    }

    let canonical = extract_base_url(base_url)?;
    if !is_marketplace_link(&canonical) {
        tracing::debug!(
            base_url,
            canonical = %canonical,
            "resolved link is not a marketplace listing"
        );
        return None;
    }

    let Some(listing) = MarketplaceLink::parse(&canonical) else {
        tracing::debug!(canonical = %canonical, "no product id in marketplace link");
        return None;
    };

    let Ok(agent) = agent.parse::<Agent>() else {
        return Some(canonical);
    };
    let codec = codec_for(agent)?;
    Some((codec.encode)(&listing, &canonical, codes))
}

/// Outbound link for a product card using the default affiliate codes.
#[must_use]
pub fn resolve_product_link(source_url: Option<&str>, agent: &str) -> Option<AgentLink> {
    resolve_product_link_with(source_url, agent, &AffiliateCodes::default())
}

/// Outbound link for a product card.
///
/// Returns `None` when the product has no source URL or the converted link is
/// not displayable; callers render [`crate::NO_LINK_LABEL`] instead.
#[must_use]
pub fn resolve_product_link_with(
    source_url: Option<&str>,
    agent: &str,
    codes: &AffiliateCodes,
) -> Option<AgentLink> {
    let url = convert_to_agent_link_with(source_url?, agent, codes)?;
    let link = AgentLink {
        agent_name: agent_display_name(agent),
        url,
    };
    link.is_displayable().then_some(link)
}
