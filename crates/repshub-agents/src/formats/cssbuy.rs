use std::sync::LazyLock;

use regex::Regex;
use repshub_core::AffiliateCodes;

use super::Decoded;
use crate::MarketplaceLink;

static ITEM_PAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)cssbuy\.com/item-(\d+)\.html").expect("valid regex"));

pub(super) fn encode(link: &MarketplaceLink, _canonical: &str, _codes: &AffiliateCodes) -> String {
    format!("https://www.cssbuy.com/item-{}.html", link.product_id)
}

/// CssBuy item pages carry the product id but not the platform, so the
/// listing cannot be rebuilt.
pub(super) fn decode(link: &str) -> Decoded {
    if ITEM_PAGE_RE.is_match(link) {
        tracing::debug!(link, "cssbuy link does not identify a platform");
        Decoded::Unrecoverable
    } else {
        Decoded::NoMatch
    }
}
