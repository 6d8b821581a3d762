use std::sync::LazyLock;

use regex::Regex;
use repshub_core::AffiliateCodes;

use super::Decoded;
use crate::{MarketplaceLink, Platform};

static PRODUCT_QUERY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"mulebuy\.com/product\?id=(\d+)&platform=([^&]+)").expect("valid regex")
});

pub(super) fn encode(link: &MarketplaceLink, _canonical: &str, codes: &AffiliateCodes) -> String {
    format!(
        "https://mulebuy.com/product?id={}&platform={}&ref={}",
        link.product_id,
        link.platform.token(),
        codes.mulebuy_ref
    )
}

pub(super) fn decode(link: &str) -> Decoded {
    let Some(caps) = PRODUCT_QUERY_RE.captures(link) else {
        return Decoded::NoMatch;
    };
    match caps[2].parse::<Platform>() {
        Ok(platform) => Decoded::Found(platform.canonical_url(&caps[1])),
        Err(err) => {
            tracing::debug!(link, error = %err, "unknown mulebuy platform token");
            Decoded::NoMatch
        }
    }
}
