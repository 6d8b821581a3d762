use std::sync::LazyLock;

use regex::Regex;
use repshub_core::AffiliateCodes;

use super::Decoded;
use crate::{MarketplaceLink, Platform};

static PRODUCT_PATH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"oopbuy\.com/product/([^/]+)/(\d+)").expect("valid regex"));

pub(super) fn encode(link: &MarketplaceLink, _canonical: &str, _codes: &AffiliateCodes) -> String {
    format!(
        "https://oopbuy.com/product/{}/{}",
        link.platform.path_segment(),
        link.product_id
    )
}

fn platform_from_segment(segment: &str) -> Option<Platform> {
    match segment {
        "weidian" | "WEIDIAN" => Some(Platform::Weidian),
        "1688" => Some(Platform::Ali1688),
        "taobao" => Some(Platform::Taobao),
        _ => None,
    }
}

pub(super) fn decode(link: &str) -> Decoded {
    let Some(caps) = PRODUCT_PATH_RE.captures(link) else {
        return Decoded::NoMatch;
    };
    match platform_from_segment(&caps[1]) {
        Some(platform) => Decoded::Found(platform.canonical_url(&caps[2])),
        None => {
            tracing::debug!(link, segment = &caps[1], "unknown oopbuy platform segment");
            Decoded::NoMatch
        }
    }
}
