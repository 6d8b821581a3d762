use std::sync::LazyLock;

use regex::Regex;
use repshub_core::AffiliateCodes;

use super::Decoded;
use crate::encoding::{decode_component, encode_component};
use crate::MarketplaceLink;

/// Text between `url=` and the next `=` or `&`.
static URL_SEGMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"url=([^=&]+)").expect("valid regex"));

const PRODUCT_LINK_MARKER: &str = "=product_link";

pub(super) fn encode(_link: &MarketplaceLink, canonical: &str, codes: &AffiliateCodes) -> String {
    format!(
        "https://www.hubbuycn.com/product/item?url={}{PRODUCT_LINK_MARKER}&invitation_code={}",
        encode_component(canonical),
        codes.hubbuy_invitation_code
    )
}

/// Hubbuy and its white-label derivatives (hipobuy). The wrapped URL is
/// returned as found when it cannot be percent-decoded.
pub(super) fn decode(link: &str) -> Decoded {
    let lower = link.to_ascii_lowercase();
    if !(lower.contains("hubbuycn.com") || lower.contains("hipobuy")) {
        return Decoded::NoMatch;
    }
    let Some(caps) = URL_SEGMENT_RE.captures(link) else {
        return Decoded::NoMatch;
    };

    let raw = caps[1].replace(PRODUCT_LINK_MARKER, "");
    match decode_component(&raw) {
        Some(decoded) => Decoded::Found(decoded),
        None => {
            tracing::debug!(link, "hubbuy url segment is not decodable, using raw value");
            Decoded::Found(raw)
        }
    }
}
