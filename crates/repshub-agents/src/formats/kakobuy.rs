use std::sync::LazyLock;

use regex::Regex;
use repshub_core::AffiliateCodes;

use super::Decoded;
use crate::encoding::{decode_component, encode_component};
use crate::{is_marketplace_link, MarketplaceLink};

static URL_PARAM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[?&]url=([^&]+)").expect("valid regex"));

pub(super) fn encode(_link: &MarketplaceLink, canonical: &str, codes: &AffiliateCodes) -> String {
    format!(
        "https://www.kakobuy.com/item/details?url={}&affcode={}",
        encode_component(canonical),
        codes.kakobuy_affcode
    )
}

/// `kakobuy.com/item/details?url=<encoded listing>`. The wrapped URL is
/// sometimes double-encoded.
pub(super) fn decode(link: &str) -> Decoded {
    if !link.to_ascii_lowercase().contains("kakobuy.com/item/details") {
        return Decoded::NoMatch;
    }
    let Some(caps) = URL_PARAM_RE.captures(link) else {
        return Decoded::NoMatch;
    };

    let Some(mut decoded) = decode_component(&caps[1]) else {
        tracing::debug!(link, "malformed escape in kakobuy url parameter");
        return Decoded::NoMatch;
    };
    if decoded.contains('%') {
        match decode_component(&decoded) {
            Some(twice) => decoded = twice,
            None => {
                tracing::debug!(link, "malformed escape in double-encoded kakobuy url");
                return Decoded::NoMatch;
            }
        }
    }

    if is_marketplace_link(&decoded) {
        Decoded::Found(decoded)
    } else {
        Decoded::NoMatch
    }
}
