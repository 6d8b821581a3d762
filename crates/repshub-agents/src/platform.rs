//! Source marketplaces and their canonical listing URLs.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::AgentError;

const MARKETPLACE_DOMAINS: [&str; 3] = ["weidian.com", "1688.com", "taobao.com"];

static WEIDIAN_ITEM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)weidian\.com/item\.html\?itemID=(\d+)").expect("valid regex")
});
static ALI_1688_OFFER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)1688\.com/offer/(\d+)").expect("valid regex"));
static TAOBAO_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)taobao\.com/item\.htm\?id=(\d+)").expect("valid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Weidian,
    Ali1688,
    Taobao,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Weidian, Platform::Ali1688, Platform::Taobao];

    /// Upper-case token used in MuleBuy query strings.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Platform::Weidian => "WEIDIAN",
            Platform::Ali1688 => "ALI_1688",
            Platform::Taobao => "TAOBAO",
        }
    }

    /// Lower-case path segment used in Oopbuy product URLs.
    #[must_use]
    pub fn path_segment(self) -> &'static str {
        match self {
            Platform::Weidian => "weidian",
            Platform::Ali1688 => "1688",
            Platform::Taobao => "taobao",
        }
    }

    #[must_use]
    pub fn canonical_url(self, product_id: &str) -> String {
        match self {
            Platform::Weidian => format!("https://weidian.com/item.html?itemID={product_id}"),
            Platform::Ali1688 => format!("https://detail.1688.com/offer/{product_id}.html"),
            Platform::Taobao => format!("https://item.taobao.com/item.htm?id={product_id}"),
        }
    }
}

impl FromStr for Platform {
    type Err = AgentError;

    /// Accepts the MuleBuy tokens exactly (`WEIDIAN`, `ALI_1688`, `TAOBAO`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|p| p.token() == s)
            .ok_or_else(|| AgentError::UnknownPlatform(s.to_string()))
    }
}

/// A marketplace listing identified by platform and numeric product id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MarketplaceLink {
    pub platform: Platform,
    pub product_id: String,
}

impl MarketplaceLink {
    /// Extracts platform and product id from a marketplace URL.
    ///
    /// Patterns are checked Taobao, 1688, Weidian; the first match wins.
    #[must_use]
    pub fn parse(url: &str) -> Option<Self> {
        let patterns: [(Platform, &Regex); 3] = [
            (Platform::Taobao, &*TAOBAO_ITEM_RE),
            (Platform::Ali1688, &*ALI_1688_OFFER_RE),
            (Platform::Weidian, &*WEIDIAN_ITEM_RE),
        ];

        patterns.into_iter().find_map(|(platform, re)| {
            re.captures(url).map(|caps| MarketplaceLink {
                platform,
                product_id: caps[1].to_string(),
            })
        })
    }

    #[must_use]
    pub fn canonical_url(&self) -> String {
        self.platform.canonical_url(&self.product_id)
    }
}

/// Whether `link` points directly at a marketplace listing.
///
/// URLs are judged by host so that agent links carrying an encoded
/// marketplace URL in their query do not count. Strings that do not parse as
/// absolute URLs fall back to a substring check.
#[must_use]
pub fn is_marketplace_link(link: &str) -> bool {
    let link = link.trim();
    if link.is_empty() {
        return false;
    }

    match url::Url::parse(link) {
        Ok(parsed) => parsed.host_str().is_some_and(|host| {
            let host = host.to_ascii_lowercase();
            MARKETPLACE_DOMAINS
                .iter()
                .any(|domain| host == *domain || host.ends_with(&format!(".{domain}")))
        }),
        Err(_) => {
            let lower = link.to_ascii_lowercase();
            MARKETPLACE_DOMAINS.iter().any(|domain| lower.contains(domain))
        }
    }
}
