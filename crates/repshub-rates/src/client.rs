//! HTTP client for the `DolarSi` quotes endpoint.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::RatesError;
use crate::types::{CasaEntry, DollarQuotes, OFFICIAL_NAME};

const DEFAULT_BASE_URL: &str = "https://www.dolarsi.com/";
const QUOTES_PATH: &str = "api/api.php";
const QUOTES_TYPE: &str = "valoresprincipales";

/// Client for the `DolarSi` API.
///
/// Use [`RatesClient::new`] for production or [`RatesClient::with_base_url`]
/// to point at a mock server in tests.
pub struct RatesClient {
    client: Client,
    base_url: Url,
}

impl RatesClient {
    /// Creates a client pointed at the production `DolarSi` API.
    ///
    /// # Errors
    ///
    /// Returns [`RatesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, RatesError> {
        Self::with_base_url(timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL.
    ///
    /// # Errors
    ///
    /// Returns [`RatesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`RatesError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, RatesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| RatesError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    /// Fetches the official and CCL dollar quotes.
    ///
    /// # Errors
    ///
    /// - [`RatesError::Http`] on network failure.
    /// - [`RatesError::UnexpectedStatus`] on a non-2xx status.
    /// - [`RatesError::Deserialize`] if the body is not a quote list.
    pub async fn fetch_quotes(&self) -> Result<DollarQuotes, RatesError> {
        let url = self.quotes_url()?;
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RatesError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let entries: Vec<CasaEntry> =
            serde_json::from_str(&body).map_err(|e| RatesError::Deserialize {
                context: format!("{QUOTES_TYPE} from {url}"),
                source: e,
            })?;

        let quotes = DollarQuotes::from_entries(&entries);
        tracing::debug!(official = ?quotes.official, ccl = ?quotes.ccl, "fetched dollar quotes");
        Ok(quotes)
    }

    /// Official ARS per USD selling rate.
    ///
    /// # Errors
    ///
    /// Same as [`RatesClient::fetch_quotes`], plus
    /// [`RatesError::MissingQuote`] when the official rate is absent or not
    /// a positive number.
    pub async fn fetch_official(&self) -> Result<f64, RatesError> {
        self.fetch_quotes()
            .await?
            .official
            .ok_or_else(|| RatesError::MissingQuote(OFFICIAL_NAME.to_string()))
    }

    /// Official ARS per USD rate, or `default` when it cannot be fetched.
    /// Price display degrades to the default rather than failing.
    pub async fn fetch_official_or_default(&self, default: f64) -> f64 {
        match self.fetch_official().await {
            Ok(rate) => rate,
            Err(e) => {
                tracing::warn!(error = %e, default, "using default ARS/USD rate");
                default
            }
        }
    }

    fn quotes_url(&self) -> Result<Url, RatesError> {
        let mut url = self
            .base_url
            .join(QUOTES_PATH)
            .map_err(|e| RatesError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        url.query_pairs_mut().append_pair("type", QUOTES_TYPE);
        Ok(url)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
