use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Affiliate identifiers appended to outbound agent links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffiliateCodes {
    /// `affcode` query parameter on KakoBuy links.
    pub kakobuy_affcode: String,
    /// `invitation_code` query parameter on Hubbuy links.
    pub hubbuy_invitation_code: String,
    /// `ref` query parameter on MuleBuy links.
    pub mulebuy_ref: String,
}

impl Default for AffiliateCodes {
    fn default() -> Self {
        Self {
            kakobuy_affcode: "allreps".to_string(),
            hubbuy_invitation_code: "0O40qL00".to_string(),
            mulebuy_ref: "200118463".to_string(),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Project URL of the hosted catalog backend, e.g. `https://xyz.supabase.co`.
    pub catalog_url: String,
    pub catalog_anon_key: String,
    pub request_timeout_secs: u64,
    pub featured_timeout_secs: u64,
    pub user_agent: String,
    pub page_size: u32,
    pub rates_url: String,
    pub default_ars_per_usd: f64,
    /// Optional YAML brand search table; the built-in table is used when unset.
    pub brands_path: Option<PathBuf>,
    pub affiliate_codes: AffiliateCodes,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("catalog_url", &self.catalog_url)
            .field("catalog_anon_key", &"[redacted]")
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("featured_timeout_secs", &self.featured_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("page_size", &self.page_size)
            .field("rates_url", &self.rates_url)
            .field("default_ars_per_usd", &self.default_ars_per_usd)
            .field("brands_path", &self.brands_path)
            .field("affiliate_codes", &self.affiliate_codes)
            .finish()
    }
}
