use crate::app_config::{AffiliateCodes, AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real process environment so tests can drive it with a
/// plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_f64 = |var: &str, default: &str| -> Result<f64, ConfigError> {
        let raw = or_default(var, default);
        match raw.parse::<f64>() {
            Ok(v) if v.is_finite() && v > 0.0 => Ok(v),
            Ok(v) => Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: format!("expected a positive rate, got {v}"),
            }),
            Err(e) => Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            }),
        }
    };

    let catalog_url = require("REPSHUB_CATALOG_URL")?;
    let catalog_anon_key = require("REPSHUB_CATALOG_ANON_KEY")?;

    let env = parse_environment(&or_default("REPSHUB_ENV", "development"));
    let log_level = or_default("REPSHUB_LOG_LEVEL", "info");

    let request_timeout_secs = parse_u64("REPSHUB_REQUEST_TIMEOUT_SECS", "8")?;
    let featured_timeout_secs = parse_u64("REPSHUB_FEATURED_TIMEOUT_SECS", "10")?;
    let user_agent = or_default("REPSHUB_USER_AGENT", "repshub/0.1 (storefront-core)");

    let page_size = parse_u32("REPSHUB_PAGE_SIZE", "36")?;
    if page_size == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "REPSHUB_PAGE_SIZE".to_string(),
            reason: "page size must be at least 1".to_string(),
        });
    }

    let rates_url = or_default("REPSHUB_RATES_URL", "https://www.dolarsi.com");
    let default_ars_per_usd = parse_f64("REPSHUB_DEFAULT_ARS_PER_USD", "1455")?;
    let brands_path = lookup("REPSHUB_BRANDS_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);

    let defaults = AffiliateCodes::default();
    let affiliate_codes = AffiliateCodes {
        kakobuy_affcode: or_default("REPSHUB_KAKOBUY_AFFCODE", &defaults.kakobuy_affcode),
        hubbuy_invitation_code: or_default(
            "REPSHUB_HUBBUY_INVITATION_CODE",
            &defaults.hubbuy_invitation_code,
        ),
        mulebuy_ref: or_default("REPSHUB_MULEBUY_REF", &defaults.mulebuy_ref),
    };

    Ok(AppConfig {
        env,
        log_level,
        catalog_url,
        catalog_anon_key,
        request_timeout_secs,
        featured_timeout_secs,
        user_agent,
        page_size,
        rates_url,
        default_ars_per_usd,
        brands_path,
        affiliate_codes,
    })
}

fn parse_environment(raw: &str) -> Environment {
    match raw.to_lowercase().as_str() {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
