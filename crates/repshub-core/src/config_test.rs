use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

/// Returns a map with all required env vars populated with valid defaults.
fn full_env<'a>() -> HashMap<&'a str, &'a str> {
    let mut m = HashMap::new();
    m.insert("REPSHUB_CATALOG_URL", "https://catalog.example.supabase.co");
    m.insert("REPSHUB_CATALOG_ANON_KEY", "anon-test-key");
    m
}

#[test]
fn parse_environment_known_values() {
    assert_eq!(parse_environment("development"), Environment::Development);
    assert_eq!(parse_environment("test"), Environment::Test);
    assert_eq!(parse_environment("PRODUCTION"), Environment::Production);
}

#[test]
fn parse_environment_unknown_defaults_to_development() {
    assert_eq!(parse_environment("staging"), Environment::Development);
}

#[test]
fn build_app_config_fails_without_catalog_url() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "REPSHUB_CATALOG_URL"),
        "expected MissingEnvVar(REPSHUB_CATALOG_URL), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_without_anon_key() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("REPSHUB_CATALOG_URL", "https://catalog.example.supabase.co");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "REPSHUB_CATALOG_ANON_KEY"),
        "expected MissingEnvVar(REPSHUB_CATALOG_ANON_KEY), got: {result:?}"
    );
}

#[test]
fn build_app_config_treats_blank_required_var_as_missing() {
    let mut map = full_env();
    map.insert("REPSHUB_CATALOG_ANON_KEY", "   ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(matches!(result, Err(ConfigError::MissingEnvVar(_))));
}

#[test]
fn build_app_config_applies_defaults() {
    let map = full_env();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.request_timeout_secs, 8);
    assert_eq!(cfg.featured_timeout_secs, 10);
    assert_eq!(cfg.page_size, 36);
    assert_eq!(cfg.rates_url, "https://www.dolarsi.com");
    assert!((cfg.default_ars_per_usd - 1455.0).abs() < f64::EPSILON);
    assert!(cfg.brands_path.is_none());
    assert_eq!(cfg.affiliate_codes, AffiliateCodes::default());
    assert_eq!(cfg.user_agent, "repshub/0.1 (storefront-core)");
}

#[test]
fn build_app_config_reads_overrides() {
    let mut map = full_env();
    map.insert("REPSHUB_ENV", "production");
    map.insert("REPSHUB_PAGE_SIZE", "24");
    map.insert("REPSHUB_REQUEST_TIMEOUT_SECS", "3");
    map.insert("REPSHUB_BRANDS_PATH", "./config/brands.yaml");
    map.insert("REPSHUB_KAKOBUY_AFFCODE", "myshop");
    map.insert("REPSHUB_MULEBUY_REF", "42");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.page_size, 24);
    assert_eq!(cfg.request_timeout_secs, 3);
    assert_eq!(
        cfg.brands_path.as_deref(),
        Some(std::path::Path::new("./config/brands.yaml"))
    );
    assert_eq!(cfg.affiliate_codes.kakobuy_affcode, "myshop");
    assert_eq!(cfg.affiliate_codes.mulebuy_ref, "42");
    assert_eq!(cfg.affiliate_codes.hubbuy_invitation_code, "0O40qL00");
}

#[test]
fn build_app_config_rejects_zero_page_size() {
    let mut map = full_env();
    map.insert("REPSHUB_PAGE_SIZE", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "REPSHUB_PAGE_SIZE"),
        "expected InvalidEnvVar(REPSHUB_PAGE_SIZE), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_non_numeric_timeout() {
    let mut map = full_env();
    map.insert("REPSHUB_REQUEST_TIMEOUT_SECS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "REPSHUB_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(REPSHUB_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_non_positive_default_rate() {
    let mut map = full_env();
    map.insert("REPSHUB_DEFAULT_ARS_PER_USD", "-3");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "REPSHUB_DEFAULT_ARS_PER_USD"),
        "expected InvalidEnvVar(REPSHUB_DEFAULT_ARS_PER_USD), got: {result:?}"
    );
}

#[test]
fn debug_output_redacts_anon_key() {
    let map = full_env();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("anon-test-key"));
    assert!(rendered.contains("[redacted]"));
}
