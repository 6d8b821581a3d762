use super::*;

fn test_client(base_url: &str) -> CatalogClient {
    CatalogClient::new(base_url, "anon-key", 5, "repshub-test/0.1")
        .expect("client construction should not fail")
}

#[test]
fn products_url_appends_rest_path() {
    let client = test_client("https://abc.supabase.co");
    assert_eq!(
        client.products_url.as_str(),
        "https://abc.supabase.co/rest/v1/products_clean"
    );
}

#[test]
fn products_url_tolerates_trailing_slash() {
    let client = test_client("https://abc.supabase.co/");
    assert_eq!(
        client.products_url.as_str(),
        "https://abc.supabase.co/rest/v1/products_clean"
    );
}

#[test]
fn products_url_encodes_query_pairs() {
    let client = test_client("https://abc.supabase.co");
    let url = client.products_url(&[
        ("select", "*".to_string()),
        ("nombre", "ilike.%saint laurent%".to_string()),
    ]);
    assert_eq!(
        url.as_str(),
        "https://abc.supabase.co/rest/v1/products_clean?select=*&nombre=ilike.%25saint+laurent%25"
    );
}

#[test]
fn new_rejects_relative_base_url() {
    let result = CatalogClient::new("not-a-url", "k", 5, "ua");
    assert!(
        matches!(result, Err(CatalogError::InvalidBaseUrl { .. })),
        "expected InvalidBaseUrl"
    );
}

#[test]
fn auth_headers_carry_key_twice() {
    let client = test_client("https://abc.supabase.co");
    let headers = client.auth_headers();
    assert_eq!(headers.get("apikey").unwrap(), "anon-key");
    assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer anon-key");
}

#[test]
fn featured_timeout_defaults_to_ten_seconds() {
    let client = test_client("https://abc.supabase.co");
    assert_eq!(client.featured_timeout, Duration::from_secs(10));
    let client = client.with_featured_timeout(3);
    assert_eq!(client.featured_timeout, Duration::from_secs(3));
}
