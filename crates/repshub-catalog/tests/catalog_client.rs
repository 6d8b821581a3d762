//! Integration tests for `CatalogClient` and `CatalogState` against a
//! wiremock `PostgREST` stand-in.

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use repshub_catalog::{CatalogClient, CatalogError, CatalogFilters, CatalogState, SortKey};
use repshub_core::Category;

const PRODUCTS_PATH: &str = "/rest/v1/products_clean";

fn test_client(base_url: &str) -> CatalogClient {
    CatalogClient::new(base_url, "anon-key", 5, "repshub-test/0.1")
        .expect("failed to build test CatalogClient")
}

fn row(name: &str, price: f64) -> serde_json::Value {
    json!({
        "id": name,
        "nombre": name,
        "categoria": null,
        "descripcion": null,
        "calidad": "1:1",
        "precio_cny": price,
        "imagen_url": null,
        "source_url": "https://weidian.com/item.html?itemID=1",
        "created_at": "2025-10-01T12:00:00+00:00",
        "activo": true
    })
}

#[tokio::test]
async fn fetch_page_sends_range_and_auth_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(PRODUCTS_PATH))
        .and(query_param("select", "*"))
        .and(query_param("activo", "eq.true"))
        .and(query_param("order", "created_at.desc"))
        .and(header("apikey", "anon-key"))
        .and(header("authorization", "Bearer anon-key"))
        .and(header("prefer", "count=exact"))
        .and(header("range", "36-71"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(&json!([row("Buzo Nike", 120.0)]))
                .insert_header("Content-Range", "36-71/120"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let page = client
        .fetch_page(2, 36, &CatalogFilters::default())
        .await
        .expect("page should load");

    assert_eq!(page.products.len(), 1);
    assert_eq!(page.total_count, 120);
    assert_eq!(page.total_pages, 4);
    assert_eq!(page.current_page, 2);
}

#[tokio::test]
async fn fetch_page_encodes_filters_as_postgrest_operators() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(PRODUCTS_PATH))
        .and(query_param("calidad", "eq.1:1"))
        .and(query_param("nombre", "ilike.%dunk%"))
        .and(query_param("nombre", "ilike.%acne%"))
        .and(query_param("order", "nombre.desc"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(&json!([]))
                .insert_header("Content-Range", "*/0"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let filters = CatalogFilters {
        quality: Some("1:1".to_string()),
        search: Some("dunk".to_string()),
        brand: Some("acne-studios".to_string()),
        sort: SortKey::NombreDesc,
        ..CatalogFilters::default()
    };
    let page = test_client(&server.uri())
        .fetch_page(1, 36, &filters)
        .await
        .expect("page should load");

    assert!(page.products.is_empty());
    assert_eq!(page.total_count, 0);
    assert_eq!(page.total_pages, 1);
}

#[tokio::test]
async fn category_filter_paginates_after_local_filtering() {
    let server = MockServer::start().await;

    let rows = json!([
        row("Zapatillas Samba", 300.0),
        row("Buzo Essentials", 200.0),
        row("Zapatillas Dunk", 100.0),
        row("Caja para zapatillas", 20.0),
        row("Sneakers Jordan 4", 250.0),
    ]);

    Mock::given(method("GET"))
        .and(path(PRODUCTS_PATH))
        .and(header("range", "0-999"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(&rows)
                .insert_header("Content-Range", "0-4/5"),
        )
        .mount(&server)
        .await;

    let filters = CatalogFilters {
        category: Some(Category::Calzado),
        sort: SortKey::PrecioAsc,
        ..CatalogFilters::default()
    };
    let client = test_client(&server.uri());

    let first = client.fetch_page(1, 2, &filters).await.expect("page 1");
    let names: Vec<&str> = first.products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Zapatillas Dunk", "Sneakers Jordan 4"]);
    assert_eq!(first.total_count, 3);
    assert_eq!(first.total_pages, 2);

    let second = client.fetch_page(2, 2, &filters).await.expect("page 2");
    let names: Vec<&str> = second.products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Zapatillas Samba"]);
}

#[tokio::test]
async fn non_success_status_surfaces_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(PRODUCTS_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .fetch_page(1, 36, &CatalogFilters::default())
        .await
        .expect_err("401 should fail");

    match err {
        CatalogError::UnexpectedStatus { status, body } => {
            assert_eq!(status, 401);
            assert_eq!(body, "invalid api key");
        }
        other => panic!("expected UnexpectedStatus, got: {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(PRODUCTS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({"message": "nope"})))
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .fetch_page(1, 36, &CatalogFilters::default())
        .await
        .expect_err("object body should fail");

    assert!(
        matches!(err, CatalogError::Deserialize { .. }),
        "expected Deserialize, got: {err:?}"
    );
}

#[tokio::test]
async fn slow_response_is_a_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(PRODUCTS_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(&json!([]))
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let client = CatalogClient::new(&server.uri(), "anon-key", 1, "repshub-test/0.1")
        .expect("client");
    let err = client
        .fetch_page(1, 36, &CatalogFilters::default())
        .await
        .expect_err("delay should exceed timeout");

    assert!(
        matches!(err, CatalogError::Timeout { .. }),
        "expected Timeout, got: {err:?}"
    );
}

#[tokio::test]
async fn zero_page_is_rejected_without_a_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .fetch_page(0, 36, &CatalogFilters::default())
        .await
        .expect_err("page 0 is invalid");

    assert!(matches!(
        err,
        CatalogError::InvalidPage {
            page: 0,
            page_size: 36
        }
    ));
}

#[tokio::test]
async fn featured_draws_from_latest_fifty() {
    let server = MockServer::start().await;

    let rows: Vec<serde_json::Value> = (0..8).map(|i| row(&format!("p{i}"), 10.0)).collect();

    Mock::given(method("GET"))
        .and(path(PRODUCTS_PATH))
        .and(query_param("limit", "50"))
        .and(query_param("order", "created_at.desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&rows))
        .expect(1)
        .mount(&server)
        .await;

    let featured = test_client(&server.uri())
        .fetch_featured(5)
        .await
        .expect("featured should load");

    assert_eq!(featured.len(), 5);
    let mut names: Vec<&str> = featured.iter().map(|p| p.name.as_str()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), 5, "featured products must be distinct");
}

#[tokio::test]
async fn state_updates_only_on_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(PRODUCTS_PATH))
        .and(header("range", "0-35"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(&json!([row("Buzo", 1.0)]))
                .insert_header("Content-Range", "0-35/100"),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(PRODUCTS_PATH))
        .and(header("range", "36-71"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let mut state = CatalogState::new(36);

    state
        .load_page(&client, 1, CatalogFilters::default())
        .await
        .expect("first page");
    assert_eq!(state.current_page(), 1);
    assert_eq!(state.total_pages(), 3);
    assert_eq!(state.next_page(), Some(2));

    let search = CatalogFilters {
        search: Some("buzo".to_string()),
        ..CatalogFilters::default()
    };
    let result = state.load_page(&client, 2, search).await;
    assert!(result.is_err());
    assert_eq!(state.current_page(), 1);
    assert_eq!(state.total_pages(), 3);
    assert_eq!(state.filters(), &CatalogFilters::default());
}

#[tokio::test]
async fn reload_refetches_current_page_and_filters() {
    let server = MockServer::start().await;

    let page_two = || {
        Mock::given(method("GET"))
            .and(path(PRODUCTS_PATH))
            .and(header("range", "36-71"))
            .and(query_param("nombre", "ilike.%buzo%"))
    };

    page_two()
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(&json!([row("Buzo", 1.0)]))
                .insert_header("Content-Range", "36-36/100"),
        )
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    page_two()
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    page_two()
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(&json!([row("Buzo", 1.0), row("Buzo Box", 2.0)]))
                .insert_header("Content-Range", "36-37/120"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let mut state = CatalogState::new(36);
    let search = CatalogFilters {
        search: Some("buzo".to_string()),
        ..CatalogFilters::default()
    };

    state
        .load_page(&client, 2, search.clone())
        .await
        .expect("initial load");
    assert_eq!(state.total_count(), 100);

    let failed = state.reload(&client).await;
    assert!(matches!(
        failed,
        Err(CatalogError::UnexpectedStatus { status: 503, .. })
    ));
    assert_eq!(state.current_page(), 2);
    assert_eq!(state.total_count(), 100);

    let page = state.reload(&client).await.expect("reload after failure");
    assert_eq!(page.products.len(), 2);
    assert_eq!(state.current_page(), 2);
    assert_eq!(state.total_count(), 120);
    assert_eq!(state.total_pages(), 4);
    assert_eq!(state.filters(), &search);
}
