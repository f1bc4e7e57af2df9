//! HTTP fetch against a local fake server.

use std::time::Duration;

use catalog_api::{CatalogApi, CatalogError, FetchConfig, HttpCatalog, MockApi};
use catalog_core::Record;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> FetchConfig {
    FetchConfig { url: format!("{}/products", server.uri()), timeout: Duration::from_secs(5) }
}

#[tokio::test]
async fn fetches_whole_catalog() {
    let server = MockServer::start().await;
    let body = serde_json::json!({
        "products": [
            {"id": 1, "title": "iPhone 9", "description": "An apple mobile", "brand": "Apple", "stock": 94, "price": 549},
            {"id": 2, "title": "Mascara", "description": "Lash mascara", "brand": "Essence", "stock": 5, "price": 9.99}
        ],
        "total": 2,
        "skip": 0,
        "limit": 30
    });
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&server)
        .await;

    let api = HttpCatalog::new(&config_for(&server)).expect("client");
    let items = api.fetch().await.expect("fetch");
    assert_eq!(
        items,
        vec![
            Record::new("An apple mobile", "Apple", 94.0, 549.0),
            Record::new("Lash mascara", "Essence", 5.0, 9.99),
        ]
    );
    assert!(api.source().ends_with("/products"));
}

#[tokio::test]
async fn server_error_maps_to_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let api = HttpCatalog::new(&config_for(&server)).expect("client");
    let err = api.fetch().await.unwrap_err();
    assert_eq!(err, CatalogError::Status(503));
}

#[tokio::test]
async fn malformed_body_maps_to_decode() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let api = HttpCatalog::new(&config_for(&server)).expect("client");
    let err = api.fetch().await.unwrap_err();
    assert!(matches!(err, CatalogError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn mock_api_serves_records_or_error() {
    let ok = MockApi::new(vec![Record::new("Lamp", "Lumo", 1.0, 2.0)]);
    assert_eq!(ok.fetch().await.expect("records").len(), 1);
    let bad = MockApi::failing(CatalogError::Http("connection refused".into()));
    assert!(matches!(bad.fetch().await, Err(CatalogError::Http(_))));
}
