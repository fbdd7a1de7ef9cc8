//! Integration tests for the HTTP product gateway against a mock server.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use waretable::{CatalogError, HttpProductGateway, ProductGateway, Status};

fn product_body(id: u64, name: &str, category: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "category": category,
        "price": 19.99,
        "status": "in stock",
    })
}

#[tokio::test]
async fn list_products_decodes_the_collection() {
    let server = MockServer::start().await;
    let body = json!([
        product_body(1, "Lamp", "Home"),
        product_body(2, "Screen", "Electronics"),
    ]);
    Mock::given(method("GET"))
        .and(path("/products/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let gateway = HttpProductGateway::new(&server.uri()).expect("gateway should build");
    let items = gateway.list_products().await.expect("fetch should succeed");

    assert_eq!(items.len(), 2);
    let first = items.first().expect("first item present");
    assert_eq!(first.id, 1);
    assert_eq!(first.name, "Lamp");
    assert_eq!(first.status, Status::InStock);
    // Fields the list endpoint omits stay absent rather than failing decode.
    assert_eq!(first.brand, None);
}

#[tokio::test]
async fn detail_returns_the_full_record() {
    let server = MockServer::start().await;
    let mut body = product_body(7, "Desk", "Home");
    if let Some(object) = body.as_object_mut() {
        object.insert("brand".to_owned(), json!("Oakline"));
        object.insert("sku".to_owned(), json!("DSK-007"));
        object.insert("status".to_owned(), json!("low stock"));
    }
    Mock::given(method("GET"))
        .and(path("/products/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let gateway = HttpProductGateway::new(&server.uri()).expect("gateway should build");
    let item = gateway.product(7).await.expect("lookup should succeed");

    assert_eq!(item.id, 7);
    assert_eq!(item.brand.as_deref(), Some("Oakline"));
    assert_eq!(item.sku.as_deref(), Some("DSK-007"));
    assert_eq!(item.status, Status::LowStock);
}

#[tokio::test]
async fn detail_404_maps_to_not_found_not_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products/42"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "detail": "Product not found" })),
        )
        .mount(&server)
        .await;

    let gateway = HttpProductGateway::new(&server.uri()).expect("gateway should build");
    let error = gateway.product(42).await.expect_err("lookup should miss");

    assert_eq!(error, CatalogError::NotFound { id: 42 });
    assert!(error.is_not_found());
}

#[tokio::test]
async fn server_failure_surfaces_the_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database unavailable"))
        .mount(&server)
        .await;

    let gateway = HttpProductGateway::new(&server.uri()).expect("gateway should build");
    let error = gateway
        .list_products()
        .await
        .expect_err("fetch should fail");

    match error {
        CatalogError::Api { status, message } => {
            assert_eq!(status, Some(500));
            assert!(message.contains("database unavailable"));
        }
        other => panic!("expected an API error, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    // A server that is immediately dropped leaves a refused port behind.
    let uri = {
        let server = MockServer::start().await;
        server.uri()
    };

    let gateway = HttpProductGateway::new(&uri).expect("gateway should build");
    let error = gateway
        .list_products()
        .await
        .expect_err("fetch should fail");

    assert!(matches!(error, CatalogError::Network { .. }));
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let gateway = HttpProductGateway::new(&server.uri()).expect("gateway should build");
    let error = gateway
        .list_products()
        .await
        .expect_err("decode should fail");

    assert!(matches!(error, CatalogError::Decode { .. }));
}
