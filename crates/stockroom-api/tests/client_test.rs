#![allow(clippy::unwrap_used)]
// Integration tests for `ApiClient` using wiremock.

use rust_decimal_macros::dec;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use stockroom_api::types::{OrderBody, OrderItemBody, ProductBody, SupplierBody};
use stockroom_api::{ApiClient, Error};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let client =
        ApiClient::from_reqwest(&format!("{}/api", server.uri()), reqwest::Client::new()).unwrap();
    (server, client)
}

// ── Product tests ───────────────────────────────────────────────────

#[tokio::test]
async fn test_list_products() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "_id": "p1", "sku": "A1", "name": "Widget", "price": 9.99, "stock": 10 },
            { "_id": "p2", "sku": "B2", "name": "Gadget", "price": 20, "stock": 0 }
        ])))
        .mount(&server)
        .await;

    let products = client.list_products().await.unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].id, "p1");
    assert_eq!(products[0].price, Some(dec!(9.99)));
    assert_eq!(products[1].stock, Some(0));
}

#[tokio::test]
async fn test_get_product_escapes_id() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/products/a%20b"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_id": "a b", "sku": "A1", "name": "Widget", "price": 1.5, "stock": 3
        })))
        .mount(&server)
        .await;

    let product = client.get_product("a b").await.unwrap();
    assert_eq!(product.id, "a b");
}

#[tokio::test]
async fn test_create_product_sends_body() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/products"))
        .and(body_json(json!({ "sku": "A1", "name": "Widget", "price": 9.99, "stock": 10 })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "_id": "p1" })))
        .expect(1)
        .mount(&server)
        .await;

    let body = ProductBody {
        sku: "A1".into(),
        name: "Widget".into(),
        price: dec!(9.99),
        stock: 10,
    };
    client.create_product(&body).await.unwrap();
}

#[tokio::test]
async fn test_mutation_ignores_response_body() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/api/products/p1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    client.delete_product("p1").await.unwrap();
}

// ── Supplier tests ──────────────────────────────────────────────────

#[tokio::test]
async fn test_update_supplier() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/api/suppliers/s1"))
        .and(body_json(json!({ "name": "Acme", "contact": "ops@acme.test" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let body = SupplierBody {
        name: "Acme".into(),
        contact: "ops@acme.test".into(),
    };
    client.update_supplier("s1", &body).await.unwrap();
}

// ── Order tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_order_with_populated_refs() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/orders/o1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_id": "o1",
            "supplierId": { "_id": "s1", "name": "Acme", "contact": "ops@acme.test" },
            "items": [
                { "productId": { "_id": "p1", "sku": "A1", "name": "Widget", "price": 9.99 }, "qty": 2, "price": 9.99 }
            ],
            "status": "shipped"
        })))
        .mount(&server)
        .await;

    let order = client.get_order("o1").await.unwrap();
    assert_eq!(order.status.as_deref(), Some("shipped"));
    assert_eq!(order.supplier.unwrap().id(), "s1");
    assert_eq!(order.items.unwrap()[0].qty, Some(2));
}

#[tokio::test]
async fn test_create_order_sends_bare_ids() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/orders"))
        .and(body_json(json!({
            "supplierId": "s1",
            "status": "pending",
            "items": [{ "productId": "p1", "qty": 2, "price": 9.99 }]
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let body = OrderBody {
        supplier_id: Some("s1".into()),
        status: "pending".into(),
        items: vec![OrderItemBody {
            product_id: Some("p1".into()),
            qty: Some(2),
            price: Some(dec!(9.99)),
        }],
    };
    client.create_order(&body).await.unwrap();
}

// ── Error handling tests ────────────────────────────────────────────

#[tokio::test]
async fn test_error_message_from_json_body() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/suppliers"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "message": "name is required" })),
        )
        .mount(&server)
        .await;

    let body = SupplierBody {
        name: String::new(),
        contact: String::new(),
    };
    let result = client.create_supplier(&body).await;

    match result {
        Err(Error::Api { status, message }) => {
            assert_eq!(status, 400);
            assert_eq!(message, "name is required");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_not_found_maps_to_api_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/orders/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Order not found"))
        .mount(&server)
        .await;

    let err = client.get_order("missing").await.unwrap_err();
    assert!(err.is_not_found(), "expected not-found, got: {err:?}");
}

#[tokio::test]
async fn test_malformed_list_is_deserialization_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "orders": [] })))
        .mount(&server)
        .await;

    let result = client.list_orders().await;
    assert!(
        matches!(result, Err(Error::Deserialization { .. })),
        "expected Deserialization error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_status_check_reports_status_without_decoding() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let status = client.status_check().await.unwrap();
    assert_eq!(status.as_u16(), 500);
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Nothing listens on port 9 of localhost in a test sandbox.
    let client = ApiClient::from_reqwest("http://127.0.0.1:9/api", reqwest::Client::new()).unwrap();

    let err = client.list_suppliers().await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)), "got: {err:?}");
    assert!(err.is_transient());
}

#[tokio::test]
async fn test_transport_error_carries_http_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err: Error = reqwest::get(format!("{}/gone", server.uri()))
        .await
        .unwrap()
        .error_for_status()
        .unwrap_err()
        .into();
    assert_eq!(err.status(), Some(404));
    assert!(err.is_not_found());
    assert!(!err.is_transient());
}
