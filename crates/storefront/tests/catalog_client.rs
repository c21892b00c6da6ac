//! Catalog client tests against a local HTTP server.
//!
//! A small axum app stands in for the remote catalog so the client's
//! success and failure paths run over real HTTP.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use axum::http::{StatusCode, header};
use axum::routing::get;
use storefront::catalog::{CATALOG_UNAVAILABLE_MESSAGE, CatalogClient, CatalogError, CatalogStatus};
use storefront::config::{CatalogConfig, StorefrontConfig};
use storefront::state::AppState;
use storefront_core::ProductId;
use url::Url;

const PRODUCTS_JSON: &str = r#"[
  {
    "id": 1,
    "title": "Fjallraven Backpack",
    "price": 109.95,
    "description": "Your perfect pack for everyday use",
    "category": "men's clothing",
    "image": "https://example.test/1.jpg",
    "rating": { "rate": 3.9, "count": 120 }
  },
  {
    "id": 2,
    "title": "Cotton Jacket",
    "price": 55,
    "description": "Great outerwear jackets",
    "category": "men's clothing"
  }
]"#;

/// Serve a fake catalog on an ephemeral port.
async fn spawn_catalog() -> SocketAddr {
    let app = Router::new()
        .route(
            "/products",
            get(|| async { ([(header::CONTENT_TYPE, "application/json")], PRODUCTS_JSON) }),
        )
        .route(
            "/broken",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded") }),
        )
        .route("/garbage", get(|| async { "<html>not json</html>" }))
        .route("/object", get(|| async { r#"{"products": []}"# }));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn client_for(addr: SocketAddr, path: &str) -> CatalogClient {
    CatalogClient::new(&CatalogConfig {
        url: Url::parse(&format!("http://{addr}{path}")).unwrap(),
        timeout: Duration::from_secs(5),
    })
    .unwrap()
}

#[tokio::test]
async fn test_fetch_products() {
    let addr = spawn_catalog().await;
    let products = client_for(addr, "/products").fetch_products().await.unwrap();

    assert_eq!(products.len(), 2);
    let first = &products[0];
    assert_eq!(first.id, ProductId::new(1));
    assert_eq!(first.title, "Fjallraven Backpack");
    assert_eq!(first.price.display(), "$109.95");
    assert_eq!(
        first.image,
        "https://placehold.co/400x300/F0F4F8/1A202C?text=Fjallraven"
    );
    assert_eq!(products[1].price.display(), "$55.00");
}

#[tokio::test]
async fn test_non_success_status_is_an_error() {
    let addr = spawn_catalog().await;
    let err = client_for(addr, "/broken").fetch_products().await.unwrap_err();

    assert!(matches!(
        err,
        CatalogError::Status(status) if status == reqwest::StatusCode::INTERNAL_SERVER_ERROR
    ));
}

#[tokio::test]
async fn test_undecodable_body_is_an_error() {
    let addr = spawn_catalog().await;

    let err = client_for(addr, "/garbage").fetch_products().await.unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)));

    let err = client_for(addr, "/object").fetch_products().await.unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)));
}

#[tokio::test]
async fn test_startup_fetch_populates_state() {
    let addr = spawn_catalog().await;
    let mut config = StorefrontConfig::default();
    config.catalog.url = Url::parse(&format!("http://{addr}/products")).unwrap();

    let state = AppState::new(config).unwrap();
    assert!(state.catalog().await.is_loading());

    state.start_catalog_fetch().await.unwrap();
    let catalog = state.catalog().await;
    assert!(catalog.product(ProductId::new(2)).is_some());
    assert!(!catalog.is_loading());
}

#[tokio::test]
async fn test_startup_fetch_failure_keeps_message() {
    let addr = spawn_catalog().await;
    let mut config = StorefrontConfig::default();
    config.catalog.url = Url::parse(&format!("http://{addr}/broken")).unwrap();

    let state = AppState::new(config).unwrap();
    state.start_catalog_fetch().await.unwrap();

    assert!(matches!(
        state.catalog().await,
        CatalogStatus::Failed(message) if message == CATALOG_UNAVAILABLE_MESSAGE
    ));
}

/// Full round trip: the storefront fetches from the fake catalog, then a
/// shopper adds to the cart over HTTP.
#[tokio::test]
async fn test_storefront_over_http() {
    let catalog_addr = spawn_catalog().await;
    let mut config = StorefrontConfig::default();
    config.catalog.url = Url::parse(&format!("http://{catalog_addr}/products")).unwrap();

    let state = AppState::new(config).unwrap();
    state.start_catalog_fetch().await.unwrap();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = storefront::app(state);
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = reqwest::Client::new();
    let shop = client
        .get(format!("http://{addr}/shop"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(shop.contains("Fjallraven Backpack"));
    assert!(shop.contains("$109.95"));

    // The 303 is followed back to the shop page.
    let response = client
        .post(format!("http://{addr}/cart/add"))
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body("product_id=2&quantity=2")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(response.url().path(), "/shop");
    let body = response.text().await.unwrap();
    assert!(body.contains(r#"<span class="cart-count">2</span>"#));

    let cart = client
        .get(format!("http://{addr}/cart"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(cart.contains("Total: $110.00"));
}
