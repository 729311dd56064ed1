//! Integration test support for Sundry.
//!
//! Tests exercise the full stack: HTTP request -> axum router -> handler ->
//! `CartStore` -> storage backend -> rendered HTML response.
//!
//! Each test builds a fresh router over its own storage backend -
//! [`MemoryStorage`] by default, or a `FileStorage` in a temp directory for
//! restart scenarios. Requests go through `tower::ServiceExt::oneshot`, so
//! no network server is started.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::net::{IpAddr, Ipv4Addr};
use std::path::Path;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, header};
use axum::response::Response;
use tower::ServiceExt;

use sundry_core::{CartStore, MemoryStorage, Storage};
use sundry_storefront::catalog::{Catalog, CatalogProduct};
use sundry_storefront::config::StorefrontConfig;
use sundry_storefront::routes;
use sundry_storefront::state::AppState;
use sundry_storefront::storage::FileStorage;

/// A small fixed catalog: two carded products plus one without a data id.
#[must_use]
pub fn test_catalog() -> Catalog {
    Catalog::new(vec![
        CatalogProduct {
            id: Some("mug-01".to_string()),
            title: "Stoneware Mug".to_string(),
            price: "$14.00".to_string(),
            image: "/static/img/mug.jpg".to_string(),
        },
        CatalogProduct {
            id: Some("candle-02".to_string()),
            title: "Beeswax Candle".to_string(),
            price: "$9.99".to_string(),
            image: "/static/img/candle.jpg".to_string(),
        },
        CatalogProduct {
            id: None,
            title: "Seasonal Surprise Box".to_string(),
            price: "$25.00".to_string(),
            image: "/static/img/surprise.jpg".to_string(),
        },
    ])
}

fn test_config() -> StorefrontConfig {
    StorefrontConfig {
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 0,
        data_dir: "unused-in-tests".into(),
        catalog_path: "unused-in-tests".into(),
    }
}

/// Build a router over an arbitrary storage backend.
#[must_use]
pub fn app_with_storage(storage: Box<dyn Storage>) -> Router {
    let cart = CartStore::open(storage);
    let state = AppState::new(test_config(), test_catalog(), cart);
    routes::routes().with_state(state)
}

/// Build a router over a fresh in-memory storage backend.
#[must_use]
pub fn app() -> Router {
    app_with_storage(Box::new(MemoryStorage::new()))
}

/// Build a router over a file-backed store rooted at `dir`.
#[must_use]
pub fn app_with_data_dir(dir: &Path) -> Router {
    app_with_storage(Box::new(FileStorage::new(dir)))
}

/// Send a GET request and return the response.
pub async fn get(app: &Router, path: &str) -> Response {
    app.clone()
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Send a POST with a urlencoded form body and return the response.
pub async fn post_form(app: &Router, path: &str, body: &str) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

/// Collect a response body into a string.
pub async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
