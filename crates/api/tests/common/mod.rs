#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use catalog_api::config::ServerConfig;
use catalog_api::router::build_app_router;
use catalog_api::service::ProductService;
use catalog_api::state::AppState;
use catalog_core::product::Product;
use catalog_store::ProductRepo;

/// Token accepted by the test configuration.
pub const TEST_TOKEN: &str = "test-secret";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        products_file: "unused.json".into(),
        api_key: Some(TEST_TOKEN.to_string()),
    }
}

/// Shared state over an in-memory catalog holding `products`.
pub fn test_state(products: Vec<Product>) -> AppState {
    state_with_repo(ProductRepo::in_memory(products), test_config())
}

pub fn state_with_repo(repo: ProductRepo, config: ServerConfig) -> AppState {
    AppState {
        products: Arc::new(ProductService::new(repo)),
        config: Arc::new(config),
    }
}

/// Build the full application router with all middleware layers.
///
/// The state is cloned per request so several calls can share one catalog.
pub fn build_test_app(state: AppState) -> Router {
    let config = state.config.as_ref().clone();
    build_app_router(state, &config)
}

pub fn product(id: i64, price: f64, quantity: i64) -> Product {
    Product {
        id,
        name: format!("Product {id}"),
        quantity,
        code_value: format!("CODE-{id}"),
        is_published: true,
        expiration: "01/01/2030".to_string(),
        price,
    }
}

pub fn product_json(code: &str) -> serde_json::Value {
    serde_json::json!({
        "name": "test",
        "quantity": 23,
        "code_value": code,
        "is_published": true,
        "expiration": "15/12/2021",
        "price": 99
    })
}

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Send a JSON body with an optional `token` header.
pub async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
    token: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("token", token);
    }
    send(app, builder.body(Body::from(body.to_string())).unwrap()).await
}

/// POST a raw body with the test token and no `content-type` header.
pub async fn post_untyped(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("token", TEST_TOKEN)
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body, Some(TEST_TOKEN)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::PUT, uri, body, Some(TEST_TOKEN)).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::PATCH, uri, body, Some(TEST_TOKEN)).await
}

pub async fn delete(app: Router, uri: &str, token: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method(Method::DELETE).uri(uri);
    if let Some(token) = token {
        builder = builder.header("token", token);
    }
    send(app, builder.body(Body::empty()).unwrap()).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
