//! Handlers for the `/products` resource.

use axum::extract::{Path, Query, State};
use catalog_core::pricing::ConsumerPrice;
use catalog_core::product::{Product, ProductPatchRequest, ProductRequest};

use crate::error::AppResult;
use crate::middleware::auth::RequireToken;
use crate::middleware::body::JsonBody;
use crate::query::{ConsumerPriceParams, SearchParams};
use crate::response::Envelope;
use crate::state::AppState;

/// GET /products
pub async fn list(State(state): State<AppState>) -> AppResult<Envelope<Vec<Product>>> {
    let products = state.products.list().await?;
    Ok(Envelope::ok(products))
}

/// GET /products/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Envelope<Product>> {
    let product = state.products.get_by_id(&id).await?;
    Ok(Envelope::ok(product))
}

/// GET /products/search?priceGt=
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Envelope<Vec<Product>>> {
    let products = state.products.search(params.price_gt.as_deref()).await?;
    Ok(Envelope::ok(products))
}

/// GET /products/consumer_price?list=
pub async fn consumer_price(
    State(state): State<AppState>,
    Query(params): Query<ConsumerPriceParams>,
) -> AppResult<Envelope<ConsumerPrice>> {
    let price = state
        .products
        .consumer_price(params.list.as_deref())
        .await?;
    Ok(Envelope::ok(price))
}

/// POST /products
pub async fn create(
    _token: RequireToken,
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<ProductRequest>,
) -> AppResult<Envelope<Product>> {
    let product = state.products.create(payload).await?;
    Ok(Envelope::created(product))
}

/// PUT /products/{id}
pub async fn update(
    _token: RequireToken,
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<ProductRequest>,
) -> AppResult<Envelope<Product>> {
    let product = state.products.update(&id, payload).await?;
    Ok(Envelope::ok(product))
}

/// PATCH /products/{id}
pub async fn patch(
    _token: RequireToken,
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<ProductPatchRequest>,
) -> AppResult<Envelope<Product>> {
    let product = state.products.patch(&id, payload).await?;
    Ok(Envelope::ok(product))
}

/// DELETE /products/{id}
pub async fn delete(
    _token: RequireToken,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Envelope<()>> {
    state.products.delete(&id).await?;
    Ok(Envelope::no_content())
}
