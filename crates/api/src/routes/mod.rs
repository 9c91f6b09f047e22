pub mod health;
pub mod product;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the API route tree.
///
/// Route hierarchy:
///
/// ```text
/// /products  (and /products/)          list, create (token)
/// /products/search?priceGt=            price filter
/// /products/consumer_price?list=       basket pricing
/// /products/{id}                       get, update, patch, delete (token)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/products", product::router()).route(
        "/products/",
        get(handlers::product::list).post(handlers::product::create),
    )
}
