//! Route definitions for the `/products` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::product;
use crate::state::AppState;

/// Routes mounted at `/products`.
///
/// ```text
/// GET    /                   -> list
/// POST   /                   -> create          (token)
/// GET    /search             -> search
/// GET    /consumer_price     -> consumer_price
/// GET    /{id}               -> get_by_id
/// PUT    /{id}               -> update          (token)
/// PATCH  /{id}               -> patch           (token)
/// DELETE /{id}               -> delete          (token)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(product::list).post(product::create))
        .route("/search", get(product::search))
        .route("/consumer_price", get(product::consumer_price))
        .route(
            "/{id}",
            get(product::get_by_id)
                .put(product::update)
                .patch(product::patch)
                .delete(product::delete),
        )
}
