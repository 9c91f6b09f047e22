use std::sync::Arc;

use crate::config::ServerConfig;
use crate::service::ProductService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: everything lives behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Product service owning the repository and its store.
    pub products: Arc<ProductService>,
    /// Server configuration (read by the auth gate).
    pub config: Arc<ServerConfig>,
}
