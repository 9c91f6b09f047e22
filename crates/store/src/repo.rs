//! Repository for the product catalog.

use std::path::PathBuf;

use catalog_core::error::CoreError;
use catalog_core::product::{Product, ProductPatchRequest, ProductRequest};
use catalog_core::types::ProductId;
use tokio::sync::RwLock;

use crate::file::ProductFile;
use crate::store::Store;
use crate::StoreResult;

/// Provides CRUD operations over the product [`Store`].
///
/// Every mutation holds the write lock until the backing file has been
/// rewritten. If the write fails the in-memory change is undone, so the map
/// and the file never disagree about a committed mutation.
pub struct ProductRepo {
    store: RwLock<Store>,
    file: Option<ProductFile>,
}

impl ProductRepo {
    /// A repository with no backing file.
    pub fn in_memory(products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            store: RwLock::new(Store::from_products(products)),
            file: None,
        }
    }

    /// Load the catalog from `path` and persist every mutation back to it.
    pub async fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let file = ProductFile::new(path);
        let products = file.read().await?;
        let mut store = Store::from_products(products);
        if let Some(saved) = file.read_next_id().await? {
            store.resume_from(saved);
        }
        tracing::info!(
            path = %file.path().display(),
            count = store.len(),
            next_id = store.peek_id(),
            "Loaded product catalog"
        );
        Ok(Self {
            store: RwLock::new(store),
            file: Some(file),
        })
    }

    /// All products ordered by id. An empty catalog is an error.
    pub async fn list(&self) -> StoreResult<Vec<Product>> {
        let store = self.store.read().await;
        if store.is_empty() {
            return Err(CoreError::NoProducts.into());
        }
        Ok(store.snapshot())
    }

    /// All products ordered by id, possibly none.
    pub async fn all(&self) -> Vec<Product> {
        self.store.read().await.snapshot()
    }

    pub async fn count(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn find_by_id(&self, id: ProductId) -> StoreResult<Product> {
        self.store
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| CoreError::NotFound { id }.into())
    }

    /// Insert a new product under the next free id.
    pub async fn create(&self, input: &ProductRequest) -> StoreResult<Product> {
        let mut store = self.store.write().await;
        let before = store.clone();

        let id = store.peek_id();
        if store.contains(id) {
            return Err(CoreError::AlreadyExists { id }.into());
        }
        store.allocate_id();
        let product = Product::from_request(id, input);
        store.insert(product.clone());

        self.commit(&mut store, before).await?;
        tracing::info!(id, code_value = %product.code_value, "Product created");
        Ok(product)
    }

    /// Replace every field of product `id`.
    pub async fn update(&self, id: ProductId, input: &ProductRequest) -> StoreResult<Product> {
        let mut store = self.store.write().await;
        let before = store.clone();

        let product = store.get_mut(id).ok_or(CoreError::NotFound { id })?;
        product.replace(input);
        let product = product.clone();

        self.commit(&mut store, before).await?;
        tracing::info!(id, "Product updated");
        Ok(product)
    }

    /// Apply the present fields of `patch` to product `id`.
    pub async fn patch(&self, id: ProductId, patch: &ProductPatchRequest) -> StoreResult<Product> {
        let mut store = self.store.write().await;
        let before = store.clone();

        let product = store.get_mut(id).ok_or(CoreError::NotFound { id })?;
        product.apply_patch(patch);
        let product = product.clone();

        self.commit(&mut store, before).await?;
        tracing::info!(id, "Product patched");
        Ok(product)
    }

    pub async fn delete(&self, id: ProductId) -> StoreResult<()> {
        let mut store = self.store.write().await;
        let before = store.clone();

        store.remove(id).ok_or(CoreError::NotFound { id })?;

        self.commit(&mut store, before).await?;
        tracing::info!(id, "Product deleted");
        Ok(())
    }

    /// Persist `store`, restoring `before` if the write fails.
    async fn commit(&self, store: &mut Store, before: Store) -> StoreResult<()> {
        let Some(file) = &self.file else {
            return Ok(());
        };
        if let Err(e) = file.write(&store.snapshot(), store.peek_id()).await {
            tracing::error!(error = %e, "Failed to persist products, rolling back");
            *store = before;
            return Err(e);
        }
        Ok(())
    }
}
