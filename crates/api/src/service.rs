//! Product service: parses request parameters, validates payloads and
//! drives the repository.

use catalog_core::error::CoreError;
use catalog_core::pricing::{self, ConsumerPrice};
use catalog_core::product::{Product, ProductPatchRequest, ProductRequest};
use catalog_core::types::ProductId;
use catalog_core::validation;
use catalog_store::ProductRepo;
use tokio::sync::Mutex;

use crate::error::AppResult;

/// Orchestrates validation and repository calls for the product routes.
///
/// Mutations run one at a time behind `write_lock`, so the uniqueness scan
/// and the write it guards see the same catalog.
pub struct ProductService {
    repo: ProductRepo,
    write_lock: Mutex<()>,
}

impl ProductService {
    pub fn new(repo: ProductRepo) -> Self {
        Self {
            repo,
            write_lock: Mutex::new(()),
        }
    }

    /// Number of products currently held.
    pub async fn count(&self) -> usize {
        self.repo.count().await
    }

    pub async fn list(&self) -> AppResult<Vec<Product>> {
        Ok(self.repo.list().await?)
    }

    pub async fn get_by_id(&self, raw_id: &str) -> AppResult<Product> {
        let id = parse_id(raw_id)?;
        Ok(self.repo.find_by_id(id).await?)
    }

    /// Products priced strictly above `price_gt`.
    pub async fn search(&self, price_gt: Option<&str>) -> AppResult<Vec<Product>> {
        let threshold: f64 = price_gt
            .unwrap_or_default()
            .parse()
            .map_err(|_| CoreError::InvalidQuery)?;

        let products = self.repo.list().await?;
        Ok(products
            .into_iter()
            .filter(|p| p.price > threshold)
            .collect())
    }

    pub async fn create(&self, input: ProductRequest) -> AppResult<Product> {
        let _guard = self.write_lock.lock().await;
        let existing = self.repo.all().await;
        validation::validate_request(&input, &existing, None)?;
        Ok(self.repo.create(&input).await?)
    }

    pub async fn update(&self, raw_id: &str, input: ProductRequest) -> AppResult<Product> {
        let id = parse_id(raw_id)?;
        let _guard = self.write_lock.lock().await;
        self.repo.find_by_id(id).await?;
        let existing = self.repo.all().await;
        validation::validate_request(&input, &existing, Some(id))?;
        Ok(self.repo.update(id, &input).await?)
    }

    pub async fn patch(&self, raw_id: &str, patch: ProductPatchRequest) -> AppResult<Product> {
        let id = parse_id(raw_id)?;
        let _guard = self.write_lock.lock().await;
        self.repo.find_by_id(id).await?;
        let existing = self.repo.all().await;
        validation::validate_patch(&patch, &existing, id)?;
        Ok(self.repo.patch(id, &patch).await?)
    }

    pub async fn delete(&self, raw_id: &str) -> AppResult<()> {
        let id = parse_id(raw_id)?;
        let _guard = self.write_lock.lock().await;
        Ok(self.repo.delete(id).await?)
    }

    /// Price a basket such as `[1,2,2,3]`, or the whole catalog (one unit
    /// of each product) when `list` is missing or empty.
    pub async fn consumer_price(&self, list: Option<&str>) -> AppResult<ConsumerPrice> {
        let lines: Vec<(Product, i64)> = match list {
            None | Some("") => self
                .repo
                .list()
                .await?
                .into_iter()
                .map(|p| (p, 1))
                .collect(),
            Some(raw) => {
                let units = pricing::parse_basket(raw)?;
                let mut lines = Vec::with_capacity(units.len());
                for (id, requested) in units {
                    let product = self.repo.find_by_id(id).await?;
                    pricing::check_availability(&product, requested)?;
                    lines.push((product, requested));
                }
                lines
            }
        };

        let price = pricing::consumer_price(lines);
        tracing::debug!(
            item_count = price.item_count,
            total_price = price.total_price,
            "Priced basket"
        );
        Ok(price)
    }
}

fn parse_id(raw: &str) -> Result<ProductId, CoreError> {
    raw.parse().map_err(|_| CoreError::InvalidId)
}
