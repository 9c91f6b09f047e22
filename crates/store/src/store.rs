//! In-memory product map with its id counter.

use std::collections::BTreeMap;

use catalog_core::product::Product;
use catalog_core::types::ProductId;

/// All products held by the process, keyed by id.
///
/// Ids come from a counter that only moves forward, so an id freed by a
/// delete is never handed out again.
#[derive(Debug, Clone)]
pub struct Store {
    products: BTreeMap<ProductId, Product>,
    next_id: ProductId,
}

impl Store {
    pub fn new() -> Self {
        Self {
            products: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Build a store from previously persisted products. The counter resumes
    /// after the highest id seen.
    pub fn from_products(products: impl IntoIterator<Item = Product>) -> Self {
        let products: BTreeMap<_, _> = products.into_iter().map(|p| (p.id, p)).collect();
        let next_id = products.keys().next_back().map_or(1, |max| max + 1);
        Self { products, next_id }
    }

    /// Move the counter up to `next_id` if it is behind. A saved counter
    /// never pulls it below the ids already in use.
    pub fn resume_from(&mut self, next_id: ProductId) {
        self.next_id = self.next_id.max(next_id);
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.get(&id)
    }

    pub fn get_mut(&mut self, id: ProductId) -> Option<&mut Product> {
        self.products.get_mut(&id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.products.contains_key(&id)
    }

    /// The id the next [`Store::allocate_id`] call will return.
    pub fn peek_id(&self) -> ProductId {
        self.next_id
    }

    /// Reserve and return the next id.
    pub fn allocate_id(&mut self) -> ProductId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Insert or replace a product under its own id.
    pub fn insert(&mut self, product: Product) {
        self.products.insert(product.id, product);
    }

    pub fn remove(&mut self, id: ProductId) -> Option<Product> {
        self.products.remove(&id)
    }

    /// Products ordered by id.
    pub fn snapshot(&self) -> Vec<Product> {
        self.products.values().cloned().collect()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: ProductId) -> Product {
        Product {
            id,
            name: format!("Product {id}"),
            quantity: 1,
            code_value: format!("CODE-{id}"),
            is_published: true,
            expiration: "01/01/2030".to_string(),
            price: 1.0,
        }
    }

    #[test]
    fn empty_store_starts_at_one() {
        let mut store = Store::new();
        assert!(store.is_empty());
        assert_eq!(store.allocate_id(), 1);
        assert_eq!(store.allocate_id(), 2);
    }

    #[test]
    fn loaded_store_resumes_after_highest_id() {
        let store = Store::from_products(vec![product(4), product(1)]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.peek_id(), 5);
    }

    #[test]
    fn saved_counter_only_moves_forward() {
        let mut store = Store::from_products(vec![product(2)]);

        store.resume_from(7);
        assert_eq!(store.peek_id(), 7);

        store.resume_from(1);
        assert_eq!(store.peek_id(), 7);
    }

    #[test]
    fn ids_are_not_reused_after_remove() {
        let mut store = Store::new();
        let first = store.allocate_id();
        store.insert(product(first));
        let second = store.allocate_id();
        store.insert(product(second));

        store.remove(second);

        assert_eq!(store.allocate_id(), 3);
    }

    #[test]
    fn snapshot_is_ordered_by_id() {
        let store = Store::from_products(vec![product(3), product(1), product(2)]);
        let ids: Vec<_> = store.snapshot().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
