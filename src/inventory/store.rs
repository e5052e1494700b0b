//! In-memory product store.
//!
//! The store is an explicit value owned by the application session and
//! passed by reference to whoever needs it. Edits are never persisted.

use std::collections::HashSet;
use thiserror::Error;

use crate::inventory::filter::{Filters, StockFilter};
use crate::inventory::product::Product;

/// Errors returned by store mutations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    #[error("A product with id '{0}' already exists")]
    DuplicateId(String),
}

#[derive(Debug, Clone, Default)]
pub struct ProductStore {
    products: Vec<Product>,
    filters: Filters,
}

impl ProductStore {
    /// Builds a store from initial records. Fails on the first repeated id.
    pub fn new(products: Vec<Product>, filters: Filters) -> Result<Self, StoreError> {
        let mut store = Self {
            products: Vec::with_capacity(products.len()),
            filters,
        };
        for product in products {
            if store.get(&product.id).is_some() {
                tracing::warn!(id = %product.id, "Initial records contain a duplicate id");
                return Err(StoreError::DuplicateId(product.id));
            }
            store.products.push(product.normalized());
        }
        Ok(store)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Distinct categories in first-appearance order.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.products
            .iter()
            .filter(|p| seen.insert(p.category.as_str()))
            .map(|p| p.category.clone())
            .collect()
    }

    /// Appends a product. Ids must be unique.
    pub fn add_product(&mut self, product: Product) -> Result<(), StoreError> {
        if self.get(&product.id).is_some() {
            tracing::warn!(id = %product.id, "Rejected product with duplicate id");
            return Err(StoreError::DuplicateId(product.id));
        }
        tracing::info!(id = %product.id, name = %product.name, "Product added");
        self.products.push(product.normalized());
        Ok(())
    }

    /// Replaces the first product with a matching id. Returns false when
    /// nothing matched, in which case the store is unchanged.
    pub fn edit_product(&mut self, product: Product) -> bool {
        let Some(slot) = self.products.iter_mut().find(|p| p.id == product.id) else {
            tracing::debug!(id = %product.id, "Edit ignored: no such product");
            return false;
        };
        tracing::info!(id = %product.id, name = %product.name, "Product updated");
        *slot = product.normalized();
        true
    }

    /// Removes every product with the given id. Returns how many were removed.
    pub fn delete_product(&mut self, id: &str) -> usize {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        let removed = before - self.products.len();
        tracing::info!(id, removed, "Product deleted");
        removed
    }

    /// Removes every product whose id is in `ids`.
    pub fn batch_delete_products<'a, I>(&mut self, ids: I) -> usize
    where
        I: IntoIterator<Item = &'a str>,
    {
        let ids: HashSet<&str> = ids.into_iter().collect();
        let before = self.products.len();
        self.products.retain(|p| !ids.contains(p.id.as_str()));
        let removed = before - self.products.len();
        tracing::info!(requested = ids.len(), removed, "Batch delete");
        removed
    }

    pub fn set_category_filter(&mut self, categories: Vec<String>) {
        tracing::debug!(?categories, "Category filter changed");
        self.filters.categories = categories;
    }

    /// `true` restricts to products in stock, `false` lifts the restriction.
    pub fn set_in_stock_filter(&mut self, in_stock_only: bool) {
        let mode = if in_stock_only {
            StockFilter::In
        } else {
            StockFilter::All
        };
        self.set_stock_filter(mode);
    }

    pub fn set_stock_filter(&mut self, stock: StockFilter) {
        tracing::debug!(%stock, "Stock filter changed");
        self.filters.stock = stock;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::seed::seed_products;

    fn seeded() -> ProductStore {
        ProductStore::new(seed_products(), Filters::default()).expect("seed ids are unique")
    }

    #[test]
    fn add_appends_in_order() {
        let mut store = seeded();
        store
            .add_product(Product::new("11", "Desk", "Furniture", 4, 150.0))
            .expect("unique id");
        assert_eq!(store.len(), 11);
        assert_eq!(store.products().last().map(|p| p.id.as_str()), Some("11"));
    }

    #[test]
    fn add_rejects_duplicate_id() {
        let mut store = seeded();
        let err = store
            .add_product(Product::new("1", "Clone", "Electronics", 1, 1.0))
            .unwrap_err();
        assert_eq!(err, StoreError::DuplicateId("1".to_string()));
        assert_eq!(store.len(), 10);
        assert_eq!(store.get("1").map(|p| p.name.as_str()), Some("Smartphone"));
    }

    #[test]
    fn new_rejects_repeated_initial_id() {
        let products = vec![
            Product::new("a", "Kettle", "Kitchen", 2, 30.0),
            Product::new("b", "Mug", "Kitchen", 12, 6.5),
            Product::new("a", "Teapot", "Kitchen", 1, 20.0),
        ];
        let err = ProductStore::new(products, Filters::default()).unwrap_err();
        assert_eq!(err, StoreError::DuplicateId("a".to_string()));
    }

    #[test]
    fn add_recomputes_in_stock() {
        let mut store = ProductStore::default();
        let mut product = Product::new("x", "Lamp", "Home", 0, 20.0);
        product.in_stock = true;
        store.add_product(product).expect("unique id");
        assert_eq!(store.get("x").map(|p| p.in_stock), Some(false));
    }

    #[test]
    fn edit_replaces_in_place() {
        let mut store = seeded();
        let updated = Product::new("3", "Slim Jeans", "Apparel", 0, 44.5);
        assert!(store.edit_product(updated.clone()));
        assert_eq!(store.get("3"), Some(&updated));
        assert_eq!(store.products()[2].id, "3");
    }

    #[test]
    fn edit_unknown_id_is_noop() {
        let mut store = seeded();
        let before = store.products().to_vec();
        assert!(!store.edit_product(Product::new("404", "Ghost", "None", 1, 1.0)));
        assert_eq!(store.products(), before.as_slice());
    }

    #[test]
    fn delete_then_lookup_misses() {
        let mut store = seeded();
        assert_eq!(store.delete_product("5"), 1);
        assert!(store.get("5").is_none());
        assert_eq!(store.delete_product("5"), 0);
        assert_eq!(store.len(), 9);
    }

    #[test]
    fn batch_delete_removes_only_listed_ids() {
        let mut store = seeded();
        assert_eq!(store.batch_delete_products(["2", "4", "nope"]), 2);
        assert!(store.get("2").is_none());
        assert!(store.get("4").is_none());
        assert!(store.get("1").is_some());
        assert!(store.get("3").is_some());
        assert_eq!(store.len(), 8);
    }

    #[test]
    fn categories_are_distinct_in_first_seen_order() {
        assert_eq!(seeded().categories(), vec!["Electronics", "Apparel", "Food"]);
    }

    #[test]
    fn in_stock_flag_maps_to_modes() {
        let mut store = seeded();
        store.set_in_stock_filter(false);
        assert_eq!(store.filters().stock, StockFilter::All);
        store.set_in_stock_filter(true);
        assert!(store.filters().in_stock_only());
    }

    #[test]
    fn category_filter_replaces_selection() {
        let mut store = seeded();
        store.set_category_filter(vec!["Food".to_string()]);
        store.set_category_filter(vec!["Apparel".to_string()]);
        assert_eq!(store.filters().categories, vec!["Apparel".to_string()]);
    }
}
