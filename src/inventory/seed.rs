use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::inventory::product::Product;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse seed file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// The ten records every session starts with.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product::new("1", "Smartphone", "Electronics", 25, 499.99),
        Product::new("2", "Laptop", "Electronics", 15, 899.99),
        Product::new("3", "Jeans", "Apparel", 30, 39.99),
        Product::new("4", "T-shirt", "Apparel", 50, 19.99),
        Product::new("5", "Pizza", "Food", 0, 9.99),
        Product::new("6", "Coffee Maker", "Electronics", 5, 99.99),
        Product::new("7", "Smart Watch", "Electronics", 10, 199.99),
        Product::new("8", "Running Shoes", "Apparel", 18, 49.99),
        Product::new("9", "Salad", "Food", 12, 7.99),
        Product::new("10", "Blender", "Electronics", 8, 49.99),
    ]
}

/// Loads initial records from a JSON array of products.
///
/// `inStock` is optional in the file; it is recomputed from `stock` anyway.
pub fn load_seed_file(path: &Path) -> Result<Vec<Product>, SeedError> {
    let content = fs::read_to_string(path).map_err(|e| SeedError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let records: Vec<SeedRecord> =
        serde_json::from_str(&content).map_err(|e| SeedError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

    tracing::info!(path = %path.display(), count = records.len(), "Loaded seed file");
    Ok(records.into_iter().map(SeedRecord::into_product).collect())
}

#[derive(serde::Deserialize)]
struct SeedRecord {
    id: String,
    name: String,
    category: String,
    stock: u32,
    price: f64,
}

impl SeedRecord {
    fn into_product(self) -> Product {
        Product::new(self.id, self.name, self.category, self.stock, self.price)
    }
}
