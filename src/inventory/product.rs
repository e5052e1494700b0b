use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stock level at or below which a row is flagged as low stock.
pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 5;

/// A single inventory record.
///
/// `in_stock` mirrors `stock > 0`. It is recomputed on every write through
/// [`Product::new`] and the store, so it can never drift from `stock`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub stock: u32,
    pub price: f64,
    pub in_stock: bool,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        stock: u32,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            stock,
            price,
            in_stock: stock > 0,
        }
    }

    /// Returns the product with `in_stock` brought back in line with `stock`.
    pub fn normalized(mut self) -> Self {
        self.in_stock = self.stock > 0;
        self
    }

    pub fn is_low_stock(&self, threshold: u32) -> bool {
        self.stock <= threshold
    }
}

/// Fresh process-unique id for a newly created product.
pub fn generate_id() -> String {
    Uuid::new_v4().simple().to_string()
}
