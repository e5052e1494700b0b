use serde::{Deserialize, Serialize};
use std::fmt;

use crate::inventory::product::Product;

/// Stock presence filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockFilter {
    All,
    /// Only products with `stock > 0`.
    #[default]
    In,
    /// Only products with `stock == 0`.
    Out,
}

impl StockFilter {
    pub fn matches(self, product: &Product) -> bool {
        match self {
            StockFilter::All => true,
            StockFilter::In => product.stock > 0,
            StockFilter::Out => product.stock == 0,
        }
    }

    /// Next mode in the `All -> In -> Out` cycle.
    pub fn cycle(self) -> Self {
        match self {
            StockFilter::All => StockFilter::In,
            StockFilter::In => StockFilter::Out,
            StockFilter::Out => StockFilter::All,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StockFilter::All => "All Stock",
            StockFilter::In => "In Stock",
            StockFilter::Out => "Out of Stock",
        }
    }
}

impl fmt::Display for StockFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Active product filters.
///
/// This is the only filter state in the application: the table reads it
/// from the store instead of keeping a local copy.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Filters {
    /// Selected category names. Empty means no restriction.
    pub categories: Vec<String>,
    pub stock: StockFilter,
}

impl Filters {
    pub fn new(stock: StockFilter) -> Self {
        Self {
            categories: Vec::new(),
            stock,
        }
    }

    pub fn in_stock_only(&self) -> bool {
        self.stock == StockFilter::In
    }

    pub fn matches(&self, product: &Product) -> bool {
        let category_match =
            self.categories.is_empty() || self.categories.iter().any(|c| *c == product.category);
        category_match && self.stock.matches(product)
    }

    /// Label for the category control: "All Categories" or the joined names.
    pub fn category_label(&self) -> String {
        if self.categories.is_empty() {
            "All Categories".to_string()
        } else {
            self.categories.join(", ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pizza() -> Product {
        Product::new("5", "Pizza", "Food", 0, 9.99)
    }

    fn jeans() -> Product {
        Product::new("3", "Jeans", "Apparel", 30, 39.99)
    }

    #[test]
    fn stock_modes() {
        assert!(StockFilter::All.matches(&pizza()));
        assert!(!StockFilter::In.matches(&pizza()));
        assert!(StockFilter::Out.matches(&pizza()));
        assert!(StockFilter::In.matches(&jeans()));
        assert!(!StockFilter::Out.matches(&jeans()));
    }

    #[test]
    fn cycle_visits_every_mode() {
        let start = StockFilter::All;
        assert_eq!(start.cycle(), StockFilter::In);
        assert_eq!(start.cycle().cycle(), StockFilter::Out);
        assert_eq!(start.cycle().cycle().cycle(), start);
    }

    #[test]
    fn empty_categories_match_everything() {
        let filters = Filters::new(StockFilter::All);
        assert!(filters.matches(&pizza()));
        assert!(filters.matches(&jeans()));
    }

    #[test]
    fn category_and_stock_must_both_hold() {
        let filters = Filters {
            categories: vec!["Food".to_string()],
            stock: StockFilter::In,
        };
        assert!(!filters.matches(&pizza()));
        assert!(!filters.matches(&jeans()));
        assert!(filters.matches(&Product::new("9", "Salad", "Food", 12, 7.99)));
    }

    #[test]
    fn deserializes_lowercase_mode() {
        #[derive(Deserialize)]
        struct Wrapper {
            mode: StockFilter,
        }
        let parsed: Wrapper = toml::from_str("mode = \"out\"").expect("parse");
        assert_eq!(parsed.mode, StockFilter::Out);
    }
}
