//! Inventory domain: products, the in-memory store and pure derivations.

mod filter;
mod product;
mod seed;
mod store;
mod validation;
mod view;

pub use filter::{Filters, StockFilter};
pub use product::{generate_id, Product, DEFAULT_LOW_STOCK_THRESHOLD};
pub use seed::{load_seed_file, seed_products, SeedError};
pub use store::{ProductStore, StoreError};
pub use validation::{
    FieldErrors, FormField, ProductDraft, ValidDraft, CATEGORY_REQUIRED, NAME_REQUIRED,
    PRICE_NOT_POSITIVE, STOCK_NEGATIVE, STOCK_NOT_NUMBER,
};
pub use view::{
    category_summary, derive_view, filter_products, sort_products, total_pages, CategorySlice,
    SortField, SortOrder, SortSpec, TableView, DEFAULT_PAGE_SIZE,
};
