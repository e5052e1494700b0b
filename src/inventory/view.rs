//! Pure derivations over the product list: filter, sort, paginate and the
//! per-category summary behind the chart.

use std::cmp::Ordering;

use crate::inventory::filter::Filters;
use crate::inventory::product::Product;

pub const DEFAULT_PAGE_SIZE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    Category,
    Stock,
    Price,
}

impl SortField {
    pub const ALL: [SortField; 4] = [
        SortField::Name,
        SortField::Category,
        SortField::Stock,
        SortField::Price,
    ];

    pub fn title(self) -> &'static str {
        match self {
            SortField::Name => "Product Name",
            SortField::Category => "Category",
            SortField::Stock => "Stock",
            SortField::Price => "Price",
        }
    }

    fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortField::Name => compare_text(&a.name, &b.name),
            SortField::Category => compare_text(&a.category, &b.category),
            SortField::Stock => a.stock.cmp(&b.stock),
            SortField::Price => a.price.total_cmp(&b.price),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortOrder::Ascending => "↑",
            SortOrder::Descending => "↓",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn ascending(field: SortField) -> Self {
        Self {
            field,
            order: SortOrder::Ascending,
        }
    }

    /// Clicking the active column flips its direction; any other column
    /// starts ascending.
    pub fn toggle(current: Option<SortSpec>, field: SortField) -> SortSpec {
        match current {
            Some(spec) if spec.field == field => SortSpec {
                field,
                order: spec.order.flipped(),
            },
            _ => SortSpec::ascending(field),
        }
    }
}

/// One page of the derived table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    pub rows: Vec<Product>,
    /// 1-based page actually shown, after clamping.
    pub page: usize,
    pub total_pages: usize,
    pub total_matching: usize,
}

pub fn filter_products(products: &[Product], filters: &Filters) -> Vec<Product> {
    products
        .iter()
        .filter(|p| filters.matches(p))
        .cloned()
        .collect()
}

/// Stable sort by the given spec.
pub fn sort_products(products: &mut [Product], spec: SortSpec) {
    products.sort_by(|a, b| {
        let ordering = spec.field.compare(a, b);
        match spec.order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
}

pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

pub fn derive_view(
    products: &[Product],
    filters: &Filters,
    sort: Option<SortSpec>,
    page: usize,
    page_size: usize,
) -> TableView {
    let mut matching = filter_products(products, filters);
    if let Some(spec) = sort {
        sort_products(&mut matching, spec);
    }

    let total_matching = matching.len();
    let total_pages = total_pages(total_matching, page_size);
    let page = page.clamp(1, total_pages.max(1));
    let start = (page - 1).saturating_mul(page_size);
    let rows = matching
        .into_iter()
        .skip(start)
        .take(page_size)
        .collect();

    TableView {
        rows,
        page,
        total_pages,
        total_matching,
    }
}

/// Product count for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySlice {
    pub name: String,
    pub count: usize,
}

impl CategorySlice {
    /// Fraction of `total` this slice covers, in `0.0..=1.0`.
    pub fn share(&self, total: usize) -> f64 {
        if total == 0 {
            0.0
        } else {
            self.count as f64 / total as f64
        }
    }
}

/// Groups products by category in first-appearance order.
pub fn category_summary(products: &[Product]) -> Vec<CategorySlice> {
    let mut slices: Vec<CategorySlice> = Vec::new();
    for product in products {
        match slices.iter_mut().find(|s| s.name == product.category) {
            Some(slice) => slice.count += 1,
            None => slices.push(CategorySlice {
                name: product.category.clone(),
                count: 1,
            }),
        }
    }
    slices
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
