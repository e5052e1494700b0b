//! Draft form for creating and editing products.

use crate::inventory::product::Product;

pub const NAME_REQUIRED: &str = "Product name is required";
pub const CATEGORY_REQUIRED: &str = "Category is required";
pub const STOCK_NOT_NUMBER: &str = "Stock must be a whole number";
pub const STOCK_NEGATIVE: &str = "Stock must be greater than or equal to 0";
pub const PRICE_NOT_POSITIVE: &str = "Price must be greater than 0";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Category,
    Stock,
    Price,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Category,
        FormField::Stock,
        FormField::Price,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Product Name",
            FormField::Category => "Category",
            FormField::Stock => "Stock",
            FormField::Price => "Price",
        }
    }

    pub fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Category,
            FormField::Category => FormField::Stock,
            FormField::Stock => FormField::Price,
            FormField::Price => FormField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Name => FormField::Price,
            FormField::Category => FormField::Name,
            FormField::Stock => FormField::Category,
            FormField::Price => FormField::Stock,
        }
    }
}

/// Per-field validation messages. Empty means the draft is valid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub category: Option<&'static str>,
    pub stock: Option<&'static str>,
    pub price: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.stock.is_none()
            && self.price.is_none()
    }

    pub fn get(&self, field: FormField) -> Option<&'static str> {
        match field {
            FormField::Name => self.name,
            FormField::Category => self.category,
            FormField::Stock => self.stock,
            FormField::Price => self.price,
        }
    }

    pub fn clear(&mut self, field: FormField) {
        match field {
            FormField::Name => self.name = None,
            FormField::Category => self.category = None,
            FormField::Stock => self.stock = None,
            FormField::Price => self.price = None,
        }
    }
}

/// Raw text the user typed into the add/edit form.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub stock: String,
    pub price: String,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: String::new(),
            stock: "0".to_string(),
            price: "0".to_string(),
        }
    }
}

impl From<&Product> for ProductDraft {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            category: product.category.clone(),
            stock: product.stock.to_string(),
            price: product.price.to_string(),
        }
    }
}

impl ProductDraft {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Category => &self.category,
            FormField::Stock => &self.stock,
            FormField::Price => &self.price,
        }
    }

    pub fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Category => &mut self.category,
            FormField::Stock => &mut self.stock,
            FormField::Price => &mut self.price,
        }
    }

    pub fn validate(&self) -> Result<ValidDraft, FieldErrors> {
        let mut errors = FieldErrors::default();

        let name = self.name.trim();
        if name.is_empty() {
            errors.name = Some(NAME_REQUIRED);
        }
        let category = self.category.trim();
        if category.is_empty() {
            errors.category = Some(CATEGORY_REQUIRED);
        }

        let stock = match self.stock.trim().parse::<i64>() {
            Ok(value) if value < 0 => {
                errors.stock = Some(STOCK_NEGATIVE);
                None
            }
            Ok(value) => match u32::try_from(value) {
                Ok(value) => Some(value),
                Err(_) => {
                    errors.stock = Some(STOCK_NOT_NUMBER);
                    None
                }
            },
            Err(_) => {
                errors.stock = Some(STOCK_NOT_NUMBER);
                None
            }
        };

        let price = match self.price.trim().parse::<f64>() {
            Ok(value) if value.is_finite() && value > 0.0 => Some(value),
            _ => {
                errors.price = Some(PRICE_NOT_POSITIVE);
                None
            }
        };

        match (stock, price) {
            (Some(stock), Some(price)) if errors.is_empty() => Ok(ValidDraft {
                name: name.to_string(),
                category: category.to_string(),
                stock,
                price,
            }),
            _ => Err(errors),
        }
    }
}

/// A draft that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidDraft {
    pub name: String,
    pub category: String,
    pub stock: u32,
    pub price: f64,
}

impl ValidDraft {
    /// Builds the product stored under `id`.
    pub fn into_product(self, id: impl Into<String>) -> Product {
        Product::new(id, self.name, self.category, self.stock, self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, category: &str, stock: &str, price: &str) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            category: category.to_string(),
            stock: stock.to_string(),
            price: price.to_string(),
        }
    }

    #[test]
    fn default_draft_fails_on_every_required_field() {
        let errors = ProductDraft::default().validate().unwrap_err();
        assert_eq!(errors.name, Some(NAME_REQUIRED));
        assert_eq!(errors.category, Some(CATEGORY_REQUIRED));
        assert_eq!(errors.stock, None);
        assert_eq!(errors.price, Some(PRICE_NOT_POSITIVE));
    }

    #[test]
    fn whitespace_only_name_is_rejected() {
        let errors = draft("   ", "Food", "1", "2").validate().unwrap_err();
        assert_eq!(errors.get(FormField::Name), Some(NAME_REQUIRED));
        assert!(errors.get(FormField::Category).is_none());
    }

    #[test]
    fn negative_and_garbage_stock() {
        let errors = draft("Tea", "Food", "-1", "2").validate().unwrap_err();
        assert_eq!(errors.stock, Some(STOCK_NEGATIVE));
        let errors = draft("Tea", "Food", "lots", "2").validate().unwrap_err();
        assert_eq!(errors.stock, Some(STOCK_NOT_NUMBER));
    }

    #[test]
    fn zero_or_nan_price_is_rejected() {
        for price in ["0", "-3", "NaN", "inf", "abc"] {
            let errors = draft("Tea", "Food", "1", price).validate().unwrap_err();
            assert_eq!(errors.price, Some(PRICE_NOT_POSITIVE), "price {price}");
        }
    }

    #[test]
    fn valid_draft_trims_and_builds_product() {
        let product = draft("  Tea ", " Food", "0", "3.5")
            .validate()
            .expect("valid")
            .into_product("t1");
        assert_eq!(product.id, "t1");
        assert_eq!(product.name, "Tea");
        assert_eq!(product.category, "Food");
        assert!(!product.in_stock);
    }

    #[test]
    fn draft_from_product_round_trips_fields() {
        let original = Product::new("7", "Smart Watch", "Electronics", 10, 199.99);
        let mut form = ProductDraft::from(&original);
        assert_eq!(form.price, "199.99");
        form.stock = "11".to_string();
        let product = form.validate().expect("valid").into_product(original.id.clone());
        assert_eq!(product.id, "7");
        assert_eq!(product.stock, 11);
    }

    #[test]
    fn field_focus_wraps() {
        assert_eq!(FormField::Price.next(), FormField::Name);
        assert_eq!(FormField::Name.prev(), FormField::Price);
    }
}
