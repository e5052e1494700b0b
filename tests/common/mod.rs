//! Shared test helpers.

#![allow(dead_code)]

use invdash::config::DashboardConfig;
use invdash::inventory::{seed_products, Filters, ProductStore};
use invdash::ui::app::App;
use invdash::ui::modal::ModalIntent;

/// Store with the ten built-in records and default filters.
pub fn seeded_store() -> ProductStore {
    ProductStore::new(
        seed_products(),
        Filters::new(DashboardConfig::default().default_stock_filter),
    )
    .expect("seed ids are unique")
}

pub fn seeded_app() -> App {
    App::new(seeded_store(), DashboardConfig::default())
}

/// Types `text` into the focused form field.
pub fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        app.dispatch_modal(ModalIntent::Input(ch));
    }
}

/// Replaces the focused field's content with `text`.
pub fn replace_field(app: &mut App, text: &str) {
    for _ in 0..64 {
        app.dispatch_modal(ModalIntent::Backspace);
    }
    type_text(app, text);
}
