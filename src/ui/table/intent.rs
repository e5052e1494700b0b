use crate::inventory::SortField;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum TableIntent {
    MoveUp,
    MoveDown { rows_on_page: usize },
    NextPage { total_pages: usize },
    PrevPage,
    /// Same field flips direction, new field sorts ascending.
    SortBy(SortField),
    ToggleSelect(String),
    ClearSelection,
    /// Back to page 1, e.g. after a filter change.
    ResetPage,
    /// Adopt the page the derivation actually showed and keep the cursor
    /// inside it. Sent after anything that can shrink the product list.
    Clamp { page: usize, rows_on_page: usize },
}

impl Intent for TableIntent {}
