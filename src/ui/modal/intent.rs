use crate::inventory::{FieldErrors, Product};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ModalIntent {
    /// Open the form with an empty draft.
    OpenAdd,
    /// Open the form seeded from an existing product.
    OpenEdit { product: Product },
    /// Ask before deleting a single row.
    OpenDelete { id: String },
    /// Ask before deleting every selected row.
    OpenBatchDelete { ids: Vec<String> },
    Input(char),
    Backspace,
    NextField,
    PrevField,
    /// Submit failed validation; show the messages and stay open.
    Rejected { errors: FieldErrors },
    /// The store refused a valid draft; stay open with the reason.
    Failed { message: String },
    /// Cancel, or finish after a successful submit/confirm.
    Close,
}

impl Intent for ModalIntent {}
