//! State for the add/edit form and the delete confirmation.

use crate::inventory::{FieldErrors, FormField, Product, ProductDraft};
use crate::ui::mvi::UiState;

/// Draft plus per-field feedback for the product form.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub draft: ProductDraft,
    pub focused: FormField,
    pub errors: FieldErrors,
    /// Store-level failure from the last submit, shown under the fields.
    pub failure: Option<String>,
}

impl FormState {
    pub fn new(draft: ProductDraft) -> Self {
        Self {
            draft,
            focused: FormField::Name,
            errors: FieldErrors::default(),
            failure: None,
        }
    }
}

/// Which overlay, if any, is on top of the table.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    AddOpen {
        form: FormState,
    },
    EditOpen {
        original: Product,
        form: FormState,
    },
    ConfirmOpen {
        ids: Vec<String>,
        is_batch: bool,
    },
}

impl UiState for ModalState {}

impl ModalState {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub fn form(&self) -> Option<&FormState> {
        match self {
            Self::AddOpen { form } | Self::EditOpen { form, .. } => Some(form),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Closed => "",
            Self::AddOpen { .. } => "Add Product",
            Self::EditOpen { .. } => "Edit Product",
            Self::ConfirmOpen { .. } => "Confirm Deletion",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            Self::EditOpen { .. } => "Save Changes",
            _ => "Add Product",
        }
    }

    pub fn confirm_message(&self) -> Option<String> {
        match self {
            Self::ConfirmOpen { ids, is_batch: true } => Some(format!(
                "Are you sure you want to delete {} products?",
                ids.len()
            )),
            Self::ConfirmOpen { is_batch: false, .. } => {
                Some("Are you sure you want to delete this product?".to_string())
            }
            _ => None,
        }
    }
}
