use crate::inventory::{FormField, ProductDraft};
use crate::ui::modal::intent::ModalIntent;
use crate::ui::modal::state::{FormState, ModalState};
use crate::ui::mvi::Reducer;

pub struct ModalReducer;

impl Reducer for ModalReducer {
    type State = ModalState;
    type Intent = ModalIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ModalIntent::OpenAdd => ModalState::AddOpen {
                form: FormState::new(ProductDraft::default()),
            },
            ModalIntent::OpenEdit { product } => ModalState::EditOpen {
                form: FormState::new(ProductDraft::from(&product)),
                original: product,
            },
            ModalIntent::OpenDelete { id } => ModalState::ConfirmOpen {
                ids: vec![id],
                is_batch: false,
            },
            ModalIntent::OpenBatchDelete { ids } => {
                if ids.is_empty() {
                    return state;
                }
                ModalState::ConfirmOpen { ids, is_batch: true }
            }
            ModalIntent::Input(ch) => map_form(state, |form| {
                form.draft.value_mut(form.focused).push(ch);
                form.errors.clear(form.focused);
            }),
            ModalIntent::Backspace => map_form(state, |form| {
                form.draft.value_mut(form.focused).pop();
                form.errors.clear(form.focused);
            }),
            ModalIntent::NextField => map_form(state, |form| {
                form.focused = form.focused.next();
            }),
            ModalIntent::PrevField => map_form(state, |form| {
                form.focused = form.focused.prev();
            }),
            ModalIntent::Rejected { errors } => map_form(state, |form| {
                if let Some(first) = FormField::ALL
                    .into_iter()
                    .find(|field| errors.get(*field).is_some())
                {
                    form.focused = first;
                }
                form.errors = errors;
                form.failure = None;
            }),
            ModalIntent::Failed { message } => map_form(state, |form| {
                form.failure = Some(message);
            }),
            ModalIntent::Close => ModalState::Closed,
        }
    }
}

/// Applies `f` to the open form; other states pass through untouched.
fn map_form(state: ModalState, f: impl FnOnce(&mut FormState)) -> ModalState {
    match state {
        ModalState::AddOpen { mut form } => {
            f(&mut form);
            ModalState::AddOpen { form }
        }
        ModalState::EditOpen { original, mut form } => {
            f(&mut form);
            ModalState::EditOpen { original, form }
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::{FieldErrors, Product, NAME_REQUIRED};

    fn laptop() -> Product {
        Product::new("2", "Laptop", "Electronics", 15, 899.99)
    }

    #[test]
    fn open_add_starts_with_empty_draft() {
        let state = ModalReducer::reduce(ModalState::Closed, ModalIntent::OpenAdd);
        let form = state.form().expect("form open");
        assert_eq!(form.draft, ProductDraft::default());
        assert!(form.errors.is_empty());
        assert_eq!(form.focused, FormField::Name);
    }

    #[test]
    fn open_edit_seeds_draft() {
        let state = ModalReducer::reduce(
            ModalState::Closed,
            ModalIntent::OpenEdit { product: laptop() },
        );
        match state {
            ModalState::EditOpen { original, form } => {
                assert_eq!(original, laptop());
                assert_eq!(form.draft.name, "Laptop");
                assert_eq!(form.draft.price, "899.99");
            }
            other => panic!("expected EditOpen, got {other:?}"),
        }
    }

    #[test]
    fn reopening_clears_previous_errors() {
        let state = ModalReducer::reduce(ModalState::Closed, ModalIntent::OpenAdd);
        let state = ModalReducer::reduce(
            state,
            ModalIntent::Rejected {
                errors: FieldErrors {
                    name: Some(NAME_REQUIRED),
                    ..FieldErrors::default()
                },
            },
        );
        assert!(!state.form().expect("form").errors.is_empty());

        let state = ModalReducer::reduce(state, ModalIntent::Close);
        let state = ModalReducer::reduce(state, ModalIntent::OpenAdd);
        assert!(state.form().expect("form").errors.is_empty());
    }

    #[test]
    fn typing_edits_focused_field_and_clears_its_error() {
        let state = ModalReducer::reduce(ModalState::Closed, ModalIntent::OpenAdd);
        let state = ModalReducer::reduce(
            state,
            ModalIntent::Rejected {
                errors: FieldErrors {
                    name: Some(NAME_REQUIRED),
                    price: Some("Price must be greater than 0"),
                    ..FieldErrors::default()
                },
            },
        );
        let state = ModalReducer::reduce(state, ModalIntent::Input('T'));
        let form = state.form().expect("form");
        assert_eq!(form.draft.name, "T");
        assert!(form.errors.name.is_none());
        assert!(form.errors.price.is_some());
    }

    #[test]
    fn failed_submit_keeps_form_open_with_reason() {
        let state = ModalReducer::reduce(ModalState::Closed, ModalIntent::OpenAdd);
        let state = ModalReducer::reduce(
            state,
            ModalIntent::Failed {
                message: "A product with id '1' already exists".into(),
            },
        );
        let form = state.form().expect("form");
        assert_eq!(
            form.failure.as_deref(),
            Some("A product with id '1' already exists")
        );

        let state = ModalReducer::reduce(
            state,
            ModalIntent::Rejected {
                errors: FieldErrors {
                    name: Some(NAME_REQUIRED),
                    ..FieldErrors::default()
                },
            },
        );
        assert!(state.form().expect("form").failure.is_none());
    }

    #[test]
    fn rejected_focuses_first_invalid_field() {
        let state = ModalReducer::reduce(ModalState::Closed, ModalIntent::OpenAdd);
        let state = ModalReducer::reduce(
            state,
            ModalIntent::Rejected {
                errors: FieldErrors {
                    stock: Some("Stock must be a whole number"),
                    ..FieldErrors::default()
                },
            },
        );
        assert_eq!(state.form().expect("form").focused, FormField::Stock);
    }

    #[test]
    fn backspace_on_price_field() {
        let state = ModalReducer::reduce(ModalState::Closed, ModalIntent::OpenAdd);
        let state = ModalReducer::reduce(state, ModalIntent::PrevField);
        let state = ModalReducer::reduce(state, ModalIntent::Backspace);
        let form = state.form().expect("form");
        assert_eq!(form.focused, FormField::Price);
        assert_eq!(form.draft.price, "");
    }

    #[test]
    fn delete_requests_open_confirmation() {
        let state = ModalReducer::reduce(
            ModalState::Closed,
            ModalIntent::OpenDelete { id: "5".into() },
        );
        assert_eq!(
            state,
            ModalState::ConfirmOpen {
                ids: vec!["5".into()],
                is_batch: false
            }
        );
    }

    #[test]
    fn empty_batch_is_ignored() {
        let state = ModalReducer::reduce(
            ModalState::Closed,
            ModalIntent::OpenBatchDelete { ids: vec![] },
        );
        assert_eq!(state, ModalState::Closed);
    }

    #[test]
    fn form_intents_ignored_while_confirming() {
        let confirm = ModalState::ConfirmOpen {
            ids: vec!["1".into()],
            is_batch: false,
        };
        let state = ModalReducer::reduce(confirm.clone(), ModalIntent::Input('x'));
        assert_eq!(state, confirm);
    }
}
