use crate::config::DashboardConfig;
use crate::inventory::{
    category_summary, derive_view, generate_id, CategorySlice, Product, ProductStore, SortField,
    StockFilter, TableView,
};
use crate::ui::modal::{ModalIntent, ModalReducer, ModalState};
use crate::ui::mvi::Reducer;
use crate::ui::table::{TableIntent, TableReducer, TableState};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Result of submitting the product form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A new product was added under this id.
    Added(String),
    /// The product with this id was replaced.
    Updated(String),
    /// Validation or the store refused the draft; the form stays open.
    Rejected,
    /// No form was open.
    Ignored,
}

/// One dashboard session: the store instance plus all UI state around it.
pub struct App {
    should_quit: bool,
    store: ProductStore,
    table: TableState,
    modal: ModalState,
    settings: DashboardConfig,
}

impl App {
    pub fn new(store: ProductStore, settings: DashboardConfig) -> Self {
        Self {
            should_quit: false,
            store,
            table: TableState::default(),
            modal: ModalState::default(),
            settings,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn store(&self) -> &ProductStore {
        &self.store
    }

    pub fn table(&self) -> &TableState {
        &self.table
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub fn settings(&self) -> &DashboardConfig {
        &self.settings
    }

    /// The page of products currently on screen.
    pub fn view(&self) -> TableView {
        derive_view(
            self.store.products(),
            self.store.filters(),
            self.table.sort,
            self.table.page,
            self.settings.page_size,
        )
    }

    /// Chart data over every product, regardless of filters.
    pub fn category_summary(&self) -> Vec<CategorySlice> {
        category_summary(self.store.products())
    }

    pub fn cursor_product(&self) -> Option<Product> {
        self.view().rows.into_iter().nth(self.table.cursor)
    }

    // ========================================================================
    // Table (MVI pattern)
    // ========================================================================

    fn dispatch_table(&mut self, intent: TableIntent) {
        dispatch_mvi!(self, table, TableReducer, intent);
    }

    pub fn move_up(&mut self) {
        self.dispatch_table(TableIntent::MoveUp);
    }

    pub fn move_down(&mut self) {
        let rows_on_page = self.view().rows.len();
        self.dispatch_table(TableIntent::MoveDown { rows_on_page });
    }

    pub fn next_page(&mut self) {
        let total_pages = self.view().total_pages;
        self.dispatch_table(TableIntent::NextPage { total_pages });
    }

    pub fn prev_page(&mut self) {
        self.dispatch_table(TableIntent::PrevPage);
    }

    pub fn sort_by(&mut self, field: SortField) {
        self.dispatch_table(TableIntent::SortBy(field));
    }

    pub fn toggle_select_at_cursor(&mut self) {
        if let Some(product) = self.cursor_product() {
            self.dispatch_table(TableIntent::ToggleSelect(product.id));
        }
    }

    pub fn set_category_filter(&mut self, categories: Vec<String>) {
        self.store.set_category_filter(categories);
        self.dispatch_table(TableIntent::ResetPage);
    }

    pub fn set_stock_filter(&mut self, stock: StockFilter) {
        self.store.set_stock_filter(stock);
        self.dispatch_table(TableIntent::ResetPage);
    }

    /// Steps through "All Categories" and then each known category.
    pub fn cycle_category_filter(&mut self) {
        let categories = self.store.categories();
        let current = &self.store.filters().categories;
        let next = match current.as_slice() {
            [] => categories.first().cloned(),
            [single] => categories
                .iter()
                .position(|c| c == single)
                .and_then(|idx| categories.get(idx + 1))
                .cloned(),
            _ => None,
        };
        self.set_category_filter(next.into_iter().collect());
    }

    pub fn cycle_stock_filter(&mut self) {
        let next = self.store.filters().stock.cycle();
        self.set_stock_filter(next);
    }

    /// Keeps page and cursor valid after the product list shrank.
    fn sync_table(&mut self) {
        let view = self.view();
        self.dispatch_table(TableIntent::Clamp {
            page: view.page,
            rows_on_page: view.rows.len(),
        });
    }

    // ========================================================================
    // Modal (MVI pattern)
    // ========================================================================

    pub fn dispatch_modal(&mut self, intent: ModalIntent) {
        dispatch_mvi!(self, modal, ModalReducer, intent);
    }

    pub fn open_add(&mut self) {
        self.dispatch_modal(ModalIntent::OpenAdd);
    }

    pub fn open_edit(&mut self, product: Product) {
        self.dispatch_modal(ModalIntent::OpenEdit { product });
    }

    pub fn open_edit_at_cursor(&mut self) {
        if let Some(product) = self.cursor_product() {
            self.open_edit(product);
        }
    }

    pub fn request_delete(&mut self, id: String) {
        self.dispatch_modal(ModalIntent::OpenDelete { id });
    }

    pub fn request_delete_at_cursor(&mut self) {
        if let Some(product) = self.cursor_product() {
            self.request_delete(product.id);
        }
    }

    /// Opens the batch confirmation when rows are selected.
    pub fn request_batch_delete(&mut self) {
        if !self.table.can_batch_delete() {
            return;
        }
        let ids = self.table.selected.iter().cloned().collect();
        self.dispatch_modal(ModalIntent::OpenBatchDelete { ids });
    }

    /// Validates the open form and applies it to the store.
    pub fn submit_form(&mut self) -> SubmitOutcome {
        let (draft, target) = match &self.modal {
            ModalState::AddOpen { form } => (form.draft.clone(), None),
            ModalState::EditOpen { original, form } => {
                (form.draft.clone(), Some(original.id.clone()))
            }
            _ => return SubmitOutcome::Ignored,
        };

        let valid = match draft.validate() {
            Ok(valid) => valid,
            Err(errors) => {
                tracing::debug!(?errors, "Product form rejected");
                self.dispatch_modal(ModalIntent::Rejected { errors });
                return SubmitOutcome::Rejected;
            }
        };

        let outcome = match target {
            Some(id) => {
                self.store.edit_product(valid.into_product(id.clone()));
                SubmitOutcome::Updated(id)
            }
            None => {
                let id = generate_id();
                if let Err(err) = self.store.add_product(valid.into_product(id.clone())) {
                    tracing::error!(error = %err, "Failed to add product");
                    self.dispatch_modal(ModalIntent::Failed {
                        message: err.to_string(),
                    });
                    return SubmitOutcome::Rejected;
                }
                SubmitOutcome::Added(id)
            }
        };

        self.dispatch_modal(ModalIntent::Close);
        self.sync_table();
        outcome
    }

    /// Performs the pending single or batch delete and clears the selection.
    pub fn confirm_delete(&mut self) {
        let ModalState::ConfirmOpen { ids, is_batch } = &self.modal else {
            return;
        };
        if *is_batch {
            self.store
                .batch_delete_products(ids.iter().map(String::as_str));
        } else if let Some(id) = ids.first() {
            self.store.delete_product(id);
        }

        self.dispatch_modal(ModalIntent::Close);
        self.dispatch_table(TableIntent::ClearSelection);
        self.sync_table();
    }

    pub fn cancel_modal(&mut self) {
        self.dispatch_modal(ModalIntent::Close);
    }
}
