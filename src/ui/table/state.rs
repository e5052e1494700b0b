use std::collections::BTreeSet;

use crate::inventory::SortSpec;
use crate::ui::mvi::UiState;

/// Table navigation, sorting and row selection.
///
/// Filters are not part of this state; they live in the store.
#[derive(Debug, Clone, PartialEq)]
pub struct TableState {
    /// Row index within the current page.
    pub cursor: usize,
    /// 1-based page number.
    pub page: usize,
    pub sort: Option<SortSpec>,
    /// Ids checked for batch deletion.
    pub selected: BTreeSet<String>,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            cursor: 0,
            page: 1,
            sort: None,
            selected: BTreeSet::new(),
        }
    }
}

impl UiState for TableState {}

impl TableState {
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// "Delete Selected" is only offered with a non-empty selection.
    pub fn can_batch_delete(&self) -> bool {
        !self.selected.is_empty()
    }
}
