use crate::inventory::SortSpec;
use crate::ui::mvi::Reducer;
use crate::ui::table::intent::TableIntent;
use crate::ui::table::state::TableState;

pub struct TableReducer;

impl Reducer for TableReducer {
    type State = TableState;
    type Intent = TableIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TableIntent::MoveUp => TableState {
                cursor: state.cursor.saturating_sub(1),
                ..state
            },
            TableIntent::MoveDown { rows_on_page } => {
                let last = rows_on_page.saturating_sub(1);
                TableState {
                    cursor: (state.cursor + 1).min(last),
                    ..state
                }
            }
            TableIntent::NextPage { total_pages } => {
                if state.page >= total_pages {
                    return state;
                }
                TableState {
                    page: state.page + 1,
                    cursor: 0,
                    ..state
                }
            }
            TableIntent::PrevPage => {
                if state.page <= 1 {
                    return state;
                }
                TableState {
                    page: state.page - 1,
                    cursor: 0,
                    ..state
                }
            }
            TableIntent::SortBy(field) => TableState {
                sort: Some(SortSpec::toggle(state.sort, field)),
                cursor: 0,
                ..state
            },
            TableIntent::ToggleSelect(id) => {
                let mut selected = state.selected;
                if !selected.remove(&id) {
                    selected.insert(id);
                }
                TableState { selected, ..state }
            }
            TableIntent::ClearSelection => TableState {
                selected: Default::default(),
                ..state
            },
            TableIntent::ResetPage => TableState {
                page: 1,
                cursor: 0,
                ..state
            },
            TableIntent::Clamp { page, rows_on_page } => TableState {
                page: page.max(1),
                cursor: state.cursor.min(rows_on_page.saturating_sub(1)),
                ..state
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::{SortField, SortOrder};

    #[test]
    fn default_starts_on_first_page() {
        let state = TableState::default();
        assert_eq!(state.page, 1);
        assert_eq!(state.cursor, 0);
        assert!(!state.can_batch_delete());
    }

    #[test]
    fn cursor_stays_within_page() {
        let state = TableReducer::reduce(TableState::default(), TableIntent::MoveUp);
        assert_eq!(state.cursor, 0);

        let mut state = TableState::default();
        for _ in 0..10 {
            state = TableReducer::reduce(state, TableIntent::MoveDown { rows_on_page: 3 });
        }
        assert_eq!(state.cursor, 2);
    }

    #[test]
    fn paging_is_bounded() {
        let state = TableReducer::reduce(TableState::default(), TableIntent::PrevPage);
        assert_eq!(state.page, 1);

        let state = TableReducer::reduce(state, TableIntent::NextPage { total_pages: 2 });
        assert_eq!(state.page, 2);
        let state = TableReducer::reduce(state, TableIntent::NextPage { total_pages: 2 });
        assert_eq!(state.page, 2);
    }

    #[test]
    fn sort_toggles_direction() {
        let state = TableReducer::reduce(TableState::default(), TableIntent::SortBy(SortField::Stock));
        let state = TableReducer::reduce(state, TableIntent::SortBy(SortField::Stock));
        assert_eq!(
            state.sort.map(|s| s.order),
            Some(SortOrder::Descending)
        );
    }

    #[test]
    fn toggle_select_adds_then_removes() {
        let state = TableReducer::reduce(TableState::default(), TableIntent::ToggleSelect("3".into()));
        assert!(state.is_selected("3"));
        assert!(state.can_batch_delete());
        let state = TableReducer::reduce(state, TableIntent::ToggleSelect("3".into()));
        assert!(!state.is_selected("3"));
    }

    #[test]
    fn clamp_pulls_cursor_back() {
        let state = TableState {
            cursor: 4,
            page: 3,
            ..TableState::default()
        };
        let state = TableReducer::reduce(state, TableIntent::Clamp { page: 2, rows_on_page: 2 });
        assert_eq!(state.page, 2);
        assert_eq!(state.cursor, 1);
    }
}
