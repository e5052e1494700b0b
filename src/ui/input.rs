use crate::inventory::SortField;
use crate::ui::app::App;
use crate::ui::modal::{ModalIntent, ModalState};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match app.modal() {
        ModalState::Closed => handle_table_key(app, key),
        ModalState::AddOpen { .. } | ModalState::EditOpen { .. } => handle_form_key(app, key),
        ModalState::ConfirmOpen { .. } => handle_confirm_key(app, key),
    }
}

fn handle_table_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Up | KeyCode::Char('k') => app.move_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_down(),
        KeyCode::Left | KeyCode::PageUp => app.prev_page(),
        KeyCode::Right | KeyCode::PageDown => app.next_page(),
        KeyCode::Char('a') => app.open_add(),
        KeyCode::Char('e') | KeyCode::Enter => app.open_edit_at_cursor(),
        KeyCode::Char('d') | KeyCode::Delete => app.request_delete_at_cursor(),
        KeyCode::Char('D') => app.request_batch_delete(),
        KeyCode::Char(' ') => app.toggle_select_at_cursor(),
        KeyCode::Char('c') => app.cycle_category_filter(),
        KeyCode::Char('s') => app.cycle_stock_filter(),
        KeyCode::Char(ch @ '1'..='4') => {
            let index = ch.to_digit(10).unwrap_or(1) as usize - 1;
            if let Some(field) = SortField::ALL.get(index) {
                app.sort_by(*field);
            }
        }
        _ => {}
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_modal(),
        KeyCode::Enter => {
            app.submit_form();
        }
        KeyCode::Tab | KeyCode::Down => app.dispatch_modal(ModalIntent::NextField),
        KeyCode::BackTab | KeyCode::Up => app.dispatch_modal(ModalIntent::PrevField),
        KeyCode::Backspace => app.dispatch_modal(ModalIntent::Backspace),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch_modal(ModalIntent::Input(ch))
        }
        _ => {}
    }
}

fn handle_confirm_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.confirm_delete(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_modal(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
