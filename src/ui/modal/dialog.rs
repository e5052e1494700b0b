//! Rendering for the product form and the delete confirmation.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::inventory::FormField;
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, POPUP_BORDER, STATUS_ERROR};

use super::state::{FormState, ModalState};

const DIALOG_WIDTH: u16 = 56;

/// Render whichever overlay is open. Does nothing when closed.
pub fn render_modal(frame: &mut Frame, state: &ModalState, area: Rect) {
    let lines = match state {
        ModalState::Closed => return,
        ModalState::AddOpen { form } | ModalState::EditOpen { form, .. } => {
            form_lines(form, state.submit_label())
        }
        ModalState::ConfirmOpen { .. } => confirm_lines(state),
    };

    let height = (lines.len() as u16).saturating_add(2);
    let area = centered_rect_by_size(area, DIALOG_WIDTH, height);

    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(format!(" {} ", state.title()))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn form_lines(form: &FormState, submit_label: &str) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("")];
    for field in FormField::ALL {
        let focused = form.focused == field;
        let label_style = if focused {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(HEADER_TEXT)
        };
        let error = form.errors.get(field);
        let value_style = match (focused, error.is_some()) {
            (_, true) => Style::default().fg(STATUS_ERROR).bg(ACTIVE_HIGHLIGHT),
            (true, false) => Style::default().fg(HEADER_TEXT).bg(ACTIVE_HIGHLIGHT),
            (false, false) => Style::default().fg(HEADER_TEXT),
        };
        let cursor = if focused { "▏" } else { "" };

        lines.push(Line::from(Span::styled(
            format!("  {}", field.label()),
            label_style,
        )));
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                format!("{}{}", form.draft.value(field), cursor),
                value_style,
            ),
        ]));
        if let Some(message) = error {
            lines.push(Line::from(Span::styled(
                format!("  {}", message),
                Style::default().fg(STATUS_ERROR),
            )));
        }
    }
    if let Some(failure) = &form.failure {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {}", failure),
            Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(" Cancel (Esc) ", Style::default().fg(HEADER_TEXT)),
        Span::raw("   "),
        Span::styled(
            format!(" {} (Enter) ", submit_label),
            Style::default()
                .fg(HEADER_TEXT)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    lines
}

fn confirm_lines(state: &ModalState) -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", state.confirm_message().unwrap_or_default()),
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(" Cancel (n) ", Style::default().fg(HEADER_TEXT)),
            Span::raw("   "),
            Span::styled(
                " Confirm (y) ",
                Style::default()
                    .fg(HEADER_TEXT)
                    .bg(STATUS_ERROR)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ]
}
