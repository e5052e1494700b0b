use crate::ui::modal::ModalState;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const TABLE_HINTS: &str = " a: Add │ e: Edit │ d: Delete │ Space: Select │ D: Delete Selected │ c/s: Filter │ 1-4: Sort │ ←/→: Page │ q: Quit";
const FORM_HINTS: &str = " Tab: Next Field │ Enter: Submit │ Esc: Cancel";
const CONFIRM_HINTS: &str = " y/Enter: Confirm │ n/Esc: Cancel";

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn hints(modal: &ModalState) -> &'static str {
        match modal {
            ModalState::Closed => TABLE_HINTS,
            ModalState::AddOpen { .. } | ModalState::EditOpen { .. } => FORM_HINTS,
            ModalState::ConfirmOpen { .. } => CONFIRM_HINTS,
        }
    }

    pub fn widget(&self, area: Rect, modal: &ModalState) -> Paragraph<'static> {
        let hints = Self::hints(modal);
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
