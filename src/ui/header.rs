use crate::inventory::ProductStore;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub const TITLE: &str = "Inventory Management Dashboard";

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, store: &ProductStore) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let out_of_stock = store.products().iter().filter(|p| !p.in_stock).count();
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(TITLE, Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{} products", store.len()), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(
                format!("{} out of stock", out_of_stock),
                Style::default().fg(if out_of_stock > 0 { STATUS_ERROR } else { HEADER_TEXT }),
            ),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}
