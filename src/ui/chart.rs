//! "Products by Category" summary panel.

use crate::inventory::CategorySlice;
use crate::ui::theme::{chart_color, GLOBAL_BORDER, HEADER_TEXT};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub const CHART_TITLE: &str = " Products by Category ";

/// Bar width in cells at 100% share.
const BAR_WIDTH: usize = 30;

pub fn chart_lines(slices: &[CategorySlice]) -> Vec<Line<'static>> {
    if slices.is_empty() {
        return vec![Line::from("  No products.")];
    }

    let total: usize = slices.iter().map(|s| s.count).sum();
    let name_width = slices
        .iter()
        .map(|s| s.name.chars().count())
        .max()
        .unwrap_or(0);

    slices
        .iter()
        .enumerate()
        .map(|(idx, slice)| {
            let share = slice.share(total);
            let filled = (share * BAR_WIDTH as f64).round() as usize;
            let color = chart_color(idx);
            Line::from(vec![
                Span::styled("  ■ ", Style::default().fg(color)),
                Span::styled(
                    format!("{:<width$}", slice.name, width = name_width),
                    Style::default().fg(HEADER_TEXT),
                ),
                Span::raw("  "),
                Span::styled("█".repeat(filled), Style::default().fg(color)),
                Span::styled(
                    "░".repeat(BAR_WIDTH.saturating_sub(filled)),
                    Style::default().fg(GLOBAL_BORDER),
                ),
                Span::styled(
                    format!("  {} ({:.0}%)", slice.count, share * 100.0),
                    Style::default().fg(HEADER_TEXT),
                ),
            ])
        })
        .collect()
}

pub fn category_chart(slices: &[CategorySlice]) -> Paragraph<'static> {
    Paragraph::new(chart_lines(slices)).block(
        Block::default()
            .title(CHART_TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn one_line_per_category_with_share() {
        let slices = vec![
            CategorySlice {
                name: "Electronics".into(),
                count: 3,
            },
            CategorySlice {
                name: "Food".into(),
                count: 1,
            },
        ];
        let lines = chart_lines(&slices);
        assert_eq!(lines.len(), 2);
        assert!(text(&lines[0]).ends_with("3 (75%)"));
        assert!(text(&lines[1]).contains("Food"));
    }

    #[test]
    fn empty_inventory_has_placeholder() {
        let lines = chart_lines(&[]);
        assert_eq!(text(&lines[0]), "  No products.");
    }
}
