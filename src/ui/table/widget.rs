use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use crate::inventory::{Filters, Product, SortField, SortSpec, TableView};
use crate::ui::table::state::TableState;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR,
};

const COLUMN_WIDTHS: [Constraint; 5] = [
    Constraint::Length(6),
    Constraint::Min(16),
    Constraint::Length(14),
    Constraint::Length(18),
    Constraint::Length(12),
];

pub fn column_title(field: SortField, sort: Option<SortSpec>) -> String {
    match sort {
        Some(spec) if spec.field == field => format!("{} {}", field.title(), spec.order.arrow()),
        _ => field.title().to_string(),
    }
}

pub fn filter_line(filters: &Filters, state: &TableState) -> Line<'static> {
    let label = Style::default().fg(HEADER_SEPARATOR);
    let value = Style::default().fg(HEADER_TEXT);
    let mut spans = vec![
        Span::styled(" Category: ", label),
        Span::styled(filters.category_label(), value),
        Span::styled("   Stock: ", label),
        Span::styled(filters.stock.label(), value),
    ];
    if state.can_batch_delete() {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            format!(" Delete Selected ({}) ", state.selected.len()),
            Style::default().fg(HEADER_TEXT).bg(STATUS_ERROR),
        ));
    }
    Line::from(spans)
}

pub fn pagination_line(view: &TableView) -> Line<'static> {
    let prev = if view.page > 1 { "◀ Previous" } else { "          " };
    let next = if view.page < view.total_pages {
        "Next ▶"
    } else {
        ""
    };
    Line::from(vec![
        Span::styled(format!(" {}   ", prev), Style::default().fg(HEADER_SEPARATOR)),
        Span::styled(
            format!("Page {} of {}", view.page, view.total_pages),
            Style::default().fg(HEADER_TEXT),
        ),
        Span::styled(format!("   {}", next), Style::default().fg(HEADER_SEPARATOR)),
    ])
}

fn product_row(
    product: &Product,
    selected: bool,
    under_cursor: bool,
    low_stock_threshold: u32,
) -> Row<'static> {
    let mut stock = vec![Span::raw(product.stock.to_string())];
    if product.is_low_stock(low_stock_threshold) {
        stock.push(Span::styled(
            "  Low Stock",
            Style::default()
                .fg(STATUS_ERROR)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let row = Row::new(vec![
        Cell::from(if selected { "[x]" } else { "[ ]" }),
        Cell::from(product.name.clone()),
        Cell::from(product.category.clone()),
        Cell::from(Line::from(stock)),
        Cell::from(format!("${}", product.price)),
    ]);

    if under_cursor {
        row.style(Style::default().bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD))
    } else {
        row
    }
}

/// Renders filter bar, product rows and pagination into `area`.
pub fn render_product_table(
    frame: &mut Frame,
    area: Rect,
    view: &TableView,
    filters: &Filters,
    state: &TableState,
    low_stock_threshold: u32,
) {
    let block = Block::default()
        .title(" Products ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [filter_area, table_area, pager_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    frame.render_widget(Paragraph::new(filter_line(filters, state)), filter_area);

    let mut header_cells = vec![Cell::from("Select")];
    header_cells.extend(
        SortField::ALL
            .iter()
            .map(|field| Cell::from(column_title(*field, state.sort))),
    );
    let header = Row::new(header_cells).style(
        Style::default()
            .fg(ACCENT)
            .add_modifier(Modifier::BOLD),
    );

    if view.rows.is_empty() {
        let table = Table::new(Vec::<Row>::new(), COLUMN_WIDTHS).header(header);
        frame.render_widget(table, table_area);
        let [_, message_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(table_area);
        frame.render_widget(
            Paragraph::new(" No products found.").style(Style::default().fg(HEADER_TEXT)),
            message_area,
        );
    } else {
        let rows: Vec<Row> = view
            .rows
            .iter()
            .enumerate()
            .map(|(idx, product)| {
                product_row(
                    product,
                    state.is_selected(&product.id),
                    idx == state.cursor,
                    low_stock_threshold,
                )
            })
            .collect();
        let table = Table::new(rows, COLUMN_WIDTHS)
            .header(header)
            .style(Style::default().fg(HEADER_TEXT));
        frame.render_widget(table, table_area);
    }

    frame.render_widget(Paragraph::new(pagination_line(view)), pager_area);
}
