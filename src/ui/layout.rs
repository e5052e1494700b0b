use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub chart: Rect,
    pub table: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect, chart_rows: u16) -> Regions {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let middle_height = area.height.saturating_sub(header_height + footer_height);
    let chart_height = (chart_rows + 2).min(middle_height / 2);

    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let chart = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: chart_height,
    };
    let table = Rect {
        x: area.x,
        y: chart.y + chart_height,
        width: area.width,
        height: middle_height.saturating_sub(chart_height),
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };

    Regions {
        header,
        chart,
        table,
        footer,
    }
}

/// Create a centered rect of given size, clipped to `area`.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height.min(area.height)),
            Constraint::Min(0),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width.min(area.width)),
            Constraint::Min(0),
        ])
        .split(vertical[1]);

    horizontal[1]
}
