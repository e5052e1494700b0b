use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x25, 0x63, 0xeb);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);

/// Slice colors for the category chart, reused cyclically.
pub const CHART_PALETTE: [Color; 6] = [
    Color::Rgb(0x00, 0x88, 0xfe),
    Color::Rgb(0x00, 0xc4, 0x9f),
    Color::Rgb(0xff, 0xbb, 0x28),
    Color::Rgb(0xff, 0x80, 0x42),
    Color::Rgb(0xaa, 0x33, 0x6a),
    Color::Rgb(0x88, 0x66, 0xee),
];

pub fn chart_color(index: usize) -> Color {
    CHART_PALETTE[index % CHART_PALETTE.len()]
}
