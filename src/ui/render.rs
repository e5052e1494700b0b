use crate::ui::app::App;
use crate::ui::chart::category_chart;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::modal::render_modal;
use crate::ui::table::render_product_table;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let summary = app.category_summary();
    let regions = layout_regions(area, summary.len().max(1) as u16);

    frame.render_widget(Header::new().widget(app.store()), regions.header);
    frame.render_widget(category_chart(&summary), regions.chart);

    frame.render_widget(Clear, regions.table);
    let view = app.view();
    render_product_table(
        frame,
        regions.table,
        &view,
        app.store().filters(),
        app.table(),
        app.settings().low_stock_threshold,
    );

    frame.render_widget(
        Footer::new().widget(regions.footer, app.modal()),
        regions.footer,
    );

    render_modal(frame, app.modal(), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;
    use crate::inventory::{seed_products, Filters, ProductStore};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn make_app() -> App {
        let settings = DashboardConfig::default();
        let store = ProductStore::new(seed_products(), Filters::new(settings.default_stock_filter))
            .expect("seed ids are unique");
        App::new(store, settings)
    }

    #[test]
    fn renders_dashboard_sections() {
        let app = make_app();
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).expect("terminal");
        terminal.draw(|frame| draw(frame, &app)).expect("draw");

        let text = screen_text(&terminal);
        assert!(text.contains("Inventory Management Dashboard"));
        assert!(text.contains("Products by Category"));
        assert!(text.contains("Smartphone"));
        assert!(text.contains("Page 1 of 2"));
        assert!(!text.contains("Pizza"));
    }

    #[test]
    fn renders_add_modal_on_top() {
        let mut app = make_app();
        app.open_add();
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).expect("terminal");
        terminal.draw(|frame| draw(frame, &app)).expect("draw");

        let text = screen_text(&terminal);
        assert!(text.contains("Add Product"));
        assert!(text.contains("Cancel (Esc)"));
    }
}
