use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::time::Duration;

/// Runs the dashboard until the user quits.
pub fn run(mut app: App) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let poll_interval = Duration::from_millis(app.settings().tick_rate_ms);
    let events = EventHandler::new(poll_interval);
    tracing::info!(products = app.store().len(), "Dashboard started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(poll_interval) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::debug!(cols, rows, "Terminal resized");
            }
            // Nothing arrived; loop around and redraw.
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    tracing::info!("Dashboard closed");
    Ok(())
}
