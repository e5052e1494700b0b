use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
}

/// Polls crossterm on a background thread and forwards events.
///
/// The thread exits once the receiving side is dropped.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
}

impl EventHandler {
    pub fn new(poll_interval: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || loop {
            let forwarded = match event::poll(poll_interval) {
                Ok(true) => match event::read() {
                    Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                        tx.send(AppEvent::Key(key))
                    }
                    Ok(Event::Resize(cols, rows)) => tx.send(AppEvent::Resize(cols, rows)),
                    Ok(_) => Ok(()),
                    Err(err) => {
                        tracing::error!(error = %err, "Failed to read terminal event");
                        break;
                    }
                },
                Ok(false) => Ok(()),
                Err(err) => {
                    tracing::error!(error = %err, "Failed to poll terminal events");
                    break;
                }
            };
            if forwarded.is_err() {
                break;
            }
        });

        Self { rx }
    }

    /// Waits up to `timeout` for the next event.
    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}
