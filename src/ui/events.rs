use std::io;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::shutdown::ShutdownHandle;

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    /// The store applied an action; redraw.
    StateChanged,
    /// OS signal received (SIGTERM, SIGINT)
    Shutdown,
}

pub struct EventHandler {
    rx: UnboundedReceiver<AppEvent>,
    tx: UnboundedSender<AppEvent>,
}

impl EventHandler {
    /// Spawn the terminal input thread.
    ///
    /// The thread polls crossterm for at most `poll_interval` at a time so it
    /// notices `shutdown` promptly.
    pub fn new(poll_interval: Duration, shutdown: ShutdownHandle) -> io::Result<Self> {
        let (tx, rx) = mpsc::unbounded_channel();
        let event_tx = tx.clone();

        thread::Builder::new()
            .name("tickdown-input".to_string())
            .spawn(move || loop {
                if shutdown.is_shutting_down() {
                    break;
                }

                match event::poll(poll_interval) {
                    Ok(true) => {}
                    Ok(false) => continue,
                    Err(err) => {
                        tracing::error!(error = %err, "Terminal poll failed");
                        break;
                    }
                }

                let app_event = match event::read() {
                    Ok(Event::Key(key)) => AppEvent::Key(key),
                    Ok(Event::Resize(cols, rows)) => AppEvent::Resize(cols, rows),
                    Ok(_) => continue,
                    Err(err) => {
                        tracing::error!(error = %err, "Terminal read failed");
                        break;
                    }
                };
                if event_tx.send(app_event).is_err() {
                    break;
                }
            })?;

        Ok(Self { rx, tx })
    }

    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }

    pub fn sender(&self) -> UnboundedSender<AppEvent> {
        self.tx.clone()
    }
}
