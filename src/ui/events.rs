use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent};
use tokio::sync::mpsc;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
}

/// Reads terminal input on a dedicated thread and forwards it to the async
/// render loop, so the loop never blocks on the terminal.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<AppEvent>,
    stop: Arc<AtomicBool>,
}

impl EventHandler {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);

        let spawned = thread::Builder::new()
            .name("terminal-input".to_string())
            .spawn(move || input_loop(tx, stop_flag));
        if let Err(err) = spawned {
            tracing::error!(error = %err, "Failed to start terminal input thread");
        }

        Self { rx, stop }
    }

    /// Next input event; `None` once the input thread has exited.
    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}

fn input_loop(tx: mpsc::UnboundedSender<AppEvent>, stop: Arc<AtomicBool>) {
    while !stop.load(Ordering::Relaxed) {
        // Short poll so the stop flag is checked frequently.
        match event::poll(POLL_INTERVAL) {
            Ok(false) => continue,
            Ok(true) => {}
            Err(err) => {
                tracing::error!(error = %err, "Terminal poll failed");
                break;
            }
        }

        let forwarded = match event::read() {
            Ok(Event::Key(key)) => tx.send(AppEvent::Key(key)),
            Ok(Event::Resize(cols, rows)) => tx.send(AppEvent::Resize(cols, rows)),
            Ok(_) => Ok(()),
            Err(err) => {
                tracing::error!(error = %err, "Terminal read failed");
                break;
            }
        };
        if forwarded.is_err() {
            break;
        }
    }
}
