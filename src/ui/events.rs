use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent, MouseEvent};
use tracing::debug;

use crate::fetch::FetchError;
use crate::quotes::Quote;
use crate::shutdown::ShutdownHandle;

/// Everything the UI loop reacts to: terminal input, the render tick, and
/// completions reported by background tasks.
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Tick,
    Resize(u16, u16),
    /// Fetch task finished.
    /// Tagged with the cycle that started it to ignore stale completions.
    FetchFinished {
        cycle: u64,
        outcome: Result<Quote, FetchError>,
    },
    /// Fade-out wait is over; time to swap the text.
    FadeOutElapsed { cycle: u64 },
    /// Fade-in is over; the cycle is complete.
    FadeInElapsed { cycle: u64 },
    /// Startup delay before the card becomes visible.
    EntranceReveal,
    /// The entrance slide has finished.
    EntranceSettle,
    /// Startup delay before the automatic first fetch.
    InitialFetch,
}

pub type AppEventSender = mpsc::Sender<AppEvent>;

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration, shutdown: ShutdownHandle) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                if shutdown.is_shutting_down() {
                    break;
                }

                // Use short poll timeout to check the shutdown flag frequently
                let timeout = tick_rate
                    .saturating_sub(last_tick.elapsed())
                    .min(Duration::from_millis(50));

                match event::poll(timeout) {
                    Ok(true) => match event::read() {
                        Ok(Event::Key(key)) => {
                            let _ = event_tx.send(AppEvent::Key(key));
                        }
                        Ok(Event::Mouse(mouse)) => {
                            let _ = event_tx.send(AppEvent::Mouse(mouse));
                        }
                        Ok(Event::Resize(cols, rows)) => {
                            let _ = event_tx.send(AppEvent::Resize(cols, rows));
                        }
                        Ok(_) => {}
                        Err(err) => {
                            debug!(error = %err, "input read failed");
                            break;
                        }
                    },
                    Ok(false) => {}
                    Err(err) => {
                        debug!(error = %err, "input poll failed");
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    let _ = event_tx.send(AppEvent::Tick);
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> AppEventSender {
        self.tx.clone()
    }
}
