use std::time::{Duration, Instant};

use tokio::runtime::Handle;
use tracing::{debug, info, warn};

use crate::config::{Config, TimingConfig};
use crate::fetch::{FetchError, QuoteFetcher};
use crate::quotes::{Quote, QuoteSource};
use crate::selector::FallbackSelector;
use crate::share::QuoteSharer;
use crate::ui::events::{AppEvent, AppEventSender};
use crate::ui::mvi::Reducer;
use crate::ui::quote::{QuoteCycleReducer, QuoteCycleState, QuoteIntent};

/// Spinner shown on the trigger while a fetch cycle is running.
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Two card clicks inside this window count as a double-click.
const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(400);

/// One-shot entrance animation for the card.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntrancePhase {
    /// Not yet revealed; the body renders empty.
    Hidden,
    /// Sliding into place: the card draws one row low and dimmed.
    Sliding,
    /// Final position.
    Settled,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    /// Quote cycle state (MVI pattern).
    cycle: QuoteCycleState,
    entrance: EntrancePhase,
    /// Fallback selection (resource, managed outside MVI).
    selector: FallbackSelector,
    fetcher: QuoteFetcher,
    sharer: QuoteSharer,
    timing: TimingConfig,
    events: AppEventSender,
    tasks: Handle,
    /// Set when a fade leg begins; rendering derives text brightness from it.
    fade_started: Option<Instant>,
    spinner_frame: usize,
    last_card_click: Option<Instant>,
}

impl App {
    pub fn new(
        config: &Config,
        selector: FallbackSelector,
        fetcher: QuoteFetcher,
        sharer: QuoteSharer,
        events: AppEventSender,
        tasks: Handle,
    ) -> Self {
        Self {
            should_quit: false,
            size: None,
            cycle: QuoteCycleState::default(),
            entrance: EntrancePhase::Hidden,
            selector,
            fetcher,
            sharer,
            timing: config.timing.clone(),
            events,
            tasks,
            fade_started: None,
            spinner_frame: 0,
            last_card_click: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn size(&self) -> Option<(u16, u16)> {
        self.size
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    pub fn on_tick(&mut self) {
        if self.cycle.is_busy() {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
        }
    }

    /// Arm the startup timers: entrance reveal and the automatic first fetch.
    pub fn schedule_startup(&self) {
        self.send_after(
            Duration::from_millis(self.timing.entrance_delay_ms),
            AppEvent::EntranceReveal,
        );
        self.send_after(
            Duration::from_millis(self.timing.initial_fetch_delay_ms),
            AppEvent::InitialFetch,
        );
    }

    pub fn on_entrance_reveal(&mut self) {
        if self.entrance == EntrancePhase::Hidden {
            self.entrance = EntrancePhase::Sliding;
            self.send_after(
                Duration::from_millis(self.timing.entrance_slide_ms),
                AppEvent::EntranceSettle,
            );
        }
    }

    pub fn on_entrance_settle(&mut self) {
        self.entrance = EntrancePhase::Settled;
    }

    pub fn on_initial_fetch(&mut self) {
        debug!("startup fetch due");
        self.request_fetch();
    }

    // ========================================================================
    // Quote cycle methods (MVI pattern)
    // ========================================================================

    /// Kick off a fetch cycle unless one is already running.
    ///
    /// Returns whether a fetch was actually started. The matching
    /// [`AppEvent::FetchFinished`] carries the cycle number assigned here.
    pub fn request_fetch(&mut self) -> bool {
        if self.cycle.is_busy() {
            debug!("activation ignored; quote cycle in progress");
            return false;
        }

        self.dispatch_quote(QuoteIntent::FetchStarted);
        let cycle = self.cycle.cycle;
        let fetcher = self.fetcher.clone();
        let tx = self.events.clone();
        info!(cycle, url = fetcher.url(), "requesting quote");
        self.tasks.spawn(async move {
            let outcome = fetcher.fetch_quote().await;
            let _ = tx.send(AppEvent::FetchFinished { cycle, outcome });
        });
        true
    }

    /// Resolve a finished fetch into the quote that will be displayed.
    ///
    /// A failed fetch is not an error the user sees: the selector supplies
    /// the next fallback quote and the cycle continues identically.
    pub fn on_fetch_finished(&mut self, cycle: u64, outcome: Result<Quote, FetchError>) {
        if cycle != self.cycle.cycle {
            debug!(cycle, current = self.cycle.cycle, "stale fetch result dropped");
            return;
        }

        let (quote, source) = match outcome {
            Ok(quote) => {
                info!(author = %quote.author, "quote fetched from API");
                (quote, QuoteSource::Api)
            }
            Err(err) => {
                warn!(error = %err, "quote fetch failed, using fallback");
                (self.selector.next_fallback(), QuoteSource::Fallback)
            }
        };

        self.dispatch_quote(QuoteIntent::FetchResolved { quote, source });
        self.fade_started = Some(Instant::now());
        self.send_after(
            Duration::from_millis(self.timing.fade_ms),
            AppEvent::FadeOutElapsed { cycle },
        );
    }

    /// Swap point: the old text has faded out, install the pending quote.
    pub fn on_fade_out_elapsed(&mut self, cycle: u64) {
        if cycle != self.cycle.cycle {
            debug!(cycle, "stale fade-out timer dropped");
            return;
        }

        self.dispatch_quote(QuoteIntent::FadeOutFinished);
        if let Some(displayed) = &self.cycle.displayed {
            debug!(source = ?displayed.source, "quote displayed");
        }
        self.fade_started = Some(Instant::now());
        self.send_after(
            Duration::from_millis(self.timing.fade_ms),
            AppEvent::FadeInElapsed { cycle },
        );
    }

    pub fn on_fade_in_elapsed(&mut self, cycle: u64) {
        if cycle != self.cycle.cycle {
            debug!(cycle, "stale fade-in timer dropped");
            return;
        }

        self.dispatch_quote(QuoteIntent::FadeInFinished);
        self.fade_started = None;
    }

    /// Share the displayed quote through the configured channel.
    pub fn request_share(&mut self) {
        let Some(displayed) = &self.cycle.displayed else {
            debug!("share ignored; no quote displayed yet");
            return;
        };
        self.sharer
            .share(&displayed.quote.content, &displayed.quote.author);
    }

    /// Record a click on the card; returns true when it completes a
    /// double-click.
    pub fn note_card_click(&mut self) -> bool {
        let now = Instant::now();
        let double = self
            .last_card_click
            .map(|previous| now.duration_since(previous) <= DOUBLE_CLICK_WINDOW)
            .unwrap_or(false);
        self.last_card_click = if double { None } else { Some(now) };
        double
    }

    pub fn is_busy(&self) -> bool {
        self.cycle.is_busy()
    }

    pub fn cycle_state(&self) -> &QuoteCycleState {
        &self.cycle
    }

    pub fn entrance(&self) -> EntrancePhase {
        self.entrance
    }

    pub fn spinner_symbol(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }

    /// Progress of the current fade leg in `0.0..=1.0`.
    ///
    /// Reads as fully-faded-in whenever no fade is running, so render code
    /// can apply it unconditionally.
    pub fn fade_progress(&self) -> f32 {
        match self.fade_started {
            Some(started) if self.cycle.is_fading() => {
                let total = self.timing.fade_ms.max(1) as f32;
                (started.elapsed().as_millis() as f32 / total).min(1.0)
            }
            _ => 1.0,
        }
    }

    /// Dispatch an intent to the quote cycle reducer.
    fn dispatch_quote(&mut self, intent: QuoteIntent) {
        dispatch_mvi!(self, cycle, QuoteCycleReducer, intent);
    }

    fn send_after(&self, delay: Duration, event: AppEvent) {
        let tx = self.events.clone();
        self.tasks.spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(event);
        });
    }
}
