use std::time::Duration;

use anyhow::Context;
use tracing::info;

use crate::config::Config;
use crate::fetch::QuoteFetcher;
use crate::quotes::FallbackPool;
use crate::selector::FallbackSelector;
use crate::share::QuoteSharer;
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Bring up the terminal and drive the event loop until quit.
///
/// The loop itself stays synchronous; fetches and animation timers run on
/// a background tokio runtime and report back through the event channel.
pub fn run(config: Config) -> anyhow::Result<()> {
    let pool = FallbackPool::builtin().context("embedded fallback quotes failed to parse")?;
    anyhow::ensure!(!pool.is_empty(), "fallback quote pool is empty");
    let selector = FallbackSelector::new(pool);
    let fetcher = QuoteFetcher::new(&config.api).context("failed to build HTTP client")?;
    let sharer = QuoteSharer::new(config.share.command.clone(), config.api.url.clone());

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start background runtime")?;

    let shutdown = ShutdownHandle::new();
    let tick_rate = Duration::from_millis(config.timing.tick_ms);
    let events = EventHandler::new(tick_rate, shutdown.clone());

    let (mut terminal, guard) = setup_terminal().context("failed to set up terminal")?;

    let mut app = App::new(
        &config,
        selector,
        fetcher,
        sharer,
        events.sender(),
        runtime.handle().clone(),
    );
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    info!(url = %config.api.url, "quotd started");
    app.schedule_startup();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::FetchFinished { cycle, outcome }) => {
                app.on_fetch_finished(cycle, outcome)
            }
            Ok(AppEvent::FadeOutElapsed { cycle }) => app.on_fade_out_elapsed(cycle),
            Ok(AppEvent::FadeInElapsed { cycle }) => app.on_fade_in_elapsed(cycle),
            Ok(AppEvent::EntranceReveal) => app.on_entrance_reveal(),
            Ok(AppEvent::EntranceSettle) => app.on_entrance_settle(),
            Ok(AppEvent::InitialFetch) => app.on_initial_fetch(),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    info!("quotd exiting");
    shutdown.signal();
    drop(guard);
    Ok(())
}
