//! Rendering tests over a test backend.
//!
//! The cycle tests assert on controller state; these assert on the
//! characters that actually land in the frame: the quote text, the
//! `- {author}` line, and the trigger's two mutually exclusive labels.

mod common;

use quotd::fetch::QuoteFetcher;
use quotd::share::QuoteSharer;
use quotd::ui::app::App;
use quotd::ui::events::AppEvent;
use quotd::ui::render::draw;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::sync::mpsc::{self, Receiver};
use tokio::runtime::Handle;

fn make_app() -> (App, Receiver<AppEvent>) {
    let (tx, rx) = mpsc::channel();
    // Unroutable loopback port; these tests resolve fetches by hand.
    let config = common::config_for_endpoint("http://127.0.0.1:9/random");
    let fetcher = QuoteFetcher::new(&config.api).unwrap();
    let sharer = QuoteSharer::new(None, config.api.url.clone());
    let app = App::new(
        &config,
        common::seeded_selector(3),
        fetcher,
        sharer,
        tx,
        Handle::current(),
    );
    (app, rx)
}

fn settle(app: &mut App) {
    app.on_entrance_reveal();
    app.on_entrance_settle();
}

/// Draw one frame into a test backend and return the buffer as text.
fn render_to_string(app: &App) -> String {
    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    let buf = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            text.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
        }
        text.push('\n');
    }
    text
}

/// A completed cycle puts the quote, its prefixed author line, and the idle
/// trigger label on screen.
#[tokio::test]
async fn completed_cycle_renders_author_prefix_and_idle_trigger() {
    let (mut app, _rx) = make_app();
    settle(&mut app);

    app.request_fetch();
    app.on_fetch_finished(1, Ok(common::quote("Stay curious.", "Someone")));
    app.on_fade_out_elapsed(1);
    app.on_fade_in_elapsed(1);

    let screen = render_to_string(&app);
    assert!(screen.contains("Stay curious."), "quote content on screen");
    assert!(screen.contains("- Someone"), "author line carries its prefix");
    assert!(screen.contains("[ New Quote ]"), "idle trigger label");
    assert!(!screen.contains("Fetching..."), "busy label absent when idle");
}

/// While a fetch runs the trigger swaps to the busy label; the idle label
/// must not be drawn at the same time.
#[tokio::test]
async fn busy_cycle_renders_spinner_label_in_place_of_trigger() {
    let (mut app, _rx) = make_app();
    settle(&mut app);
    app.request_fetch();

    let screen = render_to_string(&app);
    assert!(screen.contains("Fetching..."), "busy label while the fetch runs");
    assert!(!screen.contains("[ New Quote ]"), "idle label hidden while busy");
}

/// Before the first quote arrives the card shows the placeholder line.
#[tokio::test]
async fn settled_card_without_quote_shows_placeholder() {
    let (mut app, _rx) = make_app();
    settle(&mut app);

    let screen = render_to_string(&app);
    assert!(screen.contains("Click the button below to get inspired!"));
}

/// The card stays hidden until the entrance reveal; the trigger draws from
/// the very first frame.
#[tokio::test]
async fn card_is_hidden_before_the_entrance_reveal() {
    let (app, _rx) = make_app();

    let screen = render_to_string(&app);
    assert!(!screen.contains("Click the button below"));
    assert!(screen.contains("[ New Quote ]"));
}
