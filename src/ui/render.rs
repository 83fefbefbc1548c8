use crate::ui::app::{App, EntrancePhase};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{card_rect, layout_regions, trigger_rect};
use crate::ui::quote::QuotePhase;
use crate::ui::theme::{
    ACCENT, ACCENT_DEEP, AUTHOR_TEXT, QUOTE_TEXT, QUOTE_TEXT_DIM, QUOTE_TEXT_FAINT, TRIGGER_BUSY,
    TRIGGER_TEXT,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};
use ratatui::Frame;

const PLACEHOLDER: &str = "Click the button below to get inspired!";
const TRIGGER_LABEL: &str = "[ New Quote ]";
const TRIGGER_BUSY_LABEL: &str = "Fetching...";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(), header);
    frame.render_widget(Clear, body);
    draw_card(frame, app, body);
    draw_trigger(frame, app, body);
    frame.render_widget(Footer::new().widget(footer), footer);
}

fn draw_card(frame: &mut Frame<'_>, app: &App, body: Rect) {
    // The card slides in after startup; the trigger is visible from the
    // first frame.
    if app.entrance() == EntrancePhase::Hidden {
        return;
    }

    let mut card = card_rect(body);
    let sliding = app.entrance() == EntrancePhase::Sliding;
    if sliding {
        card = Rect {
            y: card.y.saturating_add(1),
            ..card
        }
        .intersection(body);
    }
    if card.width == 0 || card.height == 0 {
        return;
    }

    let (content_color, author_color) = fade_colors(app);
    let mut content_style = Style::default().fg(content_color).add_modifier(Modifier::ITALIC);
    let mut author_style = Style::default().fg(author_color);
    if sliding {
        content_style = content_style.add_modifier(Modifier::DIM);
        author_style = author_style.add_modifier(Modifier::DIM);
    }

    let mut lines = Vec::new();
    match &app.cycle_state().displayed {
        Some(displayed) => {
            lines.push(Line::styled(displayed.quote.content.clone(), content_style));
            lines.push(Line::from(""));
            lines.push(
                Line::styled(format!("- {}", displayed.quote.author), author_style)
                    .alignment(Alignment::Right),
            );
        }
        None => {
            lines.push(Line::styled(PLACEHOLDER, content_style));
        }
    }

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(ACCENT_DEEP))
                .padding(Padding::new(2, 2, 1, 0)),
        );
    frame.render_widget(widget, card);
}

fn draw_trigger(frame: &mut Frame<'_>, app: &App, body: Rect) {
    let trigger = trigger_rect(body);
    if trigger.width == 0 || trigger.height == 0 {
        return;
    }

    let line = if app.is_busy() {
        Line::from(vec![
            Span::styled(app.spinner_symbol(), Style::default().fg(ACCENT)),
            Span::styled(
                format!(" {TRIGGER_BUSY_LABEL}"),
                Style::default().fg(TRIGGER_BUSY),
            ),
        ])
    } else {
        Line::from(Span::styled(
            TRIGGER_LABEL,
            Style::default().fg(TRIGGER_TEXT).add_modifier(Modifier::BOLD),
        ))
    };
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), trigger);
}

/// Map the current fade leg onto a three-step brightness ramp.
///
/// Full brightness whenever no fade is running; a fade-out walks down the
/// ramp, a fade-in walks back up.
fn fade_colors(app: &App) -> (Color, Color) {
    let progress = app.fade_progress();
    let fading_out = matches!(app.cycle_state().phase, QuotePhase::FadingOut { .. });
    let level = if fading_out { 1.0 - progress } else { progress };

    if level >= 0.66 {
        (QUOTE_TEXT, AUTHOR_TEXT)
    } else if level >= 0.33 {
        (QUOTE_TEXT_DIM, QUOTE_TEXT_DIM)
    } else {
        (QUOTE_TEXT_FAINT, QUOTE_TEXT_FAINT)
    }
}
