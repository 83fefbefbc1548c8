use ratatui::layout::{Constraint, Layout, Rect};

const CARD_MAX_WIDTH: u16 = 64;
const CARD_HEIGHT: u16 = 9;

/// Width of the clickable trigger row. Fixed so the hit area does not move
/// when the label swaps between "New Quote" and "Fetching...".
pub const TRIGGER_WIDTH: u16 = 20;

/// Split the full terminal area into header, body, footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(3),
    ])
    .areas(area);
    (header, body, footer)
}

/// Centered quote card, leaving room below for the trigger row.
pub fn card_rect(body: Rect) -> Rect {
    let width = body
        .width
        .saturating_sub(6)
        .min(CARD_MAX_WIDTH)
        .max(1)
        .min(body.width);
    let height = CARD_HEIGHT.min(body.height).max(1).min(body.height);

    let x = body.x + (body.width - width) / 2;
    // Bias upward so the card plus trigger sit centered as a group.
    let free = body.height.saturating_sub(height.saturating_add(2));
    let y = body.y + free / 2;
    Rect::new(x, y, width, height)
}

/// Trigger row one line below the card. Collapses to an empty rect when the
/// terminal is too short, which disables both drawing and hit-testing.
pub fn trigger_rect(body: Rect) -> Rect {
    let card = card_rect(body);
    let width = TRIGGER_WIDTH.min(body.width);
    let x = body.x + (body.width.saturating_sub(width)) / 2;
    let y = card.y.saturating_add(card.height).saturating_add(1);
    Rect::new(x, y, width, 1).intersection(body)
}
