use crate::ui::app::App;
use crate::ui::layout::{card_rect, layout_regions, trigger_rect};
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            app.request_quit();
        }
        // Activation is gated inside request_fetch; a busy cycle swallows it.
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.request_fetch();
        }
        KeyCode::Char('s') | KeyCode::Char('S') => {
            app.request_share();
        }
        _ => {}
    }
}

/// Left clicks on the trigger start a fetch; a double-click on the card
/// shares the displayed quote. Everything else is ignored.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
        return;
    }
    let Some((cols, rows)) = app.size() else {
        return;
    };

    let (_, body, _) = layout_regions(Rect::new(0, 0, cols, rows));
    let position = Position::new(mouse.column, mouse.row);

    if trigger_rect(body).contains(position) {
        app.request_fetch();
    } else if card_rect(body).contains(position) && app.note_card_click() {
        app.request_share();
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
