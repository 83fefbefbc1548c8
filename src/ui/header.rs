use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let title_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let tagline_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let line = Line::from(vec![
            Span::styled("  ✨ ", title_style),
            Span::styled("Inspirational Quotes", title_style),
            Span::styled("  │  ", separator_style),
            Span::styled("random wisdom, on demand", tagline_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
