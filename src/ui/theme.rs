use ratatui::style::Color;

// Violet accent palette (#667eea into #764ba2), kept dark-terminal friendly.
pub const ACCENT: Color = Color::Rgb(0x66, 0x7e, 0xea);
pub const ACCENT_DEEP: Color = Color::Rgb(0x76, 0x4b, 0xa2);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const QUOTE_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const QUOTE_TEXT_DIM: Color = Color::Rgb(0x8a, 0x8a, 0x8a);
pub const QUOTE_TEXT_FAINT: Color = Color::Rgb(0x45, 0x45, 0x45);
pub const AUTHOR_TEXT: Color = Color::Rgb(0xa7, 0x8b, 0xfa);
pub const TRIGGER_TEXT: Color = Color::Rgb(0x66, 0x7e, 0xea);
pub const TRIGGER_BUSY: Color = Color::Rgb(0x6b, 0x72, 0x80);
