use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x64, 0x6c, 0xff);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const INPUT_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const TRIGGER_DISABLED: Color = Color::Rgb(0x52, 0x52, 0x5b);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const LINK: Color = Color::Rgb(0x38, 0xbd, 0xf8);
