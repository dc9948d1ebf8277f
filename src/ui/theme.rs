use ratatui::style::Color;

pub const STEEL_BLUE: Color = Color::Rgb(0x46, 0x82, 0xb4);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const FOCUS_BORDER: Color = Color::Rgb(0x5e, 0xa4, 0xd8);
pub const BODY_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_PENDING: Color = Color::Rgb(0xea, 0xb3, 0x08);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const SELECTED_ROW: Color = Color::Rgb(0x1e, 0x3a, 0x5f);
pub const CURSOR_ROW: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const HEADER_TEXT: Color = Color::Rgb(0xd4, 0xd4, 0xd4);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x52, 0x52, 0x52);
