//! Terminal colors

use crossterm::style::Color as CrosstermColor;
use serde::Deserialize;
use std::str::FromStr;

/// Terminal color: the terminal default, a palette index, or explicit RGB
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Color {
    /// Terminal default color
    #[default]
    Reset,
    /// ANSI 256-color palette index
    Indexed(u8),
    /// 24-bit color
    Rgb(u8, u8, u8),
}

impl Color {
    pub const BLACK: Self = Self::Indexed(0);
    pub const RED: Self = Self::Indexed(1);
    pub const GREEN: Self = Self::Indexed(2);
    pub const YELLOW: Self = Self::Indexed(3);
    pub const BLUE: Self = Self::Indexed(4);
    pub const MAGENTA: Self = Self::Indexed(5);
    pub const CYAN: Self = Self::Indexed(6);
    pub const WHITE: Self = Self::Indexed(7);
    pub const GREY: Self = Self::Indexed(8);

    const NAMES: [(&'static str, Color); 9] = [
        ("black", Self::BLACK),
        ("red", Self::RED),
        ("green", Self::GREEN),
        ("yellow", Self::YELLOW),
        ("blue", Self::BLUE),
        ("magenta", Self::MAGENTA),
        ("cyan", Self::CYAN),
        ("white", Self::WHITE),
        ("grey", Self::GREY),
    ];

    /// Parse a hex color string (e.g., "#ff0000" or "ff0000")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self::Rgb(r, g, b))
    }
}

/// A color name that is neither a known name, a palette index nor a hex triple
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown color '{0}'")]
pub struct UnknownColor(pub String);

impl FromStr for Color {
    type Err = UnknownColor;

    /// Accepts `reset`/`default`, an ANSI name, a palette index or `#rrggbb`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        if lower == "reset" || lower == "default" {
            return Ok(Self::Reset);
        }
        if let Some((_, color)) = Self::NAMES.iter().find(|(name, _)| *name == lower) {
            return Ok(*color);
        }
        if let Ok(index) = lower.parse::<u8>() {
            return Ok(Self::Indexed(index));
        }
        if lower.starts_with('#') {
            if let Some(color) = Self::from_hex(&lower) {
                return Ok(color);
            }
        }
        Err(UnknownColor(s.to_string()))
    }
}

impl TryFrom<String> for Color {
    type Error = UnknownColor;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for CrosstermColor {
    fn from(color: Color) -> Self {
        match color {
            Color::Reset => CrosstermColor::Reset,
            Color::Indexed(i) => CrosstermColor::AnsiValue(i),
            Color::Rgb(r, g, b) => CrosstermColor::Rgb { r, g, b },
        }
    }
}
