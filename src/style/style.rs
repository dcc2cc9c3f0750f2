//! Style combining foreground, background, and attributes

use super::{Color, Modifier};
use serde::Deserialize;

/// A complete cell style, compared by full structural equality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Deserialize)]
#[serde(default)]
pub struct Style {
    pub fg: Color,
    pub bg: Color,
    pub modifier: Modifier,
}

impl Style {
    pub const fn new() -> Self {
        Self {
            fg: Color::Reset,
            bg: Color::Reset,
            modifier: Modifier::NONE,
        }
    }

    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = color;
        self
    }

    pub const fn bg(mut self, color: Color) -> Self {
        self.bg = color;
        self
    }

    pub const fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifier = modifier;
        self
    }

    pub const fn bold(mut self) -> Self {
        self.modifier = self.modifier.union(Modifier::BOLD);
        self
    }

    pub const fn italic(mut self) -> Self {
        self.modifier = self.modifier.union(Modifier::ITALIC);
        self
    }

    pub const fn underlined(mut self) -> Self {
        self.modifier = self.modifier.union(Modifier::UNDERLINED);
        self
    }

    pub const fn reversed(mut self) -> Self {
        self.modifier = self.modifier.union(Modifier::REVERSED);
        self
    }

    pub const fn blink(mut self) -> Self {
        self.modifier = self.modifier.union(Modifier::BLINK);
        self
    }

    pub const fn crossed_out(mut self) -> Self {
        self.modifier = self.modifier.union(Modifier::CROSSED_OUT);
        self
    }

    /// Layer `other` on top of `self`; `Reset` colors in `other` keep ours
    pub fn patch(self, other: Style) -> Self {
        Self {
            fg: if other.fg == Color::Reset { self.fg } else { other.fg },
            bg: if other.bg == Color::Reset { self.bg } else { other.bg },
            modifier: self.modifier | other.modifier,
        }
    }
}
