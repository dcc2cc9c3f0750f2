//! Text attribute set (bold, italic, underline, etc.)

use crossterm::style::Attribute;
use serde::Deserialize;
use std::ops::{BitOr, BitOrAssign};

/// Independent text attributes as a bitfield
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Deserialize)]
#[serde(try_from = "Vec<String>")]
pub struct Modifier(u8);

impl Modifier {
    /// No attributes
    pub const NONE: Self = Self(0);
    /// Bold text
    pub const BOLD: Self = Self(1 << 0);
    /// Italic text
    pub const ITALIC: Self = Self(1 << 1);
    /// Underlined text
    pub const UNDERLINED: Self = Self(1 << 2);
    /// Reversed (swap fg/bg)
    pub const REVERSED: Self = Self(1 << 3);
    /// Slow blink
    pub const BLINK: Self = Self(1 << 4);
    /// Strikethrough
    pub const CROSSED_OUT: Self = Self(1 << 5);

    /// Every attribute with the crossterm codes that switch it on and off.
    /// Restyling walks this table so each attribute toggles independently.
    pub const TOGGLES: [(Modifier, Attribute, Attribute); 6] = [
        (Self::BOLD, Attribute::Bold, Attribute::NormalIntensity),
        (Self::ITALIC, Attribute::Italic, Attribute::NoItalic),
        (Self::UNDERLINED, Attribute::Underlined, Attribute::NoUnderline),
        (Self::REVERSED, Attribute::Reverse, Attribute::NoReverse),
        (Self::BLINK, Attribute::SlowBlink, Attribute::NoBlink),
        (Self::CROSSED_OUT, Attribute::CrossedOut, Attribute::NotCrossedOut),
    ];

    const NAMES: [(&'static str, Modifier); 6] = [
        ("bold", Self::BOLD),
        ("italic", Self::ITALIC),
        ("underlined", Self::UNDERLINED),
        ("reversed", Self::REVERSED),
        ("blink", Self::BLINK),
        ("crossed_out", Self::CROSSED_OUT),
    ];

    /// Create an empty attribute set
    pub const fn empty() -> Self {
        Self::NONE
    }

    /// Check if no attributes are set
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Check if every attribute in `other` is set
    pub const fn contains(&self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Create union of attributes
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Attributes set in exactly one of the two sets
    pub const fn symmetric_difference(self, other: Self) -> Self {
        Self(self.0 ^ other.0)
    }

    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }

    /// Crossterm attributes that turn `self` into `next`, one per changed attribute
    pub fn transition(self, next: Self) -> impl Iterator<Item = Attribute> {
        let changed = self.symmetric_difference(next);
        Self::TOGGLES
            .into_iter()
            .filter(move |(flag, _, _)| changed.contains(*flag))
            .map(move |(flag, on, off)| if next.contains(flag) { on } else { off })
    }
}

impl BitOr for Modifier {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl BitOrAssign for Modifier {
    fn bitor_assign(&mut self, rhs: Self) {
        self.insert(rhs);
    }
}

impl TryFrom<Vec<String>> for Modifier {
    type Error = String;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        names.iter().try_fold(Self::NONE, |acc, name| {
            let lower = name.to_ascii_lowercase();
            Self::NAMES
                .iter()
                .find(|(known, _)| *known == lower)
                .map(|(_, flag)| acc | *flag)
                .ok_or_else(|| format!("unknown text attribute '{name}'"))
        })
    }
}
