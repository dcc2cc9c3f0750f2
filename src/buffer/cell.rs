//! A single drawable grid cell

use crate::style::Style;

/// One grid cell: a single codepoint plus style and layering metadata
///
/// A wide glyph occupies two cells: the wide cell holding the glyph and a
/// continuation cell to its right holding nothing. The canvas only ever
/// creates or clears the two halves together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    grapheme: [u8; 4],
    len: u8,
    is_wide: bool,
    is_continuation: bool,
    style: Style,
    z_index: u16,
}

impl Cell {
    /// A blank cell: a single space, default style, layer 0
    pub const fn blank() -> Self {
        Self {
            grapheme: [b' ', 0, 0, 0],
            len: 1,
            is_wide: false,
            is_continuation: false,
            style: Style::new(),
            z_index: 0,
        }
    }

    pub(crate) fn glyph(c: char, is_wide: bool, style: Style, z_index: u16) -> Self {
        let mut grapheme = [0u8; 4];
        let len = c.encode_utf8(&mut grapheme).len() as u8;
        Self {
            grapheme,
            len,
            is_wide,
            is_continuation: false,
            style,
            z_index,
        }
    }

    pub(crate) fn continuation(style: Style, z_index: u16) -> Self {
        Self {
            grapheme: [0; 4],
            len: 0,
            is_wide: false,
            is_continuation: true,
            style,
            z_index,
        }
    }

    /// The UTF-8 text of this cell; empty for a continuation cell
    pub fn symbol(&self) -> &str {
        std::str::from_utf8(&self.grapheme[..self.len as usize]).unwrap_or(" ")
    }

    /// Raw UTF-8 bytes of the glyph
    pub fn bytes(&self) -> &[u8] {
        &self.grapheme[..self.len as usize]
    }

    pub fn is_wide(&self) -> bool {
        self.is_wide
    }

    pub fn is_continuation(&self) -> bool {
        self.is_continuation
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn z_index(&self) -> u16 {
        self.z_index
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank()
    }
}
