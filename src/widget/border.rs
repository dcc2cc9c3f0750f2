//! Boxed frame drawing with an optional title

use crate::buffer::{truncate, Canvas};
use crate::error::RenderError;
use crate::geometry::Rect;
use crate::style::Style;
use serde::Deserialize;
use tracing::warn;

/// Glyph set of a border
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderType {
    /// No border
    #[default]
    None,
    /// ASCII border (- | +)
    Plain,
    /// Single line border (─ │ ┌ ┐ └ ┘)
    Single,
    /// Rounded corners (─ │ ╭ ╮ ╰ ╯)
    Rounded,
    /// Double line border (═ ║ ╔ ╗ ╚ ╝)
    Double,
    /// Heavy/thick border (━ ┃ ┏ ┓ ┗ ┛)
    Heavy,
}

struct BorderChars {
    horizontal: char,
    vertical: char,
    top_left: char,
    top_right: char,
    bottom_left: char,
    bottom_right: char,
}

impl BorderType {
    pub fn is_none(&self) -> bool {
        matches!(self, BorderType::None)
    }

    /// Cells the border takes on each side
    pub fn thickness(&self) -> u16 {
        if self.is_none() {
            0
        } else {
            1
        }
    }

    fn chars(&self) -> Option<BorderChars> {
        let (horizontal, vertical, [top_left, top_right, bottom_left, bottom_right]) = match self {
            BorderType::None => return None,
            BorderType::Plain => ('-', '|', ['+', '+', '+', '+']),
            BorderType::Single => ('─', '│', ['┌', '┐', '└', '┘']),
            BorderType::Rounded => ('─', '│', ['╭', '╮', '╰', '╯']),
            BorderType::Double => ('═', '║', ['╔', '╗', '╚', '╝']),
            BorderType::Heavy => ('━', '┃', ['┏', '┓', '┗', '┛']),
        };
        Some(BorderChars {
            horizontal,
            vertical,
            top_left,
            top_right,
            bottom_left,
            bottom_right,
        })
    }
}

/// A border ready to be drawn around an area
#[derive(Debug, Clone, Copy, Default)]
pub struct Border<'t> {
    kind: BorderType,
    style: Style,
    title: Option<&'t str>,
    title_style: Style,
    z_index: u16,
}

impl<'t> Border<'t> {
    pub fn new(kind: BorderType) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Title written into the top edge
    pub fn title(mut self, title: &'t str) -> Self {
        self.title = Some(title);
        self
    }

    pub fn title_style(mut self, style: Style) -> Self {
        self.title_style = style;
        self
    }

    pub fn z_index(mut self, z_index: u16) -> Self {
        self.z_index = z_index;
        self
    }

    /// Draw the frame on the outermost cells of `area`
    pub fn draw(&self, canvas: &mut Canvas, area: Rect) -> Result<(), RenderError> {
        let Some(chars) = self.kind.chars() else {
            return Ok(());
        };
        if area.width < 3 || area.height < 3 {
            warn!(width = area.width, height = area.height, "bordered area too small");
            return Err(RenderError::AreaTooSmall {
                width: area.width,
                height: area.height,
            });
        }

        let z = self.z_index;
        let right = area.right() - 1;
        let bottom = area.bottom() - 1;
        let edge: String = std::iter::repeat(chars.horizontal)
            .take(area.width as usize - 2)
            .collect();

        let mut top = String::with_capacity(area.width as usize * 3);
        top.push(chars.top_left);
        top.push_str(&edge);
        top.push(chars.top_right);
        canvas.add_text(area.x, area.y, &top, z, self.style);

        let mut base = String::with_capacity(area.width as usize * 3);
        base.push(chars.bottom_left);
        base.push_str(&edge);
        base.push(chars.bottom_right);
        canvas.add_text(area.x, bottom, &base, z, self.style);

        let vertical = chars.vertical.to_string();
        for y in area.y.saturating_add(1)..bottom {
            canvas.add_text(area.x, y, &vertical, z, self.style);
            canvas.add_text(right, y, &vertical, z, self.style);
        }

        if let Some(title) = self.title {
            // Two cells of edge on each side of the title
            let shown = truncate(title, area.width.saturating_sub(4));
            canvas.add_text(area.x.saturating_add(2), area.y, &shown, z, self.title_style);
        }
        Ok(())
    }
}
