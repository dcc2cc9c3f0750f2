//! Width and height of a widget footprint

/// A footprint in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub const fn zero() -> Self {
        Self::new(0, 0)
    }

    /// Check if the size covers no cells
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Number of cells covered
    pub const fn area(&self) -> u32 {
        self.width as u32 * self.height as u32
    }

    /// Grow both dimensions by `n` on every side
    pub const fn expand(self, n: u16) -> Self {
        let twice = n.saturating_mul(2);
        Self::new(self.width.saturating_add(twice), self.height.saturating_add(twice))
    }

    /// Shrink both dimensions by `n` on every side
    pub const fn shrink(self, n: u16) -> Self {
        let twice = n.saturating_mul(2);
        Self::new(self.width.saturating_sub(twice), self.height.saturating_sub(twice))
    }
}

impl From<(u16, u16)> for Size {
    fn from((width, height): (u16, u16)) -> Self {
        Self { width, height }
    }
}
