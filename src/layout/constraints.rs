//! Box constraints a parent offers a child during layout

use crate::geometry::Size;

/// Minimum and maximum width/height a child may occupy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Constraints {
    pub min_width: u16,
    pub max_width: u16,
    pub min_height: u16,
    pub max_height: u16,
}

impl Constraints {
    pub const fn new(min_width: u16, max_width: u16, min_height: u16, max_height: u16) -> Self {
        Self {
            min_width,
            max_width,
            min_height,
            max_height,
        }
    }

    /// Anything from zero up to `max`
    pub const fn loose(max: Size) -> Self {
        Self::new(0, max.width, 0, max.height)
    }

    /// Exactly `size`
    pub const fn tight(size: Size) -> Self {
        Self::new(size.width, size.width, size.height, size.height)
    }

    /// No upper bound on either axis
    pub const fn unbounded() -> Self {
        Self::new(0, u16::MAX, 0, u16::MAX)
    }

    pub const fn max_size(&self) -> Size {
        Size::new(self.max_width, self.max_height)
    }

    pub const fn min_size(&self) -> Size {
        Size::new(self.min_width, self.min_height)
    }

    pub const fn has_bounded_width(&self) -> bool {
        self.max_width != u16::MAX
    }

    pub const fn has_bounded_height(&self) -> bool {
        self.max_height != u16::MAX
    }

    /// Clamp `size` into the range, max winning over min when they cross
    pub fn clamp(&self, size: Size) -> Size {
        Size::new(
            size.width.max(self.min_width).min(self.max_width),
            size.height.max(self.min_height).min(self.max_height),
        )
    }

    /// Remove `n` cells from every side; unbounded maxima stay unbounded
    pub fn deflate(&self, n: u16) -> Self {
        let twice = n.saturating_mul(2);
        let shrink = |v: u16| if v == u16::MAX { v } else { v.saturating_sub(twice) };
        Self::new(
            self.min_width.saturating_sub(twice),
            shrink(self.max_width),
            self.min_height.saturating_sub(twice),
            shrink(self.max_height),
        )
    }

    /// Same maxima with the minima dropped to zero
    pub const fn loosen(&self) -> Self {
        Self::new(0, self.max_width, 0, self.max_height)
    }
}

impl Default for Constraints {
    fn default() -> Self {
        Self::unbounded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp() {
        let c = Constraints::new(2, 10, 1, 4);
        assert_eq!(c.clamp(Size::new(20, 0)), Size::new(10, 1));
        assert_eq!(c.clamp(Size::new(5, 3)), Size::new(5, 3));
    }

    #[test]
    fn test_clamp_crossed_range_prefers_max() {
        let c = Constraints::new(8, 4, 0, 10);
        assert_eq!(c.clamp(Size::new(6, 6)).width, 4);
    }

    #[test]
    fn test_tight_and_loose() {
        let size = Size::new(7, 3);
        assert_eq!(Constraints::tight(size).clamp(Size::zero()), size);
        assert_eq!(Constraints::loose(size).clamp(Size::zero()), Size::zero());
    }

    #[test]
    fn test_deflate() {
        let c = Constraints::new(4, 20, 0, 10).deflate(1);
        assert_eq!(c, Constraints::new(2, 18, 0, 8));

        let open = Constraints::unbounded().deflate(3);
        assert!(!open.has_bounded_width());
        assert!(!open.has_bounded_height());
    }
}
