//! Layout direction

use super::Constraints;
use crate::geometry::{Point, Size};

/// Main axis of a container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Direction {
    /// Top to bottom
    #[default]
    Vertical,
    /// Left to right
    Horizontal,
}

impl Direction {
    /// Check if horizontal
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Horizontal)
    }

    /// Check if vertical
    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Vertical)
    }

    /// Extent of `size` along the main axis
    pub fn main(&self, size: Size) -> u16 {
        match self {
            Direction::Vertical => size.height,
            Direction::Horizontal => size.width,
        }
    }

    /// Extent of `size` across the main axis
    pub fn cross(&self, size: Size) -> u16 {
        match self {
            Direction::Vertical => size.width,
            Direction::Horizontal => size.height,
        }
    }

    /// Build a size from main and cross extents
    pub fn size(&self, main: u16, cross: u16) -> Size {
        match self {
            Direction::Vertical => Size::new(cross, main),
            Direction::Horizontal => Size::new(main, cross),
        }
    }

    /// Build a point from main and cross offsets
    pub fn point(&self, main: u16, cross: u16) -> Point {
        match self {
            Direction::Vertical => Point::new(cross, main),
            Direction::Horizontal => Point::new(main, cross),
        }
    }

    /// Upper bound along the main axis
    pub fn max_main(&self, constraints: &Constraints) -> u16 {
        self.main(constraints.max_size())
    }

    /// Pin the main axis of `constraints` to exactly `main`
    pub fn tighten_main(&self, constraints: Constraints, main: u16) -> Constraints {
        match self {
            Direction::Vertical => Constraints {
                min_height: main,
                max_height: main,
                ..constraints
            },
            Direction::Horizontal => Constraints {
                min_width: main,
                max_width: main,
                ..constraints
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_substitution() {
        let s = Size::new(10, 3);
        assert_eq!(Direction::Vertical.main(s), 3);
        assert_eq!(Direction::Vertical.cross(s), 10);
        assert_eq!(Direction::Horizontal.main(s), 10);
        assert_eq!(Direction::Horizontal.cross(s), 3);
    }

    #[test]
    fn test_size_and_point_round_trip() {
        for dir in [Direction::Vertical, Direction::Horizontal] {
            let s = dir.size(4, 9);
            assert_eq!((dir.main(s), dir.cross(s)), (4, 9));
        }
        assert_eq!(Direction::Vertical.point(5, 1), Point::new(1, 5));
        assert_eq!(Direction::Horizontal.point(5, 1), Point::new(5, 1));
    }

    #[test]
    fn test_tighten_main_keeps_cross() {
        let c = Constraints::new(0, 10, 0, 40);
        assert_eq!(Direction::Vertical.tighten_main(c, 7), Constraints::new(0, 10, 7, 7));
        assert_eq!(Direction::Horizontal.tighten_main(c, 7), Constraints::new(7, 7, 0, 40));
    }
}
