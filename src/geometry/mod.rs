//! Geometry primitives shared by the canvas, layout and widgets

mod point;
mod rect;
mod size;

pub use point::Point;
pub use rect::Rect;
pub use size::Size;
