//! Styling: colors, attribute sets and their combination

mod color;
mod modifier;
mod style;

pub use color::Color;
pub use modifier::Modifier;
pub use style::Style;
