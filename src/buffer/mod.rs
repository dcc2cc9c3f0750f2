//! Cell grid and the double-buffered canvas

mod canvas;
mod cell;
mod width;

pub use canvas::Canvas;
pub use cell::Cell;
pub use width::{glyph_width, text_width, truncate};
