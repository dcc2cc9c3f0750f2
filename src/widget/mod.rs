//! Widget system for building UI components

mod border;
pub mod builtin;
mod child;
mod props;
mod traits;

pub use border::{Border, BorderType};
pub use child::Child;
pub use props::Props;
pub use traits::Widget;
