//! Layout negotiation and the stack container

mod constraints;
mod direction;
mod stack;

pub use constraints::Constraints;
pub use direction::Direction;
pub use stack::{Distribution, Stack};
