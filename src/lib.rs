//! inkgrid: a terminal widget toolkit built on crossterm
//!
//! This crate provides:
//! - Geometry primitives (`Rect`, `Point`, `Size`)
//! - A double-buffered cell canvas that emits only what changed
//! - An output sink abstraction over crossterm
//! - Two-phase layout (`layout` then `inscribe`) with a stack container
//! - Borrowed, dynamically dispatched widget composition
//! - A scrollable, hit-testable selection list
//! - TOML configuration, tracing setup and a frame limiter

pub mod buffer;
pub mod config;
pub mod error;
pub mod event;
pub mod geometry;
pub mod layout;
pub mod limiter;
pub mod logging;
pub mod style;
pub mod terminal;
pub mod widget;

// Re-export commonly used types
pub use buffer::{Canvas, Cell};
pub use config::TuiConfig;
pub use error::RenderError;
pub use event::{Event, EventResult};
pub use geometry::{Point, Rect, Size};
pub use layout::{Constraints, Direction, Distribution, Stack};
pub use limiter::FrameLimiter;
pub use style::{Color, Modifier, Style};
pub use terminal::{CrosstermOutput, Output, Recorder};
pub use widget::builtin::{ListItem, SelectionList};
pub use widget::{BorderType, Child, Props, Widget};
