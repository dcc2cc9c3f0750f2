//! Input events and the result of offering one to a widget

mod input;

pub use input::{Event, KeyCode, KeyModifiers, KeyPress, MouseAction, MouseButton, MouseInput};

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was consumed and processed
    Consumed,
    /// Event was ignored, should propagate
    Ignored,
}

impl EventResult {
    /// Check if the event was consumed
    pub fn is_consumed(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}
