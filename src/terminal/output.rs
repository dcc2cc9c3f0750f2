//! Output operation sink

use crate::style::Color;
use crossterm::style::Attribute;
use std::io;

/// Receiver of the cursor, style, scroll and text operations of a frame,
/// in emission order
pub trait Output {
    /// Move the cursor to an absolute zero-based screen position
    fn move_to(&mut self, x: u16, y: u16) -> io::Result<()>;

    /// Switch a single text attribute on or off
    fn set_attribute(&mut self, attribute: Attribute) -> io::Result<()>;

    fn set_foreground(&mut self, color: Color) -> io::Result<()>;

    fn set_background(&mut self, color: Color) -> io::Result<()>;

    /// Scroll the whole terminal up by `rows`
    fn scroll_up(&mut self, rows: u16) -> io::Result<()>;

    /// Print literal text at the cursor
    fn print(&mut self, text: &str) -> io::Result<()>;

    /// Push queued operations to the terminal
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// One operation of the output stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputOp {
    MoveTo(u16, u16),
    SetAttribute(Attribute),
    SetForeground(Color),
    SetBackground(Color),
    ScrollUp(u16),
    Print(String),
}

impl OutputOp {
    /// Check if this operation changes the active style
    pub fn is_style_change(&self) -> bool {
        matches!(
            self,
            OutputOp::SetAttribute(_) | OutputOp::SetForeground(_) | OutputOp::SetBackground(_)
        )
    }
}

/// Output sink that records every operation
#[derive(Debug, Default, Clone)]
pub struct Recorder {
    ops: Vec<OutputOp>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[OutputOp] {
        &self.ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Take the recorded operations, leaving the recorder empty
    pub fn take(&mut self) -> Vec<OutputOp> {
        std::mem::take(&mut self.ops)
    }

    /// Concatenation of all printed text
    pub fn printed(&self) -> String {
        self.ops
            .iter()
            .filter_map(|op| match op {
                OutputOp::Print(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Number of style-change operations recorded
    pub fn style_changes(&self) -> usize {
        self.ops.iter().filter(|op| op.is_style_change()).count()
    }
}

impl Output for Recorder {
    fn move_to(&mut self, x: u16, y: u16) -> io::Result<()> {
        self.ops.push(OutputOp::MoveTo(x, y));
        Ok(())
    }

    fn set_attribute(&mut self, attribute: Attribute) -> io::Result<()> {
        self.ops.push(OutputOp::SetAttribute(attribute));
        Ok(())
    }

    fn set_foreground(&mut self, color: Color) -> io::Result<()> {
        self.ops.push(OutputOp::SetForeground(color));
        Ok(())
    }

    fn set_background(&mut self, color: Color) -> io::Result<()> {
        self.ops.push(OutputOp::SetBackground(color));
        Ok(())
    }

    fn scroll_up(&mut self, rows: u16) -> io::Result<()> {
        self.ops.push(OutputOp::ScrollUp(rows));
        Ok(())
    }

    fn print(&mut self, text: &str) -> io::Result<()> {
        self.ops.push(OutputOp::Print(text.to_string()));
        Ok(())
    }
}
