//! Crossterm translation of the output stream

use super::Output;
use crate::style::Color;
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::ScrollUp,
};
use std::io::{self, Stdout, Write};

/// Output sink that queues crossterm commands onto a writer
///
/// Nothing reaches the terminal until [`Output::flush`] is called, so a
/// whole frame goes out in one write.
pub struct CrosstermOutput<W: Write> {
    writer: W,
}

impl CrosstermOutput<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> CrosstermOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Output for CrosstermOutput<W> {
    fn move_to(&mut self, x: u16, y: u16) -> io::Result<()> {
        queue!(self.writer, MoveTo(x, y))
    }

    fn set_attribute(&mut self, attribute: Attribute) -> io::Result<()> {
        queue!(self.writer, SetAttribute(attribute))
    }

    fn set_foreground(&mut self, color: Color) -> io::Result<()> {
        queue!(self.writer, SetForegroundColor(color.into()))
    }

    fn set_background(&mut self, color: Color) -> io::Result<()> {
        queue!(self.writer, SetBackgroundColor(color.into()))
    }

    fn scroll_up(&mut self, rows: u16) -> io::Result<()> {
        queue!(self.writer, ScrollUp(rows))
    }

    fn print(&mut self, text: &str) -> io::Result<()> {
        queue!(self.writer, Print(text))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
