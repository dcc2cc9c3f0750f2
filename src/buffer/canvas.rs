//! Double-buffered cell grid with diff rendering
//!
//! Widgets paint into the active buffer during a frame. [`Canvas::engrave`]
//! then compares it cell by cell against the previous frame and emits only
//! what changed, restyling relative to the last style it emitted. After
//! the pass the buffers swap and the new active buffer starts blank.

use super::width::glyph_width;
use super::Cell;
use crate::error::RenderError;
use crate::geometry::Rect;
use crate::style::Style;
use crate::terminal::Output;
use tracing::{debug, trace};

/// Double-buffered grid sized to the terminal
#[derive(Debug, Clone)]
pub struct Canvas {
    buffers: [Vec<Cell>; 2],
    active: usize,
    width: u16,
    height: u16,
    /// Screen row of canvas row 0; zero when the canvas owns the screen
    scroll_offset: u16,
    fullscreen: bool,
    /// Tallest row touched this frame, plus one
    render_height: u16,
    force_redraw: bool,
}

fn allocate(width: u16, height: u16) -> Result<Vec<Cell>, RenderError> {
    let len = width as usize * height as usize;
    let mut cells = Vec::new();
    cells
        .try_reserve_exact(len)
        .map_err(|_| RenderError::Allocation { width, height })?;
    cells.resize(len, Cell::blank());
    Ok(cells)
}

impl Canvas {
    /// Canvas that owns the whole screen
    pub fn fullscreen(width: u16, height: u16) -> Result<Self, RenderError> {
        Self::build(width, height, 0, true)
    }

    /// Canvas rendered below the shell prompt, starting at `cursor_row`
    pub fn inline(width: u16, height: u16, cursor_row: u16) -> Result<Self, RenderError> {
        Self::build(width, height, cursor_row.min(height.saturating_sub(1)), false)
    }

    fn build(
        width: u16,
        height: u16,
        scroll_offset: u16,
        fullscreen: bool,
    ) -> Result<Self, RenderError> {
        let buffers = [allocate(width, height)?, allocate(width, height)?];
        debug!(width, height, scroll_offset, fullscreen, "canvas created");
        Ok(Self {
            buffers,
            active: 0,
            width,
            height,
            scroll_offset,
            fullscreen,
            render_height: 0,
            force_redraw: false,
        })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn area(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn scroll_offset(&self) -> u16 {
        self.scroll_offset
    }

    /// Rows of content drawn so far this frame
    pub fn render_height(&self) -> u16 {
        self.render_height
    }

    /// Cell of the frame being drawn
    pub fn cell(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.buffers[self.active][i])
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Reallocate both buffers for a new terminal size
    ///
    /// The next engrave repaints every cell.
    pub fn resize(&mut self, width: u16, height: u16) -> Result<(), RenderError> {
        self.buffers = [allocate(width, height)?, allocate(width, height)?];
        self.active = 0;
        self.width = width;
        self.height = height;
        self.scroll_offset = self.scroll_offset.min(height.saturating_sub(1));
        self.render_height = 0;
        self.force_redraw = true;
        debug!(width, height, "canvas resized");
        Ok(())
    }

    /// Treat every cell as changed on the next engrave
    pub fn invalidate(&mut self) {
        self.force_redraw = true;
    }

    /// Write a run of text starting at (x, y)
    ///
    /// Stops at the right edge, and before a wide glyph whose continuation
    /// would not fit. A cell is only replaced when `z_index` is at least
    /// its current layer, so equal layers resolve to the last write.
    pub fn add_text(&mut self, x: u16, y: u16, text: &str, z_index: u16, style: Style) {
        if y >= self.height || x >= self.width || text.is_empty() {
            return;
        }
        self.render_height = self.render_height.max(y + 1);

        let mut x = x;
        for c in text.chars() {
            if x >= self.width {
                break;
            }
            let wide = glyph_width(c) == 2;
            if wide && x + 1 >= self.width {
                break;
            }
            self.put(x, y, c, wide, z_index, style);
            x += if wide { 2 } else { 1 };
        }
    }

    /// Paint spaces over `area`, clipped to the grid
    pub fn fill(&mut self, area: Rect, z_index: u16, style: Style) {
        let area = area.intersect(&self.area());
        if area.is_empty() {
            return;
        }
        let blank = " ".repeat(area.width as usize);
        for y in area.y..area.bottom() {
            self.add_text(area.x, y, &blank, z_index, style);
        }
    }

    fn put(&mut self, x: u16, y: u16, c: char, wide: bool, z_index: u16, style: Style) {
        let Some(idx) = self.index(x, y) else {
            return;
        };
        let span = if wide { 2 } else { 1 };
        let cells = &self.buffers[self.active];
        if cells[idx..idx + span].iter().any(|cell| z_index < cell.z_index()) {
            return;
        }

        for offset in 0..span {
            self.unpair(x + offset as u16, idx + offset);
        }

        let cells = &mut self.buffers[self.active];
        cells[idx] = Cell::glyph(c, wide, style, z_index);
        if wide {
            cells[idx + 1] = Cell::continuation(style, z_index);
        }
    }

    /// Clear the other half of a wide pair before `idx` is overwritten
    fn unpair(&mut self, x: u16, idx: usize) {
        let width = self.width;
        let cells = &mut self.buffers[self.active];
        let cell = cells[idx];
        if cell.is_continuation() && x > 0 {
            cells[idx - 1] = Cell::blank();
        }
        if cell.is_wide() && x + 1 < width {
            cells[idx + 1] = Cell::blank();
        }
    }

    /// Diff the frame against the previous one and emit the changes
    ///
    /// Swaps buffers afterwards and clears the new active buffer.
    pub fn engrave<O: Output + ?Sized>(&mut self, out: &mut O) -> Result<(), RenderError> {
        let mut emitted = 0usize;

        if !self.fullscreen {
            let bottom = self.render_height as u32 + self.scroll_offset as u32;
            if bottom > self.height as u32 {
                let overflow = (bottom - self.height as u32) as u16;
                out.scroll_up(overflow)?;
                self.scroll_offset = self.scroll_offset.saturating_sub(overflow);
                emitted += 1;
                debug!(overflow, scroll_offset = self.scroll_offset, "terminal scrolled");
            }
        }

        let current = &self.buffers[self.active];
        let previous = &self.buffers[1 - self.active];
        let rows = self.height.max(self.render_height);
        let mut pen = Style::default();
        let mut cursor: Option<(u16, u16)> = None;

        for y in 0..rows {
            let screen_y = self.scroll_offset as u32 + y as u32;
            if y >= self.height || screen_y >= self.height as u32 {
                break;
            }
            let screen_y = screen_y as u16;
            for x in 0..self.width {
                let idx = y as usize * self.width as usize + x as usize;
                let cell = &current[idx];
                if cell.is_continuation() || (!self.force_redraw && *cell == previous[idx]) {
                    continue;
                }

                if cursor != Some((x, screen_y)) {
                    out.move_to(x, screen_y)?;
                }
                restyle(out, &mut pen, cell.style())?;
                out.print(cell.symbol())?;
                cursor = Some((x + if cell.is_wide() { 2 } else { 1 }, screen_y));
                emitted += 1;
            }
        }

        if emitted > 0 {
            restyle(out, &mut pen, Style::default())?;
            let park = (self.scroll_offset + self.render_height).min(self.height.saturating_sub(1));
            out.move_to(0, park)?;
        }
        trace!(emitted, render_height = self.render_height, "frame engraved");

        self.active = 1 - self.active;
        self.buffers[self.active].fill(Cell::blank());
        self.render_height = 0;
        self.force_redraw = false;
        Ok(())
    }
}

/// Emit the attribute and color changes from `pen` to `next`
fn restyle<O: Output + ?Sized>(out: &mut O, pen: &mut Style, next: Style) -> Result<(), RenderError> {
    for attribute in pen.modifier.transition(next.modifier) {
        out.set_attribute(attribute)?;
    }
    if pen.bg != next.bg {
        out.set_background(next.bg)?;
    }
    if pen.fg != next.fg {
        out.set_foreground(next.fg)?;
    }
    *pen = next;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;
    use crate::terminal::{OutputOp, Recorder};
    use crossterm::style::Attribute;

    fn row(canvas: &Canvas, y: u16) -> String {
        (0..canvas.width())
            .filter_map(|x| canvas.cell(x, y))
            .map(|c| c.symbol())
            .collect()
    }

    fn assert_pairs(canvas: &Canvas) {
        for y in 0..canvas.height() {
            for x in 0..canvas.width() {
                let cell = canvas.cell(x, y).unwrap();
                if cell.is_continuation() {
                    assert!(x > 0 && canvas.cell(x - 1, y).unwrap().is_wide());
                }
                if cell.is_wide() {
                    assert!(canvas.cell(x + 1, y).unwrap().is_continuation());
                }
            }
        }
    }

    #[test]
    fn test_add_text_writes_cells() {
        let mut canvas = Canvas::fullscreen(10, 2).unwrap();
        canvas.add_text(1, 1, "abc", 0, Style::default());
        assert_eq!(row(&canvas, 1), " abc      ");
        assert_eq!(canvas.render_height(), 2);
    }

    #[test]
    fn test_add_text_clips_at_edges() {
        let mut canvas = Canvas::fullscreen(4, 1).unwrap();
        canvas.add_text(2, 0, "xyz", 0, Style::default());
        canvas.add_text(0, 5, "nope", 0, Style::default());
        assert_eq!(row(&canvas, 0), "  xy");
        assert_eq!(canvas.render_height(), 1);
    }

    #[test]
    fn test_wide_glyph_sets_continuation() {
        let mut canvas = Canvas::fullscreen(6, 1).unwrap();
        canvas.add_text(0, 0, "中a", 0, Style::default());
        assert!(canvas.cell(0, 0).unwrap().is_wide());
        assert!(canvas.cell(1, 0).unwrap().is_continuation());
        assert_eq!(canvas.cell(2, 0).unwrap().symbol(), "a");
        assert_pairs(&canvas);
    }

    #[test]
    fn test_wide_glyph_at_last_column_is_dropped() {
        let mut canvas = Canvas::fullscreen(3, 1).unwrap();
        canvas.add_text(2, 0, "中", 0, Style::default());
        assert_eq!(*canvas.cell(2, 0).unwrap(), Cell::blank());
    }

    #[test]
    fn test_overwrite_continuation_clears_wide() {
        let mut canvas = Canvas::fullscreen(4, 1).unwrap();
        canvas.add_text(0, 0, "中", 0, Style::default());
        canvas.add_text(1, 0, "x", 0, Style::default());
        assert_eq!(*canvas.cell(0, 0).unwrap(), Cell::blank());
        assert_eq!(canvas.cell(1, 0).unwrap().symbol(), "x");
        assert_pairs(&canvas);
    }

    #[test]
    fn test_overwrite_wide_clears_continuation() {
        let mut canvas = Canvas::fullscreen(4, 1).unwrap();
        canvas.add_text(1, 0, "中", 0, Style::default());
        canvas.add_text(1, 0, "y", 0, Style::default());
        assert_eq!(canvas.cell(1, 0).unwrap().symbol(), "y");
        assert_eq!(*canvas.cell(2, 0).unwrap(), Cell::blank());
        assert_pairs(&canvas);
    }

    #[test]
    fn test_wide_over_misaligned_wide() {
        let mut canvas = Canvas::fullscreen(6, 1).unwrap();
        canvas.add_text(0, 0, "中文", 0, Style::default());
        canvas.add_text(1, 0, "字", 0, Style::default());
        assert_eq!(*canvas.cell(0, 0).unwrap(), Cell::blank());
        assert_eq!(canvas.cell(1, 0).unwrap().symbol(), "字");
        assert!(canvas.cell(2, 0).unwrap().is_continuation());
        assert_eq!(*canvas.cell(3, 0).unwrap(), Cell::blank());
        assert_pairs(&canvas);
    }

    #[test]
    fn test_lower_layer_does_not_clobber() {
        let mut canvas = Canvas::fullscreen(4, 1).unwrap();
        canvas.add_text(0, 0, "hi", 2, Style::default());
        canvas.add_text(0, 0, "lo", 1, Style::default());
        assert_eq!(row(&canvas, 0), "hi  ");

        canvas.add_text(0, 0, "eq", 2, Style::default());
        assert_eq!(row(&canvas, 0), "eq  ");
    }

    #[test]
    fn test_wide_blocked_by_higher_layer_on_its_continuation() {
        let mut canvas = Canvas::fullscreen(4, 1).unwrap();
        canvas.add_text(1, 0, "!", 5, Style::default());
        canvas.add_text(0, 0, "中", 1, Style::default());
        assert_eq!(row(&canvas, 0), " !  ");
        assert_pairs(&canvas);
    }

    #[test]
    fn test_engrave_emits_changes_then_swaps() {
        let mut canvas = Canvas::fullscreen(5, 2).unwrap();
        canvas.add_text(1, 0, "ab", 0, Style::default());

        let mut rec = Recorder::new();
        canvas.engrave(&mut rec).unwrap();
        assert_eq!(
            rec.ops(),
            &[
                OutputOp::MoveTo(1, 0),
                OutputOp::Print("a".into()),
                OutputOp::Print("b".into()),
                OutputOp::MoveTo(0, 1),
            ]
        );
        assert_eq!(canvas.render_height(), 0);
        assert_eq!(*canvas.cell(1, 0).unwrap(), Cell::blank());
    }

    #[test]
    fn test_engrave_identical_frames_emit_nothing() {
        let mut canvas = Canvas::fullscreen(5, 2).unwrap();
        let mut rec = Recorder::new();
        canvas.add_text(0, 0, "same", 0, Style::new().bold());
        canvas.engrave(&mut rec).unwrap();
        rec.take();

        canvas.add_text(0, 0, "same", 0, Style::new().bold());
        canvas.engrave(&mut rec).unwrap();
        assert!(rec.is_empty());
    }

    #[test]
    fn test_engrave_erases_removed_content() {
        let mut canvas = Canvas::fullscreen(3, 1).unwrap();
        let mut rec = Recorder::new();
        canvas.add_text(0, 0, "x", 0, Style::default());
        canvas.engrave(&mut rec).unwrap();
        rec.take();

        canvas.engrave(&mut rec).unwrap();
        assert_eq!(rec.printed(), " ");
    }

    #[test]
    fn test_engrave_restyles_by_delta() {
        let mut canvas = Canvas::fullscreen(4, 1).unwrap();
        let bold_red = Style::new().bold().fg(Color::RED);
        canvas.add_text(0, 0, "ab", 0, bold_red);
        canvas.add_text(2, 0, "c", 0, bold_red.italic());

        let mut rec = Recorder::new();
        canvas.engrave(&mut rec).unwrap();
        assert_eq!(
            rec.ops(),
            &[
                OutputOp::MoveTo(0, 0),
                OutputOp::SetAttribute(Attribute::Bold),
                OutputOp::SetForeground(Color::RED),
                OutputOp::Print("a".into()),
                OutputOp::Print("b".into()),
                OutputOp::SetAttribute(Attribute::Italic),
                OutputOp::Print("c".into()),
                OutputOp::SetAttribute(Attribute::NormalIntensity),
                OutputOp::SetAttribute(Attribute::NoItalic),
                OutputOp::SetForeground(Color::Reset),
                OutputOp::MoveTo(0, 0),
            ]
        );
    }

    #[test]
    fn test_engrave_skips_continuation_cells() {
        let mut canvas = Canvas::fullscreen(4, 1).unwrap();
        canvas.add_text(0, 0, "中b", 0, Style::default());
        let mut rec = Recorder::new();
        canvas.engrave(&mut rec).unwrap();
        assert_eq!(rec.printed(), "中b");
        assert_eq!(
            rec.ops().iter().filter(|op| matches!(op, OutputOp::MoveTo(..))).count(),
            2
        );
    }

    #[test]
    fn test_inline_canvas_scrolls_on_overflow() {
        let mut canvas = Canvas::inline(10, 5, 3).unwrap();
        for y in 0..4 {
            canvas.add_text(0, y, "row", 0, Style::default());
        }
        let mut rec = Recorder::new();
        canvas.engrave(&mut rec).unwrap();

        assert_eq!(rec.ops()[0], OutputOp::ScrollUp(2));
        assert_eq!(rec.ops()[1], OutputOp::MoveTo(0, 1));
        assert_eq!(canvas.scroll_offset(), 1);
        assert_eq!(rec.ops().last(), Some(&OutputOp::MoveTo(0, 4)));
    }

    #[test]
    fn test_invalidate_repaints_everything() {
        let mut canvas = Canvas::fullscreen(2, 1).unwrap();
        let mut rec = Recorder::new();
        canvas.invalidate();
        canvas.engrave(&mut rec).unwrap();
        assert_eq!(rec.printed(), "  ");

        rec.take();
        canvas.engrave(&mut rec).unwrap();
        assert!(rec.is_empty());
    }

    #[test]
    fn test_resize_reallocates() {
        let mut canvas = Canvas::fullscreen(2, 2).unwrap();
        canvas.add_text(0, 0, "a", 0, Style::default());
        canvas.resize(6, 3).unwrap();
        assert_eq!(canvas.width(), 6);
        assert_eq!(canvas.height(), 3);
        assert_eq!(*canvas.cell(0, 0).unwrap(), Cell::blank());
        assert!(canvas.cell(5, 2).is_some());
    }

    #[test]
    fn test_fill_paints_area() {
        let mut canvas = Canvas::fullscreen(4, 3).unwrap();
        let style = Style::new().bg(Color::BLUE);
        canvas.fill(Rect::new(1, 1, 10, 1), 0, style);
        assert_eq!(canvas.cell(0, 1).unwrap().style(), Style::default());
        assert_eq!(canvas.cell(3, 1).unwrap().style(), style);
        assert_eq!(canvas.cell(1, 0).unwrap().style(), Style::default());
    }
}
