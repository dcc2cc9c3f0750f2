//! Per-widget state shared by every widget

use super::{Border, BorderType};
use crate::buffer::Canvas;
use crate::error::RenderError;
use crate::geometry::{Rect, Size};
use crate::layout::Constraints;
use crate::style::Style;

/// Geometry, visibility and decoration common to all widgets
///
/// `intrinsic` is the full footprint including margin and border; a zero
/// dimension means "size to content" along that axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Props {
    pub intrinsic: Size,
    pub visible: bool,
    pub focused: bool,
    pub border: BorderType,
    pub border_style: Style,
    pub margin: u16,
    pub z_index: u16,
    computed: Rect,
}

impl Default for Props {
    fn default() -> Self {
        Self {
            intrinsic: Size::zero(),
            visible: true,
            focused: false,
            border: BorderType::None,
            border_style: Style::default(),
            margin: 0,
            z_index: 0,
            computed: Rect::default(),
        }
    }
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    /// Explicit footprint; zero keeps that axis content-sized
    pub fn sized(mut self, width: u16, height: u16) -> Self {
        self.intrinsic = Size::new(width, height);
        self
    }

    pub fn border(mut self, border: BorderType) -> Self {
        self.border = border;
        self
    }

    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }

    pub fn margin(mut self, margin: u16) -> Self {
        self.margin = margin;
        self
    }

    pub fn z_index(mut self, z_index: u16) -> Self {
        self.z_index = z_index;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn is_bordered(&self) -> bool {
        !self.border.is_none()
    }

    /// Cells taken on each side by margin and border
    pub fn chrome(&self) -> u16 {
        self.margin.saturating_add(self.border.thickness())
    }

    pub fn geometry(&self) -> Rect {
        self.computed
    }

    pub fn set_geometry(&mut self, geometry: Rect) {
        self.computed = geometry;
    }

    /// Area the border is drawn on
    pub fn frame(&self) -> Rect {
        self.computed.inset(self.margin)
    }

    /// Area left for content inside margin and border
    pub fn interior(&self) -> Rect {
        self.computed.inset(self.chrome())
    }

    /// Constraints for the content inside margin and border
    pub fn inner_constraints(&self, constraints: Constraints) -> Constraints {
        constraints.deflate(self.chrome())
    }

    /// Resolve the widget's size for this frame
    ///
    /// Uses the intrinsic size where set and `content` plus chrome
    /// elsewhere, clamps to `constraints` and stores the result. Hidden
    /// widgets get an empty geometry and report zero.
    pub fn measure(&mut self, constraints: Constraints, content: Size) -> Size {
        if !self.visible {
            self.computed = Rect::default();
            return Size::zero();
        }
        let natural = content.expand(self.chrome());
        let pick = |intrinsic: u16, natural: u16| if intrinsic > 0 { intrinsic } else { natural };
        let ideal = Size::new(
            pick(self.intrinsic.width, natural.width),
            pick(self.intrinsic.height, natural.height),
        );
        let size = constraints.clamp(ideal);
        self.computed.width = size.width;
        self.computed.height = size.height;
        size
    }

    /// Record the absolute origin decided by the parent
    pub fn place(&mut self, x: u16, y: u16) {
        self.computed.x = x;
        self.computed.y = y;
    }

    /// Draw the border, if any, around the frame
    pub fn draw_border(&self, canvas: &mut Canvas, title: Option<&str>) -> Result<(), RenderError> {
        if !self.is_bordered() {
            return Ok(());
        }
        let mut border = Border::new(self.border)
            .style(self.border_style)
            .title_style(self.border_style.bold())
            .z_index(self.z_index);
        if let Some(title) = title {
            border = border.title(title);
        }
        border.draw(canvas, self.frame())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_content_plus_chrome() {
        let mut props = Props::new().border(BorderType::Single).margin(1);
        let size = props.measure(Constraints::unbounded(), Size::new(5, 2));
        assert_eq!(size, Size::new(9, 6));
        assert_eq!(props.interior(), Rect::new(2, 2, 5, 2));
        assert_eq!(props.frame(), Rect::new(1, 1, 7, 4));
    }

    #[test]
    fn test_measure_intrinsic_per_axis() {
        let mut props = Props::new().sized(12, 0);
        let size = props.measure(Constraints::unbounded(), Size::new(3, 4));
        assert_eq!(size, Size::new(12, 4));
    }

    #[test]
    fn test_measure_clamps() {
        let mut props = Props::new().sized(50, 1);
        let size = props.measure(Constraints::new(0, 20, 2, 5), Size::zero());
        assert_eq!(size, Size::new(20, 2));
        assert_eq!(props.geometry().size(), size);
    }

    #[test]
    fn test_hidden_measures_zero() {
        let mut props = Props::new().sized(4, 4);
        props.set_geometry(Rect::new(3, 3, 4, 4));
        props.visible = false;
        assert_eq!(props.measure(Constraints::unbounded(), Size::new(1, 1)), Size::zero());
        assert_eq!(props.geometry(), Rect::default());
    }

    #[test]
    fn test_place_keeps_size() {
        let mut props = Props::new();
        props.measure(Constraints::unbounded(), Size::new(4, 2));
        props.place(7, 8);
        assert_eq!(props.geometry(), Rect::new(7, 8, 4, 2));
    }

    #[test]
    fn test_draw_border_in_frame() {
        let mut props = Props::new().border(BorderType::Plain).margin(1);
        props.measure(Constraints::unbounded(), Size::new(1, 1));
        props.place(0, 0);

        let mut canvas = Canvas::fullscreen(6, 6).unwrap();
        props.draw_border(&mut canvas, None).unwrap();
        assert_eq!(canvas.cell(0, 0).unwrap().symbol(), " ");
        assert_eq!(canvas.cell(1, 1).unwrap().symbol(), "+");
        assert_eq!(canvas.cell(3, 3).unwrap().symbol(), "+");
    }
}
