//! Core widget trait

use crate::buffer::Canvas;
use crate::error::RenderError;
use crate::event::{Event, EventResult};
use crate::geometry::{Rect, Size};
use crate::layout::Constraints;

/// Two-phase layout and painting contract shared by every widget
///
/// Each frame the owner calls [`layout`](Widget::layout) and then
/// [`inscribe`](Widget::inscribe), exactly once each and in that order.
/// Layout decides the size, inscribe decides the position and paints.
pub trait Widget {
    /// Measure against `constraints`, store the clamped size as the
    /// computed geometry and return it
    fn layout(&mut self, constraints: Constraints) -> Size;

    /// Record the absolute origin and paint at it
    ///
    /// The computed width and height are left as layout (or the parent)
    /// set them.
    fn inscribe(&mut self, canvas: &mut Canvas, x: u16, y: u16) -> Result<(), RenderError>;

    /// Offer an input event to the widget
    fn handle_input(&mut self, _event: &Event) -> EventResult {
        EventResult::Ignored
    }

    /// Whether the widget takes part in layout, painting and input
    fn is_visible(&self) -> bool {
        true
    }

    /// Last computed geometry
    fn geometry(&self) -> Rect;

    /// Overwrite the computed geometry; used by containers that size a
    /// child themselves
    fn set_geometry(&mut self, geometry: Rect);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Style;
    use crate::widget::Props;

    struct Label {
        props: Props,
        text: &'static str,
    }

    impl Widget for Label {
        fn layout(&mut self, constraints: Constraints) -> Size {
            let content = Size::new(self.text.len() as u16, 1);
            self.props.measure(constraints, content)
        }

        fn inscribe(&mut self, canvas: &mut Canvas, x: u16, y: u16) -> Result<(), RenderError> {
            self.props.place(x, y);
            canvas.add_text(x, y, self.text, self.props.z_index, Style::default());
            Ok(())
        }

        fn geometry(&self) -> Rect {
            self.props.geometry()
        }

        fn set_geometry(&mut self, geometry: Rect) {
            self.props.set_geometry(geometry);
        }
    }

    #[test]
    fn test_two_phase_contract() {
        let mut label = Label {
            props: Props::new(),
            text: "Hello",
        };
        let size = label.layout(Constraints::new(0, 3, 0, 10));
        assert_eq!(size, Size::new(3, 1));
        assert_eq!(label.geometry(), Rect::new(0, 0, 3, 1));

        let mut canvas = Canvas::fullscreen(10, 3).unwrap();
        label.inscribe(&mut canvas, 2, 1).unwrap();
        assert_eq!(label.geometry(), Rect::new(2, 1, 3, 1));
        assert_eq!(canvas.cell(2, 1).unwrap().symbol(), "H");
    }

    #[test]
    fn test_default_input_is_ignored() {
        let mut label = Label {
            props: Props::new(),
            text: "x",
        };
        assert_eq!(label.handle_input(&Event::click(1, 1)), EventResult::Ignored);
    }
}
