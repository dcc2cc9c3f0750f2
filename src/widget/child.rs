//! Borrowed, dynamically dispatched handle to a widget inside a container

use super::Widget;
use crate::buffer::Canvas;
use crate::error::RenderError;
use crate::event::{Event, EventResult};
use crate::geometry::{Rect, Size};
use crate::layout::Constraints;
use std::fmt;

/// A container's view of one child
///
/// Built once when the widget is inserted; the trait bound is the
/// capability check and the vtable behind the reference is the only
/// dispatch path afterwards. The handle borrows the widget for `'a`, so
/// the owner cannot move or drop it while the container holds it.
pub struct Child<'a> {
    widget: &'a mut (dyn Widget + 'a),
    factor: u16,
}

impl<'a> Child<'a> {
    /// Adapt `widget` with a layout factor of 1
    pub fn new<W: Widget + 'a>(widget: &'a mut W) -> Self {
        Self::weighted(widget, 1)
    }

    /// Adapt `widget` with the given layout factor
    pub fn weighted<W: Widget + 'a>(widget: &'a mut W, factor: u16) -> Self {
        Self { widget, factor }
    }

    /// Adapt a widget already behind a trait object
    pub fn from_dyn(widget: &'a mut (dyn Widget + 'a), factor: u16) -> Self {
        Self { widget, factor }
    }

    /// Weight in factor distribution
    pub fn factor(&self) -> u16 {
        self.factor
    }

    pub fn layout(&mut self, constraints: Constraints) -> Size {
        self.widget.layout(constraints)
    }

    pub fn inscribe(&mut self, canvas: &mut Canvas, x: u16, y: u16) -> Result<(), RenderError> {
        self.widget.inscribe(canvas, x, y)
    }

    pub fn handle_input(&mut self, event: &Event) -> EventResult {
        self.widget.handle_input(event)
    }

    pub fn is_visible(&self) -> bool {
        self.widget.is_visible()
    }

    pub fn geometry(&self) -> Rect {
        self.widget.geometry()
    }

    pub fn set_geometry(&mut self, geometry: Rect) {
        self.widget.set_geometry(geometry);
    }
}

impl<'a, W: Widget + 'a> From<&'a mut W> for Child<'a> {
    fn from(widget: &'a mut W) -> Self {
        Self::new(widget)
    }
}

impl fmt::Debug for Child<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Child")
            .field("geometry", &self.geometry())
            .field("factor", &self.factor)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::KeyCode;

    #[derive(Default)]
    struct Spy {
        geometry: Rect,
        inscribed_at: Option<(u16, u16)>,
        events: usize,
    }

    impl Widget for Spy {
        fn layout(&mut self, constraints: Constraints) -> Size {
            let size = constraints.clamp(Size::new(2, 2));
            self.geometry = Rect::new(0, 0, size.width, size.height);
            size
        }

        fn inscribe(&mut self, _canvas: &mut Canvas, x: u16, y: u16) -> Result<(), RenderError> {
            self.inscribed_at = Some((x, y));
            Ok(())
        }

        fn handle_input(&mut self, _event: &Event) -> EventResult {
            self.events += 1;
            EventResult::Consumed
        }

        fn geometry(&self) -> Rect {
            self.geometry
        }

        fn set_geometry(&mut self, geometry: Rect) {
            self.geometry = geometry;
        }
    }

    #[test]
    fn test_calls_reach_the_widget() {
        let mut spy = Spy::default();
        {
            let mut child = Child::weighted(&mut spy, 3);
            assert_eq!(child.factor(), 3);
            assert_eq!(child.layout(Constraints::unbounded()), Size::new(2, 2));

            let mut canvas = Canvas::fullscreen(4, 4).unwrap();
            child.inscribe(&mut canvas, 1, 2).unwrap();
            assert!(child.handle_input(&Event::key(KeyCode::Enter)).is_consumed());

            child.set_geometry(Rect::new(0, 0, 4, 1));
            assert_eq!(child.geometry(), Rect::new(0, 0, 4, 1));
        }
        assert_eq!(spy.inscribed_at, Some((1, 2)));
        assert_eq!(spy.events, 1);
        assert_eq!(spy.geometry, Rect::new(0, 0, 4, 1));
    }

    #[test]
    fn test_heterogeneous_children() {
        let mut a = Spy::default();
        let mut b = Spy::default();
        let mut boxed: Box<dyn Widget> = Box::new(Spy::default());
        let children = vec![
            Child::from(&mut a),
            Child::new(&mut b),
            Child::from_dyn(boxed.as_mut(), 2),
        ];
        let factors: Vec<u16> = children.iter().map(Child::factor).collect();
        assert_eq!(factors, vec![1, 1, 2]);
    }
}
