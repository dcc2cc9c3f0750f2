//! Stack container: children arranged along one axis
//!
//! Children are measured independently against the interior constraints,
//! then placed one after another along the main axis. In sequential mode
//! each keeps its measured extent. In factor mode the stack resolves its
//! own size first, splits the interior by weight and lays each child out
//! again on its share. Hidden children take neither space nor a gap.

use super::{Constraints, Direction};
use crate::buffer::Canvas;
use crate::error::RenderError;
use crate::event::{Event, EventResult};
use crate::geometry::{Point, Rect, Size};
use crate::widget::{BorderType, Child, Props, Widget};

/// How a stack divides its main axis among children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Distribution {
    /// Measured size per child
    #[default]
    Sequential,
    /// Available space split by child factor
    Factor,
}

/// Container laying out borrowed children along one axis
///
/// Insertion order is both paint order and the order input is offered in.
#[derive(Debug)]
pub struct Stack<'a> {
    props: Props,
    direction: Direction,
    distribution: Distribution,
    gap: u16,
    title: Option<String>,
    children: Vec<Child<'a>>,
}

impl<'a> Stack<'a> {
    pub fn new(direction: Direction) -> Self {
        Self {
            props: Props::default(),
            direction,
            distribution: Distribution::default(),
            gap: 0,
            title: None,
            children: Vec::new(),
        }
    }

    pub fn vertical() -> Self {
        Self::new(Direction::Vertical)
    }

    pub fn horizontal() -> Self {
        Self::new(Direction::Horizontal)
    }

    pub fn distribution(mut self, distribution: Distribution) -> Self {
        self.distribution = distribution;
        self
    }

    /// Cells between adjacent children
    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_props(mut self, props: Props) -> Self {
        self.props = props;
        self
    }

    pub fn border(mut self, border: BorderType) -> Self {
        self.props.border = border;
        self
    }

    pub fn margin(mut self, margin: u16) -> Self {
        self.props.margin = margin;
        self
    }

    /// Title shown in the top border
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Append a child with factor 1
    pub fn child<W: Widget + 'a>(mut self, widget: &'a mut W) -> Self {
        self.children.push(Child::new(widget));
        self
    }

    /// Append a child with an explicit factor
    pub fn weighted<W: Widget + 'a>(mut self, widget: &'a mut W, factor: u16) -> Self {
        self.children.push(Child::weighted(widget, factor));
        self
    }

    pub fn push(&mut self, child: Child<'a>) {
        self.children.push(child);
    }

    pub fn children(&self) -> &[Child<'a>] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn props(&self) -> &Props {
        &self.props
    }

    pub fn props_mut(&mut self) -> &mut Props {
        &mut self.props
    }
}

/// Main-axis extent of each child under factor distribution
///
/// Shares are truncated; the rounding remainder goes to the last child
/// with a non-zero factor.
fn factor_shares(factors: &[u16], available: u16) -> Vec<u16> {
    let total: u32 = factors.iter().map(|f| *f as u32).sum();
    if total == 0 {
        return vec![0; factors.len()];
    }

    let mut shares: Vec<u16> = factors
        .iter()
        .map(|f| (available as u32 * *f as u32 / total) as u16)
        .collect();
    let distributed: u32 = shares.iter().map(|s| *s as u32).sum();
    let leftover = (available as u32).saturating_sub(distributed) as u16;
    if let Some(last) = factors.iter().rposition(|f| *f > 0) {
        shares[last] = shares[last].saturating_add(leftover);
    }
    shares
}

impl Widget for Stack<'_> {
    fn layout(&mut self, constraints: Constraints) -> Size {
        if !self.props.visible {
            for child in &mut self.children {
                child.set_geometry(Rect::default());
            }
            return self.props.measure(constraints, Size::zero());
        }

        let dir = self.direction;
        let chrome = self.props.chrome();
        let inner = self.props.inner_constraints(constraints).loosen();

        let mut measured: Vec<Size> = self.children.iter_mut().map(|c| c.layout(inner)).collect();
        let visible: Vec<bool> = self.children.iter().map(Child::is_visible).collect();
        let shown = visible.iter().filter(|v| **v).count();
        let gaps = self.gap.saturating_mul(shown.saturating_sub(1) as u16);

        // Factor mode distributes the stack's own resolved interior, then
        // lays each child out again tight on its share
        let (mains, fill): (Vec<u16>, Option<u16>) = match self.distribution {
            Distribution::Sequential => (measured.iter().map(|s| dir.main(*s)).collect(), None),
            Distribution::Factor => {
                let natural = measured
                    .iter()
                    .zip(&visible)
                    .filter(|(_, shown)| **shown)
                    .fold(gaps, |acc, (s, _)| acc.saturating_add(dir.main(*s)));
                let fill = if dir.max_main(&inner) == u16::MAX {
                    natural
                } else {
                    dir.max_main(&inner)
                };
                let cross = measured.iter().map(|s| dir.cross(*s)).max().unwrap_or(0);
                let resolved = dir.main(self.props.measure(constraints, dir.size(fill, cross)));
                let available = resolved
                    .saturating_sub(chrome.saturating_mul(2))
                    .saturating_sub(gaps);

                let factors: Vec<u16> = self
                    .children
                    .iter()
                    .zip(&visible)
                    .map(|(c, shown)| if *shown { c.factor() } else { 0 })
                    .collect();
                let shares = factor_shares(&factors, available);
                for (i, child) in self.children.iter_mut().enumerate() {
                    if visible[i] {
                        measured[i] = child.layout(dir.tighten_main(inner, shares[i]));
                    }
                }
                (shares, Some(fill))
            }
        };

        let interior = Point::new(chrome, chrome);
        let mut cursor = 0u16;
        let mut cross = 0u16;
        let mut placed = false;
        for (i, child) in self.children.iter_mut().enumerate() {
            if !visible[i] {
                child.set_geometry(Rect::default());
                continue;
            }
            if placed {
                cursor = cursor.saturating_add(self.gap);
            }
            placed = true;
            let child_cross = dir.cross(measured[i]);
            let origin = dir.point(cursor, 0).translate(interior);
            child.set_geometry(Rect::from_parts(origin, dir.size(mains[i], child_cross)));
            cursor = cursor.saturating_add(mains[i]);
            cross = cross.max(child_cross);
        }

        self.props.measure(constraints, dir.size(fill.unwrap_or(cursor), cross))
    }

    fn inscribe(&mut self, canvas: &mut Canvas, x: u16, y: u16) -> Result<(), RenderError> {
        if !self.props.visible {
            return Ok(());
        }
        self.props.place(x, y);
        self.props.draw_border(canvas, self.title.as_deref())?;

        for child in self.children.iter_mut().filter(|c| c.is_visible()) {
            let offset = child.geometry();
            child.inscribe(canvas, x.saturating_add(offset.x), y.saturating_add(offset.y))?;
        }
        Ok(())
    }

    fn handle_input(&mut self, event: &Event) -> EventResult {
        if !self.props.visible {
            return EventResult::Ignored;
        }
        for child in &mut self.children {
            if child.handle_input(event).is_consumed() {
                return EventResult::Consumed;
            }
        }
        EventResult::Ignored
    }

    fn is_visible(&self) -> bool {
        self.props.visible
    }

    fn geometry(&self) -> Rect {
        self.props.geometry()
    }

    fn set_geometry(&mut self, geometry: Rect) {
        self.props.set_geometry(geometry);
    }
}
