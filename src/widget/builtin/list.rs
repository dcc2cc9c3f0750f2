//! Scrollable selection list
//!
//! Keeps the selected row inside the visible window with minimal
//! scrolling: the window only moves when the selection leaves it.

use crate::buffer::{glyph_width, text_width, truncate, Canvas};
use crate::error::RenderError;
use crate::event::{Event, EventResult, KeyCode, KeyModifiers, MouseAction, MouseButton, MouseInput};
use crate::geometry::{Point, Rect, Size};
use crate::layout::Constraints;
use crate::style::Style;
use crate::widget::{BorderType, Props, Widget};
use std::borrow::Cow;

const SELECTED_MARKER: &str = "> ";
const MARKER: &str = "  ";

/// An item a [`SelectionList`] can show
///
/// The defaults draw `"> 3. label"` from [`label`](ListItem::label).
/// Items that draw themselves override [`render`](ListItem::render) and
/// usually [`width`](ListItem::width) with it.
pub trait ListItem {
    fn label(&self) -> Cow<'_, str>;

    /// Columns the item needs when drawn at `index`
    fn width(&self, index: usize) -> u16 {
        default_width(&self.label(), index)
    }

    /// Draw the item into its row
    fn render(&self, row: &mut RowWriter<'_>, index: usize, selected: bool) {
        let style = if selected {
            row.fill(row.highlight());
            row.highlight()
        } else {
            row.base()
        };
        let marker = if selected { SELECTED_MARKER } else { MARKER };
        row.write(marker, style);
        row.write(&format!("{}. ", index + 1), style);
        row.write(&self.label(), style);
    }
}

fn default_width(label: &str, index: usize) -> u16 {
    let number = format!("{}. ", index + 1);
    text_width(MARKER)
        .saturating_add(text_width(&number))
        .saturating_add(text_width(label))
}

impl ListItem for &str {
    fn label(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl ListItem for String {
    fn label(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

/// Cursor bound to one list row; writes past the row end are dropped
pub struct RowWriter<'c> {
    canvas: &'c mut Canvas,
    x: u16,
    y: u16,
    width: u16,
    column: u16,
    z_index: u16,
    base: Style,
    highlight: Style,
}

impl<'c> RowWriter<'c> {
    /// Columns still free in the row
    pub fn remaining(&self) -> u16 {
        self.width.saturating_sub(self.column)
    }

    pub fn column(&self) -> u16 {
        self.column
    }

    /// Style of unselected rows
    pub fn base(&self) -> Style {
        self.base
    }

    /// Style of the selected row
    pub fn highlight(&self) -> Style {
        self.highlight
    }

    /// Write `text` at the cursor and advance past it
    pub fn write(&mut self, text: &str, style: Style) {
        let mut fitted = String::new();
        let mut used = 0u16;
        for c in text.chars() {
            let w = glyph_width(c);
            if used.saturating_add(w) > self.remaining() {
                break;
            }
            fitted.push(c);
            used = used.saturating_add(w);
        }
        if fitted.is_empty() {
            return;
        }
        self.canvas
            .add_text(self.x.saturating_add(self.column), self.y, &fitted, self.z_index, style);
        self.column = self.column.saturating_add(used);
    }

    /// Paint the whole row in `style` without moving the cursor
    pub fn fill(&mut self, style: Style) {
        let area = Rect::new(self.x, self.y, self.width, 1);
        self.canvas.fill(area, self.z_index, style);
    }
}

/// Scrollable, selectable list over borrowed items
#[derive(Debug)]
pub struct SelectionList<'a, T: ListItem> {
    props: Props,
    items: &'a [T],
    selected: usize,
    /// First visible item
    offset: usize,
    /// Configured maximum of visible rows
    capacity: Option<usize>,
    /// Rows available in the current geometry
    visible_rows: usize,
    title: Option<String>,
    style: Style,
    highlight: Style,
}

impl<'a, T: ListItem> SelectionList<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        Self {
            props: Props::default(),
            items,
            selected: 0,
            offset: 0,
            capacity: None,
            visible_rows: items.len(),
            title: None,
            style: Style::default(),
            highlight: Style::new().reversed(),
        }
    }

    /// Title row; drawn in the top border when bordered
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Show at most `rows` items at once
    pub fn capacity(mut self, rows: usize) -> Self {
        self.capacity = Some(rows);
        self.visible_rows = rows;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn highlight(mut self, style: Style) -> Self {
        self.highlight = style;
        self
    }

    pub fn border(mut self, border: BorderType) -> Self {
        self.props.border = border;
        self
    }

    pub fn with_props(mut self, props: Props) -> Self {
        self.props = props;
        self
    }

    pub fn props(&self) -> &Props {
        &self.props
    }

    pub fn props_mut(&mut self) -> &mut Props {
        &mut self.props
    }

    pub fn items(&self) -> &'a [T] {
        self.items
    }

    /// Swap the item slice, keeping the selection in range
    pub fn set_items(&mut self, items: &'a [T]) {
        self.items = items;
        self.selected = self.selected.min(items.len().saturating_sub(1));
        self.follow();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&'a T> {
        self.items.get(self.selected)
    }

    /// Index of the first visible item
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn visible_rows(&self) -> usize {
        self.visible_rows
    }

    pub fn up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        self.follow();
    }

    pub fn down(&mut self) {
        if self.selected + 1 < self.items.len() {
            self.selected += 1;
        }
        self.follow();
    }

    pub fn home(&mut self) {
        self.select(0);
    }

    pub fn end(&mut self) {
        self.select(self.items.len().saturating_sub(1));
    }

    /// Select `index`, clamped to the last item
    pub fn select(&mut self, index: usize) {
        self.selected = index.min(self.items.len().saturating_sub(1));
        self.follow();
    }

    /// Move the window just enough to show the selection
    fn follow(&mut self) {
        let window = self.visible_rows.max(1);
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + window {
            self.offset = self.selected + 1 - window;
        }
    }

    /// Title gets its own row only when there is no border to hold it
    fn title_rows(&self) -> u16 {
        match self.title {
            Some(_) if !self.props.is_bordered() => 1,
            _ => 0,
        }
    }

    /// Interior rows that hold items
    fn item_area(&self) -> Rect {
        let interior = self.props.interior();
        let title = self.title_rows().min(interior.height);
        Rect::new(
            interior.x,
            interior.y.saturating_add(title),
            interior.width,
            interior.height - title,
        )
    }

    fn sync_window(&mut self) {
        let rows = self.item_area().height as usize;
        self.visible_rows = self.capacity.map_or(rows, |cap| cap.min(rows));
        self.follow();
    }

    fn content_size(&self) -> Size {
        let rows = self.capacity.map_or(self.items.len(), |cap| cap.min(self.items.len()));
        let items_width = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| item.width(i))
            .max()
            .unwrap_or(0);
        let title_width = match &self.title {
            // Border edge keeps two cells on either side of the title
            Some(title) if self.props.is_bordered() => text_width(title).saturating_add(2),
            Some(title) => text_width(title),
            None => 0,
        };
        let height = (rows as u16).saturating_add(self.title_rows());
        Size::new(items_width.max(title_width), height)
    }

    fn on_mouse(&mut self, mouse: &MouseInput) -> EventResult {
        let (column, row) = mouse.position();
        let area = self.item_area();
        if !area.contains(Point::new(column, row)) {
            return EventResult::Ignored;
        }
        match (mouse.action, mouse.button) {
            (MouseAction::Press, MouseButton::Left) => {
                let index = self.offset + (row - area.y) as usize;
                if index >= self.items.len() {
                    return EventResult::Ignored;
                }
                self.selected = index;
                self.follow();
                EventResult::Consumed
            }
            (MouseAction::WheelUp, _) => {
                self.up();
                EventResult::Consumed
            }
            (MouseAction::WheelDown, _) => {
                self.down();
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    fn on_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> EventResult {
        let plain = !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
        match code {
            KeyCode::Up => self.up(),
            KeyCode::Down => self.down(),
            KeyCode::Char('k') if plain => self.up(),
            KeyCode::Char('j') if plain => self.down(),
            KeyCode::Home => self.home(),
            KeyCode::End => self.end(),
            _ => return EventResult::Ignored,
        }
        EventResult::Consumed
    }
}

impl<T: ListItem> Widget for SelectionList<'_, T> {
    fn layout(&mut self, constraints: Constraints) -> Size {
        let content = self.content_size();
        let size = self.props.measure(constraints, content);
        self.sync_window();
        size
    }

    fn inscribe(&mut self, canvas: &mut Canvas, x: u16, y: u16) -> Result<(), RenderError> {
        if !self.props.visible {
            return Ok(());
        }
        self.props.place(x, y);
        self.sync_window();

        let z = self.props.z_index;
        if self.props.is_bordered() {
            self.props.draw_border(canvas, self.title.as_deref())?;
        } else if let Some(title) = &self.title {
            let interior = self.props.interior();
            if interior.height > 0 {
                let shown = truncate(title, interior.width);
                canvas.add_text(interior.x, interior.y, &shown, z, self.style.bold());
            }
        }

        let area = self.item_area();
        let rows = self.items.iter().enumerate().skip(self.offset).take(self.visible_rows);
        for (row, (index, item)) in rows.enumerate() {
            let mut writer = RowWriter {
                canvas: &mut *canvas,
                x: area.x,
                y: area.y.saturating_add(row as u16),
                width: area.width,
                column: 0,
                z_index: z,
                base: self.style,
                highlight: self.highlight,
            };
            item.render(&mut writer, index, index == self.selected);
        }
        Ok(())
    }

    fn handle_input(&mut self, event: &Event) -> EventResult {
        if !self.props.visible {
            return EventResult::Ignored;
        }
        match event {
            Event::Key(key) => self.on_key(key.code, key.modifiers),
            Event::Mouse(mouse) => self.on_mouse(mouse),
        }
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
