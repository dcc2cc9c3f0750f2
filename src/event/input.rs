//! Input event types

pub use crossterm::event::{KeyCode, KeyModifiers};

use crossterm::event::{
    Event as CEvent, KeyEvent, KeyEventKind, MouseButton as CButton, MouseEvent, MouseEventKind,
};

/// A key press with its modifier set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPress {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyPress {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn has_ctrl(&self) -> bool {
        self.modifiers.contains(KeyModifiers::CONTROL)
    }

    pub fn has_shift(&self) -> bool {
        self.modifiers.contains(KeyModifiers::SHIFT)
    }
}

/// Mouse button involved in an event; `None` for wheel and motion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseAction {
    Press,
    Release,
    Drag,
    Move,
    WheelUp,
    WheelDown,
}

/// Mouse event with 1-based column and row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MouseInput {
    pub button: MouseButton,
    pub column: u16,
    pub row: u16,
    pub action: MouseAction,
}

impl MouseInput {
    /// Zero-based screen position of the pointer
    pub fn position(&self) -> (u16, u16) {
        (self.column.saturating_sub(1), self.row.saturating_sub(1))
    }
}

/// Input offered to the widget tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    Key(KeyPress),
    Mouse(MouseInput),
}

impl Event {
    /// Key press without modifiers
    pub fn key(code: KeyCode) -> Self {
        Event::Key(KeyPress::new(code, KeyModifiers::NONE))
    }

    /// Left-button press at a 1-based position
    pub fn click(column: u16, row: u16) -> Self {
        Event::Mouse(MouseInput {
            button: MouseButton::Left,
            column,
            row,
            action: MouseAction::Press,
        })
    }

    /// Get the key press if this is a key event
    pub fn as_key(&self) -> Option<&KeyPress> {
        match self {
            Event::Key(key) => Some(key),
            _ => None,
        }
    }

    /// Get the mouse input if this is a mouse event
    pub fn as_mouse(&self) -> Option<&MouseInput> {
        match self {
            Event::Mouse(mouse) => Some(mouse),
            _ => None,
        }
    }

    /// Convert a crossterm event; `None` for events widgets never see
    /// (resize, focus, paste, key releases, horizontal scroll)
    pub fn from_crossterm(event: CEvent) -> Option<Self> {
        match event {
            CEvent::Key(key) => Self::from_key(key),
            CEvent::Mouse(mouse) => Self::from_mouse(mouse),
            _ => None,
        }
    }

    fn from_key(key: KeyEvent) -> Option<Self> {
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                Some(Event::Key(KeyPress::new(key.code, key.modifiers)))
            }
            KeyEventKind::Release => None,
        }
    }

    fn from_mouse(mouse: MouseEvent) -> Option<Self> {
        let button = |b: CButton| match b {
            CButton::Left => MouseButton::Left,
            CButton::Right => MouseButton::Right,
            CButton::Middle => MouseButton::Middle,
        };
        let (button, action) = match mouse.kind {
            MouseEventKind::Down(b) => (button(b), MouseAction::Press),
            MouseEventKind::Up(b) => (button(b), MouseAction::Release),
            MouseEventKind::Drag(b) => (button(b), MouseAction::Drag),
            MouseEventKind::Moved => (MouseButton::None, MouseAction::Move),
            MouseEventKind::ScrollUp => (MouseButton::None, MouseAction::WheelUp),
            MouseEventKind::ScrollDown => (MouseButton::None, MouseAction::WheelDown),
            MouseEventKind::ScrollLeft | MouseEventKind::ScrollRight => return None,
        };
        Some(Event::Mouse(MouseInput {
            button,
            column: mouse.column.saturating_add(1),
            row: mouse.row.saturating_add(1),
            action,
        }))
    }
}
