//! Platform-agnostic input events.

use crate::App;

/// Keys the demo reacts to. Anything else arrives as `Other` with the
/// platform's raw key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Switch between the two eye presets.
    C,
    /// Switch between orthographic and perspective projection.
    P,
    Left,
    Right,
    Escape,
    Other(i32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Press,
    Repeat,
    Release,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    Press,
    Release,
}

/// One input event as delivered by a window layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Key { key: Key, action: KeyAction },
    PointerMove { x: f64, y: f64 },
    PointerButton {
        button: PointerButton,
        action: ButtonAction,
        x: f64,
        y: f64,
    },
    Scroll { dx: f64, dy: f64 },
    Resize { width: u32, height: u32 },
}

impl InputEvent {
    /// Route this event to the matching [`App`] callback.
    pub fn dispatch<A: App + ?Sized>(self, app: &mut A) {
        match self {
            InputEvent::Key { key, action } => app.key(key, action),
            InputEvent::PointerMove { x, y } => app.pointer_move(x, y),
            InputEvent::PointerButton {
                button,
                action,
                x,
                y,
            } => app.pointer_button(button, action, x, y),
            InputEvent::Scroll { dx, dy } => app.scroll(dx, dy),
            InputEvent::Resize { width, height } => app.resize(width, height),
        }
    }
}
