//! Scripted input for headless runs.
//!
//! Stands in for a window's event queue: each event is tagged with the
//! frame it arrives before.

use tangram_hal::{ButtonAction, InputEvent, Key, KeyAction, PointerButton};

/// Which pose to hold the morph key for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum HoldTarget {
    Crab,
    Cube,
}

impl HoldTarget {
    fn key(self) -> Key {
        match self {
            HoldTarget::Crab => Key::Left,
            HoldTarget::Cube => Key::Right,
        }
    }
}

/// Frame-tagged input events, kept sorted by frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputScript {
    events: Vec<(u64, InputEvent)>,
}

impl InputScript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `event` before frame `frame`. Events for the same frame keep
    /// their insertion order.
    pub fn push(&mut self, frame: u64, event: InputEvent) -> &mut Self {
        let at = self.events.partition_point(|(f, _)| *f <= frame);
        self.events.insert(at, (frame, event));
        self
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Frame of the last queued event.
    pub fn last_frame(&self) -> Option<u64> {
        self.events.last().map(|(frame, _)| *frame)
    }

    pub fn events_for(&self, frame: u64) -> impl Iterator<Item = InputEvent> + '_ {
        let start = self.events.partition_point(|(f, _)| *f < frame);
        self.events[start..]
            .iter()
            .take_while(move |(f, _)| *f == frame)
            .map(|(_, event)| *event)
    }

    /// Press and release `key` within one frame.
    pub fn tap(&mut self, frame: u64, key: Key) -> &mut Self {
        self.push(frame, key_event(key, KeyAction::Press))
            .push(frame, key_event(key, KeyAction::Release))
    }

    /// Press `key` at `frame` and keep it held.
    pub fn hold(&mut self, frame: u64, target: HoldTarget) -> &mut Self {
        self.push(frame, key_event(target.key(), KeyAction::Press))
    }

    /// Primary-button drag by `(dx, dy)` pixels, starting at `frame`.
    pub fn drag(&mut self, frame: u64, dx: f64, dy: f64) -> &mut Self {
        let (x, y) = (0.0, 0.0);
        self.push(frame, button_event(ButtonAction::Press, x, y))
            .push(frame, InputEvent::PointerMove { x: x + dx, y: y + dy })
            .push(frame + 1, button_event(ButtonAction::Release, x + dx, y + dy))
    }

    pub fn scroll(&mut self, frame: u64, dy: f64) -> &mut Self {
        self.push(frame, InputEvent::Scroll { dx: 0.0, dy })
    }

    pub fn resize(&mut self, frame: u64, width: u32, height: u32) -> &mut Self {
        self.push(frame, InputEvent::Resize { width, height })
    }
}

fn key_event(key: Key, action: KeyAction) -> InputEvent {
    InputEvent::Key { key, action }
}

fn button_event(action: ButtonAction, x: f64, y: f64) -> InputEvent {
    InputEvent::PointerButton {
        button: PointerButton::Primary,
        action,
        x,
        y,
    }
}
