//! Window-system events reduced to what the gamma tool reacts to.

use sdl2::event::{Event as SdlEvent, WindowEvent};
use sdl2::keyboard::Keycode;

/// Keys the gamma tool distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Q,
    W,
    KeypadAdd,
    KeypadSubtract,
    Other,
}

impl From<Keycode> for Key {
    fn from(keycode: Keycode) -> Self {
        match keycode {
            Keycode::Escape => Key::Escape,
            Keycode::Q => Key::Q,
            Keycode::W => Key::W,
            Keycode::KpPlus => Key::KeypadAdd,
            Keycode::KpMinus => Key::KeypadSubtract,
            _ => Key::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Press,
    Repeat,
    Release,
}

/// An input event delivered to the dispatch function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Key { key: Key, action: KeyAction },
    Resize { width: u32, height: u32 },
    /// The window was closed from outside (window manager, quit request).
    Close,
}

/// Translate an SDL event. Events the tool ignores map to `None`.
#[must_use]
pub fn translate(event: &SdlEvent) -> Option<Event> {
    match event {
        SdlEvent::Quit { .. } => Some(Event::Close),
        SdlEvent::Window { win_event, .. } => match win_event {
            WindowEvent::Close => Some(Event::Close),
            WindowEvent::SizeChanged(width, height) => Some(Event::Resize {
                width: (*width).max(0) as u32,
                height: (*height).max(0) as u32,
            }),
            _ => None,
        },
        SdlEvent::KeyDown {
            keycode: Some(keycode),
            repeat,
            ..
        } => Some(Event::Key {
            key: Key::from(*keycode),
            action: if *repeat {
                KeyAction::Repeat
            } else {
                KeyAction::Press
            },
        }),
        SdlEvent::KeyUp {
            keycode: Some(keycode),
            ..
        } => Some(Event::Key {
            key: Key::from(*keycode),
            action: KeyAction::Release,
        }),
        _ => None,
    }
}
