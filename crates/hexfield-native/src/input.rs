// winit → controller input translation.
use glam::DVec2;
use hexfield_core::{InputEvent, Key, MouseButton};
use std::collections::BTreeMap;
use winit::event::{MouseButton as WinitButton, MouseScrollDelta, TouchPhase};
use winit::keyboard::{Key as WinitKey, NamedKey};

// One wheel "line" in DOM pixels.
const LINE_HEIGHT_PX: f64 = 100.0;

pub fn map_button(button: WinitButton) -> MouseButton {
    match button {
        WinitButton::Left => MouseButton::Left,
        WinitButton::Middle => MouseButton::Middle,
        WinitButton::Right => MouseButton::Right,
        WinitButton::Back => MouseButton::Other(3),
        WinitButton::Forward => MouseButton::Other(4),
        WinitButton::Other(n) => MouseButton::Other(n),
    }
}

pub fn map_key(key: &WinitKey) -> Key {
    match key {
        WinitKey::Named(NamedKey::ArrowLeft) => Key::ArrowLeft,
        WinitKey::Named(NamedKey::ArrowUp) => Key::ArrowUp,
        WinitKey::Named(NamedKey::ArrowRight) => Key::ArrowRight,
        WinitKey::Named(NamedKey::ArrowDown) => Key::ArrowDown,
        _ => Key::Other,
    }
}

/// Scroll amount with DOM sign: positive scrolls down, i.e. away from the
/// content. winit reports the opposite.
pub fn wheel_delta_y(delta: MouseScrollDelta) -> f64 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => -(y as f64) * LINE_HEIGHT_PX,
        MouseScrollDelta::PixelDelta(pos) => -pos.y,
    }
}

/// Active touch points keyed by finger id, in logical pixels.
#[derive(Default)]
pub struct Touches {
    active: BTreeMap<u64, DVec2>,
}

impl Touches {
    /// Fold one winit touch into the set and return the matching event.
    pub fn apply(&mut self, id: u64, phase: TouchPhase, pos: DVec2) -> InputEvent {
        match phase {
            TouchPhase::Started => {
                self.active.insert(id, pos);
                InputEvent::TouchStart {
                    touches: self.points(),
                }
            }
            TouchPhase::Moved => {
                self.active.insert(id, pos);
                InputEvent::TouchMove {
                    touches: self.points(),
                }
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                self.active.remove(&id);
                InputEvent::TouchEnd
            }
        }
    }

    fn points(&self) -> Vec<DVec2> {
        self.active.values().copied().collect()
    }
}
