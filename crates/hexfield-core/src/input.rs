//! Platform-neutral input events consumed by [`crate::OrbitControls`].
//!
//! Hosts translate their native events (DOM, winit) into these before handing
//! them to the controller, so the interaction model stays testable without a
//! browser or a window.

use glam::DVec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    Other(u16),
}

impl MouseButton {
    /// Map a DOM `MouseEvent.button` index.
    pub fn from_dom_index(index: i16) -> Self {
        match index {
            0 => MouseButton::Left,
            1 => MouseButton::Middle,
            2 => MouseButton::Right,
            n => MouseButton::Other(n.max(0) as u16),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowUp,
    ArrowRight,
    ArrowDown,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowUp" => Key::ArrowUp,
            "ArrowRight" => Key::ArrowRight,
            "ArrowDown" => Key::ArrowDown,
            _ => Key::Other,
        }
    }
}

/// Which mouse button drives which action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MouseButtons {
    pub orbit: MouseButton,
    pub zoom: MouseButton,
    pub pan: MouseButton,
}

impl Default for MouseButtons {
    fn default() -> Self {
        Self {
            orbit: MouseButton::Left,
            zoom: MouseButton::Middle,
            pan: MouseButton::Right,
        }
    }
}

/// Which keys pan the view in each direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyMap {
    pub left: Key,
    pub up: Key,
    pub right: Key,
    pub bottom: Key,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            left: Key::ArrowLeft,
            up: Key::ArrowUp,
            right: Key::ArrowRight,
            bottom: Key::ArrowDown,
        }
    }
}

/// Input events in client (CSS pixel) coordinates.
///
/// Touch events carry every active touch point, in the order the platform
/// reports them.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    PointerDown { button: MouseButton, pos: DVec2 },
    PointerMove { pos: DVec2 },
    PointerUp,
    Wheel { delta_y: f64 },
    TouchStart { touches: Vec<DVec2> },
    TouchMove { touches: Vec<DVec2> },
    TouchEnd,
    KeyDown { key: Key },
    ContextMenu,
}

/// What the host should do with the native event after the controller saw it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventResponse {
    /// The controller consumed the event; call `preventDefault`.
    pub prevent_default: bool,
    /// Also call `stopPropagation`.
    pub stop_propagation: bool,
    /// A drag started; the host should start tracking window-level moves.
    pub capture_started: bool,
    /// The drag finished; window-level move tracking can stop.
    pub capture_ended: bool,
}

impl EventResponse {
    pub(crate) fn ignored() -> Self {
        Self::default()
    }

    pub(crate) fn consumed() -> Self {
        Self {
            prevent_default: true,
            ..Self::default()
        }
    }
}
