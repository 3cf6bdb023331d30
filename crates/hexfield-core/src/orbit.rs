//! Orbit / dolly / pan camera controller.
//!
//! The controller owns its interaction state and accumulators; the camera is
//! passed in by the host on every call. Input arrives as [`InputEvent`]s and
//! is applied to the camera by [`OrbitControls::update`], which the host also
//! calls once per frame so damping and auto-rotation keep running.

use crate::camera::{Camera, Projection};
use crate::constants::{CHANGE_EPS, FRAMES_PER_SECOND, ZOOM_SCALE_BASE};
use crate::input::{EventResponse, InputEvent, Key, KeyMap, MouseButton, MouseButtons};
use crate::spherical::Spherical;
use glam::{DQuat, DVec2, DVec3};
use std::f64::consts::PI;

/// Interaction mode. Only pointer/touch down and up events change it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ControlState {
    #[default]
    None,
    Rotate,
    Dolly,
    Pan,
    TouchRotate,
    TouchDolly,
    TouchPan,
}

/// Notifications for the host, collected until [`OrbitControls::drain_events`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlEvent {
    Start,
    Change,
    End,
}

/// Client size of the input surface in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }
}

#[derive(Clone, Debug)]
pub struct OrbitSettings {
    /// Master switch; when false every input event is ignored.
    pub enabled: bool,
    /// Point the camera orbits around.
    pub target: DVec3,
    // Dolly limits (perspective cameras)
    pub min_distance: f64,
    pub max_distance: f64,
    // Zoom limits (orthographic cameras)
    pub min_zoom: f64,
    pub max_zoom: f64,
    // Vertical orbit limits, within 0..=π
    pub min_polar_angle: f64,
    pub max_polar_angle: f64,
    // Horizontal orbit limits; if finite, a sub-interval of -π..=π
    pub min_azimuth_angle: f64,
    pub max_azimuth_angle: f64,
    pub enable_damping: bool,
    pub damping_factor: f64,
    pub enable_zoom: bool,
    pub zoom_speed: f64,
    pub enable_rotate: bool,
    pub rotate_speed: f64,
    pub enable_pan: bool,
    /// Pixels moved per arrow key push.
    pub key_pan_speed: f64,
    pub auto_rotate: bool,
    /// 2.0 is one orbit every 30 seconds at 60 fps.
    pub auto_rotate_speed: f64,
    pub enable_keys: bool,
    pub keys: KeyMap,
    pub mouse_buttons: MouseButtons,
}

impl Default for OrbitSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            target: DVec3::ZERO,
            min_distance: 0.0,
            max_distance: f64::INFINITY,
            min_zoom: 0.0,
            max_zoom: f64::INFINITY,
            min_polar_angle: 0.0,
            max_polar_angle: PI,
            min_azimuth_angle: f64::NEG_INFINITY,
            max_azimuth_angle: f64::INFINITY,
            enable_damping: false,
            damping_factor: 0.25,
            enable_zoom: true,
            zoom_speed: 1.0,
            enable_rotate: true,
            rotate_speed: 1.0,
            enable_pan: true,
            key_pan_speed: 7.0,
            auto_rotate: false,
            auto_rotate_speed: 2.0,
            enable_keys: true,
            keys: KeyMap::default(),
            mouse_buttons: MouseButtons::default(),
        }
    }
}

pub struct OrbitControls {
    pub settings: OrbitSettings,
    viewport: Viewport,
    state: ControlState,
    disposed: bool,

    // Rotation taking camera.up to +Y, and back.
    up_to_y: DQuat,
    y_to_up: DQuat,

    spherical: Spherical,
    spherical_delta: Spherical,
    scale: f64,
    pan_offset: DVec3,
    zoom_changed: bool,

    last_position: DVec3,
    last_quaternion: DQuat,

    rotate_start: DVec2,
    pan_start: DVec2,
    dolly_start: DVec2,

    // Saved by `save_state`, restored by `reset`.
    target0: DVec3,
    position0: DVec3,
    zoom0: Option<f64>,

    events: Vec<ControlEvent>,
}

impl OrbitControls {
    pub fn new(camera: &mut Camera, viewport: Viewport) -> Self {
        Self::with_settings(camera, viewport, OrbitSettings::default())
    }

    /// Bind a controller to `camera` and run one update so the camera faces
    /// the target straight away.
    pub fn with_settings(camera: &mut Camera, viewport: Viewport, settings: OrbitSettings) -> Self {
        let up_to_y = DQuat::from_rotation_arc(camera.up.normalize(), DVec3::Y);
        let mut controls = Self {
            target0: settings.target,
            position0: camera.position,
            zoom0: camera.zoom(),
            settings,
            viewport,
            state: ControlState::None,
            disposed: false,
            up_to_y,
            y_to_up: up_to_y.inverse(),
            spherical: Spherical::default(),
            spherical_delta: Spherical::default(),
            scale: 1.0,
            pan_offset: DVec3::ZERO,
            zoom_changed: false,
            last_position: DVec3::ZERO,
            last_quaternion: DQuat::IDENTITY,
            rotate_start: DVec2::ZERO,
            pan_start: DVec2::ZERO,
            dolly_start: DVec2::ZERO,
            events: Vec::new(),
        };
        controls.update(camera);
        controls
    }

    pub fn state(&self) -> ControlState {
        self.state
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn polar_angle(&self) -> f64 {
        self.spherical.phi
    }

    pub fn azimuthal_angle(&self) -> f64 {
        self.spherical.theta
    }

    /// Pending rotation that the next `update` will apply.
    pub fn spherical_delta(&self) -> Spherical {
        self.spherical_delta
    }

    /// Pending radius multiplier (perspective dolly).
    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn pan_offset(&self) -> DVec3 {
        self.pan_offset
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn drain_events(&mut self) -> Vec<ControlEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn save_state(&mut self, camera: &Camera) {
        self.target0 = self.settings.target;
        self.position0 = camera.position;
        self.zoom0 = camera.zoom();
    }

    pub fn reset(&mut self, camera: &mut Camera) {
        self.settings.target = self.target0;
        camera.position = self.position0;
        if let Some(zoom) = self.zoom0 {
            camera.set_zoom(zoom);
        }
        self.events.push(ControlEvent::Change);
        self.update(camera);
        self.state = ControlState::None;
    }

    /// End any drag in progress and stop reacting to input. The host removes
    /// its native listeners alongside this call.
    pub fn dispose(&mut self) {
        self.state = ControlState::None;
        self.spherical_delta = Spherical::default();
        self.pan_offset = DVec3::ZERO;
        self.scale = 1.0;
        self.disposed = true;
    }

    /// Apply pending deltas to the camera. Returns true when the camera moved
    /// or turned by more than [`CHANGE_EPS`] since the last reported change.
    pub fn update(&mut self, camera: &mut Camera) -> bool {
        let target = self.settings.target;
        let offset = self.up_to_y * (camera.position - target);
        self.spherical = Spherical::from_vec3(offset);

        if self.settings.auto_rotate && self.state == ControlState::None {
            self.rotate_left(self.auto_rotation_angle());
        }

        let s = &self.settings;
        let sph = &mut self.spherical;
        sph.theta += self.spherical_delta.theta;
        sph.phi += self.spherical_delta.phi;
        sph.theta = sph.theta.min(s.max_azimuth_angle).max(s.min_azimuth_angle);
        sph.phi = sph.phi.min(s.max_polar_angle).max(s.min_polar_angle);
        sph.make_safe();
        sph.radius *= self.scale;
        sph.radius = sph.radius.min(s.max_distance).max(s.min_distance);

        self.settings.target += self.pan_offset;
        let target = self.settings.target;

        let offset = self.y_to_up * self.spherical.to_vec3();
        camera.position = target + offset;
        camera.look_at(target);

        if self.settings.enable_damping {
            let keep = 1.0 - self.settings.damping_factor;
            self.spherical_delta.theta *= keep;
            self.spherical_delta.phi *= keep;
        } else {
            self.spherical_delta = Spherical::default();
        }
        self.scale = 1.0;
        self.pan_offset = DVec3::ZERO;

        if self.zoom_changed
            || self.last_position.distance_squared(camera.position) > CHANGE_EPS
            || 8.0 * (1.0 - self.last_quaternion.dot(camera.quaternion)) > CHANGE_EPS
        {
            self.events.push(ControlEvent::Change);
            self.last_position = camera.position;
            self.last_quaternion = camera.quaternion;
            self.zoom_changed = false;
            return true;
        }
        false
    }

    fn auto_rotation_angle(&self) -> f64 {
        2.0 * PI / FRAMES_PER_SECOND / FRAMES_PER_SECOND * self.settings.auto_rotate_speed
    }

    fn zoom_scale(&self) -> f64 {
        ZOOM_SCALE_BASE.powf(self.settings.zoom_speed)
    }

    pub fn rotate_left(&mut self, angle: f64) {
        self.spherical_delta.theta -= angle;
    }

    pub fn rotate_up(&mut self, angle: f64) {
        self.spherical_delta.phi -= angle;
    }

    fn pan_left(&mut self, distance: f64, camera: &Camera) {
        self.pan_offset += camera.right() * -distance;
    }

    fn pan_up(&mut self, distance: f64, camera: &Camera) {
        self.pan_offset += camera.local_up() * distance;
    }

    /// Queue a pan by a screen-space delta in pixels.
    pub fn pan(&mut self, camera: &Camera, delta_x: f64, delta_y: f64) {
        let Viewport { width, height } = self.viewport;
        match camera.projection {
            Projection::Perspective { fov_deg, .. } => {
                let offset = camera.position - self.settings.target;
                let target_distance = offset.length() * (fov_deg.to_radians() / 2.0).tan();
                self.pan_left(2.0 * delta_x * target_distance / height, camera);
                self.pan_up(2.0 * delta_y * target_distance / height, camera);
            }
            Projection::Orthographic {
                left,
                right,
                top,
                bottom,
                zoom,
                ..
            } => {
                self.pan_left(delta_x * (right - left) / zoom / width, camera);
                self.pan_up(delta_y * (top - bottom) / zoom / height, camera);
            }
            Projection::Custom(_) => {
                log::warn!("[orbit] unsupported camera projection, pan disabled");
                self.settings.enable_pan = false;
            }
        }
    }

    pub fn dolly_in(&mut self, camera: &mut Camera, dolly_scale: f64) {
        match camera.projection {
            Projection::Perspective { .. } => self.scale /= dolly_scale,
            Projection::Orthographic { zoom, .. } => {
                camera.set_zoom(self.clamp_zoom(zoom * dolly_scale));
                self.zoom_changed = true;
            }
            Projection::Custom(_) => self.disable_zoom(),
        }
    }

    pub fn dolly_out(&mut self, camera: &mut Camera, dolly_scale: f64) {
        match camera.projection {
            Projection::Perspective { .. } => self.scale *= dolly_scale,
            Projection::Orthographic { zoom, .. } => {
                camera.set_zoom(self.clamp_zoom(zoom / dolly_scale));
                self.zoom_changed = true;
            }
            Projection::Custom(_) => self.disable_zoom(),
        }
    }

    fn clamp_zoom(&self, zoom: f64) -> f64 {
        zoom.min(self.settings.max_zoom).max(self.settings.min_zoom)
    }

    fn disable_zoom(&mut self) {
        log::warn!("[orbit] unsupported camera projection, dolly/zoom disabled");
        self.settings.enable_zoom = false;
    }

    // ---------------- Event dispatch ----------------

    pub fn handle_event(&mut self, camera: &mut Camera, event: &InputEvent) -> EventResponse {
        if self.disposed || !self.settings.enabled {
            return EventResponse::ignored();
        }
        match event {
            InputEvent::PointerDown { button, pos } => self.on_pointer_down(*button, *pos),
            InputEvent::PointerMove { pos } => self.on_pointer_move(camera, *pos),
            InputEvent::PointerUp => self.on_pointer_up(),
            InputEvent::Wheel { delta_y } => self.on_wheel(camera, *delta_y),
            InputEvent::KeyDown { key } => self.on_key_down(camera, *key),
            InputEvent::TouchStart { touches } => self.on_touch_start(touches),
            InputEvent::TouchMove { touches } => self.on_touch_move(camera, touches),
            InputEvent::TouchEnd => self.on_touch_end(),
            InputEvent::ContextMenu => EventResponse::consumed(),
        }
    }

    fn is_mouse_drag(&self) -> bool {
        matches!(
            self.state,
            ControlState::Rotate | ControlState::Dolly | ControlState::Pan
        )
    }

    fn on_pointer_down(&mut self, button: MouseButton, pos: DVec2) -> EventResponse {
        let mut response = EventResponse::consumed();
        let buttons = self.settings.mouse_buttons;
        if button == buttons.orbit {
            if !self.settings.enable_rotate {
                return response;
            }
            self.rotate_start = pos;
            self.state = ControlState::Rotate;
        } else if button == buttons.zoom {
            if !self.settings.enable_zoom {
                return response;
            }
            self.dolly_start = pos;
            self.state = ControlState::Dolly;
        } else if button == buttons.pan {
            if !self.settings.enable_pan {
                return response;
            }
            self.pan_start = pos;
            self.state = ControlState::Pan;
        }
        if self.state != ControlState::None {
            response.capture_started = true;
            self.events.push(ControlEvent::Start);
        }
        response
    }

    fn on_pointer_move(&mut self, camera: &mut Camera, pos: DVec2) -> EventResponse {
        if !self.is_mouse_drag() {
            return EventResponse::ignored();
        }
        let response = EventResponse::consumed();
        match self.state {
            ControlState::Rotate if self.settings.enable_rotate => {
                self.rotate_by_drag(pos);
                self.update(camera);
            }
            ControlState::Dolly if self.settings.enable_zoom => {
                let delta = pos - self.dolly_start;
                if delta.y > 0.0 {
                    self.dolly_in(camera, self.zoom_scale());
                } else if delta.y < 0.0 {
                    self.dolly_out(camera, self.zoom_scale());
                }
                self.dolly_start = pos;
                self.update(camera);
            }
            ControlState::Pan if self.settings.enable_pan => {
                self.pan_by_drag(camera, pos);
                self.update(camera);
            }
            _ => {}
        }
        response
    }

    fn on_pointer_up(&mut self) -> EventResponse {
        if !self.is_mouse_drag() {
            return EventResponse::ignored();
        }
        self.events.push(ControlEvent::End);
        self.state = ControlState::None;
        EventResponse {
            capture_ended: true,
            ..EventResponse::default()
        }
    }

    fn on_wheel(&mut self, camera: &mut Camera, delta_y: f64) -> EventResponse {
        if !self.settings.enable_zoom
            || !matches!(self.state, ControlState::None | ControlState::Rotate)
        {
            return EventResponse::ignored();
        }
        if delta_y < 0.0 {
            self.dolly_out(camera, self.zoom_scale());
        } else if delta_y > 0.0 {
            self.dolly_in(camera, self.zoom_scale());
        }
        self.update(camera);
        self.events.push(ControlEvent::Start);
        self.events.push(ControlEvent::End);
        EventResponse {
            prevent_default: true,
            stop_propagation: true,
            ..EventResponse::default()
        }
    }

    fn on_key_down(&mut self, camera: &mut Camera, key: Key) -> EventResponse {
        if !self.settings.enable_keys || !self.settings.enable_pan || key == Key::Other {
            return EventResponse::ignored();
        }
        let speed = self.settings.key_pan_speed;
        let keys = self.settings.keys;
        let delta = if key == keys.up {
            (0.0, speed)
        } else if key == keys.bottom {
            (0.0, -speed)
        } else if key == keys.left {
            (speed, 0.0)
        } else if key == keys.right {
            (-speed, 0.0)
        } else {
            return EventResponse::ignored();
        };
        self.pan(camera, delta.0, delta.1);
        self.update(camera);
        EventResponse::ignored()
    }

    fn on_touch_start(&mut self, touches: &[DVec2]) -> EventResponse {
        match touches.len() {
            1 => {
                if !self.settings.enable_rotate {
                    return EventResponse::ignored();
                }
                self.rotate_start = touches[0];
                self.state = ControlState::TouchRotate;
            }
            2 => {
                if !self.settings.enable_zoom {
                    return EventResponse::ignored();
                }
                self.dolly_start = DVec2::new(0.0, touches[0].distance(touches[1]));
                self.state = ControlState::TouchDolly;
            }
            3 => {
                if !self.settings.enable_pan {
                    return EventResponse::ignored();
                }
                self.pan_start = touches[0];
                self.state = ControlState::TouchPan;
            }
            _ => self.state = ControlState::None,
        }
        if self.state != ControlState::None {
            self.events.push(ControlEvent::Start);
        }
        EventResponse::ignored()
    }

    fn on_touch_move(&mut self, camera: &mut Camera, touches: &[DVec2]) -> EventResponse {
        let response = EventResponse {
            prevent_default: true,
            stop_propagation: true,
            ..EventResponse::default()
        };
        match touches.len() {
            1 => {
                if !self.settings.enable_rotate || self.state != ControlState::TouchRotate {
                    return response;
                }
                self.rotate_by_drag(touches[0]);
                self.update(camera);
            }
            2 => {
                if !self.settings.enable_zoom || self.state != ControlState::TouchDolly {
                    return response;
                }
                let dolly_end = DVec2::new(0.0, touches[0].distance(touches[1]));
                let delta = dolly_end - self.dolly_start;
                if delta.y > 0.0 {
                    self.dolly_out(camera, self.zoom_scale());
                } else if delta.y < 0.0 {
                    self.dolly_in(camera, self.zoom_scale());
                }
                self.dolly_start = dolly_end;
                self.update(camera);
            }
            3 => {
                if !self.settings.enable_pan || self.state != ControlState::TouchPan {
                    return response;
                }
                self.pan_by_drag(camera, touches[0]);
                self.update(camera);
            }
            _ => self.state = ControlState::None,
        }
        response
    }

    fn on_touch_end(&mut self) -> EventResponse {
        self.events.push(ControlEvent::End);
        self.state = ControlState::None;
        EventResponse::ignored()
    }

    fn rotate_by_drag(&mut self, pos: DVec2) {
        let delta = pos - self.rotate_start;
        let Viewport { width, height } = self.viewport;
        let speed = self.settings.rotate_speed;
        // a full-width drag is one full turn
        self.rotate_left(2.0 * PI * delta.x / width * speed);
        self.rotate_up(2.0 * PI * delta.y / height * speed);
        self.rotate_start = pos;
    }

    fn pan_by_drag(&mut self, camera: &Camera, pos: DVec2) {
        let delta = pos - self.pan_start;
        self.pan(camera, delta.x, delta.y);
        self.pan_start = pos;
    }
}
