pub mod blueprint;
pub mod camera;
pub mod constants;
pub mod error;
pub mod grid;
pub mod input;
pub mod orbit;
pub mod page;
pub mod render;
pub mod spherical;
pub static GRID_WGSL: &str = include_str!("../shaders/grid.wgsl");

pub use blueprint::Blueprint;
pub use camera::{Camera, Projection};
pub use error::GridError;
pub use grid::{GridInstance, HexGrid, TileVertex};
pub use input::{EventResponse, InputEvent, Key, KeyMap, MouseButton, MouseButtons};
pub use orbit::{ControlEvent, ControlState, OrbitControls, OrbitSettings, Viewport};
pub use page::sanitize_address;
pub use render::GpuState;
pub use spherical::Spherical;

use constants::{CAMERA_FAR, CAMERA_NEAR, DEFAULT_FOV_DEG, FOCAL_LENGTH_MM, VIEW_CAMERA_Z};

/// The camera the background is rendered through: close to the grid plane,
/// same lens as the layout camera.
pub fn view_camera(width: f64, height: f64) -> Camera {
    let mut camera = Camera::perspective(
        DEFAULT_FOV_DEG,
        width / height.max(1.0),
        CAMERA_NEAR,
        CAMERA_FAR,
    );
    camera.set_focal_length(FOCAL_LENGTH_MM);
    camera.position = glam::DVec3::new(0.0, 0.0, VIEW_CAMERA_Z);
    camera
}

/// Controller settings used by the background: dolly and pan, no orbiting.
pub fn background_settings() -> OrbitSettings {
    OrbitSettings {
        enable_rotate: false,
        ..OrbitSettings::default()
    }
}

/// Blueprint plus grid for a window of the given CSS size.
pub fn build_scene(width: f64, height: f64) -> Result<HexGrid, GridError> {
    let blueprint = Blueprint::for_window(width, height);
    HexGrid::build(
        &blueprint.coords,
        constants::GRID_INSTANCE_COUNT,
        blueprint.screen_ratio,
    )
}
