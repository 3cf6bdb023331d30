// Shared layout/camera tuning constants used by both web and native frontends.

// Grid layout
pub const GRID_ROWS: usize = 120;
pub const GRID_COLS: usize = 60;
pub const GRID_INSTANCE_COUNT: usize = GRID_ROWS * GRID_COLS;
pub const GRID_UV_SCALE: f32 = 1.0 / 60.0; // one texture cell per column
pub const GRID_UV_ROW_PITCH: f64 = 0.36; // vertical uv advance per row, in cells
pub const GRID_UV_ODD_SHIFT: f64 = 0.5 / 6.0; // horizontal uv shift of odd rows

// Blueprint tile: six vertices (two triangles) and their uvs
pub const BLUEPRINT_VERTICES: usize = 6;
pub const BLUEPRINT_WIDTH_DIVISOR: f64 = 60.0; // tile radius = window width / 60
pub const BLUEPRINT_UVS: [f32; 12] = [0.0, 0.5, 0.5, 0.14, 0.5, 0.86, 0.5, 0.14, 1.0, 0.5, 0.5, 0.86];

// Cameras
pub const FOCAL_LENGTH_MM: f64 = 50.0;
pub const FILM_GAUGE_MM: f64 = 35.0;
pub const DEFAULT_FOV_DEG: f64 = 50.0;
pub const CAMERA_NEAR: f64 = 0.005;
pub const CAMERA_FAR: f64 = 1000.0;
pub const LAYOUT_CAMERA_Z: f64 = 1.0; // camera used to unproject the blueprint
pub const VIEW_CAMERA_Z: f64 = 0.015; // camera that actually renders the grid

// Controller
// Minimum squared motion (or quaternion drift) that counts as a visible change.
pub const CHANGE_EPS: f64 = 0.000_001;
// Keeps phi away from the poles so the look-at basis never degenerates.
pub const POLE_EPS: f64 = 0.000_001;
pub const ZOOM_SCALE_BASE: f64 = 0.95;
pub const FRAMES_PER_SECOND: f64 = 60.0;

// Scene clear colour (transparent: the page shows through)
pub const CLEAR_COLOR: [f64; 4] = [0.0, 0.0, 0.0, 0.0];
