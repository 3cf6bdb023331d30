//! World-space tile blueprint derived from the window size.
//!
//! The tile is described in screen pixels, converted to normalized device
//! coordinates on the near plane, and unprojected through a fixed layout
//! camera's projection. The camera's own placement is never applied, so every
//! point lands on the plane z = -near. The same camera also yields the
//! screen-corner point the grid uses to centre itself.

use crate::camera::Camera;
use crate::constants::{
    BLUEPRINT_WIDTH_DIVISOR, CAMERA_FAR, CAMERA_NEAR, DEFAULT_FOV_DEG, FOCAL_LENGTH_MM,
    LAYOUT_CAMERA_Z,
};
use glam::{DVec2, DVec3};
use std::f64::consts::PI;

#[derive(Clone, Debug)]
pub struct Blueprint {
    /// Flat xyz triplets, six vertices.
    pub coords: Vec<f32>,
    /// World-space position of the bottom-right screen corner.
    pub screen_ratio: DVec3,
}

/// Perspective camera used to place the blueprint; never rendered from.
pub fn layout_camera(width: f64, height: f64) -> Camera {
    let mut camera = Camera::perspective(
        DEFAULT_FOV_DEG,
        width / height.max(1.0),
        CAMERA_NEAR,
        CAMERA_FAR,
    );
    camera.set_focal_length(FOCAL_LENGTH_MM);
    camera.position = DVec3::new(0.0, 0.0, LAYOUT_CAMERA_Z);
    camera
}

/// The six tile corners in screen pixels for a window `width` pixels wide.
pub fn screen_points(width: f64) -> [DVec2; 6] {
    let r = width / BLUEPRINT_WIDTH_DIVISOR;
    let a1 = -2.0 * PI / 3.0;
    let a2 = a1 * 2.0;
    let p1 = DVec2::new(-a1.cos() * r, -a1.sin() * r);
    let p2 = DVec2::new(-a2.cos() * r, -a2.sin() * r);
    [DVec2::new(-r, 0.0), p1, p2, p1, DVec2::new(2.0 * r, 0.0), p2]
}

/// Pixel position to normalized device coordinates on the near plane.
pub fn screen_to_ndc(p: DVec2, width: f64, height: f64) -> DVec3 {
    DVec3::new(p.x / width * 2.0 - 1.0, -(p.y / height) * 2.0 + 1.0, -1.0)
}

impl Blueprint {
    pub fn for_window(width: f64, height: f64) -> Self {
        let width = width.max(1.0);
        let height = height.max(1.0);
        let inverse = layout_camera(width, height).projection_matrix().inverse();
        let unproject = |ndc: DVec3| inverse.project_point3(ndc);
        let coords = screen_points(width)
            .iter()
            .flat_map(|p| {
                let w = unproject(screen_to_ndc(*p, width, height));
                [w.x as f32, w.y as f32, w.z as f32]
            })
            .collect();
        Self {
            coords,
            screen_ratio: unproject(DVec3::new(1.0, -1.0, -1.0)),
        }
    }
}
