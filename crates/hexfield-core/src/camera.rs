//! Camera description shared by the controller, the grid layout and the
//! renderer.
//!
//! Math is done in `f64` so that the controller's change detection (which
//! compares quaternions against a 1e-6 threshold) is not swamped by rounding.
//! The renderer converts to `f32` only when filling uniforms.

use crate::constants::FILM_GAUGE_MM;
use glam::{DMat3, DMat4, DQuat, DVec3, DVec4, Mat4};

/// Converts an OpenGL-style clip space (z in -1..1) to the WebGPU one (z in 0..1).
const GL_TO_WGPU: DMat4 = DMat4::from_cols_array(&[
    1.0, 0.0, 0.0, 0.0, //
    0.0, 1.0, 0.0, 0.0, //
    0.0, 0.0, 0.5, 0.0, //
    0.0, 0.0, 0.5, 1.0,
]);

#[derive(Clone, Debug, PartialEq)]
pub enum Projection {
    Perspective {
        fov_deg: f64,
        aspect: f64,
        near: f64,
        far: f64,
        zoom: f64,
    },
    Orthographic {
        left: f64,
        right: f64,
        top: f64,
        bottom: f64,
        near: f64,
        far: f64,
        zoom: f64,
    },
    /// Raw projection matrix. The controller can neither pan nor zoom it.
    Custom(DMat4),
}

/// Right-handed camera looking down its local -Z axis.
#[derive(Clone, Debug)]
pub struct Camera {
    pub position: DVec3,
    pub quaternion: DQuat,
    pub up: DVec3,
    pub projection: Projection,
}

impl Camera {
    pub fn perspective(fov_deg: f64, aspect: f64, near: f64, far: f64) -> Self {
        Self::with_projection(Projection::Perspective {
            fov_deg,
            aspect,
            near,
            far,
            zoom: 1.0,
        })
    }

    pub fn orthographic(left: f64, right: f64, top: f64, bottom: f64, near: f64, far: f64) -> Self {
        Self::with_projection(Projection::Orthographic {
            left,
            right,
            top,
            bottom,
            near,
            far,
            zoom: 1.0,
        })
    }

    pub fn custom(matrix: DMat4) -> Self {
        Self::with_projection(Projection::Custom(matrix))
    }

    fn with_projection(projection: Projection) -> Self {
        Self {
            position: DVec3::ZERO,
            quaternion: DQuat::IDENTITY,
            up: DVec3::Y,
            projection,
        }
    }

    pub fn is_perspective(&self) -> bool {
        matches!(self.projection, Projection::Perspective { .. })
    }

    pub fn is_orthographic(&self) -> bool {
        matches!(self.projection, Projection::Orthographic { .. })
    }

    /// Current zoom factor; `None` for custom projections.
    pub fn zoom(&self) -> Option<f64> {
        match self.projection {
            Projection::Perspective { zoom, .. } | Projection::Orthographic { zoom, .. } => {
                Some(zoom)
            }
            Projection::Custom(_) => None,
        }
    }

    pub fn set_zoom(&mut self, value: f64) {
        match &mut self.projection {
            Projection::Perspective { zoom, .. } | Projection::Orthographic { zoom, .. } => {
                *zoom = value
            }
            Projection::Custom(_) => {}
        }
    }

    /// Vertical field of view in degrees, perspective cameras only.
    pub fn fov_deg(&self) -> Option<f64> {
        match self.projection {
            Projection::Perspective { fov_deg, .. } => Some(fov_deg),
            _ => None,
        }
    }

    pub fn set_aspect(&mut self, value: f64) {
        if let Projection::Perspective { aspect, .. } = &mut self.projection {
            *aspect = value;
        }
    }

    /// Derive the vertical field of view from a lens focal length (mm) on a
    /// 35 mm film gauge. The film height shrinks for landscape aspects.
    pub fn set_focal_length(&mut self, focal_length_mm: f64) {
        if let Projection::Perspective {
            fov_deg, aspect, ..
        } = &mut self.projection
        {
            let film_height = FILM_GAUGE_MM / aspect.max(1.0);
            let v_extent_slope = 0.5 * film_height / focal_length_mm;
            *fov_deg = (2.0 * v_extent_slope.atan()).to_degrees();
        }
    }

    /// Camera-to-world transform.
    pub fn world_matrix(&self) -> DMat4 {
        DMat4::from_rotation_translation(self.quaternion, self.position)
    }

    pub fn view_matrix(&self) -> DMat4 {
        self.world_matrix().inverse()
    }

    /// Projection matrix with an OpenGL depth range (z in -1..1).
    pub fn projection_matrix(&self) -> DMat4 {
        match self.projection {
            Projection::Perspective {
                fov_deg,
                aspect,
                near,
                far,
                zoom,
            } => {
                let half = (fov_deg.to_radians() * 0.5).tan() / zoom;
                DMat4::perspective_rh_gl(2.0 * half.atan(), aspect, near, far)
            }
            Projection::Orthographic {
                left,
                right,
                top,
                bottom,
                near,
                far,
                zoom,
            } => {
                let dx = (right - left) / (2.0 * zoom);
                let dy = (top - bottom) / (2.0 * zoom);
                let cx = (right + left) / 2.0;
                let cy = (top + bottom) / 2.0;
                DMat4::orthographic_rh_gl(cx - dx, cx + dx, cy - dy, cy + dy, near, far)
            }
            Projection::Custom(m) => m,
        }
    }

    /// World to WebGPU clip space, ready for a uniform buffer.
    pub fn view_proj_f32(&self) -> [[f32; 4]; 4] {
        let m = GL_TO_WGPU * self.projection_matrix() * self.view_matrix();
        Mat4::from_cols_array(&m.to_cols_array().map(|v| v as f32)).to_cols_array_2d()
    }

    /// Camera's local X axis in world space (first column of its world matrix).
    pub fn right(&self) -> DVec3 {
        self.quaternion * DVec3::X
    }

    /// Camera's local Y axis in world space (second column of its world matrix).
    pub fn local_up(&self) -> DVec3 {
        self.quaternion * DVec3::Y
    }

    /// Rotate the camera so its -Z axis points at `target`, keeping `up`.
    pub fn look_at(&mut self, target: DVec3) {
        let mut z = self.position - target;
        if z.length_squared() == 0.0 {
            z.z = 1.0;
        }
        z = z.normalize();
        let mut x = self.up.cross(z);
        if x.length_squared() == 0.0 {
            // up and view direction are parallel; nudge the view direction
            if self.up.z.abs() == 1.0 {
                z.x += 0.0001;
            } else {
                z.z += 0.0001;
            }
            z = z.normalize();
            x = self.up.cross(z);
        }
        x = x.normalize();
        let y = z.cross(x);
        self.quaternion = DQuat::from_mat3(&DMat3::from_cols(x, y, z)).normalize();
    }

    /// Map a point from normalized device coordinates (OpenGL depth range)
    /// back into world space.
    pub fn unproject(&self, ndc: DVec3) -> DVec3 {
        let inv = self.world_matrix() * self.projection_matrix().inverse();
        let p = inv * DVec4::new(ndc.x, ndc.y, ndc.z, 1.0);
        p.truncate() / p.w
    }
}
