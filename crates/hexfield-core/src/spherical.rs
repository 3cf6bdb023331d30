use crate::constants::POLE_EPS;
use glam::DVec3;

/// Spherical coordinates in a y-up frame.
///
/// `phi` is the polar angle measured from +Y, `theta` the azimuth measured
/// from +Z towards +X.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Spherical {
    pub radius: f64,
    pub phi: f64,
    pub theta: f64,
}

impl Spherical {
    pub fn new(radius: f64, phi: f64, theta: f64) -> Self {
        Self { radius, phi, theta }
    }

    pub fn from_vec3(v: DVec3) -> Self {
        let radius = v.length();
        if radius == 0.0 {
            return Self::new(0.0, 0.0, 0.0);
        }
        Self {
            radius,
            theta: v.x.atan2(v.z),
            phi: (v.y / radius).clamp(-1.0, 1.0).acos(),
        }
    }

    pub fn to_vec3(self) -> DVec3 {
        let sin_phi_radius = self.phi.sin() * self.radius;
        DVec3::new(
            sin_phi_radius * self.theta.sin(),
            self.phi.cos() * self.radius,
            sin_phi_radius * self.theta.cos(),
        )
    }

    /// Keep phi strictly inside (0, π).
    pub fn make_safe(&mut self) {
        self.phi = self.phi.clamp(POLE_EPS, std::f64::consts::PI - POLE_EPS);
    }
}
