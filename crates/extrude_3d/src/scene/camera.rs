//! Camera description

use extrude_core::Vec3;
use serde::{Deserialize, Serialize};

/// Perspective camera for a component canvas
///
/// The camera always looks at the origin; components place it on the +Z
/// axis at the calibrated distance.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PerspectiveCamera {
    /// Camera position
    pub position: Vec3,
    /// Vertical field of view in degrees
    pub fov: f32,
    /// Near clipping plane distance
    pub near: f32,
    /// Far clipping plane distance
    pub far: f32,
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, 5.0), 50.0, 0.1, 1000.0)
    }
}

impl PerspectiveCamera {
    /// Create a new perspective camera
    ///
    /// # Arguments
    /// * `position` - Camera position
    /// * `fov` - Vertical field of view in degrees
    /// * `near` - Near clipping plane
    /// * `far` - Far clipping plane
    pub fn new(position: Vec3, fov: f32, near: f32, far: f32) -> Self {
        Self {
            position,
            fov,
            near,
            far,
        }
    }

    /// Camera on the +Z axis at `distance`
    pub fn looking_from(distance: f32, fov: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, distance),
            fov,
            ..Default::default()
        }
    }

    /// Distance from the origin
    pub fn distance(&self) -> f32 {
        let p = self.position;
        (p.x * p.x + p.y * p.y + p.z * p.z).sqrt()
    }

    /// Field of view in radians
    pub fn fov_radians(&self) -> f32 {
        self.fov.to_radians()
    }

    /// Visible height of the plane through the origin
    pub fn visible_height(&self) -> f32 {
        2.0 * self.distance() * (self.fov_radians() / 2.0).tan()
    }
}

/// User-driven orbit around the origin
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitControls {
    pub enable_zoom: bool,
    pub enable_rotate: bool,
    pub enable_pan: bool,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Radians from the +Y axis
    pub min_polar_angle: f32,
    pub max_polar_angle: f32,
    /// Orbit on its own when the user is not dragging
    pub auto_rotate: bool,
    pub auto_rotate_speed: f32,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self {
            enable_zoom: false,
            enable_rotate: true,
            enable_pan: false,
            min_distance: 2.0,
            max_distance: 20.0,
            min_polar_angle: 0.0,
            max_polar_angle: std::f32::consts::PI,
            auto_rotate: false,
            auto_rotate_speed: 2.0,
        }
    }
}

impl OrbitControls {
    /// Rotation only: no zoom, no pan
    pub fn rotate_only() -> Self {
        Self::default()
    }

    pub fn auto_rotate(mut self, speed: f32) -> Self {
        self.auto_rotate = true;
        self.auto_rotate_speed = speed;
        self
    }

    /// Clamp a requested camera distance to the allowed range
    pub fn clamp_distance(&self, distance: f32) -> f32 {
        distance.clamp(self.min_distance, self.max_distance.max(self.min_distance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_height() {
        let camera = PerspectiveCamera::looking_from(5.0, 90.0);
        assert!((camera.visible_height() - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_orbit_clamp() {
        let controls = OrbitControls::default();
        assert_eq!(controls.clamp_distance(50.0), 20.0);
        assert_eq!(controls.clamp_distance(0.5), 2.0);
    }
}
