//! Idle float motion
//!
//! Components hover in place: a slow sine on the y axis and a small wobble
//! in rotation. The pose is a pure function of elapsed time so every frame
//! can be recomputed without carrying state.

use extrude_core::Vec3;
use serde::{Deserialize, Serialize};

/// Float (bobbing) parameters
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloatMotion {
    /// Animation speed multiplier
    pub speed: f32,
    /// Rotation wobble strength
    pub rotation_intensity: f32,
    /// Vertical travel strength
    pub float_intensity: f32,
    /// Vertical range the unit sine maps onto, `[low, high]`
    pub floating_range: [f32; 2],
    /// Phase offset in seconds
    pub offset: f32,
}

impl Default for FloatMotion {
    fn default() -> Self {
        Self {
            speed: 1.0,
            rotation_intensity: 1.0,
            float_intensity: 1.0,
            floating_range: [-0.1, 0.1],
            offset: 0.0,
        }
    }
}

/// Transform offsets produced by [`FloatMotion::sample`]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FloatPose {
    pub position_y: f32,
    pub rotation: Vec3,
}

impl FloatMotion {
    pub fn new(speed: f32, rotation_intensity: f32, float_intensity: f32) -> Self {
        Self {
            speed,
            rotation_intensity,
            float_intensity,
            ..Default::default()
        }
    }

    pub fn with_range(mut self, low: f32, high: f32) -> Self {
        self.floating_range = [low, high];
        self
    }

    /// Pose at `elapsed` seconds
    pub fn sample(&self, elapsed: f32) -> FloatPose {
        let phase = (self.offset + elapsed) / 4.0 * self.speed;
        let (sin, cos) = phase.sin_cos();

        let rotation = Vec3::new(
            cos / 8.0 * self.rotation_intensity,
            sin / 8.0 * self.rotation_intensity,
            sin / 20.0 * self.rotation_intensity,
        );

        let [low, high] = self.floating_range;
        let unit = sin / 10.0;
        // Map [-0.1, 0.1] onto the configured range
        let y = low + (unit + 0.1) / 0.2 * (high - low);

        FloatPose {
            position_y: y * self.float_intensity,
            rotation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rest_pose_at_zero() {
        let pose = FloatMotion::default().sample(0.0);
        assert!(pose.position_y.abs() < 1e-6);
        assert!((pose.rotation.x - 0.125).abs() < 1e-6);
        assert!(pose.rotation.y.abs() < 1e-6);
    }

    #[test]
    fn test_stays_within_range() {
        let motion = FloatMotion::new(2.0, 1.0, 1.0).with_range(-0.3, 0.3);
        for i in 0..1000 {
            let pose = motion.sample(i as f32 * 0.05);
            assert!(pose.position_y >= -0.3 - 1e-5 && pose.position_y <= 0.3 + 1e-5);
        }
    }

    #[test]
    fn test_zero_intensity_is_still() {
        let motion = FloatMotion::new(1.0, 0.0, 0.0);
        let pose = motion.sample(3.7);
        assert_eq!(pose.position_y, 0.0);
        assert_eq!(pose.rotation, Vec3::ZERO);
    }
}
