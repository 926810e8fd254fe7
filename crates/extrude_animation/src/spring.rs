//! Spring physics animation
//!
//! RK4-integrated spring physics for hover scale and click rotations.
//! Configs use the mass/tension/friction vocabulary of the spring presets
//! the components are tuned with; tension maps to stiffness and friction to
//! damping.

use extrude_core::Vec3;
use serde::{Deserialize, Serialize};

/// Configuration for a spring animation
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringConfig {
    /// Create a new spring configuration
    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    /// Create from mass, tension and friction
    pub fn from_tension_friction(mass: f32, tension: f32, friction: f32) -> Self {
        Self::new(tension, friction, mass)
    }

    /// Hover scale and color response (mass 1, tension 280, friction 40)
    pub fn hover() -> Self {
        Self::from_tension_friction(1.0, 280.0, 40.0)
    }

    /// Click rotations (mass 1, tension 200, friction 30)
    pub fn rotation() -> Self {
        Self::from_tension_friction(1.0, 200.0, 30.0)
    }

    /// Calculate critical damping for this spring's stiffness and mass
    pub fn critical_damping(&self) -> f32 {
        2.0 * (self.stiffness * self.mass).sqrt()
    }

    /// Check if the spring is underdamped (will oscillate)
    pub fn is_underdamped(&self) -> bool {
        self.damping < self.critical_damping()
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::hover()
    }
}

/// A spring-based animator
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Check if the spring has settled (within epsilon of target with minimal velocity)
    pub fn is_settled(&self) -> bool {
        // Scene units: a thousandth of a unit or radian is invisible
        const EPSILON: f32 = 1e-3;
        const VELOCITY_EPSILON: f32 = 1e-2;

        (self.value - self.target).abs() < EPSILON && self.velocity.abs() < VELOCITY_EPSILON
    }

    /// Step the spring simulation using RK4 integration
    pub fn step(&mut self, dt: f32) {
        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
            return;
        }

        let k1_v = self.acceleration(self.value, self.velocity);
        let k1_x = self.velocity;

        let k2_v = self.acceleration(
            self.value + k1_x * dt * 0.5,
            self.velocity + k1_v * dt * 0.5,
        );
        let k2_x = self.velocity + k1_v * dt * 0.5;

        let k3_v = self.acceleration(
            self.value + k2_x * dt * 0.5,
            self.velocity + k2_v * dt * 0.5,
        );
        let k3_x = self.velocity + k2_v * dt * 0.5;

        let k4_v = self.acceleration(self.value + k3_x * dt, self.velocity + k3_v * dt);
        let k4_x = self.velocity + k3_v * dt;

        self.velocity += (k1_v + 2.0 * k2_v + 2.0 * k3_v + k4_v) * dt / 6.0;
        self.value += (k1_x + 2.0 * k2_x + 2.0 * k3_x + k4_x) * dt / 6.0;
    }

    fn acceleration(&self, x: f32, v: f32) -> f32 {
        let spring_force = -self.config.stiffness * (x - self.target);
        let damping_force = -self.config.damping * v;
        (spring_force + damping_force) / self.config.mass
    }
}

/// Three springs sharing one config, for Euler rotations
#[derive(Clone, Copy, Debug)]
pub struct SpringVec3 {
    x: Spring,
    y: Spring,
    z: Spring,
}

impl SpringVec3 {
    pub fn new(config: SpringConfig, initial: Vec3) -> Self {
        Self {
            x: Spring::new(config, initial.x),
            y: Spring::new(config, initial.y),
            z: Spring::new(config, initial.z),
        }
    }

    pub fn value(&self) -> Vec3 {
        Vec3::new(self.x.value(), self.y.value(), self.z.value())
    }

    pub fn target(&self) -> Vec3 {
        Vec3::new(self.x.target(), self.y.target(), self.z.target())
    }

    pub fn set_target(&mut self, target: Vec3) {
        self.x.set_target(target.x);
        self.y.set_target(target.y);
        self.z.set_target(target.z);
    }

    pub fn is_settled(&self) -> bool {
        self.x.is_settled() && self.y.is_settled() && self.z.is_settled()
    }

    pub fn step(&mut self, dt: f32) {
        self.x.step(dt);
        self.y.step(dt);
        self.z.step(dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spring_settles_to_target() {
        let mut spring = Spring::new(SpringConfig::hover(), 1.0);
        spring.set_target(1.1);

        // Simulate for 2 seconds at 60fps
        for _ in 0..120 {
            spring.step(1.0 / 60.0);
        }

        assert!(spring.is_settled());
        assert!((spring.value() - 1.1).abs() < 1e-3);
    }

    #[test]
    fn test_spring_inherits_velocity() {
        let loose = SpringConfig::new(150.0, 10.0, 1.0);
        let mut spring = Spring::new(loose, 0.0);
        spring.set_target(100.0);

        for _ in 0..10 {
            spring.step(1.0 / 60.0);
        }

        let velocity = spring.velocity();
        assert!(velocity > 0.0);

        // Change target mid-flight - velocity should continue
        spring.set_target(50.0);
        assert_eq!(spring.velocity(), velocity);
    }

    #[test]
    fn test_component_presets_do_not_overshoot() {
        // Both presets are overdamped, so a click spin never wobbles past its target
        assert!(!SpringConfig::hover().is_underdamped());
        assert!(!SpringConfig::rotation().is_underdamped());
        assert!(SpringConfig::new(150.0, 10.0, 1.0).is_underdamped());
    }

    #[test]
    fn test_full_turn_rotation_settles() {
        let mut rotation = SpringVec3::new(SpringConfig::rotation(), Vec3::ZERO);
        rotation.set_target(Vec3::new(0.0, std::f32::consts::TAU, 0.0));

        let mut max_y: f32 = 0.0;
        for _ in 0..240 {
            rotation.step(1.0 / 60.0);
            max_y = max_y.max(rotation.value().y);
        }

        assert!(rotation.is_settled());
        assert!(max_y <= std::f32::consts::TAU + 1e-3);
        assert!((rotation.value().y - std::f32::consts::TAU).abs() < 1e-3);
    }

    #[test]
    fn test_spring_rk4_stability() {
        let mut spring = Spring::new(SpringConfig::hover(), 0.0);
        spring.set_target(1000.0);

        // Large time step that might cause instability with Euler integration
        for _ in 0..100 {
            spring.step(0.05);
            assert!(spring.value() < 2000.0);
            assert!(spring.value() > -500.0);
        }
    }
}
