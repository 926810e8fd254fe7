//! Idle animations driven by frame time

use crate::macros::lossy_enum_conversions;
use extrude_core::Vec3;
use serde::{Deserialize, Serialize};

/// Idle animation of images and text
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum IdleAnimation {
    /// Bob in place
    #[default]
    Float,
    /// Turn continuously around the vertical axis
    Spin,
    None,
}

impl IdleAnimation {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdleAnimation::Float => "float",
            IdleAnimation::Spin => "spin",
            IdleAnimation::None => "none",
        }
    }

    /// Parse an animation name; unrecognized names fall back to `Float`
    pub fn parse_lossy(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "float" => IdleAnimation::Float,
            "spin" => IdleAnimation::Spin,
            "none" => IdleAnimation::None,
            other => {
                tracing::debug!("unknown animation {:?}, using float", other);
                IdleAnimation::default()
            }
        }
    }

    /// Per-frame motion equivalent
    pub fn as_model_animation(self) -> ModelAnimation {
        match self {
            IdleAnimation::Float => ModelAnimation::Float,
            IdleAnimation::Spin => ModelAnimation::SpinHorizontal,
            IdleAnimation::None => ModelAnimation::None,
        }
    }
}

lossy_enum_conversions!(IdleAnimation);

/// Idle animation of models
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum ModelAnimation {
    /// Wrapped in a float motion, evaluated by the renderer
    #[default]
    Float,
    SpinHorizontal,
    SpinVertical,
    /// Vertical sine bounce
    Bounce,
    None,
}

impl ModelAnimation {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelAnimation::Float => "float",
            ModelAnimation::SpinHorizontal => "spin_horizontal",
            ModelAnimation::SpinVertical => "spin_vertical",
            ModelAnimation::Bounce => "bounce",
            ModelAnimation::None => "none",
        }
    }

    /// Parse an animation name in snake, kebab or camel case
    pub fn parse_lossy(name: &str) -> Self {
        let normalized: String = name
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "float" => ModelAnimation::Float,
            "spinhorizontal" | "spin" => ModelAnimation::SpinHorizontal,
            "spinvertical" => ModelAnimation::SpinVertical,
            "bounce" => ModelAnimation::Bounce,
            "none" => ModelAnimation::None,
            _ => {
                tracing::debug!("unknown model animation {:?}, using float", name);
                ModelAnimation::default()
            }
        }
    }

    pub fn wraps_in_float(&self) -> bool {
        matches!(self, ModelAnimation::Float)
    }
}

lossy_enum_conversions!(ModelAnimation);

const BOUNCE_HEIGHT: f32 = 0.1;

/// Accumulates per-frame rotation and bounce
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Animator {
    animation: ModelAnimation,
    speed: f32,
    elapsed: f32,
    rotation: Vec3,
    offset_y: f32,
}

impl Animator {
    pub fn new(animation: ModelAnimation, speed: f32) -> Self {
        Self {
            animation,
            speed,
            elapsed: 0.0,
            rotation: Vec3::ZERO,
            offset_y: 0.0,
        }
    }

    pub fn animation(&self) -> ModelAnimation {
        self.animation
    }

    pub fn set_animation(&mut self, animation: ModelAnimation, speed: f32) {
        if animation != self.animation {
            *self = Self::new(animation, speed);
        } else {
            self.speed = speed;
        }
    }

    /// Advance by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        self.elapsed += dt;
        match self.animation {
            ModelAnimation::SpinHorizontal => self.rotation.y += dt * self.speed,
            ModelAnimation::SpinVertical => self.rotation.x += dt * self.speed,
            ModelAnimation::Bounce => {
                self.offset_y = (self.elapsed * self.speed).sin() * BOUNCE_HEIGHT;
            }
            ModelAnimation::Float | ModelAnimation::None => {}
        }
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Rotation added to the subject's own
    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    /// Vertical offset added to the subject's position
    pub fn offset_y(&self) -> f32 {
        self.offset_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_styles() {
        for name in ["spinHorizontal", "spin_horizontal", "spin-horizontal"] {
            assert_eq!(ModelAnimation::from(name), ModelAnimation::SpinHorizontal);
        }
        assert_eq!(ModelAnimation::from("wiggle"), ModelAnimation::Float);
        assert_eq!(IdleAnimation::from("SPIN"), IdleAnimation::Spin);
    }

    #[test]
    fn test_spin_accumulates() {
        let mut animator = Animator::new(ModelAnimation::SpinVertical, 2.0);
        for _ in 0..10 {
            animator.tick(0.1);
        }
        assert!((animator.rotation().x - 2.0).abs() < 1e-4);
        assert_eq!(animator.rotation().y, 0.0);
    }

    #[test]
    fn test_bounce_stays_small() {
        let mut animator = Animator::new(ModelAnimation::Bounce, 3.0);
        for _ in 0..200 {
            animator.tick(1.0 / 60.0);
            assert!(animator.offset_y().abs() <= BOUNCE_HEIGHT + 1e-6);
        }
        assert_eq!(animator.rotation(), Vec3::ZERO);
    }

    #[test]
    fn test_float_is_left_to_renderer() {
        let mut animator = Animator::new(ModelAnimation::Float, 1.0);
        animator.tick(5.0);
        assert_eq!(animator.rotation(), Vec3::ZERO);
        assert_eq!(animator.offset_y(), 0.0);
        assert_eq!(animator.elapsed(), 5.0);
    }
}
