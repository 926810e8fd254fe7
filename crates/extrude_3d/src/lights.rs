//! Lighting
//!
//! Each component ships a fixed lighting rig; these are its building blocks.

use extrude_core::{Color, Vec3};
use serde::Serialize;

/// Shadow configuration for lights that cast shadows
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShadowConfig {
    /// Shadow map resolution
    pub map_size: u32,
    /// Shadow bias to prevent shadow acne
    pub bias: f32,
    /// Shadow camera far plane
    pub far: f32,
    /// Half-extent of the orthographic shadow camera
    pub extent: f32,
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self {
            map_size: 1024,
            bias: 0.0,
            far: 50.0,
            extent: 10.0,
        }
    }
}

impl ShadowConfig {
    pub fn with_bias(mut self, bias: f32) -> Self {
        self.bias = bias;
        self
    }
}

/// Light types
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Light {
    /// Uniform illumination
    Ambient { color: Color, intensity: f32 },
    /// Sun-like parallel light
    Directional {
        color: Color,
        intensity: f32,
        position: Vec3,
        shadow: Option<ShadowConfig>,
    },
    /// Omnidirectional bulb
    Point {
        color: Color,
        intensity: f32,
        position: Vec3,
        shadow: Option<ShadowConfig>,
    },
    /// Cone-shaped light
    Spot {
        color: Color,
        intensity: f32,
        position: Vec3,
        /// Cone half-angle in radians
        angle: f32,
        /// Edge softness (0 = hard, 1 = fully soft)
        penumbra: f32,
        shadow: Option<ShadowConfig>,
    },
}

impl Light {
    pub fn ambient(intensity: f32) -> Self {
        Light::Ambient {
            color: Color::WHITE,
            intensity,
        }
    }

    pub fn directional(position: Vec3, intensity: f32) -> Self {
        Light::Directional {
            color: Color::WHITE,
            intensity,
            position,
            shadow: None,
        }
    }

    pub fn point(position: Vec3, intensity: f32) -> Self {
        Light::Point {
            color: Color::WHITE,
            intensity,
            position,
            shadow: None,
        }
    }

    pub fn spot(position: Vec3, intensity: f32, angle: f32, penumbra: f32) -> Self {
        Light::Spot {
            color: Color::WHITE,
            intensity,
            position,
            angle,
            penumbra,
            shadow: None,
        }
    }

    /// Enable shadow casting; ambient lights ignore this
    pub fn with_shadow(mut self, config: ShadowConfig) -> Self {
        match &mut self {
            Light::Ambient { .. } => {}
            Light::Directional { shadow, .. }
            | Light::Point { shadow, .. }
            | Light::Spot { shadow, .. } => *shadow = Some(config),
        }
        self
    }

    pub fn intensity(&self) -> f32 {
        match self {
            Light::Ambient { intensity, .. }
            | Light::Directional { intensity, .. }
            | Light::Point { intensity, .. }
            | Light::Spot { intensity, .. } => *intensity,
        }
    }

    pub fn casts_shadows(&self) -> bool {
        match self {
            Light::Ambient { .. } => false,
            Light::Directional { shadow, .. }
            | Light::Point { shadow, .. }
            | Light::Spot { shadow, .. } => shadow.is_some(),
        }
    }
}
