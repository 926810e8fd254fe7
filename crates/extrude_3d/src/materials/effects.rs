//! Vertex-animated materials
//!
//! Both displace vertices in the renderer's shader over time; only the
//! parameters travel through the scene description.

use crate::texture::TextureSource;
use extrude_core::Color;
use serde::Serialize;

/// Sinusoidal wobble of the whole surface
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WobbleMaterial {
    pub color: Color,
    pub map: Option<TextureSource>,
    /// Wobble strength
    pub factor: f32,
    /// Wobble speed
    pub speed: f32,
    pub metalness: f32,
    pub roughness: f32,
    pub opacity: f32,
    pub transparent: bool,
    pub alpha_test: f32,
}

impl Default for WobbleMaterial {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            map: None,
            factor: 0.1,
            speed: 1.0,
            metalness: 0.0,
            roughness: 1.0,
            opacity: 1.0,
            transparent: false,
            alpha_test: 0.0,
        }
    }
}

/// Noise-driven distortion
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DistortMaterial {
    pub color: Color,
    /// Distortion strength (0 = none, 1 = heavy)
    pub distort: f32,
    pub speed: f32,
    pub radius: f32,
    pub metalness: f32,
    pub roughness: f32,
}

impl Default for DistortMaterial {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            distort: 0.2,
            speed: 2.0,
            radius: 1.0,
            metalness: 0.0,
            roughness: 1.0,
        }
    }
}
