//! Unlit and shadow-catcher materials

use super::Side;
use crate::texture::TextureSource;
use extrude_core::Color;
use serde::Serialize;

/// Basic unlit material (like Three.js MeshBasicMaterial)
///
/// Renders with flat color/texture, no lighting calculations.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BasicMaterial {
    /// Base color
    pub color: Color,
    /// Diffuse texture map
    pub map: Option<TextureSource>,
    /// Opacity (0.0 = invisible, 1.0 = opaque)
    pub opacity: f32,
    /// Whether to use transparency
    pub transparent: bool,
    /// Alpha test threshold (fragments below are discarded)
    pub alpha_test: f32,
    /// Render desaturated
    pub grayscale: bool,
    /// Which side to render
    pub side: Side,
}

impl Default for BasicMaterial {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            map: None,
            opacity: 1.0,
            transparent: false,
            alpha_test: 0.0,
            grayscale: false,
            side: Side::Front,
        }
    }
}

impl BasicMaterial {
    /// Textured, alpha-tested material for image planes
    pub fn textured(map: TextureSource, opacity: f32) -> Self {
        Self {
            map: Some(map),
            opacity: opacity.clamp(0.0, 1.0),
            transparent: true,
            alpha_test: 0.1,
            ..Default::default()
        }
    }
}

/// Receives shadows and is otherwise invisible
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShadowMaterial {
    pub color: Color,
    pub opacity: f32,
}

impl ShadowMaterial {
    pub fn new(color: Color, opacity: f32) -> Self {
        Self {
            color,
            opacity: opacity.clamp(0.0, 1.0),
        }
    }
}

impl Default for ShadowMaterial {
    fn default() -> Self {
        Self::new(Color::BLACK, 0.2)
    }
}
